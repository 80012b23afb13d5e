// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::time::Instant;

use crate::batch::{BatchProcessor, LabelSummary};
use crate::classifier::RULES;
use crate::cli::args::ClassifyArgs;
use crate::io::{labels_to_json, read_frames};
use crate::{ClassifierConfig, PoseClassifier, PoseLabel, VERSION};
use crate::{error, info, section, success, verbose, warn};

/// Build the classifier configuration from command-line thresholds.
#[must_use]
pub fn config_from_args(args: &ClassifyArgs) -> ClassifierConfig {
    ClassifierConfig::new()
        .with_near_threshold(args.near)
        .with_heart_wrist_gap(args.heart_gap)
        .with_folded_wrist_gap(args.folded_gap)
        .with_bend_torso_gap(args.bend_gap)
        .with_sit_hip_tilt(args.sit_tilt)
}

/// Classify every frame of a landmark frames file.
#[allow(clippy::cast_precision_loss)]
pub fn run_classify(args: &ClassifyArgs) {
    let classifier = match PoseClassifier::with_config(config_from_args(args)) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    section!("Pose Classifier v{VERSION}");
    verbose!("Input: {} (layout: {})", args.input, args.layout);

    let frames = match read_frames(&args.input, args.layout) {
        Ok(frames) => frames,
        Err(e) => {
            error!("Failed to read '{}': {e}", args.input);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let total = frames.len();
    let mut labels: Vec<Option<PoseLabel>> = Vec::with_capacity(total);
    let mut summary = LabelSummary::default();
    let mut incomplete = 0usize;
    {
        let mut processor = BatchProcessor::new(classifier, args.batch, |batch, offset| {
            for (i, label) in batch.iter().enumerate() {
                if !args.json {
                    match label {
                        Some(label) => info!("frame {}: {label}", offset + i),
                        None => verbose!("frame {}: no detection", offset + i),
                    }
                }
                summary.record(*label);
            }
            labels.extend_from_slice(batch);
        });

        for (i, frame) in frames.into_iter().enumerate() {
            match frame {
                Ok(landmarks) => processor.add(landmarks),
                Err(e) => {
                    // Keep frame numbering aligned with the input file.
                    warn!("frame {i}: {e}");
                    incomplete += 1;
                    processor.add(None);
                }
            }
        }
        processor.flush();
    }
    let elapsed = start.elapsed();

    if args.json {
        match labels_to_json(&labels) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    section!("Summary");
    for (label, count) in &summary.counts {
        verbose!("  {label:<14} {count}");
    }
    if summary.skipped > 0 {
        verbose!(
            "  {:<14} {} ({incomplete} incomplete)",
            "no detection",
            summary.skipped
        );
    }
    let per_frame_us = if total == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() * 1e6 / total as f64
    };
    success!(
        "Classified {} of {total} frames in {:.1}ms ({per_frame_us:.2}µs/frame)",
        summary.total() - summary.skipped,
        elapsed.as_secs_f64() * 1e3
    );
    if let Some(label) = summary.dominant() {
        verbose!("Most frequent pose: {label}");
    }
}

/// Print the rule table in evaluation order.
pub fn run_rules() {
    section!("Pose rules (first match wins)");
    for (i, rule) in RULES.iter().enumerate() {
        info!("{:>2}. {}", i + 1, rule.label);
    }
    info!("{:>2}. {} (fallback)", RULES.len() + 1, PoseLabel::Unknown);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_config_from_args() {
        let cli = Cli::parse_from([
            "app",
            "classify",
            "-i",
            "frames.json",
            "--heart-gap",
            "0.2",
            "--sit-tilt",
            "0.4",
        ]);
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        let config = config_from_args(&args);
        assert!((config.near_threshold - 0.1).abs() < f64::EPSILON);
        assert!((config.heart_wrist_gap - 0.2).abs() < f64::EPSILON);
        assert!((config.sit_hip_tilt - 0.4).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_args_match_default_config() {
        let cli = Cli::parse_from(["app", "classify", "-i", "frames.json"]);
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(config_from_args(&args), ClassifierConfig::default());
    }
}

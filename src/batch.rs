// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Batch processing module.
//!
//! This module classifies sequences of frames. A frame is `Option<Landmarks>`:
//! `None` means the upstream detector found no body, and such frames are never
//! passed to the classifier. Frames inside a batch are classified in parallel
//! with `rayon`; results always come back in input order.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{Landmarks, PoseClassifier, PoseLabel};

/// Classify every frame, skipping frames without a detection.
///
/// # Example
///
/// ```rust
/// use pose_classifier::{Joint, Landmark, Landmarks, PoseClassifier, batch::classify_frames};
///
/// let body = Landmarks::from_joints(
///     Joint::ALL.into_iter().map(|joint| (joint, Landmark::new(0.5, 0.5))),
/// )
/// .unwrap();
/// let labels = classify_frames(&PoseClassifier::new(), &[Some(body), None]);
/// assert!(labels[0].is_some());
/// assert!(labels[1].is_none());
/// ```
#[must_use]
pub fn classify_frames(
    classifier: &PoseClassifier,
    frames: &[Option<Landmarks>],
) -> Vec<Option<PoseLabel>> {
    frames
        .par_iter()
        .map(|frame| frame.as_ref().map(|landmarks| classifier.classify(landmarks)))
        .collect()
}

/// Per-label counts over a run of frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSummary {
    /// Number of frames classified under each label.
    pub counts: BTreeMap<PoseLabel, usize>,
    /// Number of frames with no detection.
    pub skipped: usize,
}

impl LabelSummary {
    /// Record one frame result.
    pub fn record(&mut self, label: Option<PoseLabel>) {
        match label {
            Some(label) => *self.counts.entry(label).or_insert(0) += 1,
            None => self.skipped += 1,
        }
    }

    /// Total number of frames recorded, including skipped ones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.skipped
    }

    /// The most frequent label, ties broken by rule order.
    #[must_use]
    pub fn dominant(&self) -> Option<PoseLabel> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(label, _)| *label)
    }
}

/// Count labels across frame results.
#[must_use]
pub fn summarize(labels: &[Option<PoseLabel>]) -> LabelSummary {
    let mut summary = LabelSummary::default();
    for label in labels {
        summary.record(*label);
    }
    summary
}

/// A processor that buffers frames and classifies them in batches.
///
/// The callback receives the labels of each batch and the index of the batch's
/// first frame within the whole stream.
pub struct BatchProcessor<F>
where
    F: FnMut(&[Option<PoseLabel>], usize),
{
    classifier: PoseClassifier,
    batch_size: usize,
    frames: Vec<Option<Landmarks>>,
    callback: F,
    frame_count: usize,
}

impl<F> BatchProcessor<F>
where
    F: FnMut(&[Option<PoseLabel>], usize),
{
    /// Create a new `BatchProcessor`.
    ///
    /// # Arguments
    ///
    /// * `classifier` - The classifier to run.
    /// * `batch_size` - Frames per batch. Zero is treated as one.
    /// * `callback` - A closure to handle the results of each batch.
    pub fn new(classifier: PoseClassifier, batch_size: usize, callback: F) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            classifier,
            batch_size,
            frames: Vec::with_capacity(batch_size),
            callback,
            frame_count: 0,
        }
    }

    /// Add a frame to the batch.
    ///
    /// If the batch becomes full, it is automatically processed.
    pub fn add(&mut self, frame: Option<Landmarks>) {
        self.frames.push(frame);
        if self.frames.len() >= self.batch_size {
            self.flush();
        }
    }

    /// Process any buffered frames.
    pub fn flush(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        let labels = classify_frames(&self.classifier, &self.frames);
        (self.callback)(&labels, self.frame_count);
        self.frame_count += self.frames.len();
        self.frames.clear();
    }

    /// Number of frames processed so far.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }
}

// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::io::Layout;
use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Classify Options:
    --input, -i <INPUT>    JSON frames file (array of joint objects, point lists, or null)
    --layout <LAYOUT>      Index layout for point-list frames (mediapipe, coco) [default: mediapipe]
    --near <NEAR>          Wrist level threshold [default: 0.1]
    --heart-gap <GAP>      Max wrist gap for Heart [default: 0.3]
    --folded-gap <GAP>     Max wrist gap for Folded Hands [default: 0.05]
    --bend-gap <GAP>       Max shoulder/hip gap for Bending Down [default: 0.2]
    --sit-tilt <TILT>      Max hip tilt for Sitting [default: 0.5]
    --batch <BATCH>        Frames classified per batch [default: 64]
    --json                 Print labels as a JSON array
    --verbose              Show verbose output

Examples:
    pose-classifier classify --input frames.json
    pose-classifier classify -i keypoints.json --layout coco --json
    pose-classifier classify -i frames.json --near 0.08 --verbose false
    pose-classifier rules"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every frame in a landmark frames file
    Classify(ClassifyArgs),
    /// List the pose rules in evaluation order
    Rules,
}

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON frames file
    #[arg(short, long)]
    pub input: String,

    /// Index layout for point-list frames
    #[arg(long, default_value_t = Layout::MediaPipe)]
    pub layout: Layout,

    /// Wrist level threshold
    #[arg(long, default_value_t = 0.1)]
    pub near: f64,

    /// Maximum wrist gap for Heart
    #[arg(long, default_value_t = 0.3)]
    pub heart_gap: f64,

    /// Maximum wrist gap for Folded Hands
    #[arg(long, default_value_t = 0.05)]
    pub folded_gap: f64,

    /// Maximum shoulder/hip gap for Bending Down
    #[arg(long, default_value_t = 0.2)]
    pub bend_gap: f64,

    /// Maximum hip tilt for Sitting
    #[arg(long, default_value_t = 0.5)]
    pub sit_tilt: f64,

    /// Frames classified per batch
    #[arg(long, default_value_t = 64)]
    pub batch: usize,

    /// Print labels as a JSON array
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

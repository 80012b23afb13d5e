// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Pose Classifier
//!
//! Rule-based classification of detected human body poses. Given the 2D
//! landmarks of one body in one frame, the classifier returns one of a fixed set
//! of named poses such as "T-Pose", "Hands Up" or "Sitting".
//!
//! The classifier is a pure function: no global state, no I/O, constant time
//! per call, and safe to call from any number of threads. Producing landmarks
//! from images and drawing results are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use pose_classifier::{Landmark, Landmarks, PoseClassifier, PoseLabel};
//!
//! // 33 MediaPipe landmarks from an upstream pose model
//! let mut points = vec![[0.5_f64, 0.5]; 33];
//! points[11] = [0.4, 0.4]; // left shoulder
//! points[12] = [0.6, 0.4]; // right shoulder
//! points[13] = [0.25, 0.4]; // left elbow
//! points[14] = [0.75, 0.4]; // right elbow
//! points[15] = [0.1, 0.4]; // left wrist
//! points[16] = [0.9, 0.4]; // right wrist
//!
//! let landmarks = Landmarks::from_mediapipe(&points)?;
//! assert_eq!(PoseClassifier::new().classify(&landmarks), PoseLabel::TPose);
//! # Ok::<(), pose_classifier::ClassifyError>(())
//! ```
//!
//! ## Rules
//!
//! Rules are evaluated in order and the first match wins. Smaller `y` is higher
//! in the frame.
//!
//! | # | Label | Condition |
//! |---|-------|-----------|
//! | 1 | T-Pose | each wrist within 0.1 (y) of its elbow and shoulder |
//! | 2 | Heart | wrists within 0.3 (x) and both raised above elbows and shoulders |
//! | 3 | Hands Up | both wrists above their elbows and shoulders |
//! | 4 | Waving | some wrist above its elbow and some wrist above its shoulder |
//! | 5 | Folded Hands | wrists within 0.05 (x), above elbows, left wrist below left shoulder |
//! | 6 | Arms Crossed | wrists past the opposite shoulder, elbows below wrists |
//! | 7 | Bending Down | shoulder/hip gap at most 0.2, hips above knees |
//! | 8 | Sitting | hips below knees, hip tilt under 0.5 |
//! | 9 | Standing | wrists within 0.1 of hip height, elbows outside wrists |
//! | 10 | Unknown Pose | fallback |
//!
//! ## CLI Usage
//!
//! ```bash
//! # Classify a JSON file of landmark frames
//! pose-classifier classify --input frames.json
//!
//! # COCO keypoint lists, JSON output
//! pose-classifier classify -i keypoints.json --layout coco --json
//!
//! # List the rules
//! pose-classifier rules
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classifier`] | [`PoseClassifier`], [`ClassifierConfig`] and the rule table |
//! | [`landmark`] | [`Landmark`], [`Landmarks`] and [`LandmarksBuilder`] |
//! | [`joint`] | [`Joint`] identifiers and upstream index layouts |
//! | [`label`] | [`PoseLabel`] |
//! | [`batch`] | Parallel classification of frame sequences |
//! | [`io`] | JSON frame files |
//! | [`error`] | Error types ([`ClassifyError`], [`Result`]) |

// Modules
pub mod batch;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod io;
pub mod joint;
pub mod label;
pub mod landmark;

// Re-export main types for convenience
pub use classifier::{ClassifierConfig, PoseClassifier, RULES, Rule};
pub use error::{ClassifyError, Result};
pub use joint::Joint;
pub use label::PoseLabel;
pub use landmark::{Landmark, Landmarks, LandmarksBuilder};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pose-classifier");
    }

    #[test]
    fn test_classifier_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<PoseClassifier>();
        assert_send_sync::<Landmarks>();
    }
}

// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities for reading landmark frames and writing labels.
//!
//! A frames file is a JSON array with one element per video frame:
//!
//! ```json
//! [
//!   null,
//!   { "left_wrist": { "x": 0.3, "y": 0.1 }, "right_wrist": { "x": 0.7, "y": 0.1 }, ... },
//!   [ { "x": 0.51, "y": 0.22 }, { "x": 0.52, "y": 0.20 }, ... ]
//! ]
//! ```
//!
//! `null` means no body was detected. An object maps joint names to landmarks;
//! keys that are not required joints (such as `"nose"`, or per-detection fields
//! like `"score"`) are ignored whatever their value. An array is a raw landmark
//! list in the layout chosen by [`Layout`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClassifyError, Result};
use crate::joint::Joint;
use crate::label::PoseLabel;
use crate::landmark::{Landmark, Landmarks};

/// Outcome of decoding one frame: a landmark set, `None` for no detection, or
/// the reason the frame could not be used.
pub type FrameResult = Result<Option<Landmarks>>;

/// Index layout for frames given as raw landmark arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// MediaPipe Pose, 33 landmarks.
    #[default]
    MediaPipe,
    /// COCO keypoints, 17 landmarks.
    Coco,
}

impl Layout {
    /// Returns the name accepted on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MediaPipe => "mediapipe",
            Self::Coco => "coco",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mediapipe" | "blazepose" => Ok(Self::MediaPipe),
            "coco" | "yolo" => Ok(Self::Coco),
            _ => Err(ClassifyError::Config(format!(
                "invalid layout '{s}', expected one of: mediapipe, coco"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFrame {
    Named(BTreeMap<String, Value>),
    Points(Vec<Landmark>),
}

impl RawFrame {
    fn into_landmarks(self, layout: Layout) -> Result<Landmarks> {
        match self {
            Self::Named(entries) => {
                let mut joints = Vec::with_capacity(Joint::ALL.len());
                for (name, value) in entries {
                    let Ok(joint) = name.parse::<Joint>() else {
                        continue;
                    };
                    joints.push((joint, serde_json::from_value::<Landmark>(value)?));
                }
                Landmarks::from_joints(joints)
            }
            Self::Points(points) => match layout {
                Layout::MediaPipe => Landmarks::from_mediapipe(&points),
                Layout::Coco => Landmarks::from_coco(&points),
            },
        }
    }
}

/// Decode a JSON frames document.
///
/// # Errors
///
/// Returns [`ClassifyError::Parse`] if the document is not a JSON array of frames.
/// Individual frames that decode but lack a required joint are reported in the
/// returned vector instead.
pub fn parse_frames(json: &str, layout: Layout) -> Result<Vec<FrameResult>> {
    let raw: Vec<Option<RawFrame>> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|frame| frame.map(|f| f.into_landmarks(layout)).transpose())
        .collect())
}

/// Read and decode a JSON frames file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of frames.
pub fn read_frames<P: AsRef<Path>>(path: P, layout: Layout) -> Result<Vec<FrameResult>> {
    let json = fs::read_to_string(path)?;
    parse_frames(&json, layout)
}

/// Encode frame labels as a JSON array, with `null` for skipped frames.
///
/// # Errors
///
/// Returns [`ClassifyError::Parse`] if serialization fails.
pub fn labels_to_json(labels: &[Option<PoseLabel>]) -> Result<String> {
    Ok(serde_json::to_string(labels)?)
}

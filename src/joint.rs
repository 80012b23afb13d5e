// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint identifiers consumed by the classifier.
//!
//! This module defines the closed set of body joints the pose rules read, along
//! with their positions in the two landmark layouts commonly produced upstream:
//! the 33-point MediaPipe Pose layout and the 17-point COCO keypoint layout.

use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// A body joint required for pose classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Joint {
    /// Left wrist.
    LeftWrist,
    /// Right wrist.
    RightWrist,
    /// Left elbow.
    LeftElbow,
    /// Right elbow.
    RightElbow,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left hip.
    LeftHip,
    /// Right hip.
    RightHip,
    /// Left knee.
    LeftKnee,
    /// Right knee.
    RightKnee,
}

impl Joint {
    /// Every required joint, in the order completeness is checked.
    pub const ALL: [Self; 10] = [
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
    ];

    /// Returns the snake_case name used in frame files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
        }
    }

    /// Index of this joint in the MediaPipe Pose 33-landmark layout.
    #[must_use]
    pub const fn mediapipe_index(&self) -> usize {
        match self {
            Self::LeftShoulder => 11,
            Self::RightShoulder => 12,
            Self::LeftElbow => 13,
            Self::RightElbow => 14,
            Self::LeftWrist => 15,
            Self::RightWrist => 16,
            Self::LeftHip => 23,
            Self::RightHip => 24,
            Self::LeftKnee => 25,
            Self::RightKnee => 26,
        }
    }

    /// Index of this joint in the COCO 17-keypoint layout.
    #[must_use]
    pub const fn coco_index(&self) -> usize {
        match self {
            Self::LeftShoulder => 5,
            Self::RightShoulder => 6,
            Self::LeftElbow => 7,
            Self::RightElbow => 8,
            Self::LeftWrist => 9,
            Self::RightWrist => 10,
            Self::LeftHip => 11,
            Self::RightHip => 12,
            Self::LeftKnee => 13,
            Self::RightKnee => 14,
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Joint {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|joint| joint.as_str() == normalized)
            .ok_or_else(|| ClassifyError::UnknownJoint(s.to_string()))
    }
}

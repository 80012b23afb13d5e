// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark types consumed by the classifier.
//!
//! A [`Landmarks`] value is a complete snapshot of the ten joints the pose rules
//! read. Completeness is checked once, when the snapshot is built, so the
//! classifier itself never has to handle a missing joint.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, Result};
use crate::joint::Joint;

/// A single normalized 2D joint position.
///
/// Coordinates are in image space with the origin at the top-left corner, so a
/// smaller `y` is higher in the frame. Values usually fall in `[0, 1]` but are
/// not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, increasing to the right.
    pub x: f64,
    /// Vertical position, increasing downward.
    pub y: f64,
    /// Relative depth, if the upstream model reports one. Not used by the rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Visibility score, if the upstream model reports one. Not used by the rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Create a landmark from its 2D coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Attach a depth value.
    #[must_use]
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Attach a visibility score.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

impl From<[f64; 2]> for Landmark {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A complete, immutable set of the joints needed for classification.
///
/// # Example
///
/// ```rust
/// use pose_classifier::{Joint, Landmark, Landmarks};
///
/// let landmarks = Landmarks::from_joints(
///     Joint::ALL.into_iter().map(|joint| (joint, Landmark::new(0.5, 0.5))),
/// )
/// .unwrap();
/// assert_eq!(landmarks[Joint::LeftKnee].y, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmarks {
    joints: [Landmark; 10],
}

impl Landmarks {
    /// Start building a landmark set joint by joint.
    #[must_use]
    pub fn builder() -> LandmarksBuilder {
        LandmarksBuilder::default()
    }

    /// Build a landmark set from `(joint, landmark)` pairs.
    ///
    /// Later pairs overwrite earlier ones for the same joint.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::IncompleteInput`] naming the first required joint
    /// that was not supplied.
    pub fn from_joints<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Joint, Landmark)>,
    {
        pairs
            .into_iter()
            .fold(LandmarksBuilder::default(), |builder, (joint, landmark)| {
                builder.set(joint, landmark)
            })
            .build()
    }

    /// Build a landmark set from a MediaPipe Pose landmark list (33 points).
    ///
    /// Only the ten required joints are read; the list must reach at least the
    /// right knee (index 26).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::IncompleteInput`] if the list is too short.
    pub fn from_mediapipe<P>(points: &[P]) -> Result<Self>
    where
        P: Copy + Into<Landmark>,
    {
        Self::from_layout(points, |joint| joint.mediapipe_index())
    }

    /// Build a landmark set from a COCO keypoint list (17 points).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::IncompleteInput`] if the list is too short.
    pub fn from_coco<P>(points: &[P]) -> Result<Self>
    where
        P: Copy + Into<Landmark>,
    {
        Self::from_layout(points, |joint| joint.coco_index())
    }

    fn from_layout<P>(points: &[P], index_of: impl Fn(&Joint) -> usize) -> Result<Self>
    where
        P: Copy + Into<Landmark>,
    {
        Self::from_joints(Joint::ALL.into_iter().filter_map(|joint| {
            points
                .get(index_of(&joint))
                .map(|&point| (joint, point.into()))
        }))
    }

    /// Get the landmark for a joint.
    #[must_use]
    pub const fn get(&self, joint: Joint) -> &Landmark {
        &self.joints[joint as usize]
    }

    /// Iterate over every joint and its landmark.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, &Landmark)> {
        Joint::ALL.into_iter().zip(self.joints.iter())
    }
}

impl Index<Joint> for Landmarks {
    type Output = Landmark;

    fn index(&self, joint: Joint) -> &Self::Output {
        self.get(joint)
    }
}

/// Incremental builder for [`Landmarks`].
#[derive(Debug, Clone, Default)]
pub struct LandmarksBuilder {
    slots: [Option<Landmark>; 10],
}

impl LandmarksBuilder {
    /// Set the landmark for a joint.
    #[must_use]
    pub fn set(mut self, joint: Joint, landmark: Landmark) -> Self {
        self.slots[joint as usize] = Some(landmark);
        self
    }

    /// Set the left/right pair of a joint kind in one call.
    #[must_use]
    pub fn pair(self, left: Joint, right: Joint, lm: Landmark, rm: Landmark) -> Self {
        self.set(left, lm).set(right, rm)
    }

    /// Check which required joint is still missing, if any.
    #[must_use]
    pub fn missing(&self) -> Option<Joint> {
        Joint::ALL
            .into_iter()
            .find(|joint| self.slots[*joint as usize].is_none())
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::IncompleteInput`] naming the first missing joint.
    pub fn build(self) -> Result<Landmarks> {
        let mut joints = [Landmark::default(); 10];
        for joint in Joint::ALL {
            joints[joint as usize] =
                self.slots[joint as usize].ok_or(ClassifyError::IncompleteInput(joint))?;
        }
        Ok(Landmarks { joints })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> LandmarksBuilder {
        Joint::ALL
            .into_iter()
            .enumerate()
            .fold(Landmarks::builder(), |builder, (i, joint)| {
                builder.set(joint, Landmark::new(i as f64 / 10.0, 0.5))
            })
    }

    #[test]
    fn test_builder_complete() {
        let landmarks = full_builder().build().unwrap();
        assert!((landmarks[Joint::LeftWrist].x - 0.0).abs() < f64::EPSILON);
        assert!((landmarks[Joint::RightKnee].x - 0.9).abs() < f64::EPSILON);
        assert_eq!(landmarks.iter().count(), 10);
    }

    #[test]
    fn test_builder_missing_joint() {
        let mut builder = Landmarks::builder();
        for joint in Joint::ALL.into_iter().filter(|j| *j != Joint::RightKnee) {
            builder = builder.set(joint, Landmark::new(0.5, 0.5));
        }
        assert_eq!(builder.missing(), Some(Joint::RightKnee));
        match builder.build() {
            Err(ClassifyError::IncompleteInput(joint)) => assert_eq!(joint, Joint::RightKnee),
            other => panic!("expected incomplete input, got {other:?}"),
        }
    }

    #[test]
    fn test_from_joints_overwrites() {
        let pairs = Joint::ALL
            .into_iter()
            .map(|joint| (joint, Landmark::new(0.1, 0.1)))
            .chain(std::iter::once((Joint::LeftHip, Landmark::new(0.4, 0.7))));
        let landmarks = Landmarks::from_joints(pairs).unwrap();
        assert_eq!(landmarks[Joint::LeftHip], Landmark::new(0.4, 0.7));
    }

    #[test]
    fn test_from_mediapipe() {
        let points: Vec<[f64; 2]> = (0..33).map(|i| [i as f64 / 100.0, 0.5]).collect();
        let landmarks = Landmarks::from_mediapipe(&points).unwrap();
        assert!((landmarks[Joint::LeftWrist].x - 0.15).abs() < f64::EPSILON);
        assert!((landmarks[Joint::RightKnee].x - 0.26).abs() < f64::EPSILON);

        let short = &points[..26];
        assert!(matches!(
            Landmarks::from_mediapipe(short),
            Err(ClassifyError::IncompleteInput(Joint::RightKnee))
        ));
    }

    #[test]
    fn test_from_coco() {
        let points: Vec<Landmark> = (0..17).map(|i| Landmark::new(0.5, i as f64 / 100.0)).collect();
        let landmarks = Landmarks::from_coco(&points).unwrap();
        assert!((landmarks[Joint::LeftShoulder].y - 0.05).abs() < f64::EPSILON);
        assert!((landmarks[Joint::RightHip].y - 0.12).abs() < f64::EPSILON);

        assert!(Landmarks::from_coco(&points[..10]).is_err());
    }

    #[test]
    fn test_landmark_optional_fields() {
        let landmark = Landmark::new(0.2, 0.3).with_z(-0.1).with_visibility(0.9);
        assert_eq!(landmark.z, Some(-0.1));
        assert_eq!(landmark.visibility, Some(0.9));
    }
}

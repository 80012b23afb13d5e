// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Rule-based pose classification.
//!
//! The classifier evaluates an ordered table of [`Rule`]s against a
//! [`Landmarks`] snapshot and returns the label of the first rule whose predicate
//! holds, falling back to [`PoseLabel::Unknown`]. Image coordinates grow
//! downward, so "above" always means a smaller `y`.

use crate::error::{ClassifyError, Result};
use crate::joint::Joint;
use crate::label::PoseLabel;
use crate::landmark::{Landmark, Landmarks, LandmarksBuilder};

/// Thresholds used by the pose rules.
///
/// The defaults are the reference values; changing them changes which poses
/// are recognized at the boundaries.
///
/// # Example
///
/// ```rust
/// use pose_classifier::ClassifierConfig;
///
/// let config = ClassifierConfig::new()
///     .with_near_threshold(0.08)
///     .with_heart_wrist_gap(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Maximum vertical distance (exclusive) for a wrist to count as level with
    /// an elbow, shoulder or hip.
    pub near_threshold: f64,
    /// Maximum horizontal wrist gap (exclusive) for the heart pose.
    pub heart_wrist_gap: f64,
    /// Maximum horizontal wrist gap (exclusive) for folded hands.
    pub folded_wrist_gap: f64,
    /// Maximum shoulder-to-hip height difference (inclusive) for bending down.
    pub bend_torso_gap: f64,
    /// Maximum left/right hip height difference (exclusive) for sitting.
    pub sit_hip_tilt: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            near_threshold: 0.1,
            heart_wrist_gap: 0.3,
            folded_wrist_gap: 0.05,
            bend_torso_gap: 0.2,
            sit_hip_tilt: 0.5,
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrist proximity threshold used by the T-pose and standing rules.
    #[must_use]
    pub const fn with_near_threshold(mut self, threshold: f64) -> Self {
        self.near_threshold = threshold;
        self
    }

    /// Set the maximum wrist gap for the heart pose.
    #[must_use]
    pub const fn with_heart_wrist_gap(mut self, gap: f64) -> Self {
        self.heart_wrist_gap = gap;
        self
    }

    /// Set the maximum wrist gap for folded hands.
    #[must_use]
    pub const fn with_folded_wrist_gap(mut self, gap: f64) -> Self {
        self.folded_wrist_gap = gap;
        self
    }

    /// Set the maximum torso height difference for bending down.
    #[must_use]
    pub const fn with_bend_torso_gap(mut self, gap: f64) -> Self {
        self.bend_torso_gap = gap;
        self
    }

    /// Set the maximum hip tilt for sitting.
    #[must_use]
    pub const fn with_sit_hip_tilt(mut self, tilt: f64) -> Self {
        self.sit_hip_tilt = tilt;
        self
    }

    /// Check that every threshold is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Config`] naming the first invalid threshold.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("near_threshold", self.near_threshold),
            ("heart_wrist_gap", self.heart_wrist_gap),
            ("folded_wrist_gap", self.folded_wrist_gap),
            ("bend_torso_gap", self.bend_torso_gap),
            ("sit_hip_tilt", self.sit_hip_tilt),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ClassifyError::Config(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Whether two vertical positions are within `threshold` of each other (exclusive).
#[must_use]
pub fn near(a_y: f64, b_y: f64, threshold: f64) -> bool {
    (a_y - b_y).abs() < threshold
}

/// Whether `a` sits strictly higher in the frame than `b`.
#[inline]
fn above(a: &Landmark, b: &Landmark) -> bool {
    a.y < b.y
}

/// A landmark snapshot together with the averages shared by several rules.
#[derive(Debug, Clone, Copy)]
pub struct PoseFeatures<'a> {
    /// The landmarks being classified.
    pub landmarks: &'a Landmarks,
    /// Mean shoulder height.
    pub avg_shoulder_y: f64,
    /// Mean hip height.
    pub avg_hip_y: f64,
    /// Mean knee height.
    pub avg_knee_y: f64,
}

impl<'a> PoseFeatures<'a> {
    /// Compute the derived quantities for a landmark set.
    #[must_use]
    pub fn new(landmarks: &'a Landmarks) -> Self {
        let mean = |left: Joint, right: Joint| (landmarks[left].y + landmarks[right].y) / 2.0;
        Self {
            landmarks,
            avg_shoulder_y: mean(Joint::LeftShoulder, Joint::RightShoulder),
            avg_hip_y: mean(Joint::LeftHip, Joint::RightHip),
            avg_knee_y: mean(Joint::LeftKnee, Joint::RightKnee),
        }
    }

    fn joint(&self, joint: Joint) -> &'a Landmark {
        self.landmarks.get(joint)
    }

    fn wrist_gap(&self) -> f64 {
        (self.joint(Joint::LeftWrist).x - self.joint(Joint::RightWrist).x).abs()
    }

    fn left_wrist_above_elbow(&self) -> bool {
        above(self.joint(Joint::LeftWrist), self.joint(Joint::LeftElbow))
    }

    fn right_wrist_above_elbow(&self) -> bool {
        above(self.joint(Joint::RightWrist), self.joint(Joint::RightElbow))
    }

    fn left_wrist_above_shoulder(&self) -> bool {
        above(self.joint(Joint::LeftWrist), self.joint(Joint::LeftShoulder))
    }

    fn right_wrist_above_shoulder(&self) -> bool {
        above(self.joint(Joint::RightWrist), self.joint(Joint::RightShoulder))
    }

    fn both_wrists_raised(&self) -> bool {
        self.left_wrist_above_elbow()
            && self.right_wrist_above_elbow()
            && self.left_wrist_above_shoulder()
            && self.right_wrist_above_shoulder()
    }
}

/// Signature shared by every rule predicate.
pub type Predicate = fn(&PoseFeatures<'_>, &ClassifierConfig) -> bool;

/// One entry of the ordered decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Label returned when the predicate holds.
    pub label: PoseLabel,
    /// Condition over the landmark features.
    pub predicate: Predicate,
}

impl Rule {
    /// Pair a label with its predicate.
    #[must_use]
    pub const fn new(label: PoseLabel, predicate: Predicate) -> Self {
        Self { label, predicate }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish_non_exhaustive()
    }
}

/// Both wrists level with their own elbow and shoulder.
#[must_use]
pub fn is_t_pose(p: &PoseFeatures<'_>, cfg: &ClassifierConfig) -> bool {
    let t = cfg.near_threshold;
    let y = |joint: Joint| p.joint(joint).y;
    near(y(Joint::LeftWrist), y(Joint::LeftElbow), t)
        && near(y(Joint::RightWrist), y(Joint::RightElbow), t)
        && near(y(Joint::LeftWrist), y(Joint::LeftShoulder), t)
        && near(y(Joint::RightWrist), y(Joint::RightShoulder), t)
}

/// Both wrists raised and close together horizontally.
#[must_use]
pub fn is_heart(p: &PoseFeatures<'_>, cfg: &ClassifierConfig) -> bool {
    p.wrist_gap() < cfg.heart_wrist_gap && p.both_wrists_raised()
}

/// Both wrists above their own elbow and shoulder.
#[must_use]
pub fn is_hands_up(p: &PoseFeatures<'_>, _cfg: &ClassifierConfig) -> bool {
    p.both_wrists_raised()
}

/// Some wrist above its elbow and some wrist above its shoulder.
///
/// The two conditions may be met by different arms.
#[must_use]
pub fn is_waving(p: &PoseFeatures<'_>, _cfg: &ClassifierConfig) -> bool {
    (p.left_wrist_above_elbow() || p.right_wrist_above_elbow())
        && (p.left_wrist_above_shoulder() || p.right_wrist_above_shoulder())
}

/// Wrists together above the elbows but with the left wrist below its shoulder.
#[must_use]
pub fn is_folded_hands(p: &PoseFeatures<'_>, cfg: &ClassifierConfig) -> bool {
    p.wrist_gap() < cfg.folded_wrist_gap
        && p.left_wrist_above_elbow()
        && p.right_wrist_above_elbow()
        && p.joint(Joint::LeftWrist).y > p.joint(Joint::LeftShoulder).y
}

/// Each wrist past the opposite shoulder with the elbows below the wrists.
#[must_use]
pub fn is_arms_crossed(p: &PoseFeatures<'_>, _cfg: &ClassifierConfig) -> bool {
    let lw = p.joint(Joint::LeftWrist);
    let rw = p.joint(Joint::RightWrist);
    lw.x > p.joint(Joint::RightShoulder).x
        && rw.x < p.joint(Joint::LeftShoulder).x
        && p.joint(Joint::LeftElbow).y > lw.y
        && p.joint(Joint::RightElbow).y > rw.y
}

/// Shoulders close to hip height with the hips still above the knees.
#[must_use]
pub fn is_bending_down(p: &PoseFeatures<'_>, cfg: &ClassifierConfig) -> bool {
    (p.avg_shoulder_y - p.avg_hip_y).abs() <= cfg.bend_torso_gap && p.avg_hip_y < p.avg_knee_y
}

/// Hips below the knees and roughly level with each other.
#[must_use]
pub fn is_sitting(p: &PoseFeatures<'_>, cfg: &ClassifierConfig) -> bool {
    p.avg_hip_y > p.avg_knee_y
        && (p.joint(Joint::LeftHip).y - p.joint(Joint::RightHip).y).abs() < cfg.sit_hip_tilt
}

/// Wrists at hip height with the elbows outside the wrists.
#[must_use]
pub fn is_standing(p: &PoseFeatures<'_>, cfg: &ClassifierConfig) -> bool {
    let t = cfg.near_threshold;
    let lw = p.joint(Joint::LeftWrist);
    let rw = p.joint(Joint::RightWrist);
    near(lw.y, p.joint(Joint::LeftHip).y, t)
        && near(rw.y, p.joint(Joint::RightHip).y, t)
        && p.joint(Joint::LeftElbow).x < lw.x
        && p.joint(Joint::RightElbow).x > rw.x
}

/// The decision table, in evaluation order. The first matching rule wins.
pub const RULES: [Rule; 9] = [
    Rule::new(PoseLabel::TPose, is_t_pose),
    Rule::new(PoseLabel::Heart, is_heart),
    Rule::new(PoseLabel::HandsUp, is_hands_up),
    Rule::new(PoseLabel::Waving, is_waving),
    Rule::new(PoseLabel::FoldedHands, is_folded_hands),
    Rule::new(PoseLabel::ArmsCrossed, is_arms_crossed),
    Rule::new(PoseLabel::BendingDown, is_bending_down),
    Rule::new(PoseLabel::Sitting, is_sitting),
    Rule::new(PoseLabel::Standing, is_standing),
];

/// Stateless pose classifier.
///
/// # Example
///
/// ```rust
/// use pose_classifier::{Joint, Landmark, Landmarks, PoseClassifier, PoseLabel};
///
/// let landmarks = Landmarks::builder()
///     .pair(Joint::LeftWrist, Joint::RightWrist, Landmark::new(0.3, 0.1), Landmark::new(0.7, 0.1))
///     .pair(Joint::LeftElbow, Joint::RightElbow, Landmark::new(0.3, 0.3), Landmark::new(0.7, 0.3))
///     .pair(Joint::LeftShoulder, Joint::RightShoulder, Landmark::new(0.3, 0.35), Landmark::new(0.7, 0.35))
///     .pair(Joint::LeftHip, Joint::RightHip, Landmark::new(0.4, 0.6), Landmark::new(0.6, 0.6))
///     .pair(Joint::LeftKnee, Joint::RightKnee, Landmark::new(0.4, 0.8), Landmark::new(0.6, 0.8))
///     .build()?;
/// let label = PoseClassifier::new().classify(&landmarks);
/// assert_eq!(label, PoseLabel::HandsUp);
/// # Ok::<(), pose_classifier::ClassifyError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseClassifier {
    config: ClassifierConfig,
}

impl PoseClassifier {
    /// Create a classifier with the reference thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Config`] if the configuration fails validation.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a complete landmark set.
    #[must_use]
    pub fn classify(&self, landmarks: &Landmarks) -> PoseLabel {
        let features = PoseFeatures::new(landmarks);
        RULES
            .iter()
            .find(|rule| (rule.predicate)(&features, &self.config))
            .map_or(PoseLabel::Unknown, |rule| rule.label)
    }

    /// Classify a partially built landmark set.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::IncompleteInput`] if a required joint is missing.
    pub fn try_classify(&self, builder: LandmarksBuilder) -> Result<PoseLabel> {
        Ok(self.classify(&builder.build()?))
    }

    /// List every label whose rule holds, in evaluation order.
    ///
    /// The first element, if any, is what [`PoseClassifier::classify`] returns.
    #[must_use]
    pub fn matching(&self, landmarks: &Landmarks) -> Vec<PoseLabel> {
        let features = PoseFeatures::new(landmarks);
        RULES
            .iter()
            .filter(|rule| (rule.predicate)(&features, &self.config))
            .map(|rule| rule.label)
            .collect()
    }
}

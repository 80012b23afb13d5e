// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose labels produced by the classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A discrete pose category.
///
/// Variants are listed in the order their rules are evaluated; [`PoseLabel::Unknown`]
/// is the fallback when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoseLabel {
    /// Arms held out horizontally.
    TPose,
    /// Both hands raised above the head and held close together.
    Heart,
    /// Both arms raised.
    HandsUp,
    /// One arm raised.
    Waving,
    /// Hands held together below shoulder height.
    FoldedHands,
    /// Wrists crossed to the opposite side of the body.
    ArmsCrossed,
    /// Torso folded toward the legs.
    BendingDown,
    /// Hips below knees.
    Sitting,
    /// Arms hanging at the sides.
    Standing,
    /// No rule matched.
    Unknown,
}

impl PoseLabel {
    /// Every label, in rule order, with the fallback last.
    pub const ALL: [Self; 10] = [
        Self::TPose,
        Self::Heart,
        Self::HandsUp,
        Self::Waving,
        Self::FoldedHands,
        Self::ArmsCrossed,
        Self::BendingDown,
        Self::Sitting,
        Self::Standing,
        Self::Unknown,
    ];

    /// Returns the human-readable display text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TPose => "T-Pose",
            Self::Heart => "Heart",
            Self::HandsUp => "Hands Up",
            Self::Waving => "Waving",
            Self::FoldedHands => "Folded Hands",
            Self::ArmsCrossed => "Arms Crossed",
            Self::BendingDown => "Bending Down",
            Self::Sitting => "Sitting",
            Self::Standing => "Standing",
            Self::Unknown => "Unknown Pose",
        }
    }

    /// Returns whether this is the fallback label.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for PoseLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for PoseLabel {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "tpose" => Ok(Self::TPose),
            "heart" => Ok(Self::Heart),
            "handsup" => Ok(Self::HandsUp),
            "waving" | "wave" => Ok(Self::Waving),
            "foldedhands" => Ok(Self::FoldedHands),
            "armscrossed" => Ok(Self::ArmsCrossed),
            "bendingdown" => Ok(Self::BendingDown),
            "sitting" => Ok(Self::Sitting),
            "standing" => Ok(Self::Standing),
            "unknown" | "unknownpose" => Ok(Self::Unknown),
            _ => Err(LabelParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid label string.
#[derive(Debug, Clone)]
pub struct LabelParseError(String);

impl fmt::Display for LabelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pose label '{}'", self.0)
    }
}

impl std::error::Error for LabelParseError {}

//! Score and tier types.

use std::fmt;

/// Count of satisfied requirements, always within `0..=Score::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Number of requirements, hence the highest reachable score.
    pub const MAX: u8 = 6;

    /// Creates a score, clamping to [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Bar fill in percent: `score / 6 * 100`.
    pub fn percent(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX) * 100.0
    }

    pub fn tier(self) -> StrengthTier {
        StrengthTier::from_score(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Strength tier derived from a [`Score`] via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// `<= 2` is weak, `3..=4` moderate, `>= 5` strong.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=2 => Self::Weak,
            3..=4 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    /// CSS color token used for the bar and the feedback card.
    pub fn color(self) -> &'static str {
        match self {
            Self::Weak => "#ef4444",
            Self::Moderate => "#f59e0b",
            Self::Strong => "#10b981",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }

    /// Feedback message shown in the result card.
    pub fn message(self) -> &'static str {
        match self {
            Self::Weak => "Your password is vulnerable. Consider adding more complexity.",
            Self::Moderate => "Your password needs improvement for better security.",
            Self::Strong => "Your password is highly secure! Well done!",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

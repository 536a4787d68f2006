//! Password requirement sections
//!
//! Each section checks one aspect of the password. The fixed, ordered
//! requirement table lives here; display order follows [`REQUIREMENTS`].

mod length;
mod pattern;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use pattern::{common_pattern_section, COMMON_PATTERNS};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Predicate type for requirement sections.
/// Returns `true` when the password satisfies the requirement.
pub type SectionCheck = fn(&str) -> bool;

/// One named boolean check applied to the password.
#[derive(Clone, Copy)]
pub struct Requirement {
    label: &'static str,
    check: SectionCheck,
}

impl Requirement {
    const fn new(label: &'static str, check: SectionCheck) -> Self {
        Self { label, check }
    }

    /// Label shown next to the checklist glyph.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Runs the predicate against an exposed password.
    pub fn is_satisfied(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

impl std::fmt::Debug for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requirement")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Requirement {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Requirement {}

/// The requirement table, in display order.
pub static REQUIREMENTS: [Requirement; 6] = [
    Requirement::new("Minimum 8 characters", length_section),
    Requirement::new("Contains uppercase letter (A-Z)", uppercase_section),
    Requirement::new("Contains lowercase letter (a-z)", lowercase_section),
    Requirement::new("Contains digit (0-9)", digit_section),
    Requirement::new("Contains special character (!@#$%^&*)", special_section),
    Requirement::new("No common patterns", common_pattern_section),
];

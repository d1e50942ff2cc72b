//! The signal taxonomy, exposed as data.
//!
//! Each scoring profile is a [`Library`]: an ordered list of signal groups,
//! each built by a small constructor function. Adding a category means
//! adding a group constructor and listing it in the profile's `get()`; the
//! scoring algorithm itself never changes.
//!
//! Two profiles exist because two policies exist in the wild:
//!
//! - [`Profile::Gated`] (default): nothing scores unless the author is
//!   identifiable as a CEO/founder. This is the intent-correct policy.
//! - [`Profile::Additive`]: every category is independent; useful when the
//!   input is already pre-filtered to founder-adjacent sources.

mod additive;
mod gated;

#[cfg(test)]
mod tests;

use crate::Library;

/// Which scoring policy a [`crate::Scorer`] applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    /// Identity-gated: no CEO/founder identity, no score.
    #[default]
    Gated,
    /// Ungated: categories accumulate independently.
    Additive,
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gated" => Ok(Profile::Gated),
            "additive" => Ok(Profile::Additive),
            other => Err(format!("unknown profile '{other}' (expected 'gated' or 'additive')")),
        }
    }
}

pub(crate) fn get(profile: Profile) -> Library {
    match profile {
        Profile::Gated => gated::get(),
        Profile::Additive => additive::get(),
    }
}

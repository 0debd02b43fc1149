//! Ordered strength classification for random-byte sources.
//!
//! A mixer weights each source's contribution by the strength the source
//! reports for itself, so the ordering is the whole contract: `Low < Medium
//! < High`. Reporting a strength above what the backing facility actually
//! delivers in the current environment is a correctness violation, not a
//! tuning knob.

use serde::{Deserialize, Serialize};

/// How cryptographically trustworthy a source's output is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Predictable or easily biased output. Usable only as one voice among
    /// many in a mix.
    Low,
    /// Unpredictable in principle, but produced by a facility with a known
    /// weakness in this environment.
    Medium,
    /// Cryptographically strong output from a trusted facility.
    High,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_low_to_high() {
        assert!(Strength::Low < Strength::Medium);
        assert!(Strength::Medium < Strength::High);
        assert_eq!(
            Strength::High,
            [Strength::Medium, Strength::High, Strength::Low]
                .into_iter()
                .max()
                .unwrap()
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Strength::Low.to_string(), "low");
        assert_eq!(Strength::Medium.to_string(), "medium");
        assert_eq!(Strength::High.to_string(), "high");
    }

    #[test]
    fn serde_wire_names_match_display() {
        for s in [Strength::Low, Strength::Medium, Strength::High] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{s}\""));
            let back: Strength = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }
    }
}

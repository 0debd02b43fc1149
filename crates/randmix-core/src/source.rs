//! Abstract random-byte source trait and metadata.
//!
//! Every source implements the [`RandomSource`] trait: a strength
//! classification for the mixer to weight by, plus on-demand byte
//! production that degrades instead of failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strength::Strength;

/// Where a source's bytes ultimately come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// The operating system's secure generator.
    Os,
    /// A dedicated hardware RNG.
    Hardware,
    /// A character-device entropy pool such as `/dev/random`.
    DevRandom,
    /// Caller-supplied seed material.
    UserProvided,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Os => write!(f, "os"),
            Self::Hardware => write!(f, "hardware"),
            Self::DevRandom => write!(f, "dev_random"),
            Self::UserProvided => write!(f, "user_provided"),
        }
    }
}

/// Metadata about a random-byte source.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Unique identifier (e.g. `"os_strong"`).
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Where the bytes come from.
    pub kind: SourceKind,
    /// Whether the backing primitive can block waiting on the OS entropy
    /// pool. Blocking is inherited transparently; no timeout is layered on
    /// top of the primitive.
    pub may_block: bool,
}

/// Trait that every random-byte source must implement.
///
/// Sources are stateless from the caller's point of view: every call is
/// independent, and concurrent calls need no coordination beyond whatever
/// the backing primitive itself requires.
pub trait RandomSource: Send + Sync {
    /// Source metadata.
    fn info(&self) -> &SourceInfo;

    /// Strength classification of this source's output in the current
    /// environment.
    ///
    /// Pure and idempotent. Evaluated independently of whether the backing
    /// facility is actually present — it expresses what strength *would*
    /// apply given the runtime, not presence or absence.
    fn strength(&self) -> Strength;

    /// Whether the backing facility exists in this environment.
    ///
    /// [`generate`](Self::generate) must still succeed (degraded) when this
    /// returns `false`.
    fn is_available(&self) -> bool;

    /// Produce exactly `size` bytes.
    ///
    /// Never fails: when the backing facility is absent the result is `size`
    /// zero bytes, the deterministic sentinel for "no entropy contributed".
    /// Callers cannot distinguish strong output from the degraded case by
    /// inspecting the bytes; strength is queried separately.
    fn generate(&self, size: usize) -> Vec<u8>;

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

/// Errors surfaced only by a source's opt-in strict path.
///
/// The [`RandomSource`] contract itself defines no errors — degenerate
/// conditions resolve to deterministic zero-fill. Strict entry points such
/// as [`OsStrongSource::try_generate`](crate::sources::OsStrongSource::try_generate)
/// use this type to fail loudly instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The secure byte facility does not exist in this environment.
    #[error("secure byte facility is unavailable on this platform")]
    FacilityUnavailable,
    /// The facility produced output but could not guarantee the strong path.
    #[error("facility reported weak output for a {requested}-byte request")]
    WeakFill {
        /// Number of bytes that were requested.
        requested: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Mock source for exercising the trait object surface
    // -----------------------------------------------------------------------

    struct FixedSource {
        info: SourceInfo,
        strength: Strength,
        byte: u8,
    }

    impl FixedSource {
        fn new(name: &'static str, strength: Strength, byte: u8) -> Self {
            Self {
                info: SourceInfo {
                    name,
                    description: "fixed test source",
                    kind: SourceKind::UserProvided,
                    may_block: false,
                },
                strength,
                byte,
            }
        }
    }

    impl RandomSource for FixedSource {
        fn info(&self) -> &SourceInfo {
            &self.info
        }
        fn strength(&self) -> Strength {
            self.strength
        }
        fn is_available(&self) -> bool {
            true
        }
        fn generate(&self, size: usize) -> Vec<u8> {
            vec![self.byte; size]
        }
    }

    #[test]
    fn default_name_comes_from_info() {
        let src = FixedSource::new("fixed", Strength::Low, 0xAB);
        assert_eq!(src.name(), "fixed");
    }

    #[test]
    fn trait_objects_can_be_weighted_by_strength() {
        let sources: Vec<Box<dyn RandomSource>> = vec![
            Box::new(FixedSource::new("weak", Strength::Low, 1)),
            Box::new(FixedSource::new("strong", Strength::High, 2)),
        ];
        let best = sources.iter().max_by_key(|s| s.strength()).unwrap();
        assert_eq!(best.name(), "strong");
    }

    #[test]
    fn generate_length_through_trait_object() {
        let src: Box<dyn RandomSource> = Box::new(FixedSource::new("fixed", Strength::Low, 7));
        assert_eq!(src.generate(10), vec![7u8; 10]);
        assert!(src.generate(0).is_empty());
    }

    #[test]
    fn source_kind_wire_names_match_display() {
        for kind in [
            SourceKind::Os,
            SourceKind::Hardware,
            SourceKind::DevRandom,
            SourceKind::UserProvided,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn source_error_messages() {
        assert_eq!(
            SourceError::FacilityUnavailable.to_string(),
            "secure byte facility is unavailable on this platform"
        );
        assert_eq!(
            SourceError::WeakFill { requested: 16 }.to_string(),
            "facility reported weak output for a 16-byte request"
        );
    }
}

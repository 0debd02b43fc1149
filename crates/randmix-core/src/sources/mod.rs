//! Concrete source implementations shipped with this crate.
//!
//! Sibling crates contribute further sources (hardware RNGs, `/dev/random`
//! readers, user-seed wrappers); this crate ships the OS-backed one.

pub mod os_strong;

pub use os_strong::OsStrongSource;

use crate::source::RandomSource;

/// Constructors for every source this crate ships. Each entry is boxed and
/// ready for registration with a mixer.
pub fn all_sources() -> Vec<Box<dyn RandomSource>> {
    vec![Box::new(OsStrongSource::new())]
}

//! # randmix-core
//!
//! Pluggable random-byte **sources** with self-reported strength — the
//! building blocks an entropy mixer combines into one output stream.
//!
//! Each source implements [`RandomSource`]: it classifies its own
//! trustworthiness as a [`Strength`] and produces raw bytes on demand. A
//! mixer registers several sources and weights their contributions by
//! strength, so no single weak or degraded source decides the quality of
//! the combined stream.
//!
//! ## Quick Start
//!
//! ```
//! use randmix_core::sources::OsStrongSource;
//! use randmix_core::{RandomSource, Strength};
//!
//! let source = OsStrongSource::new();
//!
//! // Exactly as many bytes as asked for, even when degraded.
//! let bytes = source.generate(32);
//! assert_eq!(bytes.len(), 32);
//!
//! // Strength is a property of the environment, queried separately.
//! assert!(source.strength() >= Strength::Medium);
//! ```
//!
//! ## Degradation
//!
//! Sources never fail. When the backing facility is absent,
//! [`RandomSource::generate`] returns the requested number of zero bytes — a
//! deterministic sentinel for "no entropy contributed". Callers cannot tell
//! strong output from the degraded case by looking at the bytes; strength is
//! queried separately and stays truthful either way.

pub mod facility;
pub mod platform;
pub mod source;
pub mod sources;
pub mod strength;

pub use facility::{FillQuality, OsFacility, SecureFacility};
pub use platform::FacilityProfile;
pub use source::{RandomSource, SourceError, SourceInfo, SourceKind};
pub use sources::{OsStrongSource, all_sources};
pub use strength::Strength;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Secure byte-generation facility seam.
//!
//! Sources don't call the OS generator directly; they go through the
//! [`SecureFacility`] trait so the degraded paths can be exercised against
//! controlled facilities in tests. [`OsFacility`] is the production
//! implementation over the `getrandom` crate.

use std::sync::OnceLock;

/// Quality flag a facility reports alongside its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillQuality {
    /// Output came from the cryptographically strong path.
    Strong,
    /// The facility could not guarantee strong output. It may have written
    /// nothing at all; callers that want the zero sentinel hand in a zeroed
    /// buffer.
    Weak,
}

/// A secure pseudo-random byte generation primitive.
pub trait SecureFacility: Send + Sync {
    /// Whether the primitive exists in this environment. Stable for the
    /// lifetime of the process.
    fn is_available(&self) -> bool;

    /// Fill `buf` and report the quality of what was written. Never errors.
    fn fill(&self, buf: &mut [u8]) -> FillQuality;
}

/// The operating system's secure generator, via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFacility;

impl SecureFacility for OsFacility {
    fn is_available(&self) -> bool {
        os_facility_available()
    }

    /// A runtime `getrandom` failure maps to [`FillQuality::Weak`] with the
    /// buffer untouched. No retry: whether the flag matters is the caller's
    /// policy, not this layer's.
    fn fill(&self, buf: &mut [u8]) -> FillQuality {
        match getrandom::fill(buf) {
            Ok(()) => FillQuality::Strong,
            Err(err) => {
                log::warn!("os secure generator failed ({err}); reporting weak fill");
                FillQuality::Weak
            }
        }
    }
}

/// Probe the OS generator once per process. A one-byte fill either works for
/// the lifetime of the process or never will.
fn os_facility_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        let mut probe = [0u8; 1];
        let ok = getrandom::fill(&mut probe).is_ok();
        if !ok {
            log::warn!("os secure generator unavailable; sources backed by it will zero-fill");
        }
        ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_facility_is_available_on_supported_targets() {
        assert!(OsFacility.is_available());
    }

    #[test]
    fn availability_is_stable() {
        assert_eq!(OsFacility.is_available(), OsFacility.is_available());
    }

    #[test]
    fn fill_reports_strong_and_writes() {
        let mut buf = [0u8; 32];
        assert_eq!(OsFacility.fill(&mut buf), FillQuality::Strong);
        // 32 zero bytes from a working generator is a 2^-256 event.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn fill_accepts_empty_buffer() {
        let mut buf = [0u8; 0];
        assert_eq!(OsFacility.fill(&mut buf), FillQuality::Strong);
    }
}

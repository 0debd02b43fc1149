//! OsStrongSource — the operating system's secure generator as a mix source.
//!
//! Wraps the secure byte facility behind the [`RandomSource`] contract. Two
//! deliberate behaviors define this source:
//!
//! - **Graceful zero-fill.** When the facility is missing, or for empty
//!   requests, `generate` returns the requested number of zero bytes instead
//!   of failing. A run of zeros is the sentinel for "no entropy contributed";
//!   the mixer discounts this source through its reported strength, not
//!   through error handling.
//! - **Quality flag ignored.** The facility reports whether its output came
//!   from the strong path; `generate` does not look at it. This source is
//!   one contributor among several, and a silently weaker batch from one
//!   contributor does not compromise the combined output while other sources
//!   stay strong. Callers that want the check anyway opt into
//!   [`OsStrongSource::try_generate`].

use crate::facility::{FillQuality, OsFacility, SecureFacility};
use crate::platform::FacilityProfile;
use crate::source::{RandomSource, SourceError, SourceInfo, SourceKind};
use crate::strength::Strength;

static OS_STRONG_INFO: SourceInfo = SourceInfo {
    name: "os_strong",
    description: "OS secure generator; zero-fills when the facility is absent",
    kind: SourceKind::Os,
    // getrandom(2) blocks until the kernel pool is initialized at early boot.
    // That blocking is inherited transparently.
    may_block: true,
};

/// Random-byte source backed by the OS secure generator.
///
/// Stateless: every call is independent and concurrent use needs no
/// coordination beyond what the facility itself guarantees. The facility
/// type parameter is the test seam; production code uses the default.
#[derive(Debug, Clone)]
pub struct OsStrongSource<F = OsFacility> {
    facility: F,
    profile: FacilityProfile,
}

impl OsStrongSource {
    /// Source over the real OS facility, with the profile detected at
    /// startup.
    pub fn new() -> Self {
        Self::with_facility(OsFacility, FacilityProfile::detect())
    }

    /// Strength this source reports under `profile`. Pure; needs no
    /// instance.
    ///
    /// Environments where the generator's predictable-fallback defect is
    /// present cap at [`Strength::Medium`]; fixed environments report
    /// [`Strength::High`]. Whether the facility is actually present does not
    /// enter into it.
    pub fn strength_for(profile: FacilityProfile) -> Strength {
        if profile.fallback_defect {
            Strength::Medium
        } else {
            Strength::High
        }
    }
}

impl Default for OsStrongSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SecureFacility> OsStrongSource<F> {
    /// Source over an explicit facility and profile. Used by tests, and by
    /// embedders whose environment knowledge beats autodetection.
    pub fn with_facility(facility: F, profile: FacilityProfile) -> Self {
        Self { facility, profile }
    }

    /// Strict variant of [`RandomSource::generate`]: checks what the default
    /// path deliberately ignores, and fails loudly instead of degrading.
    pub fn try_generate(&self, size: usize) -> Result<Vec<u8>, SourceError> {
        if !self.facility.is_available() {
            return Err(SourceError::FacilityUnavailable);
        }
        let mut buf = vec![0u8; size];
        match self.facility.fill(&mut buf) {
            FillQuality::Strong => Ok(buf),
            FillQuality::Weak => Err(SourceError::WeakFill { requested: size }),
        }
    }
}

impl<F: SecureFacility> RandomSource for OsStrongSource<F> {
    fn info(&self) -> &SourceInfo {
        &OS_STRONG_INFO
    }

    fn strength(&self) -> Strength {
        OsStrongSource::strength_for(self.profile)
    }

    fn is_available(&self) -> bool {
        self.facility.is_available()
    }

    fn generate(&self, size: usize) -> Vec<u8> {
        let mut buf = vec![0u8; size];
        if !self.facility.is_available() || size < 1 {
            // Deterministic degraded output: `size` zero bytes.
            return buf;
        }
        // Quality flag ignored on purpose; see the module docs.
        let _ = self.facility.fill(&mut buf);
        buf
    }
}

/// `rand` ecosystem adapter.
///
/// Deliberately not `CryptoRng`: the degraded path emits zeros, which a
/// marker for cryptographic output must not promise.
impl<F: SecureFacility> rand::RngCore for OsStrongSource<F> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        // Pre-zero so a missing facility or weak fill leaves the same
        // sentinel `generate` produces.
        dst.fill(0);
        if self.facility.is_available() {
            let _ = self.facility.fill(dst);
        }
    }
}

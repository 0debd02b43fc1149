//! Startup-resolved facts about this environment's secure generator.
//!
//! The strength rule for OS-backed sources turns on a single question: did
//! this environment's generator ever silently fall back to a predictable
//! pool? On Linux the fix line is the `getrandom(2)` syscall, shipped in
//! kernel 3.17 — before it, userspace fell back to reading an urandom pool
//! that may not have been seeded yet. Other platforms' secure generators
//! never carried the fallback.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Kernel release that shipped `getrandom(2)`.
const GETRANDOM_KERNEL: (u32, u32) = (3, 17);

/// Environment facts resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityProfile {
    /// True when the secure generator in this environment is known to have
    /// used a predictable fallback.
    pub fallback_defect: bool,
}

impl FacilityProfile {
    /// Profile of an environment running a fixed generator.
    pub const FIXED: Self = Self {
        fallback_defect: false,
    };

    /// Profile of an environment that predates the fix.
    pub const LEGACY: Self = Self {
        fallback_defect: true,
    };

    /// Detect the profile for the current process. Resolved once and cached;
    /// repeated calls return the same value.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<FacilityProfile> = OnceLock::new();
        *DETECTED.get_or_init(Self::resolve)
    }

    fn resolve() -> Self {
        let profile = Self {
            fallback_defect: kernel_predates_getrandom(),
        };
        log::debug!(
            "facility profile resolved: fallback_defect={}",
            profile.fallback_defect
        );
        profile
    }
}

fn kernel_predates_getrandom() -> bool {
    match kernel_release().as_deref().and_then(parse_release) {
        Some(version) => version < GETRANDOM_KERNEL,
        // Unparseable release: assume a current kernel rather than penalize
        // the source for a vendor string format.
        None => false,
    }
}

/// Kernel release string from `uname(2)`, e.g. `"6.8.0-41-generic"`.
#[cfg(target_os = "linux")]
fn kernel_release() -> Option<String> {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: uname only writes into the struct we hand it.
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }
    // SAFETY: the kernel NUL-terminates utsname fields.
    let release = unsafe { std::ffi::CStr::from_ptr(uts.release.as_ptr()) };
    Some(release.to_string_lossy().into_owned())
}

/// Non-Linux secure generators never shipped the predictable fallback, so
/// there is no release to inspect.
#[cfg(not(target_os = "linux"))]
fn kernel_release() -> Option<String> {
    None
}

/// Parse `major.minor` out of a kernel release string. Tolerates vendor
/// suffixes (`"4.4.302+"`, `"5.15.167.4-microsoft-standard-WSL2"`).
fn parse_release(release: &str) -> Option<(u32, u32)> {
    let mut parts = release.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts
        .next()?
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .ok()?;
    Some((major, minor))
}

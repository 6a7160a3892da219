//! Top-level fault boundary around the editor cycle.
//!
//! Wraps a render/update pass in a guarded scope. Any uncaught fault
//! replaces the entire interactive surface with a static notice; no
//! partial-state recovery or retry is attempted.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// The static notice substituted for the editor surface on a fault.
pub const FALLBACK_NOTICE: &str = "Something went wrong.";

/// Runs an editor cycle inside the fault boundary.
///
/// On a panic the fault is logged and `Err(FALLBACK_NOTICE)` is
/// returned; the caller is expected to display the notice in place of
/// the whole editor surface.
pub fn run_guarded<T, F>(f: F) -> Result<T, &'static str>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(fault = %message, "editor fault, replacing surface with fallback notice");
            Err(FALLBACK_NOTICE)
        }
    }
}

//! Failure profiling (feature "check_profile").
//!
//! When the crate is built with `check_profile`, every recorded violation bumps a
//! thread-local counter keyed by its property name. Use [`reset_check_profile`] before a run
//! and [`get_check_profile`] after it to see which fields fail most. Run the validate_slot
//! benchmark with `--features check_profile` to print the counters to stderr.

use std::collections::HashMap;

#[cfg(feature = "check_profile")]
use std::cell::RefCell;

#[cfg(feature = "check_profile")]
thread_local!(static CHECK_PROFILE: RefCell<HashMap<&'static str, u64>> = RefCell::new(HashMap::new()));

#[cfg(feature = "check_profile")]
pub(crate) fn record_failure(property: &'static str) {
    CHECK_PROFILE.with(|p| *p.borrow_mut().entry(property).or_insert(0) += 1);
}

/// Resets the failure counters of the current thread.
#[cfg(feature = "check_profile")]
pub fn reset_check_profile() {
    CHECK_PROFILE.with(|p| p.borrow_mut().clear());
}

/// Returns the failure counters of the current thread: property name → failures.
#[cfg(feature = "check_profile")]
pub fn get_check_profile() -> HashMap<&'static str, u64> {
    CHECK_PROFILE.with(|p| p.borrow().clone())
}

#[cfg(not(feature = "check_profile"))]
/// No-op when the `check_profile` feature is not enabled.
pub fn reset_check_profile() {}

#[cfg(not(feature = "check_profile"))]
/// Returns an empty map when the `check_profile` feature is not enabled.
pub fn get_check_profile() -> HashMap<&'static str, u64> {
    HashMap::new()
}

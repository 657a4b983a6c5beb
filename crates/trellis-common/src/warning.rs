//! Warnings with colored terminal output.
//!
//! Each distinct message is printed once. The selector builder uses this to
//! report input it accepts but does not recognise (an unknown combinator,
//! for instance); the CLI uses it for non-fatal argument oddities.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Warnings we've already printed, keyed by `[component] message`.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Whether warnings are wrapped in ANSI color codes.
static COLOR: AtomicBool = AtomicBool::new(true);

/// A poisoned lock only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, BTreeSet<String>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about suspicious input (prints once per unique message).
///
/// # Example
/// ```
/// use trellis_common::warning::warn_once;
///
/// warn_once("CSS", "unrecognized combinator '>>' passed to combine");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if !warned().insert(key) {
        return;
    }

    if COLOR.load(Ordering::Relaxed) {
        eprintln!("{YELLOW}[Trellis {component}] ⚠ {message}{RESET}");
    } else {
        eprintln!("[Trellis {component}] warning: {message}");
    }
}

/// Turn colored warning output on or off (the CLI's `--no-color`).
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Every warning recorded since the last [`clear_warnings`], sorted, in
/// `[component] message` form.
#[must_use]
pub fn recorded_warnings() -> Vec<String> {
    warned().iter().cloned().collect()
}

/// Forget all recorded warnings so they can be printed again.
pub fn clear_warnings() {
    warned().clear();
}

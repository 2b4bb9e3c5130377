//! Warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet that repeats the same oddity in
//! every injected fragment produces a single line on stderr. Used by the CSS
//! parser and the stylesheet filter to report input they recover from or drop.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about recovered or dropped input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "skipping @keyframes rule");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[stylesnap {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if `warn_once` has already reported this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call between independent snapshot runs)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when finished
//! - Logs `{name}_INCOMPLETE` if dropped unfinished (early `?` return)

use std::cell::Cell;
use std::time::Instant;

use tracing::{error, info, warn};

/// A scope that logs start and completion of one session phase
///
/// ```ignore
/// let scope = ObservationScope::new("CONNECT");
/// // ... do work ...
/// scope.complete_with_fields(&[("elapsed_ms", "12")]);
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    completed: Cell<bool>,
    fields: Vec<(&'a str, String)>,
}

impl<'a> ObservationScope<'a> {
    /// Create a new observation scope, logging `{name}_BEGIN`
    pub fn new(name: &'a str) -> Self {
        Self::with_fields(name, &[])
    }

    /// Create a new observation scope with fields repeated on completion
    pub fn with_fields(name: &'a str, fields: &[(&'a str, &str)]) -> Self {
        let fields: Vec<(&'a str, String)> =
            fields.iter().map(|(k, v)| (*k, v.to_string())).collect();
        info!(event = %format!("{}_BEGIN", name), fields = %render(&fields));

        Self {
            name,
            completed: Cell::new(false),
            fields,
        }
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Mark the scope as successfully completed with additional fields
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        let mut all = self.fields.clone();
        all.extend(extra_fields.iter().map(|(k, v)| (*k, v.to_string())));
        info!(event = %format!("{}_COMPLETE", self.name), fields = %render(&all));
    }

    /// Mark the scope as failed with a reason
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        error!(event = %format!("{}_FAILED", self.name), reason);
    }

    /// Check if the scope has been completed
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            warn!(
                event = %format!("{}_INCOMPLETE", self.name),
                reason = "scope dropped without completion"
            );
        }
    }
}

/// Fields sorted by key for deterministic output
fn render(fields: &[(&str, String)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A simple duration timer for the "Took Nms" lines
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed whole milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_starts_incomplete() {
        let scope = ObservationScope::new("TEST");
        assert!(!scope.is_completed());
        scope.complete();
    }

    #[test]
    fn test_scope_complete_with_extra_fields() {
        let scope = ObservationScope::with_fields("TEST", &[("query", "5")]);
        scope.complete_with_fields(&[("documents", "3")]);
    }

    #[test]
    fn test_scope_fail() {
        let scope = ObservationScope::new("TEST");
        scope.fail("something went wrong");
    }

    #[test]
    fn test_scope_drop_without_complete() {
        let scope = ObservationScope::new("TEST");
        drop(scope);
    }

    #[test]
    fn test_render_sorts_fields() {
        let fields = vec![("b", "2".to_string()), ("a", "1".to_string())];
        assert_eq!(render(&fields), "a=1 b=2");
    }

    #[test]
    fn test_timer_is_monotonic() {
        let timer = Timer::new();
        let first = timer.elapsed_ms();
        assert!(timer.elapsed_ms() >= first);
    }
}

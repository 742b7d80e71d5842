//! Store trait for the in-process short link map.

use crate::domain::entities::ShortLink;

/// Interface for the shared short link map.
///
/// The store owns all entries for the process lifetime; nothing persists
/// across restarts and no operation removes an entry. Each method is a
/// single atomic step with respect to concurrent callers, which is what
/// makes the collision check in `insert` and the click counting in
/// `resolve` safe without any coordination above the store.
///
/// Methods are synchronous: the store never does I/O, and the critical
/// sections are short enough to run inline inside async handlers.
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Inserts a new mapping unless the code is already taken.
    ///
    /// Returns `false` when the code exists; the existing entry is left
    /// untouched. The check and the insert are one atomic step.
    fn insert(&self, code: &str, long_url: &str) -> bool;

    /// Returns the long URL for a code and increments its click counter,
    /// as a single atomic step. Returns `None` for unknown codes.
    fn resolve(&self, code: &str) -> Option<String>;

    /// Returns a snapshot of the entry for a code, if present.
    fn stats(&self, code: &str) -> Option<ShortLink>;
}

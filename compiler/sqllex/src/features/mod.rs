//! Enabled feature identifiers for feature-gated comments.
//!
//! `/*T![auto_rand] AUTO_RANDOM(5) */` is only scanned as SQL when one of
//! the listed ids is enabled; otherwise the whole comment is skipped. The
//! set of enabled ids is a [`FeatureSet`] built by the embedding
//! application and shared with scanners through
//! [`ScannerConfig`](crate::ScannerConfig) as an `Arc<FeatureSet>`, so it
//! cannot change under a running scanner.

use rustc_hash::FxHashSet;
use tracing::debug;

/// `AUTO_RANDOM` column attribute.
pub const AUTO_RANDOM: &str = "auto_rand";
/// `AUTO_ID_CACHE` table option.
pub const AUTO_ID_CACHE: &str = "auto_id_cache";
/// `AUTO_RANDOM_BASE` table option.
pub const AUTO_RANDOM_BASE: &str = "auto_rand_base";
/// `CLUSTERED` / `NONCLUSTERED` primary keys.
pub const CLUSTERED_INDEX: &str = "clustered_index";
/// `FORCE` in `ALTER TABLE ... AUTO_INCREMENT`.
pub const FORCE_AUTO_INC: &str = "force_inc";

/// Set of enabled feature identifiers. Grows only through
/// [`register`](Self::register).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSet {
    ids: FxHashSet<String>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable `id`. Returns `false` if it was already enabled.
    pub fn register(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        debug!(feature = %id, "feature registered");
        self.ids.insert(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// `true` if at least one of `ids` is enabled.
    pub fn contains_any<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        ids.iter().any(|id| self.contains(id.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for FeatureSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for id in iter {
            self.register(id);
        }
    }
}

#[cfg(test)]
mod tests;

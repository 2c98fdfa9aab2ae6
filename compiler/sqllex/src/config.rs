//! Scanner configuration.

use std::sync::Arc;

use crate::features::FeatureSet;
use crate::sql_mode::SqlMode;

/// Everything that changes how a [`Scanner`](crate::Scanner) classifies
/// text, fixed at construction.
///
/// The feature set is shared: many scanners (one per connection, say) can
/// hold the same `Arc<FeatureSet>`.
#[derive(Clone, Debug)]
pub struct ScannerConfig {
    pub sql_mode: SqlMode,
    pub features: Arc<FeatureSet>,
    /// Whether window-function names (`OVER`, `RANK`, ...) are keywords.
    pub window_functions: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            sql_mode: SqlMode::empty(),
            features: Arc::default(),
            window_functions: true,
        }
    }
}

impl ScannerConfig {
    #[must_use]
    pub fn with_sql_mode(mut self, sql_mode: SqlMode) -> Self {
        self.sql_mode = sql_mode;
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: Arc<FeatureSet>) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_window_functions(mut self, enabled: bool) -> Self {
        self.window_functions = enabled;
        self
    }
}

//! tetrad-norms
//!
//! Reference-population statistics for standardization. Loads the
//! respondent-level reference dataset from CSV and derives per-scale
//! summaries; degrades to built-in summary constants when the file is
//! missing or unusable.

pub mod error;
pub mod fallback;
pub mod table;

pub use error::NormError;
pub use fallback::FallbackNorms;
pub use table::NormTable;

use std::path::Path;
use std::sync::Arc;

use tetrad_scoring::source::StatisticsSource;

/// Load the reference dataset at `path`, falling back to the built-in
/// summary constants when it cannot be used. Degradation is logged, never
/// fatal: scoring keeps working without the file.
pub fn load_or_fallback(path: &Path) -> Arc<dyn StatisticsSource> {
    match NormTable::from_path(path) {
        Ok(table) => {
            tracing::info!(
                path = %path.display(),
                rows = table.rows(),
                "loaded reference norms"
            );
            Arc::new(table)
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "reference norms unavailable, using fallback constants"
            );
            Arc::new(FallbackNorms::new())
        }
    }
}

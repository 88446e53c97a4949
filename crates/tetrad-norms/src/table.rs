//! The dataset-backed reference population.

use std::path::Path;

use tetrad_core::models::scale::Scale;
use tetrad_core::models::statistics::{Statistics, StatisticsOrigin};
use tetrad_scoring::source::StatisticsSource;
use tetrad_scoring::stats;

use crate::error::NormError;

/// Leading metadata columns (respondent id, demographics, collection
/// fields) before the first item column in the reference dataset.
const ITEM_COLUMN_OFFSET: usize = 7;

/// Reference norms built from the raw respondent-level dataset.
///
/// Each usable row contributes one raw sum per scale; summary statistics
/// are derived from those sums once, at load time. The table is immutable
/// afterwards.
pub struct NormTable {
    samples: Samples,
    statistics: Statistics,
}

#[derive(Default)]
struct Samples {
    mach: Vec<u32>,
    narc: Vec<u32>,
    psyc: Vec<u32>,
    sadi: Vec<u32>,
}

impl Samples {
    fn get(&self, scale: Scale) -> &[u32] {
        match scale {
            Scale::Mach => &self.mach,
            Scale::Narc => &self.narc,
            Scale::Psyc => &self.psyc,
            Scale::Sadi => &self.sadi,
        }
    }
}

struct RowSums {
    mach: u32,
    narc: u32,
    psyc: u32,
    sadi: u32,
}

impl NormTable {
    /// Read and parse the reference dataset at `path`.
    pub fn from_path(path: &Path) -> Result<Self, NormError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv(&text)
    }

    /// Parse reference data from CSV text: a header row, then one row per
    /// respondent with item values at fixed columns in catalog order.
    ///
    /// Rows that are short or carry unusable item cells (non-numeric, or
    /// too large to sum) are skipped (logged at debug), matching how the
    /// dataset is curated upstream; a file where no row survives is
    /// [`NormError::Empty`].
    pub fn from_csv(text: &str) -> Result<Self, NormError> {
        let mut lines = text.lines();
        if lines.next().is_none() {
            return Err(NormError::Malformed {
                line: 1,
                reason: "missing header row".to_owned(),
            });
        }

        let mut samples = Samples::default();
        for (index, line) in lines.enumerate() {
            // 1-based and counting the header.
            let line_number = index + 2;
            if line.trim().is_empty() {
                continue;
            }
            match parse_row(line) {
                Ok(row) => {
                    samples.mach.push(row.mach);
                    samples.narc.push(row.narc);
                    samples.psyc.push(row.psyc);
                    samples.sadi.push(row.sadi);
                }
                Err(reason) => {
                    tracing::debug!(line = line_number, reason, "skipping norm dataset row");
                }
            }
        }

        if samples.mach.is_empty() {
            return Err(NormError::Empty);
        }

        let statistics = Statistics::from_fn(|scale| stats::describe(samples.get(scale)));
        Ok(Self {
            samples,
            statistics,
        })
    }

    /// Number of respondent rows that contributed to the norms.
    pub fn rows(&self) -> usize {
        self.samples.mach.len()
    }
}

impl StatisticsSource for NormTable {
    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn origin(&self) -> StatisticsOrigin {
        StatisticsOrigin::Reference
    }

    fn scale_samples(&self, scale: Scale) -> Option<&[u32]> {
        Some(self.samples.get(scale))
    }
}

/// Sum one respondent row into per-scale raw scores. Item columns follow
/// the catalog's dataset order, scale by scale, starting at
/// [`ITEM_COLUMN_OFFSET`].
fn parse_row(line: &str) -> Result<RowSums, String> {
    let fields: Vec<&str> = line.split(',').collect();
    let expected = ITEM_COLUMN_OFFSET + tetrad_inventory::dataset_columns().len();
    if fields.len() < expected {
        return Err(format!(
            "{} columns, expected at least {expected}",
            fields.len()
        ));
    }

    let mut column = ITEM_COLUMN_OFFSET;
    let mut sums = [0u32; 4];
    for (slot, scale) in Scale::ALL.iter().enumerate() {
        for _ in 0..scale.item_count() {
            let field = fields[column].trim();
            let value: u32 = field
                .parse()
                .map_err(|_| format!("column {column}: not an item value: {field:?}"))?;
            sums[slot] = sums[slot]
                .checked_add(value)
                .ok_or_else(|| format!("column {column}: item values overflow"))?;
            column += 1;
        }
    }

    Ok(RowSums {
        mach: sums[0],
        narc: sums[1],
        psyc: sums[2],
        sadi: sums[3],
    })
}

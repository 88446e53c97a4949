use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Answers collected so far, keyed by item id.
///
/// Values are 1–5 Likert agreement ratings. Items may be re-answered before
/// submission; completeness against the catalog is checked at scoring time,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet(BTreeMap<String, u8>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any earlier one for the same item.
    /// Rejects values outside the 5-point scale.
    pub fn insert(&mut self, item_id: impl Into<String>, value: u8) -> Result<(), CoreError> {
        let item_id = item_id.into();
        if !(1..=5).contains(&value) {
            return Err(CoreError::LikertOutOfRange { item_id, value });
        }
        self.0.insert(item_id, value);
        Ok(())
    }

    pub fn get(&self, item_id: &str) -> Option<u8> {
        self.0.get(item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(id, v)| (id.as_str(), *v))
    }

    /// Check every stored value against the 1–5 scale.
    ///
    /// Deserialized sets bypass [`insert`](Self::insert), so boundary code
    /// runs this before handing the set to the scoring engine.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (id, value) in &self.0 {
            if !(1..=5).contains(value) {
                return Err(CoreError::LikertOutOfRange {
                    item_id: id.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

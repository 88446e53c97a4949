use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tetrad_core::models::scale::Scale;

/// One inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Stable id, also the item's column name in the reference dataset.
    pub id: String,
    pub scale: Scale,
    /// Fixed presentation order, 1-based.
    pub order: u32,
    pub text: String,
}

/// One anchor of the 5-point agreement scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikertOption {
    pub value: u8,
    pub label: String,
}

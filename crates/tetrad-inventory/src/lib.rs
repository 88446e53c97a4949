//! tetrad-inventory
//!
//! The Dark Tetrad item catalog. Pure data — 23 Likert items tagged with
//! their scale and fixed presentation order, plus the response anchors.
//! Defined once at process start and never mutated.

pub mod catalog;
pub mod item;

use tetrad_core::models::response::ResponseSet;
use tetrad_core::models::scale::Scale;

pub use item::{Item, LikertOption};

/// All 23 inventory items in presentation order.
pub fn items() -> &'static [Item] {
    catalog::items()
}

/// The five response anchors of the agreement scale.
pub fn likert_options() -> &'static [LikertOption] {
    catalog::likert_options()
}

/// Items belonging to one scale, ascending by item number.
pub fn items_for(scale: Scale) -> impl Iterator<Item = &'static Item> {
    items().iter().filter(move |item| item.scale == scale)
}

/// Look up an item by id.
pub fn find_item(id: &str) -> Option<&'static Item> {
    items().iter().find(|item| item.id == id)
}

/// Item ids in the reference-dataset column order: scales in `Scale::ALL`
/// order, items ascending within each scale.
pub fn dataset_columns() -> Vec<&'static str> {
    Scale::ALL
        .iter()
        .flat_map(|&scale| items_for(scale).map(|item| item.id.as_str()))
        .collect()
}

/// Catalog items the response set has no answer for, in presentation order.
///
/// An empty result means the set is complete and ready for scoring.
pub fn missing_item_ids(responses: &ResponseSet) -> Vec<&'static str> {
    items()
        .iter()
        .filter(|item| responses.get(&item.id).is_none())
        .map(|item| item.id.as_str())
        .collect()
}

use axum::Json;
use serde::Serialize;

use tetrad_core::models::scale::Scale;
use tetrad_inventory::{Item, LikertOption};

#[derive(Serialize)]
pub struct ScaleInfo {
    id: Scale,
    name: &'static str,
    description: &'static str,
    item_count: u32,
    min_raw: u32,
    max_raw: u32,
}

/// Everything a client needs to render the questionnaire.
#[derive(Serialize)]
pub struct Inventory {
    items: &'static [Item],
    options: &'static [LikertOption],
    scales: Vec<ScaleInfo>,
}

pub async fn get_inventory() -> Json<Inventory> {
    let scales = Scale::ALL
        .iter()
        .map(|&scale| {
            let (min_raw, max_raw) = scale.raw_range();
            ScaleInfo {
                id: scale,
                name: scale.name(),
                description: scale.description(),
                item_count: scale.item_count(),
                min_raw,
                max_raw,
            }
        })
        .collect();

    Json(Inventory {
        items: tetrad_inventory::items(),
        options: tetrad_inventory::likert_options(),
        scales,
    })
}

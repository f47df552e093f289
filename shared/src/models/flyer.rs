//! Flyer Model

use serde::{Deserialize, Serialize};

use super::Status;

/// Flyer entity
///
/// `finalPrice` is derived from `price` and `discountPercentage` on every
/// write; `storeId` is a copy of the owning collection's store.
/// Whether a flyer is live is never stored, see the activation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flyer {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub discount_percentage: f64,
    pub final_price: f64,
    pub collection_id: String,
    pub store_id: String,
    pub start_date: i64,
    pub end_date: i64,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create flyer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerCreate {
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    pub collection_id: String,
    pub start_date: i64,
    pub end_date: i64,
    pub status: Option<Status>,
}

/// Update flyer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub collection_id: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub status: Option<Status>,
}

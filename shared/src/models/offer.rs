//! Offer Model

use serde::{Deserialize, Serialize};

/// Reward offer entity
///
/// Offers are independent of the ledger: redeeming against an offer is
/// recorded through the redemption endpoints, matched by description only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub points_required: i64,
    pub active: bool,
    /// ISO date string, null = never expires
    pub expiry_date: Option<String>,
    pub restaurant_name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCreate {
    pub title: String,
    pub description: String,
    pub points_required: i64,
    pub active: Option<bool>,
    pub expiry_date: Option<String>,
    pub restaurant_name: String,
}

/// Update offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub points_required: Option<i64>,
    pub active: Option<bool>,
    pub expiry_date: Option<String>,
    pub restaurant_name: Option<String>,
}

//! Redemption & Ledger Statistics Models

use serde::{Deserialize, Serialize};

/// Redemptions above this many points count as high-value in reports
pub const HIGH_VALUE_THRESHOLD: i64 = 150;

/// Redemption history row (append-only; no update or delete exists)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Redemption {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_name: String,
    pub points: i64,
    pub description: Option<String>,
    pub redeemed_at: i64,
}

/// `POST /api/users/redeem` payload — records a redemption event without
/// touching the balance (the customer-facing reward flow)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRecord {
    pub user_email: String,
    pub restaurant_name: String,
    pub points: i64,
    pub description: Option<String>,
}

/// Redemption joined with customer info, for the restaurant dashboard table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RedemptionDetail {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub points: i64,
    pub description: Option<String>,
    pub redeemed_at: i64,
    pub is_high_value: bool,
}

/// Aggregate ledger statistics for one restaurant, recomputed per request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    /// Sum of live balances plus everything ever redeemed — the closest
    /// available proxy for "total points issued" (there is no earn log)
    pub total_points_issued: i64,
    pub total_redemptions: i64,
    /// Users that ever touched a balance at this restaurant
    pub total_users: i64,
    /// Users currently holding a nonzero balance
    pub users_with_balance: i64,
    pub total_users_redeemed: i64,
    pub high_value_redemptions: i64,
    pub average_points_per_user: i64,
}

//! Restaurant Model

use serde::{Deserialize, Serialize};

use super::user::UserType;

/// Restaurant visibility status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum RestaurantStatus {
    Active,
    Inactive,
}

impl Default for RestaurantStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Restaurant entity (餐厅)
///
/// Users and offers reference restaurants by name string; there is no
/// foreign key from the ledger to this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: RestaurantStatus,
    pub city: Option<String>,
    /// URL of the custom loyalty-card background image
    pub card_image: Option<String>,
    pub logo: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    pub name: String,
    pub email: String,
    pub status: Option<RestaurantStatus>,
    pub city: Option<String>,
}

/// Update restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<RestaurantStatus>,
    pub city: Option<String>,
    pub card_image: Option<String>,
    pub logo: Option<String>,
}

/// Customer summary row for the restaurant dashboard
/// (`GET /api/restaurant/{name}/customers`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantCustomer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    /// Balance held at this restaurant
    pub total_points: i64,
    pub join_date: i64,
    pub status: String,
}

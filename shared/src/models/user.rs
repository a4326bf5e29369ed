//! User Account Model

use serde::{Deserialize, Serialize};

/// Account role (账户角色)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum UserType {
    Customer,
    Admin,
    Restaurant,
    Scanner,
}

impl Default for UserType {
    fn default() -> Self {
        Self::Customer
    }
}

/// User entity
///
/// The password is write-only: it is never serialized into API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub user_type: UserType,
    /// Base64 QR image, provisioned by the (external) QR service
    pub qr_code: Option<String>,
    /// Identifier embedded in the QR code, used for scan lookups
    pub qr_content: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegister {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: Option<String>,
    pub user_type: Option<UserType>,
}

/// Per-(user, restaurant) point balance row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PointBalance {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_name: String,
    pub points: i64,
    pub updated_at: i64,
}

/// Wire shape of one balance entry: `{ restaurantName, points }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePoints {
    pub restaurant_name: String,
    pub points: i64,
}

/// One entry of a points-update request; fields are optional so the handler
/// can answer missing data with the dashboard's expected 400 message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsUpdateEntry {
    pub restaurant_name: Option<String>,
    pub points: Option<i64>,
}

/// `PUT /api/user/points/{id}` body:
/// `{ "availablePoints": [{ "points": n, "restaurantName": s }], "type": "add"|"redeem" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsUpdate {
    #[serde(default)]
    pub available_points: Vec<PointsUpdateEntry>,
    #[serde(rename = "type", default)]
    pub tx_type: Option<String>,
}

/// Full user document as the dashboards consume it: the account plus its
/// embedded balance and redemption views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(flatten)]
    pub user: User,
    pub available_points: Vec<AvailablePoints>,
    pub redeem_points: Vec<super::redemption::Redemption>,
}

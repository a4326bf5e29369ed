//! Homepage Slider Model (admin-managed content)

use serde::{Deserialize, Serialize};

/// Slider placement on the customer homepage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum SliderType {
    Top,
    Bottom,
}

/// Slider entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Slider {
    pub id: i64,
    pub title: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i64,
    #[serde(rename = "type")]
    pub slider_type: SliderType,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create slider payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderCreate {
    pub title: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,
    #[serde(rename = "type")]
    pub slider_type: SliderType,
}

/// Update slider payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderUpdate {
    pub title: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,
    #[serde(rename = "type")]
    pub slider_type: Option<SliderType>,
}

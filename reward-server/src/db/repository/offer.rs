//! Offer Repository

use super::{RepoError, RepoResult};
use shared::models::{Offer, OfferCreate, OfferUpdate};
use sqlx::SqlitePool;

const OFFER_SELECT: &str = "SELECT id, title, description, points_required, active, expiry_date, restaurant_name, created_at, updated_at FROM offer";

/// List offers, optionally filtered by exact restaurant name
pub async fn find_all(
    pool: &SqlitePool,
    restaurant_name: Option<&str>,
) -> RepoResult<Vec<Offer>> {
    let rows = match restaurant_name {
        Some(name) => {
            let sql = format!(
                "{} WHERE restaurant_name = ? ORDER BY created_at DESC",
                OFFER_SELECT
            );
            sqlx::query_as::<_, Offer>(&sql)
                .bind(name)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{} ORDER BY created_at DESC", OFFER_SELECT);
            sqlx::query_as::<_, Offer>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Offer>> {
    let sql = format!("{} WHERE id = ?", OFFER_SELECT);
    let row = sqlx::query_as::<_, Offer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: OfferCreate) -> RepoResult<Offer> {
    if data.points_required <= 0 {
        return Err(RepoError::Validation(
            "pointsRequired must be a positive amount".into(),
        ));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let active = data.active.unwrap_or(true);
    sqlx::query(
        "INSERT INTO offer (id, title, description, points_required, active, expiry_date, restaurant_name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.points_required)
    .bind(active)
    .bind(&data.expiry_date)
    .bind(&data.restaurant_name)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create offer".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: OfferUpdate) -> RepoResult<Offer> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE offer SET title = COALESCE(?1, title), description = COALESCE(?2, description), points_required = COALESCE(?3, points_required), active = COALESCE(?4, active), expiry_date = COALESCE(?5, expiry_date), restaurant_name = COALESCE(?6, restaurant_name), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.points_required)
    .bind(data.active)
    .bind(&data.expiry_date)
    .bind(&data.restaurant_name)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Offer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Offer {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM offer WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

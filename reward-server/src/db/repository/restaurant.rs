//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::{
    Restaurant, RestaurantCreate, RestaurantCustomer, RestaurantStatus, RestaurantUpdate,
};
use sqlx::SqlitePool;

const RESTAURANT_SELECT: &str = "SELECT id, name, email, status, city, card_image, logo, created_at, updated_at FROM restaurant";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Restaurant>> {
    let sql = format!("{} ORDER BY created_at DESC", RESTAURANT_SELECT);
    let rows = sqlx::query_as::<_, Restaurant>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let sql = format!("{} WHERE id = ?", RESTAURANT_SELECT);
    let row = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Restaurant>> {
    let sql = format!("{} WHERE name = ?", RESTAURANT_SELECT);
    let row = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Restaurant>> {
    let sql = format!("{} WHERE email = ?", RESTAURANT_SELECT);
    let row = sqlx::query_as::<_, Restaurant>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: RestaurantCreate) -> RepoResult<Restaurant> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let status = data.status.unwrap_or(RestaurantStatus::Active);
    sqlx::query(
        "INSERT INTO restaurant (id, name, email, status, city, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(status)
    .bind(&data.city)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: RestaurantUpdate,
) -> RepoResult<Restaurant> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE restaurant SET name = COALESCE(?1, name), email = COALESCE(?2, email), status = COALESCE(?3, status), city = COALESCE(?4, city), card_image = COALESCE(?5, card_image), logo = COALESCE(?6, logo), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(data.status)
    .bind(&data.city)
    .bind(&data.card_image)
    .bind(&data.logo)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM restaurant WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn update_card_image(
    pool: &SqlitePool,
    id: i64,
    card_image: Option<&str>,
) -> RepoResult<Restaurant> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE restaurant SET card_image = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(card_image)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
}

/// Customers holding a balance at this restaurant, for the dashboard table
pub async fn customers_for(
    pool: &SqlitePool,
    restaurant_name: &str,
) -> RepoResult<Vec<RestaurantCustomer>> {
    let rows = sqlx::query_as::<_, RestaurantCustomer>(
        "SELECT u.id, u.name, u.email, u.phone, u.user_type, pb.points AS total_points, u.created_at AS join_date, 'active' AS status FROM point_balance pb JOIN user u ON u.id = pb.user_id WHERE pb.restaurant_name = ? ORDER BY pb.points DESC",
    )
    .bind(restaurant_name)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

//! Slider Repository (admin homepage content)

use super::{RepoError, RepoResult};
use shared::models::{Slider, SliderCreate, SliderType, SliderUpdate};
use sqlx::SqlitePool;

const SLIDER_SELECT: &str =
    "SELECT id, title, image, sort_order, slider_type, created_at, updated_at FROM slider";

pub async fn find_by_type(pool: &SqlitePool, slider_type: SliderType) -> RepoResult<Vec<Slider>> {
    let sql = format!(
        "{} WHERE slider_type = ? ORDER BY sort_order",
        SLIDER_SELECT
    );
    let rows = sqlx::query_as::<_, Slider>(&sql)
        .bind(slider_type)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Slider>> {
    let sql = format!("{} WHERE id = ?", SLIDER_SELECT);
    let row = sqlx::query_as::<_, Slider>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: SliderCreate) -> RepoResult<Slider> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let sort_order = data.sort_order.unwrap_or(0);
    sqlx::query(
        "INSERT INTO slider (id, title, image, sort_order, slider_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.image)
    .bind(sort_order)
    .bind(data.slider_type)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create slider".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SliderUpdate) -> RepoResult<Slider> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE slider SET title = COALESCE(?1, title), image = COALESCE(?2, image), sort_order = COALESCE(?3, sort_order), slider_type = COALESCE(?4, slider_type), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.title)
    .bind(&data.image)
    .bind(data.sort_order)
    .bind(data.slider_type)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Slider {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Slider {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM slider WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

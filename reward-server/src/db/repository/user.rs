//! User Repository

use super::{RepoError, RepoResult, ledger};
use shared::models::{AvailablePoints, User, UserDocument, UserRegister, UserType};
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, name, email, phone, password, user_type, qr_code, qr_content, created_at, updated_at FROM user";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let sql = format!("{} ORDER BY created_at DESC", USER_SELECT);
    let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE id = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE email = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE name = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_phone(pool: &SqlitePool, phone: &str) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE phone = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(phone)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Scanner lookup: the scanned payload may be a QR identifier, an email or a
/// phone number
pub async fn find_by_scan(pool: &SqlitePool, scanned: &str) -> RepoResult<Option<User>> {
    let sql = format!(
        "{} WHERE qr_content = ?1 OR email = ?1 OR phone = ?1",
        USER_SELECT
    );
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(scanned)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    data: &UserRegister,
    qr_content: &str,
) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let user_type = data.user_type.unwrap_or(UserType::Customer);
    sqlx::query(
        "INSERT INTO user (id, name, email, phone, password, user_type, qr_content, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.password)
    .bind(user_type)
    .bind(qr_content)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Assemble the full document the dashboards consume: account plus embedded
/// balance and redemption views
pub async fn load_document(pool: &SqlitePool, user: User) -> RepoResult<UserDocument> {
    let available_points = ledger::balances_for_user(pool, user.id)
        .await?
        .into_iter()
        .map(|b| AvailablePoints {
            restaurant_name: b.restaurant_name,
            points: b.points,
        })
        .collect();
    let redeem_points = ledger::redemptions_by_user(pool, user.id).await?;

    Ok(UserDocument {
        user,
        available_points,
        redeem_points,
    })
}

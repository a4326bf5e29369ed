//! Points Ledger Repository
//!
//! Per-(user, restaurant) balances plus the append-only redemption history.
//!
//! Every mutation is a single SQL statement, so concurrent requests for the
//! same balance serialize on the row. `redeem` in particular is a conditional
//! decrement — the balance check and the write happen in one statement and a
//! second concurrent redeem cannot overdraw the balance.
//!
//! Two redemption paths exist on purpose and stay divergent:
//! - `redeem`: decrements the balance, writes no history (scanner flow)
//! - `record_redemption`: appends history, never touches the balance
//!   (customer reward flow)

use super::{RepoError, RepoResult};
use shared::models::redemption::HIGH_VALUE_THRESHOLD;
use shared::models::{LedgerStats, PointBalance, Redemption, RedemptionDetail};
use sqlx::SqlitePool;

const BALANCE_SELECT: &str =
    "SELECT id, user_id, restaurant_name, points, updated_at FROM point_balance";

pub async fn find_balance(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
) -> RepoResult<Option<PointBalance>> {
    let sql = format!("{} WHERE user_id = ? AND restaurant_name = ?", BALANCE_SELECT);
    let row = sqlx::query_as::<_, PointBalance>(&sql)
        .bind(user_id)
        .bind(restaurant_name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Current balance for one (user, restaurant) pair, 0 when no row exists
pub async fn balance_for(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
) -> RepoResult<i64> {
    let points = sqlx::query_scalar::<_, i64>(
        "SELECT points FROM point_balance WHERE user_id = ? AND restaurant_name = ?",
    )
    .bind(user_id)
    .bind(restaurant_name)
    .fetch_optional(pool)
    .await?;
    Ok(points.unwrap_or(0))
}

/// All balances a user holds, one entry per restaurant
pub async fn balances_for_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<PointBalance>> {
    let sql = format!(
        "{} WHERE user_id = ? ORDER BY restaurant_name",
        BALANCE_SELECT
    );
    let rows = sqlx::query_as::<_, PointBalance>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

async fn ensure_balance(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    // INSERT OR IGNORE: only inserts if the (user_id, restaurant_name) pair doesn't exist
    sqlx::query(
        "INSERT OR IGNORE INTO point_balance (user_id, restaurant_name, points, updated_at) VALUES (?1, ?2, 0, ?3)",
    )
    .bind(user_id)
    .bind(restaurant_name)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Add points to a (user, restaurant) balance, creating the row when absent
pub async fn accrue(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
    amount: i64,
) -> RepoResult<PointBalance> {
    if amount <= 0 {
        return Err(RepoError::Validation(
            "Points must be a positive amount".into(),
        ));
    }

    ensure_balance(pool, user_id, restaurant_name).await?;

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE point_balance SET points = points + ?1, updated_at = ?2 WHERE user_id = ?3 AND restaurant_name = ?4",
    )
    .bind(amount)
    .bind(now)
    .bind(user_id)
    .bind(restaurant_name)
    .execute(pool)
    .await?;

    find_balance(pool, user_id, restaurant_name)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update point balance".into()))
}

/// Spend points from a (user, restaurant) balance.
///
/// The balance check is part of the UPDATE itself (`points >= amount`), so a
/// failed redeem leaves the row untouched. No history row is written here.
pub async fn redeem(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
    amount: i64,
) -> RepoResult<PointBalance> {
    if amount <= 0 {
        return Err(RepoError::Validation(
            "Points must be a positive amount".into(),
        ));
    }

    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE point_balance SET points = points - ?1, updated_at = ?2 WHERE user_id = ?3 AND restaurant_name = ?4 AND points >= ?1",
    )
    .bind(amount)
    .bind(now)
    .bind(user_id)
    .bind(restaurant_name)
    .execute(pool)
    .await?;

    // Zero rows: either no balance row exists or it holds too few points.
    if result.rows_affected() == 0 {
        return Err(RepoError::InsufficientPoints);
    }

    find_balance(pool, user_id, restaurant_name)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update point balance".into()))
}

/// Append one redemption record. Never checks or changes the balance.
pub async fn record_redemption(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
    points: i64,
    description: Option<&str>,
) -> RepoResult<Redemption> {
    if points <= 0 {
        return Err(RepoError::Validation(
            "Points must be a positive amount".into(),
        ));
    }

    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO redemption (user_id, restaurant_name, points, description, redeemed_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
    )
    .bind(user_id)
    .bind(restaurant_name)
    .bind(points)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(Redemption {
        id,
        user_id,
        restaurant_name: restaurant_name.to_string(),
        points,
        description: description.map(|d| d.to_string()),
        redeemed_at: now,
    })
}

/// Redemption history for one user, newest first
pub async fn redemptions_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Redemption>> {
    let rows = sqlx::query_as::<_, Redemption>(
        "SELECT id, user_id, restaurant_name, points, description, redeemed_at FROM redemption WHERE user_id = ? ORDER BY redeemed_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Redemption history for one user at one restaurant, newest first
pub async fn redemptions_for_user(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_name: &str,
) -> RepoResult<Vec<Redemption>> {
    let rows = sqlx::query_as::<_, Redemption>(
        "SELECT id, user_id, restaurant_name, points, description, redeemed_at FROM redemption WHERE user_id = ? AND restaurant_name = ? ORDER BY redeemed_at DESC",
    )
    .bind(user_id)
    .bind(restaurant_name)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Flattened redemption table for one restaurant, joined with customer info,
/// newest first
pub async fn redemptions_for_restaurant(
    pool: &SqlitePool,
    restaurant_name: &str,
) -> RepoResult<Vec<RedemptionDetail>> {
    let rows = sqlx::query_as::<_, RedemptionDetail>(
        "SELECT r.id, u.name AS customer_name, u.email AS customer_email, u.phone AS customer_phone, r.points, r.description, r.redeemed_at, r.points > ?1 AS is_high_value FROM redemption r JOIN user u ON u.id = r.user_id WHERE r.restaurant_name = ?2 ORDER BY r.redeemed_at DESC, r.id DESC",
    )
    .bind(HIGH_VALUE_THRESHOLD)
    .bind(restaurant_name)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Aggregate ledger statistics for one restaurant, recomputed on every call
pub async fn stats_for(pool: &SqlitePool, restaurant_name: &str) -> RepoResult<LedgerStats> {
    let balance_sum = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(points), 0) FROM point_balance WHERE restaurant_name = ?",
    )
    .bind(restaurant_name)
    .fetch_one(pool)
    .await?;

    let total_users = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM point_balance WHERE restaurant_name = ?",
    )
    .bind(restaurant_name)
    .fetch_one(pool)
    .await?;

    let users_with_balance = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM point_balance WHERE restaurant_name = ? AND points > 0",
    )
    .bind(restaurant_name)
    .fetch_one(pool)
    .await?;

    let total_redemptions = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(points), 0) FROM redemption WHERE restaurant_name = ?",
    )
    .bind(restaurant_name)
    .fetch_one(pool)
    .await?;

    let total_users_redeemed = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(DISTINCT user_id) FROM redemption WHERE restaurant_name = ?",
    )
    .bind(restaurant_name)
    .fetch_one(pool)
    .await?;

    let high_value_redemptions = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM redemption WHERE restaurant_name = ? AND points > ?",
    )
    .bind(restaurant_name)
    .bind(HIGH_VALUE_THRESHOLD)
    .fetch_one(pool)
    .await?;

    // No earn log exists, so "issued" = what users still hold + what they
    // already spent.
    let total_points_issued = balance_sum + total_redemptions;

    let average_points_per_user = if total_users > 0 {
        (total_points_issued as f64 / total_users as f64).round() as i64
    } else {
        0
    };

    Ok(LedgerStats {
        total_points_issued,
        total_redemptions,
        total_users,
        users_with_balance,
        total_users_redeemed,
        high_value_redemptions,
        average_points_per_user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    /// In-memory pool with the real schema plus two seeded customers.
    async fn test_pool() -> SqlitePool {
        let pool = DbService::new_in_memory().await.unwrap().pool;

        sqlx::query(
            "INSERT INTO user (id, name, email, phone, password, user_type, created_at, updated_at) VALUES (1, 'Alice', 'alice@example.com', '5550000001', 'secret', 'customer', 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO user (id, name, email, phone, password, user_type, created_at, updated_at) VALUES (2, 'Bob', 'bob@example.com', '5550000002', 'secret', 'customer', 0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_accrue_creates_balance_row() {
        let pool = test_pool().await;
        let b = accrue(&pool, 1, "Cafe X", 30).await.unwrap();
        assert_eq!(b.points, 30);
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 30);
    }

    #[tokio::test]
    async fn test_accrue_accumulates() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 30).await.unwrap();
        let b = accrue(&pool, 1, "Cafe X", 20).await.unwrap();
        assert_eq!(b.points, 50);
    }

    #[tokio::test]
    async fn test_accrue_rejects_non_positive() {
        let pool = test_pool().await;
        assert!(matches!(
            accrue(&pool, 1, "Cafe X", 0).await,
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(
            accrue(&pool, 1, "Cafe X", -5).await,
            Err(RepoError::Validation(_))
        ));
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_accrue_never_duplicates_pair_row() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 10).await.unwrap();
        accrue(&pool, 1, "Cafe X", 10).await.unwrap();
        let rows = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM point_balance WHERE user_id = 1 AND restaurant_name = 'Cafe X'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_redeem_decrements() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 100).await.unwrap();
        let b = redeem(&pool, 1, "Cafe X", 40).await.unwrap();
        assert_eq!(b.points, 60);
    }

    #[tokio::test]
    async fn test_redeem_exact_balance_to_zero() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 50).await.unwrap();
        let b = redeem(&pool, 1, "Cafe X", 50).await.unwrap();
        assert_eq!(b.points, 0);
    }

    #[tokio::test]
    async fn test_redeem_insufficient_leaves_balance_unchanged() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 50).await.unwrap();
        let err = redeem(&pool, 1, "Cafe X", 70).await.unwrap_err();
        assert!(matches!(err, RepoError::InsufficientPoints));
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_redeem_without_balance_row_fails() {
        let pool = test_pool().await;
        let err = redeem(&pool, 1, "Cafe X", 10).await.unwrap_err();
        assert!(matches!(err, RepoError::InsufficientPoints));
    }

    #[tokio::test]
    async fn test_redeem_writes_no_history() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 100).await.unwrap();
        redeem(&pool, 1, "Cafe X", 40).await.unwrap();
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM redemption")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_record_redemption_ignores_balance() {
        let pool = test_pool().await;
        // No balance at all — the record still lands.
        let r = record_redemption(&pool, 1, "Cafe X", 200, Some("Free Dinner"))
            .await
            .unwrap();
        assert_eq!(r.points, 200);
        assert_eq!(r.description.as_deref(), Some("Free Dinner"));
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 0);

        let history = redemptions_for_user(&pool, 1, "Cafe X").await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_balance_for_is_idempotent() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 25).await.unwrap();
        let first = balance_for(&pool, 1, "Cafe X").await.unwrap();
        let second = balance_for(&pool, 1, "Cafe X").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_separate_restaurants_independent() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 30).await.unwrap();
        accrue(&pool, 1, "Burger Y", 80).await.unwrap();

        redeem(&pool, 1, "Burger Y", 50).await.unwrap();
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 30);
        assert_eq!(balance_for(&pool, 1, "Burger Y").await.unwrap(), 30);
    }

    #[tokio::test]
    async fn test_scan_transaction_scenario() {
        // Full scanner flow: 30 + 20 earned, overdraw rejected, exact spend ok.
        let pool = test_pool().await;
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 0);

        accrue(&pool, 1, "Cafe X", 30).await.unwrap();
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 30);

        accrue(&pool, 1, "Cafe X", 20).await.unwrap();
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 50);

        assert!(redeem(&pool, 1, "Cafe X", 70).await.is_err());
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 50);

        redeem(&pool, 1, "Cafe X", 50).await.unwrap();
        assert_eq!(balance_for(&pool, 1, "Cafe X").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_stats_counts_balances_and_history() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 100).await.unwrap();
        record_redemption(&pool, 1, "Cafe X", 50, Some("Free Coffee"))
            .await
            .unwrap();

        let stats = stats_for(&pool, "Cafe X").await.unwrap();
        assert_eq!(stats.total_points_issued, 150);
        assert_eq!(stats.total_redemptions, 50);
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.users_with_balance, 1);
        assert_eq!(stats.total_users_redeemed, 1);
        assert_eq!(stats.high_value_redemptions, 0);
        assert_eq!(stats.average_points_per_user, 150);
    }

    #[tokio::test]
    async fn test_stats_high_value_threshold_is_exclusive() {
        let pool = test_pool().await;
        record_redemption(&pool, 1, "Cafe X", 150, None).await.unwrap();
        record_redemption(&pool, 1, "Cafe X", 151, None).await.unwrap();
        record_redemption(&pool, 2, "Cafe X", 300, None).await.unwrap();

        let stats = stats_for(&pool, "Cafe X").await.unwrap();
        // 150 is not high-value, 151 and 300 are
        assert_eq!(stats.high_value_redemptions, 2);
        assert_eq!(stats.total_users_redeemed, 2);
    }

    #[tokio::test]
    async fn test_stats_empty_restaurant() {
        let pool = test_pool().await;
        let stats = stats_for(&pool, "Nowhere").await.unwrap();
        assert_eq!(stats.total_points_issued, 0);
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.average_points_per_user, 0);
    }

    #[tokio::test]
    async fn test_stats_user_with_drained_balance_still_counted() {
        let pool = test_pool().await;
        accrue(&pool, 1, "Cafe X", 50).await.unwrap();
        redeem(&pool, 1, "Cafe X", 50).await.unwrap();

        let stats = stats_for(&pool, "Cafe X").await.unwrap();
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.users_with_balance, 0);
    }

    #[tokio::test]
    async fn test_restaurant_redemptions_newest_first() {
        let pool = test_pool().await;
        record_redemption(&pool, 1, "Cafe X", 10, Some("first")).await.unwrap();
        record_redemption(&pool, 2, "Cafe X", 200, Some("second")).await.unwrap();
        record_redemption(&pool, 1, "Burger Y", 30, Some("other restaurant"))
            .await
            .unwrap();

        let rows = redemptions_for_restaurant(&pool, "Cafe X").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description.as_deref(), Some("second"));
        assert_eq!(rows[0].customer_name, "Bob");
        assert_eq!(rows[0].customer_email, "bob@example.com");
        assert!(rows[0].is_high_value);
        assert!(!rows[1].is_high_value);
    }
}

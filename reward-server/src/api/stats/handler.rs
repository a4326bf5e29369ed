//! Statistics API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::ledger;
use crate::utils::AppResult;
use shared::models::LedgerStats;

/// GET /api/restaurant/{restaurant_name}/stats - 餐厅仪表盘统计
///
/// Recomputed from the ledger on every request; there is no cached or
/// incrementally maintained copy of these numbers.
pub async fn restaurant_stats(
    State(state): State<ServerState>,
    Path(restaurant_name): Path<String>,
) -> AppResult<Json<LedgerStats>> {
    let stats = ledger::stats_for(&state.pool, &restaurant_name).await?;
    Ok(Json(stats))
}

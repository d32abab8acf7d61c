use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use clientele::domain::{customer::Customer, Entity};
use tracing::{debug, info};

use crate::{error::ApiError, AppState};

/// `GET /Customer`
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.repository.list().await?;
    debug!("顧客一覧を返却します: {}件", customers.len());
    Ok(Json(customers))
}

/// `POST /Customer`
///
/// 本文が解釈できない場合はリポジトリに触れずに拒否する。
pub async fn add_customer(
    State(state): State<AppState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(customer) = payload?;
    let id = customer.id();
    state.repository.append(customer).await?;
    info!("顧客を登録しました: ID={}", id);
    Ok(StatusCode::OK)
}

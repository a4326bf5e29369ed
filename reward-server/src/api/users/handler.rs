//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN};
use crate::utils::{AppError, AppResponse, AppResult, ErrorCode, validation};
use shared::models::{User, UserDocument, UserRegister, UserType};

/// Registration response
#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// POST /api/users/register - 注册账户
///
/// Generates the QR identifier stored in `qr_content`; rendering it into an
/// actual QR image is the QR service's job, not ours.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserRegister>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validation::validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    validation::validate_phone(&payload.phone)?;

    if let Some(confirm) = &payload.confirm_password
        && confirm != &payload.password
    {
        return Err(AppError::new(ErrorCode::PasswordMismatch));
    }

    if user::find_by_email(&state.pool, &payload.email).await?.is_some() {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
    }

    let qr_content = format!("user:{}", uuid::Uuid::new_v4());
    let user = user::create(&state.pool, &payload, &qr_content).await?;

    tracing::info!(user_id = user.id, email = %user.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered".to_string(),
            user,
        }),
    ))
}

/// User list response
#[derive(Serialize)]
pub struct UsersListResponse {
    pub success: bool,
    pub users: Vec<User>,
}

/// GET /api/users - 所有账户（不含密码）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<UsersListResponse>> {
    let users = user::find_all(&state.pool).await?;
    Ok(Json(UsersListResponse {
        success: true,
        users,
    }))
}

/// Profile subset returned to the customer app
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    pub qr_code: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            user_type: user.user_type,
            qr_code: user.qr_code.clone(),
        }
    }
}

/// User data response
#[derive(Serialize)]
pub struct UserDataResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// GET /api/user-data/{email} - 按邮箱取账户资料
pub async fn user_data(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserDataResponse>> {
    let user = user::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found."))?;

    Ok(Json(UserDataResponse {
        success: true,
        user: UserProfile::from(&user),
    }))
}

/// QR lookup response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQrResponse {
    pub success: bool,
    pub qr_code: Option<String>,
    pub user: UserProfile,
}

/// GET /api/user-qr/{email} - 账户的 QR 数据
pub async fn user_qr(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserQrResponse>> {
    let user = user::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found."))?;

    Ok(Json(UserQrResponse {
        success: true,
        qr_code: user.qr_code.clone(),
        user: UserProfile::from(&user),
    }))
}

/// GET /api/customer/by-phone/{phone} - 扫码端按手机号查客户
pub async fn by_phone(
    State(state): State<ServerState>,
    Path(phone): Path<String>,
) -> AppResult<Json<AppResponse<UserDocument>>> {
    let user = user::find_by_phone(&state.pool, &phone)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::QrNotRecognized))?;

    let document = user::load_document(&state.pool, user).await?;
    Ok(Json(AppResponse::success(document)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanQrPayload {
    pub qr_code_data: Option<String>,
}

/// POST /api/customer/scan-qr - 扫码匹配客户
///
/// The scanned payload may be the QR identifier, an email or a phone number.
pub async fn scan_qr(
    State(state): State<ServerState>,
    Json(payload): Json<ScanQrPayload>,
) -> AppResult<Json<AppResponse<UserDocument>>> {
    let scanned = payload
        .qr_code_data
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "QR code data required")
        })?;

    let user = user::find_by_scan(&state.pool, &scanned)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::QrNotRecognized))?;

    tracing::info!(user_id = user.id, "QR scan matched");

    let document = user::load_document(&state.pool, user).await?;
    Ok(Json(AppResponse::success(document)))
}

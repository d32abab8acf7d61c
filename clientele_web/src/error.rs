use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clientele::domain::DataAccessError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// APIエラー
#[derive(Error, Debug)]
pub enum ApiError {
    /// JSONとしては正しいが顧客として解釈できない
    #[error("{0}")]
    Validation(String),
    /// JSONとして解釈できない
    #[error("{0}")]
    Serialization(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    DataAccess(#[from] DataAccessError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Serialization(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::DataAccess(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Serialization(_) => "serialization_error",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::DataAccess(_) => "data_access_error",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        match value {
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::Serialization(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => {
                ApiError::UnsupportedMediaType(e.body_text())
            }
            e => ApiError::Serialization(e.body_text()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::DataAccess(e) => error!("データアクセスエラー: {}", e),
            e => warn!("リクエストを拒否しました: {}", e),
        }
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

//! 请求提取器
//!
//! 包装 axum 内置提取器，拒绝时返回 [`AppError`]，响应体保持统一的
//! `ApiResponse` 格式，而不是 axum 默认的纯文本。
//!
//! | 提取器 | 失败时的错误码 |
//! |--------|----------------|
//! | [`ApiPath`] | InvalidFormat |
//! | [`ApiQuery`] | InvalidFormat |
//! | [`OptionalJson`] | InvalidRequest (读取失败) / InvalidFormat (Content-Type) / ValidationFailed (反序列化) |

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use http::header;
use http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::{AppError, ErrorCode};

/// 路径参数，例如 `/api/shops/{id}`
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(
                AppError::with_message(ErrorCode::InvalidFormat, rejection.body_text())
                    .with_detail("source", "path"),
            ),
        }
    }
}

/// 查询参数，例如 `?q=&area=`
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(
                AppError::with_message(ErrorCode::InvalidFormat, rejection.body_text())
                    .with_detail("source", "query"),
            ),
        }
    }
}

/// 可选的 JSON 请求体
///
/// 空请求体 (或只有空白) 视为 `T::default()`；非空时 Content-Type 缺省
/// 按 JSON 处理，声明了其他类型则拒绝。
#[derive(Debug)]
pub struct OptionalJson<T>(pub T);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        if let Some(content_type) = content_type {
            if !is_json_content_type(&content_type) {
                return Err(AppError::with_message(
                    ErrorCode::InvalidFormat,
                    "Expected request with Content-Type: application/json",
                )
                .with_detail("content_type", content_type));
            }
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| AppError::validation(format!("Invalid request body: {}", e)))
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}

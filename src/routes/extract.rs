use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

const NO_PAYLOAD: &str = "沒有取得任何資料";

/// JSON request body that rejects with the envelope instead of axum's plain-text errors.
///
/// An empty body or a literal `null` is reported as "no data"; anything that
/// does not deserialize into `T` is a 400 carrying the parser's message.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| malformed(err.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::bad_request(NO_PAYLOAD));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|err| malformed(err.to_string()))?;
        if value.is_null() {
            return Err(AppError::bad_request(NO_PAYLOAD));
        }

        serde_json::from_value(value)
            .map(Payload)
            .map_err(|err| malformed(err.to_string()))
    }
}

/// Query string parameters, rejected with the envelope like [`Payload`].
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| malformed(err.body_text()))?;
        Ok(QueryParams(params))
    }
}

fn malformed(detail: String) -> AppError {
    AppError::bad_request(format!("請求資料格式錯誤: {detail}"))
}

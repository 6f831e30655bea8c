use axum::{
    RequestExt,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header::CONTENT_TYPE, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::NamestoreError;

/// Body accepted by create and update.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NamePayload {
    pub name: String,
}

/// Validated `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

/// Update input: body and id, validated in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate(pub RecordId, pub NamePayload);

/// Parse a record id. Only non-empty runs of ASCII digits are ids; a digit
/// run too large for `i64` cannot name any stored row.
pub fn parse_record_id(raw: &str) -> Result<RecordId, NamestoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NamestoreError::InvalidId);
    }
    raw.parse::<i64>()
        .map(RecordId)
        .map_err(|_| NamestoreError::NotFound)
}

/// Decode a `{"name": ...}` body.
///
/// A request without a JSON content type, with an empty body, or whose JSON
/// value is falsy (`{}`, `[]`, `null`, `""`, `0`, `false`) has no usable
/// body and yields `JsonBodyExpected`. Anything past that point (malformed
/// JSON, missing or non-string `name`) is a payload fault.
pub fn parse_name_payload(headers: &HeaderMap, body: &[u8]) -> Result<NamePayload, NamestoreError> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Err(NamestoreError::JsonBodyExpected);
    }
    let value: Value = serde_json::from_slice(body)?;
    if !is_truthy(&value) {
        return Err(NamestoreError::JsonBodyExpected);
    }
    if !value.is_object() {
        return Err(NamestoreError::Json(serde::de::Error::custom(
            "expected a JSON object",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(ct) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = ct.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = mime.split_once('/') else {
        return false;
    };
    if !kind.eq_ignore_ascii_case("application") {
        return false;
    }
    subtype.eq_ignore_ascii_case("json")
        || subtype
            .rsplit_once('+')
            .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case("json"))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<(HeaderMap, Bytes), Response>
where
    S: Send + Sync,
{
    let headers = req.headers().clone();
    let body = Bytes::from_request(req, state)
        .await
        .map_err(IntoResponse::into_response)?;
    Ok((headers, body))
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| NamestoreError::InvalidId.into_response())?;
        parse_record_id(&raw).map_err(IntoResponse::into_response)
    }
}

impl<S> FromRequest<S> for NamePayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (headers, body) = read_body(req, state).await?;
        parse_name_payload(&headers, &body).map_err(IntoResponse::into_response)
    }
}

impl<S> FromRequest<S> for RecordUpdate
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Defer id validation: a missing body is reported before a bad id.
        let raw_id = req
            .extract_parts::<Path<String>>()
            .await
            .map(|Path(raw)| raw)
            .map_err(|_| NamestoreError::InvalidId.into_response())?;

        let (headers, body) = read_body(req, state).await?;
        let payload = parse_name_payload(&headers, &body).map_err(IntoResponse::into_response)?;
        let id = parse_record_id(&raw_id).map_err(IntoResponse::into_response)?;
        Ok(RecordUpdate(id, payload))
    }
}

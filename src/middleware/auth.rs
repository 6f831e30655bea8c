use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use headers::{Authorization, HeaderMapExt, authorization::Basic};

use crate::error::NamestoreError;
use crate::router::NamestoreState;
use crate::service::auth::Authenticator;

/// Ensure the inbound request carries valid HTTP Basic credentials.
/// Accepts only `Authorization: Basic <base64(login:password)>`; a missing or
/// undecodable header is treated the same as a failed password check.
pub async fn ensure_authorized(
    auth: &Authenticator,
    headers: &HeaderMap,
) -> Result<(), NamestoreError> {
    let Some(Authorization(basic)) = headers.typed_get::<Authorization<Basic>>() else {
        return Err(NamestoreError::Unauthorized);
    };

    if auth.verify(basic.username(), basic.password()).await? {
        Ok(())
    } else {
        Err(NamestoreError::Unauthorized)
    }
}

/// Gate layered over the record routes; the wrapped handler only runs once
/// the credentials check out.
pub async fn require_basic_auth(
    State(state): State<NamestoreState>,
    request: Request,
    next: Next,
) -> Result<Response, NamestoreError> {
    ensure_authorized(&state.auth, request.headers()).await?;
    Ok(next.run(request).await)
}

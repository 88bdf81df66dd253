// src/auth.rs
use std::collections::HashSet;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Decides whether a bearer credential may use the API.
pub trait TokenAuthorizer: Send + Sync {
    fn is_authorized(&self, token: &str) -> bool;
}

/// Fixed token set built once at startup.
///
/// Read-only after construction, so it is shared without locking. A store that
/// issues or revokes tokens at runtime needs its own synchronization behind
/// [`TokenAuthorizer`].
#[derive(Debug, Clone, Default)]
pub struct StaticTokens {
    tokens: HashSet<String>,
}

impl StaticTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .collect();
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenAuthorizer for StaticTokens {
    fn is_authorized(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// Returns the credential after the `Bearer ` prefix, if present and non-empty.
fn bearer_token(value: &str) -> Option<&str> {
    value.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

pub async fn require_bearer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);

    match token {
        Some(token) if state.authorizer.is_authorized(token) => Ok(next.run(req).await),
        Some(_) => {
            debug!("rejected unknown bearer token");
            Err(ApiError::Unauthorized)
        }
        None => {
            debug!("missing or malformed authorization header");
            Err(ApiError::Unauthorized)
        }
    }
}

// src/lib.rs
pub mod auth;
pub mod cluster;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod reconcile;
pub mod routes;
pub mod state;
pub mod translate;
pub mod types;

pub use auth::{StaticTokens, TokenAuthorizer};
pub use cluster::{ClusterClient, ClusterPinner};
pub use error::{ApiError, ApiResult};
pub use ledger::LedgerClient;
pub use routes::create_router;
pub use state::AppState;

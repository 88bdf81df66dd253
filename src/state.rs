// src/state.rs
use std::sync::Arc;

use crate::auth::TokenAuthorizer;
use crate::cluster::ClusterPinner;
use crate::ledger::LedgerClient;

#[derive(Clone)]
pub struct AppState {
    pub authorizer: Arc<dyn TokenAuthorizer>,
    pub ledger: LedgerClient,
    pub cluster: Arc<dyn ClusterPinner>,
    /// Configured pool name, parsed to a pool id on every request.
    pub pool_name: Arc<str>,
}

impl AppState {
    pub fn new(
        authorizer: Arc<dyn TokenAuthorizer>,
        ledger: LedgerClient,
        cluster: Arc<dyn ClusterPinner>,
        pool_name: &str,
    ) -> Self {
        Self {
            authorizer,
            ledger,
            cluster,
            pool_name: Arc::from(pool_name),
        }
    }
}

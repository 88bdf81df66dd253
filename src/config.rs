// src/config.rs
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "/internal/.fula/config.yaml";
pub const DEFAULT_LEDGER_URL: &str = "http://127.0.0.1:4000";
pub const DEFAULT_CLUSTER_API: &str = "http://127.0.0.1:9094";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8008";

/// Fula node configuration file. Only `pool_name` and `log_level` are read by
/// the gateway; the rest belongs to the cluster/peer bootstrap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FulaConfig {
    pub identity: String,
    pub store_dir: String,
    pub pool_name: String,
    pub log_level: String,
    pub listen_addrs: Vec<String>,
    pub authorizer: String,
    pub authorized_peers: Vec<String>,
    pub ipfs_bootstrap_nodes: Vec<String>,
    pub static_relays: Vec<String>,
    pub force_reachability_private: bool,
    pub allow_transient_connection: bool,
    #[serde(rename = "disableResourceManger")]
    pub disable_resource_manager: bool,
    #[serde(rename = "maxCIDPushRate")]
    pub max_cid_push_rate: i64,
    pub ipni_publish_disabled: bool,
    pub ipni_publish_interval: String,
    #[serde(rename = "IpniPublishDirectAnnounce")]
    pub ipni_publish_direct_announce: Vec<String>,
    pub ipni_publisher_identity: String,
}

impl FulaConfig {
    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("invalid config yaml")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("error reading config file {}", path.display()))?;
        Self::from_yaml_str(&data)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub ledger_url: String,
    pub cluster_api_url: String,
    pub listen_addr: SocketAddr,
    /// Path prefix the pinning routes are nested under; empty means the root.
    pub api_prefix: String,
    pub auth_tokens: Vec<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let listen = var("PINNING_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let listen_addr = listen
            .parse()
            .with_context(|| format!("invalid PINNING_LISTEN_ADDR {listen:?}"))?;

        let prefix = var("PINNING_API_PREFIX", "")
            .trim()
            .trim_end_matches('/')
            .to_string();
        let api_prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix
        } else {
            format!("/{prefix}")
        };

        let auth_tokens = lookup("PINNING_AUTH_TOKENS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            config_path: PathBuf::from(var("FULA_CONFIG", DEFAULT_CONFIG_PATH)),
            ledger_url: var("LEDGER_URL", DEFAULT_LEDGER_URL),
            cluster_api_url: var("IPFS_CLUSTER_API", DEFAULT_CLUSTER_API),
            listen_addr,
            api_prefix,
            auth_tokens,
        })
    }
}

/// `RUST_LOG` wins, then the node's `logLevel`, then `info`.
pub fn log_filter(config: &FulaConfig) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| Some(config.log_level.to_lowercase()).filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "info".to_string())
}

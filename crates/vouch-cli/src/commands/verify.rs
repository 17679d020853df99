// crates/vouch-cli/src/commands/verify.rs
//
// Score a company identifier and print the report.

use std::sync::Arc;

use clap::Args;

use vouch_core::CacheBackend;
use vouch_engine::{CacheBackendKind, CacheConfig, VerificationResponse, Verifier};
use vouch_store::{MemoryCache, RocksCache};

use crate::config::{expand_tilde, VouchConfig};
use crate::output::{format_json, format_table, report_rows};

/// Arguments for the `verify` command.
#[derive(Debug, Args)]
pub struct VerifyCmd {
    /// Email address, URL, or bare domain to verify.
    pub identifier: String,

    /// Print the raw JSON document instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the verify command.
///
/// Exits with an error when the identifier cannot be normalized; every
/// other failure is already folded into the signals.
pub async fn run(cmd: &VerifyCmd, config: &VouchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let backend = open_cache_backend(&config.engine.cache);
    let verifier = Verifier::from_config(&config.engine, backend)?;

    let response = verifier.respond(&cmd.identifier).await;

    if cmd.json {
        println!("{}", format_json(&response));
    } else if let VerificationResponse::Verified(result) = &response {
        println!("{}", format_table(&report_rows(result)));
        println!();
        println!("{}", result.explanation);
    }

    match response {
        VerificationResponse::Verified(_) => Ok(()),
        VerificationResponse::Rejected { error } => {
            Err(format!("{}: {:?}", error, cmd.identifier).into())
        }
    }
}

/// Build the configured cache backend. A RocksDB path that cannot be opened
/// degrades to the in-memory cache for this run.
fn open_cache_backend(config: &CacheConfig) -> Arc<dyn CacheBackend> {
    match config.backend {
        CacheBackendKind::Memory => Arc::new(MemoryCache::new()),
        CacheBackendKind::Rocksdb => {
            let path = expand_tilde(&config.path);
            if let Err(e) = ensure_parent_dir(&path) {
                tracing::warn!("Could not create cache directory for {}: {}", path, e);
            }
            match RocksCache::open(&path) {
                Ok(cache) => {
                    tracing::debug!("Opened signal cache at {}", path);
                    Arc::new(cache)
                }
                Err(e) => {
                    tracing::warn!("{}. Falling back to in-memory cache.", e);
                    Arc::new(MemoryCache::new())
                }
            }
        }
    }
}

/// Create the directory that will contain the database at `path`.
fn ensure_parent_dir(path: &str) -> std::io::Result<()> {
    match std::path::Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_round_trips() {
        let backend = open_cache_backend(&CacheConfig::default());
        backend
            .set_raw("dns:acme.com", "{}", std::time::Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(
            backend.get_raw("dns:acme.com").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn parent_dir_failure_is_reported() {
        assert!(ensure_parent_dir("/dev/null/vouch-cache").is_err());
        assert!(ensure_parent_dir("vouch-cache").is_ok());
    }

    #[test]
    fn parent_dir_is_created() {
        let root = std::env::temp_dir().join(format!("vouch_cli_{}", std::process::id()));
        let db = root.join("nested").join("cache");
        ensure_parent_dir(db.to_str().unwrap()).unwrap();
        assert!(root.join("nested").is_dir());
        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn unopenable_rocksdb_path_falls_back_to_memory() {
        let config = CacheConfig {
            backend: CacheBackendKind::Rocksdb,
            path: "/dev/null/vouch-cache".to_string(),
            ..CacheConfig::default()
        };
        let backend = open_cache_backend(&config);
        backend
            .set_raw("web:acme.com", "null", std::time::Duration::from_secs(60))
            .await
            .unwrap();
        assert!(backend.get_raw("web:acme.com").await.unwrap().is_some());
    }
}

//! Process bootstrap: configuration, tracing and the DI graph.

use crate::di::{build_admin_module, AdminModule};
use bidflare_config::{AppConfig, ConfigLoader};
use bidflare_core::{init_tracing, BidflareResult, PageRequest};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// A loaded configuration together with the module built from it.
pub struct AdminRuntime {
    pub loader: ConfigLoader,
    pub config: AppConfig,
    pub module: Arc<AdminModule>,
}

impl AdminRuntime {
    /// Loads configuration from `config_dir`, installs the tracing
    /// subscriber and connects the admin module.
    ///
    /// Fails with `Configuration` on an invalid config or a second
    /// subscriber, and with `StoreUnavailable` when the database cannot
    /// be reached.
    pub async fn start(config_dir: impl Into<PathBuf>) -> BidflareResult<Self> {
        let loader = ConfigLoader::new(config_dir)?;
        let config = loader.get().await;
        init_tracing(&config.observability.logging())?;

        info!("Starting {} v{}", config.app.name, config.app.version);
        let module = build_admin_module(&config.database, &config.pagination, &config.service).await?;

        Ok(Self { loader, config, module })
    }

    /// Builds a page request from transport parameters using the
    /// configured default and maximum sizes.
    #[must_use]
    pub fn page_request(&self, page: usize, size: Option<usize>) -> PageRequest {
        self.config.pagination.page_request(page, size)
    }
}

impl std::fmt::Debug for AdminRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminRuntime")
            .field("app", &self.config.app.name)
            .finish_non_exhaustive()
    }
}

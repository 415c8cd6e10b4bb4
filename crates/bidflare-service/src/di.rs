//! Dependency injection module using Shaku.
//!
//! `AdminModule` wires the MySQL pool, the three MySQL gateways and the
//! admin query service into one resolvable graph.

use crate::{AdminQueryService, AdminQueryServiceComponent, AdminQueryServiceComponentParameters};
use bidflare_config::{DatabaseConfig, PaginationConfig, ServiceConfig};
use bidflare_core::{module, BidflareResult, HasComponent, PageRequest};
use bidflare_repository::{AccountGateway, AuctionGateway, DatabasePool, DatabasePoolInterface, DatabasePoolParameters};
use bidflare_repository::{ItemGateway, MySqlAccountGateway, MySqlAuctionGateway, MySqlItemGateway};
use std::sync::Arc;
use tracing::info;

module! {
    pub AdminModule {
        components = [
            DatabasePool,
            MySqlAccountGateway,
            MySqlItemGateway,
            MySqlAuctionGateway,
            AdminQueryServiceComponent,
        ],
        providers = [],
    }
}

/// Connects the database pool and builds the admin module.
///
/// Runs embedded migrations first when `run_migrations` is set, then
/// checks that the read-model tables exist. Requested page sizes are
/// clamped to `pagination.max_page_size`.
pub async fn build_admin_module(
    db_config: &DatabaseConfig,
    pagination: &PaginationConfig,
    service_config: &ServiceConfig,
) -> BidflareResult<Arc<AdminModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;
    if db_config.run_migrations {
        db_pool.run_migrations().await?;
    }
    db_pool.verify_schema().await?;

    let module = AdminModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<AdminQueryServiceComponent>(AdminQueryServiceComponentParameters {
            max_page_size: pagination.max_page_size.min(PageRequest::MAX_SIZE),
            query_timeout: service_config.query_timeout(),
        })
        .build();

    info!("Admin module built");
    Ok(Arc::new(module))
}

/// Resolves the admin query service from a module.
pub trait ServiceResolver {
    fn admin_query_service(&self) -> Arc<dyn AdminQueryService>;
}

impl ServiceResolver for AdminModule {
    fn admin_query_service(&self) -> Arc<dyn AdminQueryService> {
        self.resolve()
    }
}

/// Resolves the database pool and gateways from a module.
pub trait GatewayResolver {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    fn account_gateway(&self) -> Arc<dyn AccountGateway>;

    fn item_gateway(&self) -> Arc<dyn ItemGateway>;

    fn auction_gateway(&self) -> Arc<dyn AuctionGateway>;
}

impl GatewayResolver for AdminModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn account_gateway(&self) -> Arc<dyn AccountGateway> {
        self.resolve()
    }

    fn item_gateway(&self) -> Arc<dyn ItemGateway> {
        self.resolve()
    }

    fn auction_gateway(&self) -> Arc<dyn AuctionGateway> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_resolvers() {
        fn _assert_service_resolver<T: ServiceResolver>() {}
        fn _assert_gateway_resolver<T: GatewayResolver>() {}

        _assert_service_resolver::<AdminModule>();
        _assert_gateway_resolver::<AdminModule>();
    }

    #[test]
    fn test_has_component_trait_bounds() {
        fn _assert_has_service<T: HasComponent<dyn AdminQueryService>>() {}
        fn _assert_has_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}
        fn _assert_has_accounts<T: HasComponent<dyn AccountGateway>>() {}
        fn _assert_has_items<T: HasComponent<dyn ItemGateway>>() {}
        fn _assert_has_auctions<T: HasComponent<dyn AuctionGateway>>() {}

        _assert_has_service::<AdminModule>();
        _assert_has_pool::<AdminModule>();
        _assert_has_accounts::<AdminModule>();
        _assert_has_items::<AdminModule>();
        _assert_has_auctions::<AdminModule>();
    }
}

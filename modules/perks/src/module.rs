use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::contract::client::PerksApi;
use crate::domain::service::Service;
use crate::gateways::local::PerksLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmPerksRepository;

/// The perks module: owns the domain service and hands out its REST router
/// and in-process client.
#[derive(Clone)]
pub struct Perks {
    service: Arc<Service>,
}

impl Perks {
    /// Run migrations on `db` and wire the SeaORM repository into the service.
    pub async fn init(db: DatabaseConnection) -> anyhow::Result<Self> {
        info!("Initializing perks module");

        Self::migrate(&db).await?;

        let repo = SeaOrmPerksRepository::new(db);
        let service = Service::new(Arc::new(repo));

        Ok(Self {
            service: Arc::new(service),
        })
    }

    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running perks database migrations");
        Migrator::up(db, None).await?;
        info!("Perks database migrations completed successfully");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Local in-process client for other modules.
    pub fn client(&self) -> Arc<dyn PerksApi> {
        Arc::new(PerksLocalClient::new(self.service.clone()))
    }

    /// REST routes under `/perks`.
    pub fn router(&self) -> axum::Router {
        info!("Registering perks REST routes");
        routes::register_routes(axum::Router::new(), self.service.clone())
    }

    /// OpenAPI document describing the REST routes.
    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        crate::api::rest::openapi::openapi()
    }
}

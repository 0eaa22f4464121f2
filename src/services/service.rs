use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        Stored,
        service::{CreateServiceRequest, Service, ServiceLevel, UpdateServiceRequest},
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::Records;

pub struct ServiceCatalog {
    services: Records<Service>,
}

fn active() -> Query {
    Query::new()
        .eq("isActive", true)
        .sort_by("order", Direction::Asc)
        .sort_by_created(Direction::Desc)
}

impl ServiceCatalog {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            services: Records::new(repo, Collection::Services, "Service"),
        }
    }

    pub async fn create(&self, req: CreateServiceRequest) -> AppResult<Stored<Service>> {
        let service = self.services.create(&req.into()).await?;
        tracing::info!(id = %service.id, level = service.data.level.as_str(), "service created");
        Ok(service)
    }

    /// Active services only; deleted ones stay stored with `isActive = false`.
    pub async fn list(&self) -> AppResult<Vec<Stored<Service>>> {
        self.services.list(&active()).await
    }

    pub async fn by_level(&self, level: ServiceLevel) -> AppResult<Vec<Stored<Service>>> {
        self.services
            .list(&active().eq("level", level.as_str()))
            .await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Stored<Service>> {
        self.services.fetch(id).await
    }

    pub async fn update(&self, id: Uuid, req: UpdateServiceRequest) -> AppResult<Stored<Service>> {
        self.services.update(id, &req).await
    }

    pub async fn reorder(&self, id: Uuid, order: i64) -> AppResult<Stored<Service>> {
        self.services
            .update(id, &serde_json::json!({ "order": order }))
            .await
    }

    /// Soft delete.
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Stored<Service>> {
        let service = self
            .services
            .update(id, &serde_json::json!({ "isActive": false }))
            .await?;
        tracing::info!(id = %id, "service deactivated");
        Ok(service)
    }
}

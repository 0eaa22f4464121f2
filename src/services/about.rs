use crate::{
    error::AppResult,
    models::{
        Stored,
        about::{About, AboutView, UpsertAboutRequest},
    },
    repository::{Collection, Query, RepositoryState},
};

use super::Records;

pub struct AboutService {
    about: Records<About>,
}

impl AboutService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            about: Records::new(repo, Collection::About, "About content"),
        }
    }

    /// Writes the page, creating it on first use.
    pub async fn upsert(&self, req: UpsertAboutRequest) -> AppResult<Stored<About>> {
        let about = self.about.upsert_singleton(&req).await?;
        tracing::info!(id = %about.id, "about page saved");
        Ok(about)
    }

    pub async fn find(&self) -> AppResult<AboutView> {
        Ok(match self.about.first(&Query::new()).await? {
            Some(about) => AboutView::Stored(about),
            None => AboutView::Placeholder(About::placeholder()),
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Stored<About>>> {
        self.about.list(&Query::new()).await
    }
}

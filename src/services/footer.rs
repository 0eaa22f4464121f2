use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Stored,
        footer::{
            CreateSocialLinkRequest, Footer, SocialLink, UpdateFooterDescriptionRequest,
            UpdateSocialLinkRequest, UpsertFooterRequest,
        },
    },
    repository::{Collection, Query, RepositoryState},
};

use super::Records;

pub struct FooterService {
    footer: Records<Footer>,
}

impl FooterService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            footer: Records::new(repo, Collection::Footer, "Footer"),
        }
    }

    async fn current(&self) -> AppResult<Stored<Footer>> {
        self.footer
            .first(&Query::new())
            .await?
            .ok_or_else(|| AppError::not_found("Footer"))
    }

    /// Writes the description fields. Social links are left untouched.
    pub async fn upsert(&self, req: UpsertFooterRequest) -> AppResult<Stored<Footer>> {
        let footer = self.footer.upsert_singleton(&req).await?;
        tracing::info!(id = %footer.id, "footer saved");
        Ok(footer)
    }

    pub async fn get(&self) -> AppResult<Stored<Footer>> {
        self.current().await
    }

    pub async fn list(&self) -> AppResult<Vec<Stored<Footer>>> {
        self.footer.list(&Query::new()).await
    }

    /// Only non-empty fields overwrite the stored text.
    pub async fn update_description(
        &self,
        req: UpdateFooterDescriptionRequest,
    ) -> AppResult<Stored<Footer>> {
        let mut footer = self.current().await?;
        if let Some(description) = req.description.filter(|d| !d.trim().is_empty()) {
            footer.data.description = description;
        }
        if let Some(arabic) = req.arabic_description.filter(|d| !d.trim().is_empty()) {
            footer.data.arabic_description = Some(arabic);
        }
        self.footer.save(&footer).await
    }

    // --- Social links ---

    pub async fn add_social_link(
        &self,
        req: CreateSocialLinkRequest,
    ) -> AppResult<Stored<Footer>> {
        let mut footer = self.current().await?;
        footer.data.social_links.push(SocialLink {
            id: Uuid::new_v4(),
            platform: req.platform,
            url: req.url,
            icon: req.icon,
        });
        let footer = self.footer.save(&footer).await?;
        tracing::info!(links = footer.data.social_links.len(), "social link added");
        Ok(footer)
    }

    pub async fn social_links(&self) -> AppResult<Vec<SocialLink>> {
        Ok(self.current().await?.data.social_links)
    }

    pub async fn update_social_link(
        &self,
        link_id: Uuid,
        req: UpdateSocialLinkRequest,
    ) -> AppResult<Stored<Footer>> {
        let mut footer = self.current().await?;
        let link = footer
            .data
            .social_links
            .iter_mut()
            .find(|link| link.id == link_id)
            .ok_or_else(|| AppError::not_found("Social link"))?;
        link.apply(req);
        self.footer.save(&footer).await
    }

    pub async fn delete_social_link(&self, link_id: Uuid) -> AppResult<Stored<Footer>> {
        let mut footer = self.current().await?;
        let before = footer.data.social_links.len();
        footer.data.social_links.retain(|link| link.id != link_id);
        if footer.data.social_links.len() == before {
            return Err(AppError::not_found("Social link"));
        }
        let footer = self.footer.save(&footer).await?;
        tracing::info!(link = %link_id, "social link removed");
        Ok(footer)
    }
}

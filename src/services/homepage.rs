use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        Stored,
        homepage::{
            HeroSection, HomePage, UpdateHeroSectionRequest, UpdateWhyChooseUsRequest, WhyChooseUs,
        },
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::Records;

pub struct HomepageService {
    heroes: Records<HeroSection>,
    reasons: Records<WhyChooseUs>,
}

impl HomepageService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            heroes: Records::new(repo.clone(), Collection::HeroSections, "Hero section"),
            reasons: Records::new(repo, Collection::WhyChooseUs, "Why choose us item"),
        }
    }

    pub async fn hero(&self) -> AppResult<Option<Stored<HeroSection>>> {
        self.heroes
            .first(&Query::new().sort_by_created(Direction::Desc))
            .await
    }

    pub async fn reasons(&self) -> AppResult<Vec<Stored<WhyChooseUs>>> {
        self.reasons
            .list(&Query::new().sort_by_created(Direction::Asc))
            .await
    }

    /// Hero section and the "why choose us" list, read concurrently.
    pub async fn home(&self) -> AppResult<HomePage> {
        let (hero_section, why_choose_us) = tokio::try_join!(self.hero(), self.reasons())?;
        Ok(HomePage {
            hero_section,
            why_choose_us,
        })
    }

    /// Replaces whatever hero sections exist with the new one.
    pub async fn replace_hero(&self, hero: HeroSection) -> AppResult<Stored<HeroSection>> {
        let removed = self.heroes.delete_all().await?;
        let hero = self.heroes.create(&hero).await?;
        tracing::info!(id = %hero.id, removed, "hero section replaced");
        Ok(hero)
    }

    pub async fn update_hero(
        &self,
        id: Uuid,
        req: UpdateHeroSectionRequest,
    ) -> AppResult<Stored<HeroSection>> {
        self.heroes.update(id, &req).await
    }

    pub async fn add_reason(&self, reason: WhyChooseUs) -> AppResult<Stored<WhyChooseUs>> {
        let reason = self.reasons.create(&reason).await?;
        tracing::info!(id = %reason.id, "why choose us item created");
        Ok(reason)
    }

    pub async fn update_reason(
        &self,
        id: Uuid,
        req: UpdateWhyChooseUsRequest,
    ) -> AppResult<Stored<WhyChooseUs>> {
        self.reasons.update(id, &req).await
    }

    pub async fn delete_reason(&self, id: Uuid) -> AppResult<Stored<WhyChooseUs>> {
        let reason = self.reasons.remove(id).await?;
        tracing::info!(id = %id, "why choose us item deleted");
        Ok(reason)
    }
}

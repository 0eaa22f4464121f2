use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Stored,
        gallery::{
            CreateGalleryCategoryRequest, GalleryCategory, GalleryCategoryRef, GalleryForm,
            GalleryItem, GalleryPatch, GalleryView, UpdateGalleryCategoryRequest,
        },
    },
    repository::{Collection, Direction, Query, RepositoryState},
    validation::Violations,
};

use super::{Records, index_by_id};

pub struct GalleryService {
    items: Records<GalleryItem>,
    categories: Records<GalleryCategory>,
}

fn parse_id(field: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::BadRequest(format!("{field} must be a valid id")))
}

fn view(
    item: Stored<GalleryItem>,
    categories: &HashMap<Uuid, &Stored<GalleryCategory>>,
) -> Stored<GalleryView> {
    let category = categories.get(&item.data.category).map(|c| GalleryCategoryRef::from(*c));
    let arabic_category = categories
        .get(&item.data.arabic_category)
        .map(|c| GalleryCategoryRef::from(*c));
    item.map(|data| GalleryView {
        title: data.title,
        arabic_title: data.arabic_title,
        image: data.image,
        category,
        arabic_category,
    })
}

impl GalleryService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            items: Records::new(repo.clone(), Collection::Gallery, "Gallery item"),
            categories: Records::new(repo, Collection::GalleryCategories, "Gallery category"),
        }
    }

    async fn populate(
        &self,
        items: Vec<Stored<GalleryItem>>,
    ) -> AppResult<Vec<Stored<GalleryView>>> {
        let categories = self.categories.list(&Query::new()).await?;
        let by_id = index_by_id(&categories);
        Ok(items.into_iter().map(|item| view(item, &by_id)).collect())
    }

    async fn populate_one(&self, item: Stored<GalleryItem>) -> AppResult<Stored<GalleryView>> {
        self.populate(vec![item])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::Internal("gallery item lost while resolving categories".to_string())
            })
    }

    async fn ensure_category(&self, field: &str, id: Uuid) -> AppResult<()> {
        if self.categories.exists(id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!("{field} {id} does not exist")))
        }
    }

    /// create
    ///
    /// Every text field and the image are required. Both category ids must
    /// reference existing gallery categories.
    pub async fn create(
        &self,
        form: GalleryForm,
        image: Option<String>,
    ) -> AppResult<Stored<GalleryView>> {
        let mut v = Violations::default();
        v.not_empty("title", form.title.as_deref().unwrap_or_default());
        v.not_empty("arabicTitle", form.arabic_title.as_deref().unwrap_or_default());
        v.not_empty("category", form.category.as_deref().unwrap_or_default());
        v.not_empty("arabicCategory", form.arabic_category.as_deref().unwrap_or_default());
        if image.is_none() {
            v.push("image is required");
        }
        v.into_result()?;

        let (Some(title), Some(arabic_title), Some(category), Some(arabic_category), Some(image)) =
            (form.title, form.arabic_title, form.category, form.arabic_category, image)
        else {
            return Err(AppError::BadRequest("Incomplete gallery form".to_string()));
        };

        let category = parse_id("category", &category)?;
        let arabic_category = parse_id("arabicCategory", &arabic_category)?;
        self.ensure_category("category", category).await?;
        self.ensure_category("arabicCategory", arabic_category).await?;

        let item = self
            .items
            .create(&GalleryItem {
                title,
                arabic_title,
                image,
                category,
                arabic_category,
            })
            .await?;
        tracing::info!(id = %item.id, "gallery item created");
        self.populate_one(item).await
    }

    /// Newest first.
    pub async fn list(&self) -> AppResult<Vec<Stored<GalleryView>>> {
        let items = self
            .items
            .list(&Query::new().sort_by_created(Direction::Desc))
            .await?;
        self.populate(items).await
    }

    pub async fn latest(&self, limit: i64) -> AppResult<Vec<Stored<GalleryItem>>> {
        self.items
            .list(&Query::new().sort_by_created(Direction::Desc).limit(limit))
            .await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Stored<GalleryView>> {
        let item = self.items.fetch(id).await?;
        self.populate_one(item).await
    }

    /// Partial update from a multipart form; the image is optional here.
    pub async fn update(
        &self,
        id: Uuid,
        form: GalleryForm,
        image: Option<String>,
    ) -> AppResult<Stored<GalleryView>> {
        let category = form
            .category
            .as_deref()
            .map(|raw| parse_id("category", raw))
            .transpose()?;
        let arabic_category = form
            .arabic_category
            .as_deref()
            .map(|raw| parse_id("arabicCategory", raw))
            .transpose()?;
        if let Some(category) = category {
            self.ensure_category("category", category).await?;
        }
        if let Some(arabic_category) = arabic_category {
            self.ensure_category("arabicCategory", arabic_category).await?;
        }

        let patch = GalleryPatch {
            title: form.title,
            arabic_title: form.arabic_title,
            image,
            category,
            arabic_category,
        };
        let item = self.items.update(id, &patch).await?;
        tracing::debug!(id = %id, "gallery item updated");
        self.populate_one(item).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Stored<GalleryItem>> {
        let item = self.items.remove(id).await?;
        tracing::info!(id = %id, "gallery item deleted");
        Ok(item)
    }

    // --- Categories ---

    pub async fn categories(&self) -> AppResult<Vec<Stored<GalleryCategory>>> {
        self.categories
            .list(
                &Query::new()
                    .sort_by("order", Direction::Asc)
                    .sort_by_created(Direction::Desc),
            )
            .await
    }

    pub async fn create_category(
        &self,
        req: CreateGalleryCategoryRequest,
    ) -> AppResult<Stored<GalleryCategory>> {
        let category = self.categories.create(&req.into()).await?;
        tracing::info!(id = %category.id, "gallery category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        req: UpdateGalleryCategoryRequest,
    ) -> AppResult<Stored<GalleryCategory>> {
        self.categories.update(id, &req).await
    }

    /// Items that referenced the category keep the id and resolve to `null`.
    pub async fn delete_category(&self, id: Uuid) -> AppResult<Stored<GalleryCategory>> {
        let category = self.categories.remove(id).await?;
        tracing::info!(id = %id, "gallery category deleted");
        Ok(category)
    }
}

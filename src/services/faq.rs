use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        MessageResponse, Stored,
        faq::{
            BulkDeleteRequest, BulkStatusRequest, CreateFaqCategoryRequest, CreateFaqRequest, Faq,
            FaqCategory, FaqCategoryRef, FaqView, UpdateFaqCategoryRequest, UpdateFaqRequest,
        },
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::{Records, index_by_id};

const SEARCH_FIELDS: &[&str] = &["question", "answer"];

pub struct FaqService {
    faqs: Records<Faq>,
    categories: Records<FaqCategory>,
}

impl FaqService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            faqs: Records::new(repo.clone(), Collection::Faqs, "FAQ"),
            categories: Records::new(repo, Collection::FaqCategories, "FAQ category"),
        }
    }

    /// Resolves the category of each FAQ. Unknown categories become `null`.
    async fn populate(&self, faqs: Vec<Stored<Faq>>) -> AppResult<Vec<Stored<FaqView>>> {
        let categories = self.categories.list(&Query::new()).await?;
        let by_id = index_by_id(&categories);
        Ok(faqs
            .into_iter()
            .map(|faq| {
                let category = by_id.get(&faq.data.category).map(|c| FaqCategoryRef::from(*c));
                faq.map(|data| FaqView::new(data, category))
            })
            .collect())
    }

    async fn populate_one(&self, faq: Stored<Faq>) -> AppResult<Stored<FaqView>> {
        let category = self
            .categories
            .get(faq.data.category)
            .await?
            .map(|c| FaqCategoryRef::from(&c));
        Ok(faq.map(|data| FaqView::new(data, category)))
    }

    async fn ensure_category(&self, id: Uuid) -> AppResult<()> {
        if self.categories.exists(id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!("FAQ category {id} does not exist")))
        }
    }

    pub async fn create(&self, req: CreateFaqRequest) -> AppResult<Stored<FaqView>> {
        self.ensure_category(req.category).await?;
        let faq = self.faqs.create(&req.into()).await?;
        tracing::info!(id = %faq.id, "faq created");
        self.populate_one(faq).await
    }

    pub async fn list(&self) -> AppResult<Vec<Stored<FaqView>>> {
        let faqs = self
            .faqs
            .list(&Query::new().sort_by("order", Direction::Asc))
            .await?;
        self.populate(faqs).await
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<Stored<FaqView>>> {
        let faqs = self
            .faqs
            .list(
                &Query::new()
                    .search(SEARCH_FIELDS, term)
                    .sort_by("order", Direction::Asc),
            )
            .await?;
        self.populate(faqs).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Stored<FaqView>> {
        let faq = self.faqs.fetch(id).await?;
        self.populate_one(faq).await
    }

    pub async fn update(&self, id: Uuid, req: UpdateFaqRequest) -> AppResult<Stored<FaqView>> {
        if let Some(category) = req.category {
            self.ensure_category(category).await?;
        }
        let faq = self.faqs.update(id, &req).await?;
        self.populate_one(faq).await
    }

    pub async fn reorder(&self, id: Uuid, order: i64) -> AppResult<Stored<FaqView>> {
        let faq = self
            .faqs
            .update(id, &serde_json::json!({ "order": order }))
            .await?;
        self.populate_one(faq).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Stored<Faq>> {
        let faq = self.faqs.remove(id).await?;
        tracing::info!(id = %id, "faq deleted");
        Ok(faq)
    }

    pub async fn bulk_delete(&self, req: BulkDeleteRequest) -> AppResult<MessageResponse> {
        let deleted = self.faqs.delete_many(&req.ids).await?;
        tracing::info!(requested = req.ids.len(), deleted, "faqs bulk deleted");
        Ok(MessageResponse::new(format!("{deleted} FAQs deleted successfully")))
    }

    pub async fn bulk_status(&self, req: BulkStatusRequest) -> AppResult<MessageResponse> {
        let updated = self
            .faqs
            .update_many(&req.ids, &serde_json::json!({ "isActive": req.is_active }))
            .await?;
        tracing::info!(updated, is_active = req.is_active, "faq status bulk updated");
        Ok(MessageResponse::new(format!("{updated} FAQs updated successfully")))
    }

    // --- Categories ---

    async fn ensure_unique_names(
        &self,
        name: Option<&str>,
        arabic_name: Option<&str>,
        except: Option<Uuid>,
    ) -> AppResult<()> {
        for (field, value) in [("name", name), ("arabicName", arabic_name)] {
            let Some(value) = value else { continue };
            let mut query = Query::new().eq(field, value);
            if let Some(id) = except {
                query = query.exclude_id(id);
            }
            if self.categories.first(&query).await?.is_some() {
                return Err(AppError::Conflict(format!(
                    "An FAQ category named \"{value}\" already exists"
                )));
            }
        }
        Ok(())
    }

    pub async fn categories(&self) -> AppResult<Vec<Stored<FaqCategory>>> {
        self.categories
            .list(&Query::new().sort_by("order", Direction::Asc))
            .await
    }

    pub async fn create_category(
        &self,
        req: CreateFaqCategoryRequest,
    ) -> AppResult<Stored<FaqCategory>> {
        self.ensure_unique_names(Some(&req.name), Some(&req.arabic_name), None)
            .await?;
        let category = self.categories.create(&req.into()).await?;
        tracing::info!(id = %category.id, "faq category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        req: UpdateFaqCategoryRequest,
    ) -> AppResult<Stored<FaqCategory>> {
        self.ensure_unique_names(req.name.as_deref(), req.arabic_name.as_deref(), Some(id))
            .await?;
        self.categories.update(id, &req).await
    }

    /// Refuses to delete a category that FAQs still point at.
    pub async fn delete_category(&self, id: Uuid) -> AppResult<Stored<FaqCategory>> {
        let in_use = self
            .faqs
            .count(&Query::new().eq("category", id.to_string()))
            .await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "FAQ category is used by {in_use} FAQ(s)"
            )));
        }
        let category = self.categories.remove(id).await?;
        tracing::info!(id = %id, "faq category deleted");
        Ok(category)
    }
}

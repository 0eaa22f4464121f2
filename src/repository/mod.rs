use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

mod memory;
mod postgres;
pub mod query;

pub use memory::MemoryRepository;
pub use postgres::PostgresRepository;
pub use query::{Condition, Direction, Query, RangeOp, SortKey};

/// Collection
///
/// Every document lives in exactly one collection. The string form is what the
/// Postgres backend stores in the `documents.collection` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Admins,
    About,
    ContactInfo,
    ContactSubmissions,
    Courses,
    CourseCategories,
    Events,
    Faculty,
    Faqs,
    FaqCategories,
    Footer,
    Gallery,
    GalleryCategories,
    HeroSections,
    Services,
    WhyChooseUs,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Admins => "admins",
            Collection::About => "about",
            Collection::ContactInfo => "contact_info",
            Collection::ContactSubmissions => "contact_submissions",
            Collection::Courses => "courses",
            Collection::CourseCategories => "course_categories",
            Collection::Events => "events",
            Collection::Faculty => "faculty",
            Collection::Faqs => "faqs",
            Collection::FaqCategories => "faq_categories",
            Collection::Footer => "footer",
            Collection::Gallery => "gallery",
            Collection::GalleryCategories => "gallery_categories",
            Collection::HeroSections => "hero_sections",
            Collection::Services => "services",
            Collection::WhyChooseUs => "why_choose_us",
        }
    }

    /// Body fields whose value may appear at most once in the collection.
    /// Postgres enforces these with the partial unique indexes in
    /// `migrations/0002_unique_fields.sql`.
    pub fn unique_fields(self) -> &'static [&'static str] {
        match self {
            Collection::Admins | Collection::Faculty => &["email"],
            Collection::FaqCategories => &["name", "arabicName"],
            _ => &[],
        }
    }
}

/// Document
///
/// The unit of persistence: an id, a JSON object body and the two timestamps
/// maintained by the store itself.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub body: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("document body error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A write would give two documents the same value for a unique field.
    #[error("another {collection} document already has this {field}")]
    Duplicate {
        collection: &'static str,
        field: &'static str,
    },

    /// A body or patch that is not a JSON object.
    #[error("document body must be a JSON object")]
    NotAnObject,
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository Trait
///
/// The document store contract. Services talk to this trait only, so the
/// Postgres implementation and the in-memory one are interchangeable behind
/// `Arc<dyn Repository>`.
///
/// Update semantics mirror a `$set`: `update` merges the top-level keys of the
/// patch into the stored body, `replace` swaps the body wholesale.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn insert(&self, collection: Collection, body: Value) -> RepoResult<Document>;

    async fn find(&self, collection: Collection, query: &Query) -> RepoResult<Vec<Document>>;

    async fn find_one(&self, collection: Collection, query: &Query) -> RepoResult<Option<Document>> {
        let query = query.clone().limit(1);
        Ok(self.find(collection, &query).await?.into_iter().next())
    }

    async fn get(&self, collection: Collection, id: Uuid) -> RepoResult<Option<Document>>;

    async fn count(&self, collection: Collection, query: &Query) -> RepoResult<u64>;

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Value,
    ) -> RepoResult<Option<Document>>;

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
    ) -> RepoResult<Option<Document>>;

    /// Removes a document and hands back what was deleted.
    async fn delete(&self, collection: Collection, id: Uuid) -> RepoResult<Option<Document>>;

    async fn delete_many(&self, collection: Collection, ids: &[Uuid]) -> RepoResult<u64>;

    async fn update_many(&self, collection: Collection, ids: &[Uuid], patch: Value)
    -> RepoResult<u64>;

    async fn delete_all(&self, collection: Collection) -> RepoResult<u64>;

    /// Singleton write: merges the patch into the oldest document of the
    /// collection, inserting it when the collection is empty.
    async fn upsert_singleton(&self, collection: Collection, patch: Value)
    -> RepoResult<Document>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// Rejects non-object bodies before they reach a backend.
pub(crate) fn ensure_object(value: &Value) -> RepoResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(RepositoryError::NotAnObject)
    }
}

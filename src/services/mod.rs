//! Data-access services.
//!
//! Each module owns one or two collections and exposes the operations its
//! handlers need. They all sit on `Records<T>`, which turns raw documents into
//! typed `Stored<T>` values and maps misses to 404s.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{collections::HashMap, marker::PhantomData};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Stored,
    repository::{Collection, Document, Query, RepositoryState},
};

pub mod about;
pub mod auth;
pub mod contact;
pub mod course;
pub mod dashboard;
pub mod event;
pub mod faculty;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod homepage;
pub mod public;
pub mod service;

/// Records
///
/// Typed view over one collection. `label` names the entity in 404 messages
/// ("Course not found").
pub struct Records<T> {
    repo: RepositoryState,
    collection: Collection,
    label: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Records<T> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            collection: self.collection,
            label: self.label,
            _marker: PhantomData,
        }
    }
}

/// Serializes a request or entity into a JSON object usable as a body or patch.
pub(crate) fn to_object<P: Serialize>(value: &P) -> AppResult<Value> {
    let value = serde_json::to_value(value)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(AppError::Internal("expected a JSON object".to_string()))
    }
}

pub(crate) fn index_by_id<T>(items: &[Stored<T>]) -> HashMap<Uuid, &Stored<T>> {
    items.iter().map(|item| (item.id, item)).collect()
}

impl<T> Records<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(repo: RepositoryState, collection: Collection, label: &'static str) -> Self {
        Self {
            repo,
            collection,
            label,
            _marker: PhantomData,
        }
    }

    fn decode(doc: Document) -> AppResult<Stored<T>> {
        Ok(Stored::try_from(doc)?)
    }

    fn missing(&self) -> AppError {
        AppError::not_found(self.label)
    }

    pub async fn create(&self, data: &T) -> AppResult<Stored<T>> {
        let doc = self.repo.insert(self.collection, to_object(data)?).await?;
        Self::decode(doc)
    }

    pub async fn list(&self, query: &Query) -> AppResult<Vec<Stored<T>>> {
        self.repo
            .find(self.collection, query)
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    pub async fn first(&self, query: &Query) -> AppResult<Option<Stored<T>>> {
        self.repo
            .find_one(self.collection, query)
            .await?
            .map(Self::decode)
            .transpose()
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<Stored<T>>> {
        self.repo
            .get(self.collection, id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Like `get`, but a miss is a 404.
    pub async fn fetch(&self, id: Uuid) -> AppResult<Stored<T>> {
        self.get(id).await?.ok_or_else(|| self.missing())
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.repo.get(self.collection, id).await?.is_some())
    }

    /// Merges the serialized patch into the stored body. A miss is a 404.
    pub async fn update<P: Serialize>(&self, id: Uuid, patch: &P) -> AppResult<Stored<T>> {
        let doc = self
            .repo
            .update(self.collection, id, to_object(patch)?)
            .await?
            .ok_or_else(|| self.missing())?;
        Self::decode(doc)
    }

    /// Writes the whole record back.
    pub async fn save(&self, record: &Stored<T>) -> AppResult<Stored<T>> {
        let doc = self
            .repo
            .replace(self.collection, record.id, to_object(&record.data)?)
            .await?
            .ok_or_else(|| self.missing())?;
        Self::decode(doc)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Stored<T>>> {
        self.repo
            .delete(self.collection, id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Like `delete`, but a miss is a 404.
    pub async fn remove(&self, id: Uuid) -> AppResult<Stored<T>> {
        self.delete(id).await?.ok_or_else(|| self.missing())
    }

    pub async fn count(&self, query: &Query) -> AppResult<u64> {
        Ok(self.repo.count(self.collection, query).await?)
    }

    pub async fn upsert_singleton<P: Serialize>(&self, patch: &P) -> AppResult<Stored<T>> {
        let doc = self
            .repo
            .upsert_singleton(self.collection, to_object(patch)?)
            .await?;
        Self::decode(doc)
    }

    pub async fn delete_many(&self, ids: &[Uuid]) -> AppResult<u64> {
        Ok(self.repo.delete_many(self.collection, ids).await?)
    }

    pub async fn update_many<P: Serialize>(&self, ids: &[Uuid], patch: &P) -> AppResult<u64> {
        Ok(self
            .repo
            .update_many(self.collection, ids, to_object(patch)?)
            .await?)
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        Ok(self.repo.delete_all(self.collection).await?)
    }
}

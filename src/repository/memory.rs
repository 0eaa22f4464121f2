use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::{cmp::Ordering, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    Collection, Condition, Direction, Document, Query, RepoResult, Repository, RepositoryError,
    SortKey, ensure_object,
};

#[derive(Default)]
struct Inner {
    collections: HashMap<Collection, Vec<Document>>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Inner {
    /// Hands out strictly increasing timestamps so "newest first" ordering is
    /// stable even for writes issued within the same clock tick.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }

    fn docs(&mut self, collection: Collection) -> &mut Vec<Document> {
        self.collections.entry(collection).or_default()
    }
}

/// MemoryRepository
///
/// In-process document store with the same query semantics as the Postgres
/// backend. Used by the test suite and by local runs without `DATABASE_URL`.
/// Cloning shares the underlying data.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn merge(body: &mut Value, patch: Value) {
    if let (Value::Object(target), Value::Object(source)) = (body, patch) {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
}

/// Fails when `body` repeats a unique field value held by any document other
/// than `except`.
fn check_unique(
    collection: Collection,
    docs: &[Document],
    body: &Value,
    except: Option<Uuid>,
) -> RepoResult<()> {
    for &field in collection.unique_fields() {
        let Some(value) = body.get(field).filter(|v| !v.is_null()) else {
            continue;
        };
        if docs
            .iter()
            .any(|doc| Some(doc.id) != except && doc.body.get(field) == Some(value))
        {
            return Err(RepositoryError::Duplicate {
                collection: collection.as_str(),
                field,
            });
        }
    }
    Ok(())
}

fn search_matches(value: Option<&Value>, needle: &str) -> bool {
    match value {
        Some(Value::String(s)) => s.to_lowercase().contains(needle),
        Some(Value::Array(items)) => items.iter().any(|item| search_matches(Some(item), needle)),
        Some(Value::Null) | None => false,
        Some(other) => other.to_string().to_lowercase().contains(needle),
    }
}

fn matches(doc: &Document, condition: &Condition) -> bool {
    match condition {
        Condition::Eq { field, value } => doc.body.get(field) == Some(value),
        Condition::Range { field, op, value } => doc
            .body
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| op.holds(s, value.as_str())),
        Condition::CreatedAt { op, at } => op.holds(&doc.created_at, at),
        Condition::Search { fields, term } => {
            let needle = term.to_lowercase();
            fields
                .iter()
                .any(|field| search_matches(doc.body.get(field), &needle))
        }
        Condition::ExcludeId(id) => doc.id != *id,
    }
}

// Mirrors jsonb ordering across types: null < string < number < bool < array < object.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::String(_) => 1,
        Value::Number(_) => 2,
        Value::Bool(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // Missing keys behave like SQL NULL: last when ascending.
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (a, b) {
            (Value::String(x), Value::String(y)) => x.cmp(y),
            (Value::Number(x), Value::Number(y)) => {
                let x = x.as_f64().unwrap_or(0.0);
                let y = y.as_f64().unwrap_or(0.0);
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}

fn compare_docs(a: &Document, b: &Document, sort: &[(SortKey, Direction)]) -> Ordering {
    for (key, direction) in sort {
        let ordering = match key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Field(field) => compare_values(a.body.get(field), b.body.get(field)),
        };
        let ordering = match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn select(docs: &[Document], query: &Query) -> Vec<Document> {
    let mut selected: Vec<Document> = docs
        .iter()
        .filter(|doc| query.conditions.iter().all(|c| matches(doc, c)))
        .cloned()
        .collect();
    // Stable sort keeps insertion order for ties.
    selected.sort_by(|a, b| compare_docs(a, b, &query.sort));
    if let Some(limit) = query.limit {
        selected.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
    }
    selected
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn insert(&self, collection: Collection, body: Value) -> RepoResult<Document> {
        ensure_object(&body)?;
        let mut inner = self.inner.write().await;
        check_unique(collection, inner.docs(collection), &body, None)?;
        let now = inner.next_timestamp();
        let doc = Document {
            id: Uuid::new_v4(),
            body,
            created_at: now,
            updated_at: now,
        };
        inner.docs(collection).push(doc.clone());
        Ok(doc)
    }

    async fn find(&self, collection: Collection, query: &Query) -> RepoResult<Vec<Document>> {
        let inner = self.inner.read().await;
        Ok(inner
            .collections
            .get(&collection)
            .map(|docs| select(docs, query))
            .unwrap_or_default())
    }

    async fn get(&self, collection: Collection, id: Uuid) -> RepoResult<Option<Document>> {
        let inner = self.inner.read().await;
        Ok(inner
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn count(&self, collection: Collection, query: &Query) -> RepoResult<u64> {
        let inner = self.inner.read().await;
        let count = inner
            .collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| query.conditions.iter().all(|c| matches(doc, c)))
                    .count()
            })
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Value,
    ) -> RepoResult<Option<Document>> {
        ensure_object(&patch)?;
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let docs = inner.docs(collection);
        let Some(index) = docs.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        let mut body = docs[index].body.clone();
        merge(&mut body, patch);
        check_unique(collection, docs, &body, Some(id))?;
        let doc = &mut docs[index];
        doc.body = body;
        doc.updated_at = now;
        Ok(Some(doc.clone()))
    }

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
    ) -> RepoResult<Option<Document>> {
        ensure_object(&body)?;
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let docs = inner.docs(collection);
        let Some(index) = docs.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        check_unique(collection, docs, &body, Some(id))?;
        let doc = &mut docs[index];
        doc.body = body;
        doc.updated_at = now;
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> RepoResult<Option<Document>> {
        let mut inner = self.inner.write().await;
        let docs = inner.docs(collection);
        Ok(docs
            .iter()
            .position(|d| d.id == id)
            .map(|index| docs.remove(index)))
    }

    async fn delete_many(&self, collection: Collection, ids: &[Uuid]) -> RepoResult<u64> {
        let mut inner = self.inner.write().await;
        let docs = inner.docs(collection);
        let before = docs.len();
        docs.retain(|d| !ids.contains(&d.id));
        Ok((before - docs.len()) as u64)
    }

    async fn update_many(
        &self,
        collection: Collection,
        ids: &[Uuid],
        patch: Value,
    ) -> RepoResult<u64> {
        ensure_object(&patch)?;
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let targets = inner
            .docs(collection)
            .iter()
            .filter(|d| ids.contains(&d.id))
            .map(|d| d.id)
            .collect::<Vec<_>>();
        // Setting a unique field on several documents at once can never hold.
        if let [only] = targets.as_slice() {
            check_unique(collection, inner.docs(collection), &patch, Some(*only))?;
        } else if targets.len() > 1 {
            if let Some(&field) = collection
                .unique_fields()
                .iter()
                .find(|field| patch.get(**field).is_some_and(|v| !v.is_null()))
            {
                return Err(RepositoryError::Duplicate {
                    collection: collection.as_str(),
                    field,
                });
            }
        }
        let mut touched = 0;
        for doc in inner.docs(collection).iter_mut().filter(|d| ids.contains(&d.id)) {
            merge(&mut doc.body, patch.clone());
            doc.updated_at = now;
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete_all(&self, collection: Collection) -> RepoResult<u64> {
        let mut inner = self.inner.write().await;
        let removed = inner.docs(collection).drain(..).count();
        Ok(removed as u64)
    }

    async fn upsert_singleton(
        &self,
        collection: Collection,
        patch: Value,
    ) -> RepoResult<Document> {
        ensure_object(&patch)?;
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let docs = inner.docs(collection);
        if let Some(doc) = docs.first_mut() {
            merge(&mut doc.body, patch);
            doc.updated_at = now;
            return Ok(doc.clone());
        }
        let doc = Document {
            id: Uuid::new_v4(),
            body: patch,
            created_at: now,
            updated_at: now,
        };
        docs.push(doc.clone());
        Ok(doc)
    }
}

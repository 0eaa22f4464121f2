use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, query_builder::QueryBuilder};
use uuid::Uuid;

use super::{
    Collection, Condition, Direction, Document, Query, RepoResult, Repository, RepositoryError,
    SortKey, ensure_object, query::escape_like,
};

const RETURNING: &str = " RETURNING id, body, created_at, updated_at";

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by a single
/// `documents` table holding JSONB bodies. Every query is assembled with
/// `QueryBuilder` so user input only ever reaches the database as bound
/// parameters.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations under `migrations/`.
    pub async fn migrate(&self) -> RepoResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

/// write_error
///
/// Turns a unique index violation into `RepositoryError::Duplicate`. Index
/// names follow `documents_<collection>_<field>_key`, lowercased.
fn write_error(collection: Collection, err: sqlx::Error) -> RepositoryError {
    let field = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            let constraint = db.constraint().unwrap_or_default();
            collection
                .unique_fields()
                .iter()
                .find(|field| constraint.ends_with(&format!("_{}_key", field.to_lowercase())))
                .copied()
        }
        _ => None,
    };
    match field {
        Some(field) => RepositoryError::Duplicate {
            collection: collection.as_str(),
            field,
        },
        None => err.into(),
    }
}

/// push_where
///
/// Appends the collection filter plus one `AND` clause per condition.
fn push_where(builder: &mut QueryBuilder<'_, Postgres>, collection: Collection, query: &Query) {
    builder.push(" WHERE collection = ");
    builder.push_bind(collection.as_str());

    for condition in &query.conditions {
        match condition {
            Condition::Eq { field, value } => {
                builder.push(" AND body -> ");
                builder.push_bind(field.clone());
                builder.push(" = ");
                builder.push_bind(value.clone());
            }
            Condition::Range { field, op, value } => {
                // "C" collation keeps the comparison byte-wise, which is what ISO dates need.
                builder.push(" AND (body ->> ");
                builder.push_bind(field.clone());
                builder.push(r#") COLLATE "C""#);
                builder.push(op.as_sql());
                builder.push_bind(value.clone());
            }
            Condition::CreatedAt { op, at } => {
                builder.push(" AND created_at");
                builder.push(op.as_sql());
                builder.push_bind(*at);
            }
            Condition::Search { fields, term } => {
                let pattern = format!("%{}%", escape_like(term));
                builder.push(" AND (");
                for (index, field) in fields.iter().enumerate() {
                    if index > 0 {
                        builder.push(" OR ");
                    }
                    // Arrays match element by element, like the in-memory backend.
                    builder.push("CASE jsonb_typeof(body -> ");
                    builder.push_bind(field.clone());
                    builder.push(") WHEN 'array' THEN EXISTS (SELECT 1 FROM jsonb_array_elements_text(body -> ");
                    builder.push_bind(field.clone());
                    builder.push(") AS item WHERE item ILIKE ");
                    builder.push_bind(pattern.clone());
                    builder.push(") ELSE body ->> ");
                    builder.push_bind(field.clone());
                    builder.push(" ILIKE ");
                    builder.push_bind(pattern.clone());
                    builder.push(" END");
                }
                builder.push(")");
            }
            Condition::ExcludeId(id) => {
                builder.push(" AND id <> ");
                builder.push_bind(*id);
            }
        }
    }
}

fn push_order_and_limit(builder: &mut QueryBuilder<'_, Postgres>, query: &Query) {
    if !query.sort.is_empty() {
        builder.push(" ORDER BY ");
        for (index, (key, direction)) in query.sort.iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            match key {
                SortKey::CreatedAt => {
                    builder.push("created_at");
                }
                SortKey::Field(field) => {
                    builder.push("body -> ");
                    builder.push_bind(field.clone());
                }
            }
            builder.push(match direction {
                Direction::Asc => " ASC",
                Direction::Desc => " DESC",
            });
        }
        builder.push(", created_at ASC");
    } else {
        builder.push(" ORDER BY created_at ASC");
    }

    if let Some(limit) = query.limit {
        builder.push(" LIMIT ");
        builder.push_bind(limit.max(0));
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn insert(&self, collection: Collection, body: Value) -> RepoResult<Document> {
        ensure_object(&body)?;
        let doc = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            RETURNING id, body, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(collection.as_str())
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| write_error(collection, err))?;

        tracing::debug!(collection = collection.as_str(), id = %doc.id, "document inserted");
        Ok(doc)
    }

    /// find
    ///
    /// Translates the `Query` into a parameterized SELECT. Field sorts use
    /// jsonb ordering, so missing keys land last ascending and first descending.
    async fn find(&self, collection: Collection, query: &Query) -> RepoResult<Vec<Document>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, body, created_at, updated_at FROM documents");
        push_where(&mut builder, collection, query);
        push_order_and_limit(&mut builder, query);

        let docs = builder
            .build_query_as::<Document>()
            .fetch_all(&self.pool)
            .await?;
        Ok(docs)
    }

    async fn get(&self, collection: Collection, id: Uuid) -> RepoResult<Option<Document>> {
        let doc = sqlx::query_as::<_, Document>(
            "SELECT id, body, created_at, updated_at FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }

    async fn count(&self, collection: Collection, query: &Query) -> RepoResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM documents");
        push_where(&mut builder, collection, query);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    /// update
    ///
    /// `body || patch` merges the top-level keys of the patch into the body.
    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Value,
    ) -> RepoResult<Option<Document>> {
        ensure_object(&patch)?;
        let doc = sqlx::query_as::<_, Document>(&format!(
            "UPDATE documents SET body = body || $3, updated_at = now() \
             WHERE collection = $1 AND id = $2{RETURNING}"
        ))
        .bind(collection.as_str())
        .bind(id)
        .bind(patch)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| write_error(collection, err))?;
        Ok(doc)
    }

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
    ) -> RepoResult<Option<Document>> {
        ensure_object(&body)?;
        let doc = sqlx::query_as::<_, Document>(&format!(
            "UPDATE documents SET body = $3, updated_at = now() \
             WHERE collection = $1 AND id = $2{RETURNING}"
        ))
        .bind(collection.as_str())
        .bind(id)
        .bind(body)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| write_error(collection, err))?;
        Ok(doc)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> RepoResult<Option<Document>> {
        let doc = sqlx::query_as::<_, Document>(&format!(
            "DELETE FROM documents WHERE collection = $1 AND id = $2{RETURNING}"
        ))
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }

    async fn delete_many(&self, collection: Collection, ids: &[Uuid]) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = ANY($2)")
            .bind(collection.as_str())
            .bind(ids.to_vec())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_many(
        &self,
        collection: Collection,
        ids: &[Uuid],
        patch: Value,
    ) -> RepoResult<u64> {
        ensure_object(&patch)?;
        let result = sqlx::query(
            "UPDATE documents SET body = body || $3, updated_at = now() \
             WHERE collection = $1 AND id = ANY($2)",
        )
        .bind(collection.as_str())
        .bind(ids.to_vec())
        .bind(patch)
        .execute(&self.pool)
        .await
        .map_err(|err| write_error(collection, err))?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self, collection: Collection) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(collection.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// upsert_singleton
    ///
    /// Merges into the oldest document of the collection, inserting when none
    /// exists. Not atomic across the two statements.
    async fn upsert_singleton(
        &self,
        collection: Collection,
        patch: Value,
    ) -> RepoResult<Document> {
        ensure_object(&patch)?;
        let updated = sqlx::query_as::<_, Document>(&format!(
            "UPDATE documents SET body = body || $2, updated_at = now() \
             WHERE id = (SELECT id FROM documents WHERE collection = $1 \
                         ORDER BY created_at ASC LIMIT 1){RETURNING}"
        ))
        .bind(collection.as_str())
        .bind(patch.clone())
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(doc) => Ok(doc),
            None => self.insert(collection, patch).await,
        }
    }
}

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Stored,
        faculty::{CreateFacultyRequest, Faculty, FacultyFilter, SEARCH_FIELDS, UpdateFacultyRequest},
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::Records;

pub struct FacultyService {
    faculty: Records<Faculty>,
}

fn ordered(query: Query) -> Query {
    query
        .sort_by("order", Direction::Asc)
        .sort_by("name", Direction::Asc)
}

impl FacultyService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            faculty: Records::new(repo, Collection::Faculty, "Faculty member"),
        }
    }

    async fn ensure_unique_email(&self, email: &str, except: Option<Uuid>) -> AppResult<()> {
        let mut query = Query::new().eq("email", email);
        if let Some(id) = except {
            query = query.exclude_id(id);
        }
        if self.faculty.first(&query).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A faculty member with email {email} already exists"
            )));
        }
        Ok(())
    }

    pub async fn create(&self, req: CreateFacultyRequest) -> AppResult<Stored<Faculty>> {
        self.ensure_unique_email(&req.email, None).await?;
        let member = self.faculty.create(&req.into()).await?;
        tracing::info!(id = %member.id, name = %member.data.name, "faculty member created");
        Ok(member)
    }

    pub async fn list(&self, filter: FacultyFilter) -> AppResult<Vec<Stored<Faculty>>> {
        let query = Query::new()
            .eq_opt("department", filter.department.filter(|d| !d.is_empty()))
            .search(SEARCH_FIELDS, filter.search.as_deref().unwrap_or_default());
        self.faculty.list(&ordered(query)).await
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<Stored<Faculty>>> {
        self.faculty
            .list(&ordered(Query::new().search(SEARCH_FIELDS, term)))
            .await
    }

    pub async fn by_leadership(&self, leadership: bool) -> AppResult<Vec<Stored<Faculty>>> {
        self.faculty
            .list(&ordered(Query::new().eq("isLeadershipTeam", leadership)))
            .await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Stored<Faculty>> {
        self.faculty.fetch(id).await
    }

    pub async fn update(&self, id: Uuid, req: UpdateFacultyRequest) -> AppResult<Stored<Faculty>> {
        if let Some(email) = &req.email {
            self.ensure_unique_email(email, Some(id)).await?;
        }
        self.faculty.update(id, &req).await
    }

    pub async fn reorder(&self, id: Uuid, order: i64) -> AppResult<Stored<Faculty>> {
        self.faculty
            .update(id, &serde_json::json!({ "order": order }))
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.faculty.remove(id).await?;
        tracing::info!(id = %id, "faculty member deleted");
        Ok(())
    }
}

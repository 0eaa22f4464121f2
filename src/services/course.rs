use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Stored,
        course::{
            Course, CourseCategory, CourseCategoryRequest, CreateCourseRequest,
            UpdateCourseCategoryRequest, UpdateCourseRequest,
        },
    },
    repository::{Collection, Direction, Query, RepositoryState},
};

use super::Records;

const SEARCH_FIELDS: &[&str] = &["title", "description", "arabicTitle"];

pub struct CourseService {
    courses: Records<Course>,
    categories: Records<CourseCategory>,
}

impl CourseService {
    pub fn new(repo: RepositoryState) -> Self {
        Self {
            courses: Records::new(repo.clone(), Collection::Courses, "Course"),
            categories: Records::new(repo, Collection::CourseCategories, "Course category"),
        }
    }

    async fn ensure_category(&self, id: Uuid) -> AppResult<()> {
        if self.categories.exists(id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!("Course category {id} does not exist")))
        }
    }

    pub async fn create(&self, req: CreateCourseRequest) -> AppResult<Stored<Course>> {
        self.ensure_category(req.category).await?;
        let course = self.courses.create(&req.into()).await?;
        tracing::info!(id = %course.id, title = %course.data.title, "course created");
        Ok(course)
    }

    /// All courses, `order` ascending then newest first.
    pub async fn list(&self) -> AppResult<Vec<Stored<Course>>> {
        self.courses
            .list(
                &Query::new()
                    .sort_by("order", Direction::Asc)
                    .sort_by_created(Direction::Desc),
            )
            .await
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<Stored<Course>>> {
        self.courses
            .list(
                &Query::new()
                    .eq("isActive", true)
                    .search(SEARCH_FIELDS, term)
                    .sort_by("order", Direction::Asc)
                    .sort_by_created(Direction::Desc),
            )
            .await
    }

    pub async fn by_level(&self, level: &str) -> AppResult<Vec<Stored<Course>>> {
        self.courses
            .list(
                &Query::new()
                    .eq("isActive", true)
                    .eq("level", level)
                    .sort_by("order", Direction::Asc)
                    .sort_by_created(Direction::Desc),
            )
            .await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Stored<Course>> {
        self.courses.fetch(id).await
    }

    pub async fn update(&self, id: Uuid, req: UpdateCourseRequest) -> AppResult<Stored<Course>> {
        if let Some(category) = req.category {
            self.ensure_category(category).await?;
        }
        let course = self.courses.update(id, &req).await?;
        tracing::debug!(id = %id, "course updated");
        Ok(course)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Stored<Course>> {
        let course = self.courses.remove(id).await?;
        tracing::info!(id = %id, "course deleted");
        Ok(course)
    }

    // --- Categories ---

    pub async fn categories(&self) -> AppResult<Vec<Stored<CourseCategory>>> {
        self.categories
            .list(&Query::new().sort_by("name", Direction::Asc))
            .await
    }

    pub async fn create_category(
        &self,
        req: CourseCategoryRequest,
    ) -> AppResult<Stored<CourseCategory>> {
        let category = self
            .categories
            .create(&CourseCategory {
                name: req.name,
                arabic_name: req.arabic_name,
            })
            .await?;
        tracing::info!(id = %category.id, "course category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        req: UpdateCourseCategoryRequest,
    ) -> AppResult<Stored<CourseCategory>> {
        self.categories.update(id, &req).await
    }

    /// Refuses to delete a category that courses still point at.
    pub async fn delete_category(&self, id: Uuid) -> AppResult<Stored<CourseCategory>> {
        let in_use = self
            .courses
            .count(&Query::new().eq("category", id.to_string()))
            .await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Course category is used by {in_use} course(s)"
            )));
        }
        let category = self.categories.remove(id).await?;
        tracing::info!(id = %id, "course category deleted");
        Ok(category)
    }
}

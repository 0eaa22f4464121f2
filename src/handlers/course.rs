use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        course::{
            Course, CourseCategory, CourseCategoryRequest, CreateCourseRequest, SearchParams,
            UpdateCourseCategoryRequest, UpdateCourseRequest,
        },
    },
    services::course::CourseService,
    validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
};

/// create_course
///
/// [Admin Route] The referenced category must exist.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Validation failed or unknown category")
    ),
    tag = "courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<Stored<Course>>)> {
    let course = CourseService::new(state.repo).create(payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/courses",
    responses((status = 200, description = "All courses", body = [Course])),
    tag = "courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Course>>>> {
    Ok(Json(CourseService::new(state.repo).list().await?))
}

#[utoipa::path(
    get,
    path = "/courses/search",
    params(SearchParams),
    responses((status = 200, description = "Matching active courses", body = [Course])),
    tag = "courses"
)]
pub async fn search_courses(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> AppResult<Json<Vec<Stored<Course>>>> {
    Ok(Json(CourseService::new(state.repo).search(&params.query).await?))
}

#[utoipa::path(
    get,
    path = "/courses/level/{level}",
    params(("level" = String, Path, description = "Course level")),
    responses((status = 200, description = "Active courses of the level", body = [Course])),
    tag = "courses"
)]
pub async fn courses_by_level(
    State(state): State<AppState>,
    ValidatedPath(level): ValidatedPath<String>,
) -> AppResult<Json<Vec<Stored<Course>>>> {
    Ok(Json(CourseService::new(state.repo).by_level(&level).await?))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Course>>> {
    Ok(Json(CourseService::new(state.repo).get(id).await?))
}

#[utoipa::path(
    patch,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCourseRequest>,
) -> AppResult<Json<Stored<Course>>> {
    Ok(Json(CourseService::new(state.repo).update(id, payload).await?))
}

/// delete_course
///
/// [Admin Route] Responds with the deleted document.
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Deleted course", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<Course>>> {
    Ok(Json(CourseService::new(state.repo).delete(id).await?))
}

// --- Categories ---

#[utoipa::path(
    get,
    path = "/courses/course-categories",
    responses((status = 200, description = "Course categories", body = [CourseCategory])),
    tag = "courses"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<CourseCategory>>>> {
    Ok(Json(CourseService::new(state.repo).categories().await?))
}

#[utoipa::path(
    post,
    path = "/courses/course-categories",
    request_body = CourseCategoryRequest,
    responses((status = 201, description = "Category created", body = CourseCategory)),
    tag = "courses"
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseCategoryRequest>,
) -> AppResult<(StatusCode, Json<Stored<CourseCategory>>)> {
    let category = CourseService::new(state.repo).create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    patch,
    path = "/courses/course-categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateCourseCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CourseCategory),
        (status = 404, description = "Category not found")
    ),
    tag = "courses"
)]
pub async fn update_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCourseCategoryRequest>,
) -> AppResult<Json<Stored<CourseCategory>>> {
    let category = CourseService::new(state.repo)
        .update_category(id, payload)
        .await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/courses/course-categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted category", body = CourseCategory),
        (status = 400, description = "Category still used by courses"),
        (status = 404, description = "Category not found")
    ),
    tag = "courses"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Stored<CourseCategory>>> {
    Ok(Json(CourseService::new(state.repo).delete_category(id).await?))
}

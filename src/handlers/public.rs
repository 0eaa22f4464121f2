use axum::{Json, extract::State};

use crate::{
    AppState,
    error::AppResult,
    models::{
        Stored,
        about::About,
        contact::ContactInfo,
        course::CourseCategory,
        event::Event,
        faculty::Faculty,
        faq::{FaqCategory, FaqView},
        gallery::{GalleryCategory, GalleryView},
        public::{Envelope, PublicCourse, PublicFooter, PublicHome},
    },
    services::public::PublicService,
};

/// home
///
/// [Public Route] Landing page payload wrapped in `{status, data}`.
#[utoipa::path(
    get,
    path = "/public/home",
    responses((status = 200, description = "Landing page data", body = PublicHome)),
    tag = "public"
)]
pub async fn home(State(state): State<AppState>) -> AppResult<Json<Envelope<PublicHome>>> {
    let home = PublicService::new(state.repo).home().await?;
    Ok(Json(Envelope::success(home)))
}

#[utoipa::path(
    get,
    path = "/public/home/courses",
    responses((status = 200, description = "Active courses with category and icon", body = [PublicCourse])),
    tag = "public"
)]
pub async fn home_courses(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<Stored<PublicCourse>>>>> {
    let courses = PublicService::new(state.repo).home_courses().await?;
    Ok(Json(Envelope::success(courses)))
}

#[utoipa::path(
    get,
    path = "/public/faculties",
    responses((status = 200, description = "Faculty outside the leadership team", body = [Faculty])),
    tag = "public"
)]
pub async fn faculties(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Faculty>>>> {
    Ok(Json(PublicService::new(state.repo).faculty(false).await?))
}

#[utoipa::path(
    get,
    path = "/public/faculty",
    responses((status = 200, description = "Leadership team", body = [Faculty])),
    tag = "public"
)]
pub async fn leadership(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Faculty>>>> {
    Ok(Json(PublicService::new(state.repo).faculty(true).await?))
}

#[utoipa::path(
    get,
    path = "/public/gallery",
    responses((status = 200, description = "Gallery", body = [GalleryView])),
    tag = "public"
)]
pub async fn gallery(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<GalleryView>>>> {
    Ok(Json(PublicService::new(state.repo).gallery().await?))
}

#[utoipa::path(
    get,
    path = "/public/gallery/categories",
    responses((status = 200, description = "Gallery categories", body = [GalleryCategory])),
    tag = "public"
)]
pub async fn gallery_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<GalleryCategory>>>> {
    Ok(Json(PublicService::new(state.repo).gallery_categories().await?))
}

#[utoipa::path(
    get,
    path = "/public/events",
    responses((status = 200, description = "Events", body = [Event])),
    tag = "public"
)]
pub async fn events(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<Event>>>> {
    Ok(Json(PublicService::new(state.repo).events().await?))
}

#[utoipa::path(
    get,
    path = "/public/faq",
    responses((status = 200, description = "FAQs", body = [FaqView])),
    tag = "public"
)]
pub async fn faq(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<FaqView>>>> {
    Ok(Json(PublicService::new(state.repo).faq().await?))
}

#[utoipa::path(
    get,
    path = "/public/faq/categories",
    responses((status = 200, description = "FAQ categories", body = [FaqCategory])),
    tag = "public"
)]
pub async fn faq_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<FaqCategory>>>> {
    Ok(Json(PublicService::new(state.repo).faq_categories().await?))
}

#[utoipa::path(
    get,
    path = "/public/contact",
    responses((status = 200, description = "Contact info", body = [ContactInfo])),
    tag = "public"
)]
pub async fn contact(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<ContactInfo>>>> {
    Ok(Json(PublicService::new(state.repo).contact().await?))
}

#[utoipa::path(
    get,
    path = "/public/footer",
    responses((status = 200, description = "Footer and contact info", body = PublicFooter)),
    tag = "public"
)]
pub async fn footer(State(state): State<AppState>) -> AppResult<Json<PublicFooter>> {
    Ok(Json(PublicService::new(state.repo).footer().await?))
}

#[utoipa::path(
    get,
    path = "/public/about-us",
    responses((status = 200, description = "About page documents", body = [About])),
    tag = "public"
)]
pub async fn about(State(state): State<AppState>) -> AppResult<Json<Vec<Stored<About>>>> {
    Ok(Json(PublicService::new(state.repo).about().await?))
}

#[utoipa::path(
    get,
    path = "/public/courses/categories",
    responses((status = 200, description = "Course categories", body = [CourseCategory])),
    tag = "public"
)]
pub async fn course_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Stored<CourseCategory>>>> {
    Ok(Json(PublicService::new(state.repo).course_categories().await?))
}

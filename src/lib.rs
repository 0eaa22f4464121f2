use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    http::HeaderName,
    middleware,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;
pub mod upload;
pub mod validation;

// Routing segregated by access level (public, authenticated, admin).
pub mod routes;
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use repository::{MemoryRepository, PostgresRepository, RepositoryState};

/// ApiDoc
///
/// OpenAPI document assembled from every `#[utoipa::path]` handler and the
/// `ToSchema` models. Served at `/api-docs/openapi.json` outside production.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login, handlers::auth::register, handlers::auth::logout,
        handlers::auth::me, handlers::auth::update_profile, handlers::auth::change_password,
        handlers::auth::verify_token,
        handlers::about::upsert_about, handlers::about::get_about,
        handlers::contact::upsert_info, handlers::contact::get_info, handlers::contact::update_info,
        handlers::contact::submit, handlers::contact::list_submissions,
        handlers::contact::get_submission, handlers::contact::update_submission,
        handlers::contact::delete_submission, handlers::contact::submission_stats,
        handlers::course::create_course, handlers::course::list_courses,
        handlers::course::search_courses, handlers::course::courses_by_level,
        handlers::course::get_course, handlers::course::update_course,
        handlers::course::delete_course, handlers::course::list_categories,
        handlers::course::create_category, handlers::course::update_category,
        handlers::course::delete_category,
        handlers::event::create_event, handlers::event::list_events,
        handlers::event::upcoming_events, handlers::event::past_events,
        handlers::event::get_event, handlers::event::update_event, handlers::event::delete_event,
        handlers::faculty::create_faculty, handlers::faculty::list_faculty,
        handlers::faculty::search_faculty, handlers::faculty::get_faculty,
        handlers::faculty::update_faculty, handlers::faculty::reorder_faculty,
        handlers::faculty::delete_faculty,
        handlers::faq::list_categories, handlers::faq::create_category,
        handlers::faq::update_category, handlers::faq::delete_category,
        handlers::faq::list_faqs, handlers::faq::search_faqs, handlers::faq::create_faq,
        handlers::faq::get_faq, handlers::faq::update_faq, handlers::faq::delete_faq,
        handlers::faq::reorder_faq, handlers::faq::bulk_delete, handlers::faq::bulk_status_update,
        handlers::footer::upsert_footer, handlers::footer::get_footer,
        handlers::footer::update_description, handlers::footer::add_social_link,
        handlers::footer::list_social_links, handlers::footer::update_social_link,
        handlers::footer::delete_social_link,
        handlers::gallery::create_item, handlers::gallery::list_items, handlers::gallery::get_item,
        handlers::gallery::update_item, handlers::gallery::delete_item,
        handlers::gallery::list_categories, handlers::gallery::create_category,
        handlers::gallery::update_category, handlers::gallery::delete_category,
        handlers::homepage::get_home, handlers::homepage::create_hero,
        handlers::homepage::update_hero, handlers::homepage::create_reason,
        handlers::homepage::update_reason, handlers::homepage::delete_reason,
        handlers::service::create_service, handlers::service::list_services,
        handlers::service::services_by_level, handlers::service::get_service,
        handlers::service::update_service, handlers::service::reorder_service,
        handlers::service::delete_service,
        handlers::dashboard::get_stats, handlers::dashboard::get_activity,
        handlers::public::home, handlers::public::home_courses, handlers::public::faculties,
        handlers::public::leadership, handlers::public::gallery,
        handlers::public::gallery_categories, handlers::public::events, handlers::public::faq,
        handlers::public::faq_categories, handlers::public::contact, handlers::public::footer,
        handlers::public::about, handlers::public::course_categories,
    ),
    components(
        schemas(
            error::ErrorBody, models::MessageResponse, models::ReorderRequest,
            models::admin::AdminProfile, models::admin::LoginRequest, models::admin::RegisterRequest,
            models::admin::LoginAdmin, models::admin::LoginResponse,
            models::admin::UpdateProfileRequest, models::admin::ChangePasswordRequest,
            models::admin::TokenStatus,
            models::about::About, models::about::AboutStats, models::about::UpsertAboutRequest,
            models::contact::ContactInfo, models::contact::ContactDetail,
            models::contact::ContactDetailPatch, models::contact::UpdateContactInfoRequest,
            models::contact::ContactSubmission, models::contact::SubmissionStatus,
            models::contact::Priority, models::contact::SubmissionResponse,
            models::contact::InternalNote, models::contact::CreateSubmissionRequest,
            models::contact::UpdateSubmissionRequest, models::contact::SubmissionStats,
            models::contact::StatusCounts, models::contact::PriorityCounts,
            models::course::Course, models::course::CreateCourseRequest,
            models::course::UpdateCourseRequest, models::course::CourseCategory,
            models::course::CourseCategoryRequest, models::course::UpdateCourseCategoryRequest,
            models::course::CategoryRef,
            models::event::Event, models::event::CreateEventRequest, models::event::UpdateEventRequest,
            models::faculty::Faculty, models::faculty::SocialLinks,
            models::faculty::CreateFacultyRequest, models::faculty::UpdateFacultyRequest,
            models::faq::Faq, models::faq::FaqView, models::faq::FaqCategoryRef,
            models::faq::CreateFaqRequest, models::faq::UpdateFaqRequest,
            models::faq::BulkDeleteRequest, models::faq::BulkStatusRequest,
            models::faq::FaqCategory, models::faq::CreateFaqCategoryRequest,
            models::faq::UpdateFaqCategoryRequest,
            models::footer::Footer, models::footer::SocialLink, models::footer::UpsertFooterRequest,
            models::footer::UpdateFooterDescriptionRequest, models::footer::CreateSocialLinkRequest,
            models::footer::UpdateSocialLinkRequest,
            models::gallery::GalleryItem, models::gallery::GalleryView,
            models::gallery::GalleryCategoryRef, models::gallery::GalleryUpload,
            models::gallery::GalleryCategory, models::gallery::CreateGalleryCategoryRequest,
            models::gallery::UpdateGalleryCategoryRequest,
            models::homepage::HeroSection, models::homepage::UpdateHeroSectionRequest,
            models::homepage::WhyChooseUs, models::homepage::UpdateWhyChooseUsRequest,
            models::homepage::HomePage,
            models::service::Service, models::service::ServiceLevel,
            models::service::CreateServiceRequest, models::service::UpdateServiceRequest,
            models::dashboard::DashboardStats, models::dashboard::Overview,
            models::dashboard::Activity, models::dashboard::ActivityKind,
            models::public::PublicHome, models::public::PublicCourse, models::public::PublicFooter,
        )
    ),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "about", description = "About page"),
        (name = "contact", description = "Contact info and submissions"),
        (name = "courses", description = "Courses and course categories"),
        (name = "events", description = "Events"),
        (name = "faculty", description = "Faculty members"),
        (name = "faq", description = "FAQs and FAQ categories"),
        (name = "footer", description = "Site footer"),
        (name = "gallery", description = "Gallery and gallery categories"),
        (name = "homepage", description = "Hero section and why-choose-us items"),
        (name = "services", description = "Offered services"),
        (name = "dashboard", description = "Admin dashboard"),
        (name = "public", description = "Aggregated website payloads")
    )
)]
pub struct ApiDoc;

/// AppState
///
/// The shared, cheaply clonable state handed to every handler: the document
/// store and the immutable configuration.
#[derive(Clone)]
pub struct AppState {
    /// Document store (Postgres or in-memory), behind the `Repository` trait.
    pub repo: RepositoryState,
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Lets extractors such as `AuthUser` pull single components out of `AppState`.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the routing tree, applies the access guards per router and the
/// global observability layers, and registers the state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");
    let body_limit = state.config.max_body_bytes;
    let serve_docs = !state.config.is_production();

    // 2. Base Router Assembly
    let mut base_router = Router::new()
        .merge(public::public_routes())
        .merge(
            authenticated::authenticated_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::auth_middleware,
            )),
        )
        .merge(
            admin::admin_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::admin_middleware,
            )),
        )
        .with_state(state);

    // Documentation is not exposed in production.
    if serve_docs {
        base_router = base_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    // 3. Observability and Correlation Layers
    base_router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                // 3a. A UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. One span per request, carrying the request id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Echo x-request-id back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS
        .layer(cors)
}

/// trace_span_logger
///
/// Span factory for `TraceLayer`: method, URI and the `x-request-id` so every
/// log line of a request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}

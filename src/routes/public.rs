use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints reachable without a token: every read the website needs, the
/// login/register gateway and the contact form.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for load balancers.
        .route("/health", get(|| async { "ok" }))
        // --- Auth gateway ---
        .route("/auth/login", post(handlers::auth::login))
        // 403 unless ALLOW_ADMIN_REGISTRATION is on.
        .route("/auth/register", post(handlers::auth::register))
        // --- Site content ---
        .route("/aboutus", get(handlers::about::get_about))
        .route("/contact/info", get(handlers::contact::get_info))
        .route("/contact/submit", post(handlers::contact::submit))
        .route("/courses", get(handlers::course::list_courses))
        .route("/courses/search", get(handlers::course::search_courses))
        .route("/courses/level/{level}", get(handlers::course::courses_by_level))
        .route(
            "/courses/course-categories",
            get(handlers::course::list_categories),
        )
        .route("/courses/{id}", get(handlers::course::get_course))
        .route("/events", get(handlers::event::list_events))
        .route("/events/upcoming", get(handlers::event::upcoming_events))
        .route("/events/past", get(handlers::event::past_events))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/faculty", get(handlers::faculty::list_faculty))
        .route("/faculty/search", get(handlers::faculty::search_faculty))
        .route("/faculty/{id}", get(handlers::faculty::get_faculty))
        .route("/faq", get(handlers::faq::list_faqs))
        .route("/faq/search", get(handlers::faq::search_faqs))
        .route("/faq/categories", get(handlers::faq::list_categories))
        .route("/faq/{id}", get(handlers::faq::get_faq))
        .route("/gallery", get(handlers::gallery::list_items))
        .route("/gallery/category", get(handlers::gallery::list_categories))
        .route("/gallery/{id}", get(handlers::gallery::get_item))
        .route("/services", get(handlers::service::list_services))
        .route(
            "/services/level/{level}",
            get(handlers::service::services_by_level),
        )
        .route("/services/{id}", get(handlers::service::get_service))
        .route("/footer", get(handlers::footer::get_footer))
        .route("/admin/home", get(handlers::homepage::get_home))
        // --- Aggregated website payloads ---
        .route("/public/home", get(handlers::public::home))
        .route("/public/home/courses", get(handlers::public::home_courses))
        .route("/public/faculties", get(handlers::public::faculties))
        .route("/public/faculty", get(handlers::public::leadership))
        .route("/public/gallery", get(handlers::public::gallery))
        .route(
            "/public/gallery/categories",
            get(handlers::public::gallery_categories),
        )
        .route("/public/events", get(handlers::public::events))
        .route("/public/faq", get(handlers::public::faq))
        .route("/public/faq/categories", get(handlers::public::faq_categories))
        .route("/public/contact", get(handlers::public::contact))
        .route("/public/footer", get(handlers::public::footer))
        .route("/public/about-us", get(handlers::public::about))
        .route(
            "/public/courses/categories",
            get(handlers::public::course_categories),
        )
}

use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Admin Router Module
///
/// Every content write plus the back-office reads (dashboard, contact inbox).
/// The whole router sits behind `admin_middleware`: a valid token for an
/// active account carrying the `admin` role.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/aboutus", post(handlers::about::upsert_about))
        // --- Contact ---
        .route(
            "/contact/info",
            post(handlers::contact::upsert_info).patch(handlers::contact::update_info),
        )
        .route(
            "/contact/submissions",
            get(handlers::contact::list_submissions),
        )
        .route(
            "/contact/submissions/stats/overview",
            get(handlers::contact::submission_stats),
        )
        .route(
            "/contact/submissions/{id}",
            get(handlers::contact::get_submission)
                .put(handlers::contact::update_submission)
                .delete(handlers::contact::delete_submission),
        )
        // --- Courses ---
        .route("/courses", post(handlers::course::create_course))
        .route(
            "/courses/{id}",
            patch(handlers::course::update_course).delete(handlers::course::delete_course),
        )
        .route(
            "/courses/course-categories",
            post(handlers::course::create_category),
        )
        .route(
            "/courses/course-categories/{id}",
            patch(handlers::course::update_category).delete(handlers::course::delete_category),
        )
        // --- Events ---
        .route("/events", post(handlers::event::create_event))
        .route(
            "/events/{id}",
            patch(handlers::event::update_event).delete(handlers::event::delete_event),
        )
        // --- Faculty ---
        .route("/faculty", post(handlers::faculty::create_faculty))
        .route(
            "/faculty/{id}",
            patch(handlers::faculty::update_faculty).delete(handlers::faculty::delete_faculty),
        )
        .route(
            "/faculty/{id}/reorder",
            patch(handlers::faculty::reorder_faculty),
        )
        // --- FAQ ---
        .route("/faq", post(handlers::faq::create_faq))
        .route("/faq/bulk-delete", post(handlers::faq::bulk_delete))
        .route(
            "/faq/bulk-status-update",
            post(handlers::faq::bulk_status_update),
        )
        .route("/faq/categories", post(handlers::faq::create_category))
        .route(
            "/faq/categories/{id}",
            patch(handlers::faq::update_category).delete(handlers::faq::delete_category),
        )
        .route(
            "/faq/{id}",
            patch(handlers::faq::update_faq).delete(handlers::faq::delete_faq),
        )
        .route("/faq/{id}/reorder", patch(handlers::faq::reorder_faq))
        // --- Gallery (multipart writes) ---
        .route("/gallery", post(handlers::gallery::create_item))
        .route(
            "/gallery/{id}",
            patch(handlers::gallery::update_item).delete(handlers::gallery::delete_item),
        )
        .route("/gallery/category", post(handlers::gallery::create_category))
        .route(
            "/gallery/category/{id}",
            patch(handlers::gallery::update_category).delete(handlers::gallery::delete_category),
        )
        // --- Services ---
        .route("/services", post(handlers::service::create_service))
        .route(
            "/services/{id}",
            patch(handlers::service::update_service).delete(handlers::service::delete_service),
        )
        .route(
            "/services/{id}/reorder",
            patch(handlers::service::reorder_service),
        )
        // --- Footer ---
        .route("/footer", post(handlers::footer::upsert_footer))
        .route(
            "/footer/description",
            patch(handlers::footer::update_description),
        )
        .route(
            "/footer/social-links",
            post(handlers::footer::add_social_link).get(handlers::footer::list_social_links),
        )
        .route(
            "/footer/social-links/{link_id}",
            patch(handlers::footer::update_social_link)
                .delete(handlers::footer::delete_social_link),
        )
        // --- Homepage ---
        .route("/admin/hero-section", post(handlers::homepage::create_hero))
        .route(
            "/admin/hero-section/{id}",
            patch(handlers::homepage::update_hero),
        )
        .route(
            "/admin/why-choose-us",
            post(handlers::homepage::create_reason),
        )
        .route(
            "/admin/why-choose-us/{id}",
            patch(handlers::homepage::update_reason).delete(handlers::homepage::delete_reason),
        )
        // --- Dashboard ---
        .route("/dashboard", get(handlers::dashboard::get_stats))
        .route("/dashboard/activity", get(handlers::dashboard::get_activity))
}


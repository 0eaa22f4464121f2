use academy_cms::{
    AppConfig, AppState,
    auth::AuthUser,
    error::AppError,
    handlers,
    models::{
        ReorderRequest, Stored,
        about::AboutView,
        contact::{DateRange, Priority, SubmissionFilter, SubmissionStatus, UpdateSubmissionRequest},
        course::{Course, SearchParams},
        faculty::FacultyFilter,
        faq::{BulkDeleteRequest, BulkStatusRequest},
        footer::UpdateSocialLinkRequest,
        gallery::GalleryForm,
        service::ServiceLevel,
    },
    repository::{MemoryRepository, RepositoryState},
    services::gallery::GalleryService,
    validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
};
use axum::{extract::State, http::StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::test;
use uuid::Uuid;

// --- Helpers ---

fn test_state() -> AppState {
    AppState {
        repo: Arc::new(MemoryRepository::new()) as RepositoryState,
        config: AppConfig::default(),
    }
}

/// Builds a request body the way the JSON extractor would.
fn body<T: DeserializeOwned>(value: Value) -> ValidatedJson<T> {
    ValidatedJson(serde_json::from_value(value).expect("test payload must deserialize"))
}

fn acting_admin() -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        email: "admin@academy.edu".into(),
        roles: vec!["admin".into()],
    }
}

fn course_payload(category: Uuid, title: &str, order: i64) -> Value {
    json!({
        "title": title,
        "arabicTitle": "دورة",
        "category": category,
        "description": format!("{title} for beginners"),
        "arabicDescription": "وصف",
        "level": "Beginner",
        "arabicLevel": "مبتدئ",
        "duration": "8 weeks",
        "arabicDuration": "٨ أسابيع",
        "schedule": "Sun-Tue",
        "arabicSchedule": "الأحد-الثلاثاء",
        "features": ["Certificate"],
        "arabicFeatures": ["شهادة"],
        "image": "course.png",
        "order": order
    })
}

fn event_payload(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "arabicTitle": "فعالية",
        "description": "Details",
        "arabicDescription": "تفاصيل",
        "date": date,
        "time": "10:00",
        "location": "Main hall",
        "arabicLocation": "القاعة الرئيسية",
        "thumbnail": "thumb.png",
        "eventImages": ["a.png"]
    })
}

fn faculty_payload(name: &str, email: &str, leadership: bool) -> Value {
    json!({
        "name": name,
        "arabicName": "اسم",
        "position": "Lecturer",
        "arabicPosition": "محاضر",
        "department": "Languages",
        "email": email,
        "bio": "Bio",
        "arabicBio": "سيرة",
        "isLeadershipTeam": leadership
    })
}

fn submission_payload(name: &str, subject: &str) -> Value {
    json!({
        "name": name,
        "email": "visitor@example.com",
        "subject": subject,
        "message": "Please call me back."
    })
}

async fn create_course_category(state: &AppState, name: &str) -> Uuid {
    let (_, category) = handlers::course::create_category(
        State(state.clone()),
        body(json!({ "name": name, "arabicName": "فئة" })),
    )
    .await
    .unwrap();
    category.0.id
}

// --- Courses ---

#[test]
async fn test_course_requires_existing_category() {
    let state = test_state();
    let result = handlers::course::create_course(
        State(state),
        body(course_payload(Uuid::new_v4(), "Algebra", 0)),
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[test]
async fn test_course_lifecycle() {
    let state = test_state();
    let category = create_course_category(&state, "Mathematics").await;

    let (status, first) = handlers::course::create_course(
        State(state.clone()),
        body(course_payload(category, "Geometry", 2)),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    handlers::course::create_course(
        State(state.clone()),
        body(course_payload(category, "Algebra", 1)),
    )
    .await
    .unwrap();

    let list = handlers::course::list_courses(State(state.clone())).await.unwrap().0;
    let titles: Vec<_> = list.iter().map(|c| c.data.title.as_str()).collect();
    assert_eq!(titles, vec!["Algebra", "Geometry"], "sorted by order first");

    let found = handlers::course::search_courses(
        State(state.clone()),
        ValidatedQuery(SearchParams { query: "geometry FOR".into() }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(found.len(), 1);

    let by_level = handlers::course::courses_by_level(State(state.clone()), ValidatedPath("Beginner".into()))
        .await
        .unwrap()
        .0;
    assert_eq!(by_level.len(), 2);

    // A category still in use cannot be removed.
    let blocked = handlers::course::delete_category(State(state.clone()), ValidatedPath(category)).await;
    assert!(matches!(blocked, Err(AppError::BadRequest(_))));

    let updated = handlers::course::update_course(
        State(state.clone()),
        ValidatedPath(first.0.id),
        body(json!({ "isActive": false })),
    )
    .await
    .unwrap()
    .0;
    assert!(!updated.data.is_active);
    assert_eq!(updated.data.title, "Geometry");

    let deleted = handlers::course::delete_course(State(state.clone()), ValidatedPath(first.0.id))
        .await
        .unwrap()
        .0;
    assert_eq!(deleted.id, first.0.id);
    let missing = handlers::course::get_course(State(state), ValidatedPath(first.0.id)).await;
    assert!(matches!(missing, Err(AppError::NotFound(msg)) if msg == "Course not found"));
}

#[test]
async fn test_course_ties_list_newest_first() {
    let state = test_state();
    let category = create_course_category(&state, "Mathematics").await;
    for title in ["Old Math", "New Math"] {
        handlers::course::create_course(
            State(state.clone()),
            body(course_payload(category, title, 0)),
        )
        .await
        .unwrap();
    }
    let titles = |courses: Vec<Stored<Course>>| {
        courses.into_iter().map(|c| c.data.title).collect::<Vec<_>>()
    };
    let expected = vec!["New Math".to_string(), "Old Math".to_string()];

    let listed = handlers::course::list_courses(State(state.clone())).await.unwrap().0;
    assert_eq!(titles(listed), expected);
    let found = handlers::course::search_courses(
        State(state.clone()),
        ValidatedQuery(SearchParams { query: "math".into() }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(titles(found), expected);
    let by_level = handlers::course::courses_by_level(State(state), ValidatedPath("Beginner".into()))
        .await
        .unwrap()
        .0;
    assert_eq!(titles(by_level), expected);
}

// --- Events ---

#[test]
async fn test_events_split_around_today() {
    let state = test_state();
    for (title, date) in [
        ("Alumni night", "2001-03-01"),
        ("Graduation", "2999-06-01"),
        ("Open day", "2999-01-01"),
        ("Orientation", "2000-09-01"),
    ] {
        handlers::event::create_event(State(state.clone()), body(event_payload(title, date)))
            .await
            .unwrap();
    }

    let upcoming = handlers::event::upcoming_events(State(state.clone())).await.unwrap().0;
    let titles: Vec<_> = upcoming.iter().map(|e| e.data.title.as_str()).collect();
    assert_eq!(titles, vec!["Open day", "Graduation"]);

    let past = handlers::event::past_events(State(state.clone())).await.unwrap().0;
    let titles: Vec<_> = past.iter().map(|e| e.data.title.as_str()).collect();
    assert_eq!(titles, vec!["Alumni night", "Orientation"], "most recent past first");

    let all = handlers::event::list_events(State(state.clone())).await.unwrap().0;
    assert_eq!(all.first().map(|e| e.data.date.as_str()), Some("2000-09-01"));

    // Updating the text keeps the gallery images.
    let id = upcoming[0].id;
    let updated = handlers::event::update_event(
        State(state),
        ValidatedPath(id),
        body(json!({ "title": "Open day 2999" })),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(updated.data.event_images, vec!["a.png".to_string()]);
}

// --- Faculty ---

#[test]
async fn test_faculty_listing_and_uniqueness() {
    let state = test_state();
    let (_, dean) = handlers::faculty::create_faculty(
        State(state.clone()),
        body(faculty_payload("Dr. Noura", "noura@academy.edu", true)),
    )
    .await
    .unwrap();
    handlers::faculty::create_faculty(
        State(state.clone()),
        body(faculty_payload("Ahmed", "ahmed@academy.edu", false)),
    )
    .await
    .unwrap();

    let duplicate = handlers::faculty::create_faculty(
        State(state.clone()),
        body(faculty_payload("Someone", "noura@academy.edu", false)),
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let filtered = handlers::faculty::list_faculty(
        State(state.clone()),
        ValidatedQuery(FacultyFilter {
            department: Some("Languages".into()),
            search: Some("ahm".into()),
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].data.name, "Ahmed");

    let leadership = handlers::public::leadership(State(state.clone())).await.unwrap().0;
    assert_eq!(leadership.len(), 1);
    let others = handlers::public::faculties(State(state.clone())).await.unwrap().0;
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].data.name, "Ahmed");

    let reordered = handlers::faculty::reorder_faculty(
        State(state.clone()),
        ValidatedPath(dean.0.id),
        ValidatedJson(ReorderRequest { order: 7 }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(reordered.data.order, 7);

    let status = handlers::faculty::delete_faculty(State(state.clone()), ValidatedPath(dean.0.id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let again = handlers::faculty::delete_faculty(State(state), ValidatedPath(dean.0.id)).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
}

// --- FAQ ---

#[test]
async fn test_faq_categories_and_bulk_operations() {
    let state = test_state();
    let (_, category) = handlers::faq::create_category(
        State(state.clone()),
        body(json!({ "name": "Admissions", "arabicName": "القبول" })),
    )
    .await
    .unwrap();
    let category_id = category.0.id;

    let clash = handlers::faq::create_category(
        State(state.clone()),
        body(json!({ "name": "Admissions", "arabicName": "أخرى" })),
    )
    .await;
    assert!(matches!(clash, Err(AppError::Conflict(_))));

    let orphan = handlers::faq::create_faq(
        State(state.clone()),
        body(json!({
            "question": "Q", "arabicQuestion": "س", "answer": "A", "arabicAnswer": "ج",
            "category": Uuid::new_v4()
        })),
    )
    .await;
    assert!(matches!(orphan, Err(AppError::BadRequest(_))));

    let mut ids = Vec::new();
    for (question, order) in [("How do I apply?", 2), ("When are exams?", 1)] {
        let (_, faq) = handlers::faq::create_faq(
            State(state.clone()),
            body(json!({
                "question": question, "arabicQuestion": "س",
                "answer": "See the website", "arabicAnswer": "ج",
                "category": category_id, "order": order
            })),
        )
        .await
        .unwrap();
        let populated = faq.0.data.category.as_ref().map(|c| c.name.clone());
        assert_eq!(populated.as_deref(), Some("Admissions"));
        ids.push(faq.0.id);
    }

    let list = handlers::faq::list_faqs(State(state.clone())).await.unwrap().0;
    assert_eq!(list[0].data.question, "When are exams?");

    let in_use = handlers::faq::delete_category(State(state.clone()), ValidatedPath(category_id)).await;
    assert!(matches!(in_use, Err(AppError::BadRequest(_))));

    let message = handlers::faq::bulk_status_update(
        State(state.clone()),
        ValidatedJson(BulkStatusRequest {
            ids: ids.clone(),
            is_active: false,
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(message.message, "2 FAQs updated successfully");
    let faq = handlers::faq::get_faq(State(state.clone()), ValidatedPath(ids[0])).await.unwrap().0;
    assert!(!faq.data.is_active);

    let message = handlers::faq::bulk_delete(
        State(state.clone()),
        ValidatedJson(BulkDeleteRequest { ids }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(message.message, "2 FAQs deleted successfully");

    let removed = handlers::faq::delete_category(State(state), ValidatedPath(category_id))
        .await
        .unwrap()
        .0;
    assert_eq!(removed.data.name, "Admissions");
}

#[test]
async fn test_faq_search_and_reorder() {
    let state = test_state();
    let (_, category) = handlers::faq::create_category(
        State(state.clone()),
        body(json!({ "name": "Exams", "arabicName": "الامتحانات" })),
    )
    .await
    .unwrap();

    let mut ids = Vec::new();
    for (question, answer, order) in [
        ("How do I apply?", "Fill in the online form", 1),
        ("When are exams?", "Every June", 2),
    ] {
        let (_, faq) = handlers::faq::create_faq(
            State(state.clone()),
            body(json!({
                "question": question, "arabicQuestion": "س",
                "answer": answer, "arabicAnswer": "ج",
                "category": category.0.id, "order": order
            })),
        )
        .await
        .unwrap();
        ids.push(faq.0.id);
    }

    let by_question = handlers::faq::search_faqs(
        State(state.clone()),
        ValidatedQuery(SearchParams { query: "EXAMS".into() }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(by_question.len(), 1);
    assert_eq!(by_question[0].data.question, "When are exams?");
    assert_eq!(
        by_question[0].data.category.as_ref().map(|c| c.name.as_str()),
        Some("Exams")
    );
    let by_answer = handlers::faq::search_faqs(
        State(state.clone()),
        ValidatedQuery(SearchParams { query: "online".into() }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(by_answer.len(), 1);
    assert_eq!(by_answer[0].id, ids[0]);

    let moved = handlers::faq::reorder_faq(
        State(state.clone()),
        ValidatedPath(ids[1]),
        ValidatedJson(ReorderRequest { order: 0 }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(moved.data.order, 0);
    assert!(moved.data.category.is_some());

    let list = handlers::faq::list_faqs(State(state.clone())).await.unwrap().0;
    assert_eq!(list[0].id, ids[1]);

    let unknown = handlers::faq::reorder_faq(
        State(state),
        ValidatedPath(Uuid::new_v4()),
        ValidatedJson(ReorderRequest { order: 3 }),
    )
    .await;
    assert!(matches!(unknown, Err(AppError::NotFound(msg)) if msg == "FAQ not found"));
}

// --- Contact ---

#[test]
async fn test_contact_info_singleton() {
    let state = test_state();
    assert!(handlers::contact::get_info(State(state.clone())).await.unwrap().0.is_none());

    let missing = handlers::contact::update_info(
        State(state.clone()),
        body(json!({ "whatsapp": "+966500000000" })),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let detail = |value: &str| {
        json!({ "label": "L", "value": value, "arabicLabel": "ل", "arabicValue": value })
    };
    let (status, saved) = handlers::contact::upsert_info(
        State(state.clone()),
        body(json!({
            "whatsapp": "+966500000000",
            "address": detail("Riyadh"),
            "phone": detail("+966110000000"),
            "email": detail("info@academy.edu"),
            "officeHours": detail("9-5")
        })),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let updated = handlers::contact::update_info(
        State(state.clone()),
        body(json!({ "address": { "value": "Jeddah" } })),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(updated.id, saved.0.id);
    assert_eq!(updated.data.address.value, "Jeddah");
    assert_eq!(updated.data.address.label, "L", "nested fields merge");
}

#[test]
async fn test_contact_submission_workflow() {
    let state = test_state();
    let (status, first) = handlers::contact::submit(
        State(state.clone()),
        body(submission_payload("Sara", "Enrollment")),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first.0.data.status, SubmissionStatus::Pending);
    assert_eq!(first.0.data.priority, Priority::Medium);

    handlers::contact::submit(State(state.clone()), body(submission_payload("Omar", "Fees")))
        .await
        .unwrap();

    let admin = acting_admin();
    let admin_id = admin.id;
    let replied = handlers::contact::update_submission(
        admin,
        State(state.clone()),
        ValidatedPath(first.0.id),
        ValidatedJson(UpdateSubmissionRequest {
            response_message: Some("Classes start in September.".into()),
            priority: Some(Priority::High),
            internal_note: Some("Called back".into()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(replied.data.status, SubmissionStatus::Replied);
    assert_eq!(replied.data.response.as_ref().map(|r| r.responded_by), Some(admin_id));
    assert_eq!(replied.data.internal_notes.len(), 1);

    let filtered = handlers::contact::list_submissions(
        State(state.clone()),
        ValidatedQuery(SubmissionFilter {
            status: Some(SubmissionStatus::Pending),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].data.name, "Omar");

    let searched = handlers::contact::list_submissions(
        State(state.clone()),
        ValidatedQuery(SubmissionFilter {
            search: Some("enroll".into()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(searched.len(), 1);

    let stats = handlers::contact::submission_stats(State(state.clone()), ValidatedQuery(DateRange::default()))
        .await
        .unwrap()
        .0;
    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_status.pending, 1);
    assert_eq!(stats.by_status.replied, 1);
    assert_eq!(stats.by_priority.high, 1);
    assert_eq!(stats.by_priority.medium, 1);

    let future = handlers::contact::submission_stats(
        State(state.clone()),
        ValidatedQuery(DateRange {
            start_date: Some("2999-01-01".into()),
            end_date: None,
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(future.total, 0);

    let bad_date = handlers::contact::submission_stats(
        State(state.clone()),
        ValidatedQuery(DateRange {
            start_date: Some("yesterday".into()),
            end_date: None,
        }),
    )
    .await;
    assert!(matches!(bad_date, Err(AppError::BadRequest(_))));

    let status = handlers::contact::delete_submission(State(state.clone()), ValidatedPath(first.0.id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let gone = handlers::contact::get_submission(State(state), ValidatedPath(first.0.id)).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));
}

// --- Footer ---

#[test]
async fn test_footer_social_links() {
    let state = test_state();
    let missing = handlers::footer::add_social_link(
        State(state.clone()),
        body(json!({ "platform": "x", "url": "https://x.com/academy" })),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound(msg)) if msg == "Footer not found"));

    handlers::footer::upsert_footer(
        State(state.clone()),
        body(json!({ "description": "Learning since 1999", "arabicDescription": "نتعلم" })),
    )
    .await
    .unwrap();

    let (_, footer) = handlers::footer::add_social_link(
        State(state.clone()),
        body(json!({ "platform": "x", "url": "https://x.com/academy" })),
    )
    .await
    .unwrap();
    let link_id = footer.0.data.social_links[0].id;

    // Re-saving the description leaves links alone.
    handlers::footer::upsert_footer(
        State(state.clone()),
        body(json!({ "description": "Learning since 2000" })),
    )
    .await
    .unwrap();
    let blank = handlers::footer::update_description(
        State(state.clone()),
        body(json!({ "description": "   " })),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(blank.data.description, "Learning since 2000");
    assert_eq!(blank.data.social_links.len(), 1);

    let updated = handlers::footer::update_social_link(
        State(state.clone()),
        ValidatedPath(link_id),
        ValidatedJson(UpdateSocialLinkRequest {
            url: Some("https://x.com/academy_sa".into()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(updated.data.social_links[0].url, "https://x.com/academy_sa");
    assert_eq!(updated.data.social_links[0].platform, "x");

    let unknown = handlers::footer::delete_social_link(State(state.clone()), ValidatedPath(Uuid::new_v4())).await;
    assert!(matches!(unknown, Err(AppError::NotFound(msg)) if msg == "Social link not found"));

    handlers::footer::delete_social_link(State(state.clone()), ValidatedPath(link_id))
        .await
        .unwrap();
    let links = handlers::footer::list_social_links(State(state)).await.unwrap().0;
    assert!(links.is_empty());
}

#[test]
async fn test_public_footer_combines_footer_and_contact() {
    let state = test_state();
    let empty = handlers::public::footer(State(state.clone())).await.unwrap().0;
    assert!(empty.footer.is_empty());
    assert!(empty.contact.is_empty());

    handlers::footer::upsert_footer(
        State(state.clone()),
        body(json!({ "description": "Learning since 1999", "arabicDescription": "نتعلم" })),
    )
    .await
    .unwrap();
    let detail = json!({ "label": "L", "value": "v", "arabicLabel": "ل", "arabicValue": "v" });
    handlers::contact::upsert_info(
        State(state.clone()),
        body(json!({
            "whatsapp": "+966500000000",
            "address": detail, "phone": detail, "email": detail, "officeHours": detail
        })),
    )
    .await
    .unwrap();

    let public = handlers::public::footer(State(state)).await.unwrap().0;
    assert_eq!(public.footer.len(), 1);
    assert_eq!(public.footer[0].data.description, "Learning since 1999");
    assert_eq!(public.contact.len(), 1);
    assert_eq!(public.contact[0].data.whatsapp, "+966500000000");
}

// --- About / homepage / services ---

#[test]
async fn test_about_placeholder_until_saved() {
    let state = test_state();
    let placeholder = handlers::about::get_about(State(state.clone())).await.unwrap().0;
    assert!(matches!(placeholder, AboutView::Placeholder(_)));

    handlers::about::upsert_about(
        State(state.clone()),
        body(json!({
            "title": "About us", "titleArabic": "من نحن",
            "description": "d", "descriptionArabic": "و",
            "stats": { "studentsEnrolled": 1200, "successRate": 95, "expertEducators": 40, "yearsOfExcellence": 12 },
            "mission": "m", "missionArabic": "م", "vision": "v", "visionArabic": "ر"
        })),
    )
    .await
    .unwrap();
    let stored = handlers::about::get_about(State(state.clone())).await.unwrap().0;
    assert!(matches!(stored, AboutView::Stored(ref about) if about.data.stats.success_rate == 95));

    let public = handlers::public::about(State(state)).await.unwrap().0;
    assert_eq!(public.len(), 1);
}

#[test]
async fn test_hero_section_is_replaced() {
    let state = test_state();
    let hero = |title: &str| {
        body(json!({
            "title": title, "arabicTitle": "عنوان",
            "subtitle": "Sub", "arabicSubtitle": "فرعي"
        }))
    };
    handlers::homepage::create_hero(State(state.clone()), hero("First")).await.unwrap();
    handlers::homepage::create_hero(State(state.clone()), hero("Second")).await.unwrap();
    handlers::homepage::create_reason(
        State(state.clone()),
        body(json!({
            "title": "Experts", "arabicTitle": "خبراء",
            "description": "Certified teachers", "arabicDescription": "معلمون"
        })),
    )
    .await
    .unwrap();

    let home = handlers::homepage::get_home(State(state)).await.unwrap().0;
    assert_eq!(home.hero_section.map(|h| h.data.title), Some("Second".to_string()));
    assert_eq!(home.why_choose_us.len(), 1);
}

#[test]
async fn test_hero_and_reasons_are_editable() {
    let state = test_state();
    let (_, hero) = handlers::homepage::create_hero(
        State(state.clone()),
        body(json!({
            "title": "Welcome", "arabicTitle": "مرحبا",
            "subtitle": "Learn with us", "arabicSubtitle": "تعلم معنا"
        })),
    )
    .await
    .unwrap();

    let edited = handlers::homepage::update_hero(
        State(state.clone()),
        ValidatedPath(hero.0.id),
        body(json!({ "title": "Welcome back" })),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(edited.data.title, "Welcome back");
    assert_eq!(edited.data.subtitle, "Learn with us");

    let unknown = handlers::homepage::update_hero(
        State(state.clone()),
        ValidatedPath(Uuid::new_v4()),
        body(json!({ "title": "Nobody" })),
    )
    .await;
    assert!(matches!(unknown, Err(AppError::NotFound(msg)) if msg == "Hero section not found"));

    let (_, reason) = handlers::homepage::create_reason(
        State(state.clone()),
        body(json!({
            "title": "Experts", "arabicTitle": "خبراء",
            "description": "Certified teachers", "arabicDescription": "معلمون"
        })),
    )
    .await
    .unwrap();
    let reason_id = reason.0.id;

    let edited = handlers::homepage::update_reason(
        State(state.clone()),
        ValidatedPath(reason_id),
        body(json!({ "description": "Native speakers" })),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(edited.data.description, "Native speakers");
    assert_eq!(edited.data.title, "Experts");

    let removed = handlers::homepage::delete_reason(State(state.clone()), ValidatedPath(reason_id))
        .await
        .unwrap()
        .0;
    assert_eq!(removed.id, reason_id);
    let again = handlers::homepage::delete_reason(State(state.clone()), ValidatedPath(reason_id)).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    let home = handlers::homepage::get_home(State(state)).await.unwrap().0;
    assert!(home.why_choose_us.is_empty());
    assert_eq!(home.hero_section.map(|h| h.data.title), Some("Welcome back".to_string()));
}

#[test]
async fn test_service_soft_delete() {
    let state = test_state();
    let (_, service) = handlers::service::create_service(
        State(state.clone()),
        body(json!({
            "icon": "📘", "title": "IELTS", "arabicTitle": "آيلتس",
            "description": "Preparation", "features": ["Mock tests"],
            "duration": "8 weeks", "schedule": "Evenings", "price": "1500",
            "level": "Advanced"
        })),
    )
    .await
    .unwrap();

    let advanced = handlers::service::services_by_level(State(state.clone()), ValidatedPath(ServiceLevel::Advanced))
        .await
        .unwrap()
        .0;
    assert_eq!(advanced.len(), 1);

    let deactivated = handlers::service::delete_service(State(state.clone()), ValidatedPath(service.0.id))
        .await
        .unwrap()
        .0;
    assert!(!deactivated.data.is_active);

    let listed = handlers::service::list_services(State(state.clone())).await.unwrap().0;
    assert!(listed.is_empty(), "inactive services are hidden");
    let still_there = handlers::service::get_service(State(state), ValidatedPath(service.0.id)).await;
    assert!(still_there.is_ok());
}

// --- Gallery, dashboard and public aggregation ---

#[test]
async fn test_gallery_categories_are_validated() {
    let state = test_state();
    let gallery = GalleryService::new(state.repo.clone());

    let missing = gallery
        .create(
            GalleryForm {
                title: Some("Graduation".into()),
                ..Default::default()
            },
            None,
        )
        .await;
    match missing {
        Err(AppError::Validation(messages)) => {
            assert!(messages.contains(&"image is required".to_string()));
            assert!(messages.len() >= 4);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let (_, category) = handlers::gallery::create_category(
        State(state.clone()),
        body(json!({ "name": "Events", "arabicName": "فعاليات" })),
    )
    .await
    .unwrap();
    let category_id = category.0.id.to_string();

    let bad_ref = gallery
        .create(
            GalleryForm {
                title: Some("Graduation".into()),
                arabic_title: Some("تخرج".into()),
                category: Some(category_id.clone()),
                arabic_category: Some("not-a-uuid".into()),
            },
            Some("data:image/png;base64,AAAA".into()),
        )
        .await;
    assert!(matches!(bad_ref, Err(AppError::BadRequest(_))));

    let item = gallery
        .create(
            GalleryForm {
                title: Some("Graduation".into()),
                arabic_title: Some("تخرج".into()),
                category: Some(category_id.clone()),
                arabic_category: Some(category_id),
            },
            Some("data:image/png;base64,AAAA".into()),
        )
        .await
        .unwrap();
    assert_eq!(item.data.category.as_ref().map(|c| c.name.as_str()), Some("Events"));

    // Deleting the category leaves the item with a dangling reference.
    handlers::gallery::delete_category(State(state.clone()), ValidatedPath(category.0.id))
        .await
        .unwrap();
    let orphan = handlers::gallery::get_item(State(state), ValidatedPath(item.id)).await.unwrap().0;
    assert!(orphan.data.category.is_none());
    assert_eq!(orphan.data.image, "data:image/png;base64,AAAA");
}

#[test]
async fn test_gallery_item_update() {
    let state = test_state();
    let gallery = GalleryService::new(state.repo.clone());
    let mut category_ids = Vec::new();
    for name in ["Campus", "Events"] {
        let (_, category) = handlers::gallery::create_category(
            State(state.clone()),
            body(json!({ "name": name, "arabicName": "فئة" })),
        )
        .await
        .unwrap();
        category_ids.push(category.0.id);
    }
    let campus = category_ids[0].to_string();

    let item = gallery
        .create(
            GalleryForm {
                title: Some("Library".into()),
                arabic_title: Some("المكتبة".into()),
                category: Some(campus.clone()),
                arabic_category: Some(campus),
            },
            Some("data:image/png;base64,AAAA".into()),
        )
        .await
        .unwrap();

    // Text-only edits keep the stored image.
    let renamed = gallery
        .update(
            item.id,
            GalleryForm {
                title: Some("Main library".into()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(renamed.data.title, "Main library");
    assert_eq!(renamed.data.image, "data:image/png;base64,AAAA");

    let moved = gallery
        .update(
            item.id,
            GalleryForm {
                category: Some(category_ids[1].to_string()),
                ..Default::default()
            },
            Some("data:image/gif;base64,R0lGOA==".into()),
        )
        .await
        .unwrap();
    assert_eq!(moved.data.category.as_ref().map(|c| c.name.as_str()), Some("Events"));
    assert_eq!(moved.data.arabic_category.as_ref().map(|c| c.name.as_str()), Some("Campus"));
    assert_eq!(moved.data.image, "data:image/gif;base64,R0lGOA==");

    for bad in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let rejected = gallery
            .update(
                item.id,
                GalleryForm {
                    arabic_category: Some(bad),
                    ..Default::default()
                },
                None,
            )
            .await;
        assert!(matches!(rejected, Err(AppError::BadRequest(_))));
    }

    let unknown = gallery
        .update(
            Uuid::new_v4(),
            GalleryForm {
                title: Some("Ghost".into()),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));
}

#[test]
async fn test_gallery_category_ties_list_newest_first() {
    let state = test_state();
    for (name, order) in [("Pinned", 0), ("Older", 1), ("Newer", 1)] {
        handlers::gallery::create_category(
            State(state.clone()),
            body(json!({ "name": name, "arabicName": "فئة", "order": order })),
        )
        .await
        .unwrap();
    }

    let names: Vec<_> = handlers::gallery::list_categories(State(state))
        .await
        .unwrap()
        .0
        .into_iter()
        .map(|c| c.data.name)
        .collect();
    assert_eq!(names, vec!["Pinned", "Newer", "Older"]);
}

#[test]
async fn test_dashboard_and_public_home() {
    let state = test_state();
    let category = create_course_category(&state, "Languages").await;
    for (title, order) in [("English", 1), ("French", 2)] {
        handlers::course::create_course(
            State(state.clone()),
            body(course_payload(category, title, order)),
        )
        .await
        .unwrap();
    }
    handlers::event::create_event(State(state.clone()), body(event_payload("Open day", "2999-01-01")))
        .await
        .unwrap();
    handlers::event::create_event(State(state.clone()), body(event_payload("Alumni", "2000-01-01")))
        .await
        .unwrap();
    handlers::faculty::create_faculty(
        State(state.clone()),
        body(faculty_payload("Ahmed", "ahmed@academy.edu", false)),
    )
    .await
    .unwrap();

    let stats = handlers::dashboard::get_stats(State(state.clone())).await.unwrap().0;
    assert_eq!(stats.overview.faculty_count, 1);
    assert_eq!(stats.overview.active_courses, 2);
    assert_eq!(stats.overview.upcoming_events, 1);
    assert_eq!(stats.overview.gallery_count, 0);

    let activity = handlers::dashboard::get_activity(
        State(state.clone()),
        ValidatedQuery(academy_cms::models::dashboard::ActivityParams { limit: Some(2) }),
    )
    .await
    .unwrap()
    .0;
    let titles: Vec<_> = activity.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Ahmed", "Alumni"], "newest first across collections");

    let home = handlers::public::home(State(state.clone())).await.unwrap().0;
    assert_eq!(home.status, "success");
    assert!(home.data.hero_section.is_none());
    assert_eq!(home.data.latest_courses[0].data.title, "French");
    assert_eq!(home.data.upcoming_events.len(), 1);

    let courses = handlers::public::home_courses(State(state)).await.unwrap().0.data;
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].data.category.as_ref().map(|c| c.name.as_str()), Some("Languages"));
    assert_ne!(courses[0].data.icon, courses[1].data.icon);
}

use academy_cms::{
    error::AppError,
    models::{
        ReorderRequest,
        admin::{ChangePasswordRequest, RegisterRequest, UpdateProfileRequest},
        contact::{CreateSubmissionRequest, SubmissionStatus},
        dashboard::{Activity, ActivityKind},
        event::CreateEventRequest,
        faculty::CreateFacultyRequest,
        public::Envelope,
        service::{CreateServiceRequest, ServiceLevel},
    },
    validation::Validate,
};
use chrono::Utc;
use serde_json::json;

fn violations(value: &impl Validate) -> Vec<String> {
    match value.check() {
        Ok(()) => vec![],
        Err(AppError::Validation(messages)) => messages,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

fn submission(email: &str, phone: Option<&str>) -> CreateSubmissionRequest {
    serde_json::from_value(json!({
        "name": "Sara",
        "email": email,
        "phone": phone,
        "subject": "Enrollment",
        "message": "When does the next term start?"
    }))
    .unwrap()
}

#[test]
fn test_submission_accepts_valid_payload() {
    assert!(violations(&submission("sara@example.com", Some("+966 50 123 4567"))).is_empty());
    assert!(violations(&submission("sara@example.com", None)).is_empty());
}

#[test]
fn test_submission_reports_every_bad_field() {
    let messages = violations(&submission("not-an-email", Some("call me")));
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().any(|m| m.starts_with("email")));
    assert!(messages.iter().any(|m| m.starts_with("phone")));
}

#[test]
fn test_submission_rejects_unknown_fields() {
    let parsed = serde_json::from_value::<CreateSubmissionRequest>(json!({
        "name": "Sara",
        "email": "sara@example.com",
        "subject": "Hi",
        "message": "Hello",
        "status": "replied"
    }));
    assert!(parsed.is_err(), "clients must not set the status on submit");
}

#[test]
fn test_register_password_length() {
    let short = RegisterRequest {
        name: "Admin".into(),
        email: "admin@academy.edu".into(),
        password: "short".into(),
    };
    let messages = violations(&short);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("password"));

    let ok = RegisterRequest {
        password: "long-enough".into(),
        ..short
    };
    assert!(violations(&ok).is_empty());
}

#[test]
fn test_change_password_requires_both_fields() {
    let req = ChangePasswordRequest {
        current_password: "".into(),
        new_password: "1234".into(),
    };
    assert_eq!(violations(&req).len(), 2);
}

#[test]
fn test_profile_update_is_partial() {
    assert!(violations(&UpdateProfileRequest::default()).is_empty());

    let bad = UpdateProfileRequest {
        email: Some("nope".into()),
        name: Some("   ".into()),
        ..Default::default()
    };
    assert_eq!(violations(&bad).len(), 2);

    // Omitted fields are not serialized, so they never overwrite stored values.
    let only_phone = UpdateProfileRequest {
        phone: Some("0500000000".into()),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&only_phone).unwrap(), json!({ "phone": "0500000000" }));
}

#[test]
fn test_event_dates_must_be_iso() {
    let event: CreateEventRequest = serde_json::from_value(json!({
        "title": "Open Day",
        "arabicTitle": "يوم مفتوح",
        "description": "Campus tour",
        "arabicDescription": "جولة",
        "date": "12/05/2025",
        "time": "10:00",
        "registrationDeadline": "2025-05-01",
        "location": "Main hall",
        "arabicLocation": "القاعة",
        "thumbnail": "thumb.png"
    }))
    .unwrap();
    let messages = violations(&event);
    assert_eq!(messages, vec!["date must be a date in YYYY-MM-DD format".to_string()]);
    assert!(event.event_images.is_empty());
}

#[test]
fn test_faculty_leadership_flag_accepts_strings() {
    let faculty: CreateFacultyRequest = serde_json::from_value(json!({
        "name": "Dr. Noura",
        "arabicName": "د. نورة",
        "position": "Dean",
        "arabicPosition": "عميدة",
        "email": "noura@academy.edu",
        "bio": "Bio",
        "arabicBio": "سيرة",
        "isLeadershipTeam": "true"
    }))
    .unwrap();
    assert!(faculty.is_leadership_team);
    assert_eq!(faculty.order, 0);
    assert!(violations(&faculty).is_empty());
}

#[test]
fn test_service_level_is_a_closed_set() {
    let base = json!({
        "icon": "📘",
        "title": "IELTS",
        "arabicTitle": "آيلتس",
        "description": "Preparation",
        "features": ["Mock tests"],
        "duration": "8 weeks",
        "schedule": "Evenings",
        "price": "1500",
        "level": "Advanced"
    });
    let service: CreateServiceRequest = serde_json::from_value(base.clone()).unwrap();
    assert_eq!(service.level, ServiceLevel::Advanced);
    assert!(service.is_active, "services are active unless stated otherwise");

    let mut bad = base;
    bad["level"] = json!("Expert");
    assert!(serde_json::from_value::<CreateServiceRequest>(bad).is_err());
}

#[test]
fn test_reorder_rejects_negative_order() {
    assert_eq!(violations(&ReorderRequest { order: -1 }).len(), 1);
    assert!(violations(&ReorderRequest { order: 3 }).is_empty());
}

#[test]
fn test_wire_names() {
    assert_eq!(serde_json::to_value(SubmissionStatus::Replied).unwrap(), json!("replied"));

    let activity = Activity {
        kind: ActivityKind::Gallery,
        title: "Graduation".into(),
        timestamp: Utc::now(),
    };
    let value = serde_json::to_value(&activity).unwrap();
    assert_eq!(value["type"], "gallery");

    let envelope = serde_json::to_value(Envelope::success(vec![1, 2])).unwrap();
    assert_eq!(envelope, json!({ "status": "success", "data": [1, 2] }));
}

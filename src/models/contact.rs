use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::validation::{Validate, Violations};

// --- Contact Info (singleton) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactDetail {
    pub label: String,
    pub value: String,
    pub arabic_label: String,
    pub arabic_value: String,
}

impl ContactDetail {
    fn validate(&self, field: &str, v: &mut Violations) {
        v.not_empty(&format!("{field}.label"), &self.label);
        v.not_empty(&format!("{field}.value"), &self.value);
        v.not_empty(&format!("{field}.arabicLabel"), &self.arabic_label);
        v.not_empty(&format!("{field}.arabicValue"), &self.arabic_value);
    }

    /// Overlays the provided fields of a partial detail.
    pub fn merge(&mut self, patch: ContactDetailPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(arabic_label) = patch.arabic_label {
            self.arabic_label = arabic_label;
        }
        if let Some(arabic_value) = patch.arabic_value {
            self.arabic_value = arabic_value;
        }
    }
}

/// ContactInfo
///
/// Singleton document with the institution's contact channels. Also the body
/// of `POST /contact/info`, where every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactInfo {
    pub whatsapp: String,
    pub address: ContactDetail,
    pub phone: ContactDetail,
    pub email: ContactDetail,
    pub office_hours: ContactDetail,
}

impl Validate for ContactInfo {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("whatsapp", &self.whatsapp);
        self.address.validate("address", v);
        self.phone.validate("phone", v);
        self.email.validate("email", v);
        self.office_hours.validate("officeHours", v);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactDetailPatch {
    pub label: Option<String>,
    pub value: Option<String>,
    pub arabic_label: Option<String>,
    pub arabic_value: Option<String>,
}

/// Body of `PATCH /contact/info`. Nested details merge field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateContactInfoRequest {
    pub whatsapp: Option<String>,
    pub address: Option<ContactDetailPatch>,
    pub phone: Option<ContactDetailPatch>,
    pub email: Option<ContactDetailPatch>,
    pub office_hours: Option<ContactDetailPatch>,
}

impl Validate for UpdateContactInfoRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("whatsapp", self.whatsapp.as_deref());
        let details = [
            ("address", &self.address),
            ("phone", &self.phone),
            ("email", &self.email),
            ("officeHours", &self.office_hours),
        ];
        for (name, detail) in details {
            if let Some(detail) = detail {
                v.not_empty_opt(&format!("{name}.label"), detail.label.as_deref());
                v.not_empty_opt(&format!("{name}.value"), detail.value.as_deref());
                v.not_empty_opt(&format!("{name}.arabicLabel"), detail.arabic_label.as_deref());
                v.not_empty_opt(&format!("{name}.arabicValue"), detail.arabic_value.as_deref());
            }
        }
    }
}

// --- Contact Submissions ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Read,
    Replied,
    Archived,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Read => "read",
            SubmissionStatus::Replied => "replied",
            SubmissionStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionResponse {
    pub message: String,
    #[ts(type = "string")]
    pub responded_at: DateTime<Utc>,
    pub responded_by: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InternalNote {
    pub note: String,
    pub added_by: Uuid,
    #[ts(type = "string")]
    pub added_at: DateTime<Utc>,
}

/// ContactSubmission
///
/// A message sent through the public contact form, plus the triage state
/// admins attach to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<SubmissionResponse>,
    #[serde(default)]
    pub internal_notes: Vec<InternalNote>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSubmissionRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Validate for CreateSubmissionRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("name", &self.name);
        v.email("email", &self.email);
        if let Some(phone) = &self.phone {
            v.phone("phone", phone);
        }
        v.not_empty("subject", &self.subject);
        v.not_empty("message", &self.message);
    }
}

impl From<CreateSubmissionRequest> for ContactSubmission {
    fn from(req: CreateSubmissionRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            subject: req.subject,
            message: req.message,
            status: SubmissionStatus::default(),
            priority: Priority::default(),
            tags: Vec::new(),
            assigned_to: None,
            response: None,
            internal_notes: Vec::new(),
        }
    }
}

/// UpdateSubmissionRequest
///
/// Admin triage update. `responseMessage` records a reply and forces the
/// status to `replied`; `internalNote` is appended to the note log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSubmissionRequest {
    pub status: Option<SubmissionStatus>,
    pub response_message: Option<String>,
    pub tags: Option<Vec<String>>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    pub internal_note: Option<String>,
}

impl Validate for UpdateSubmissionRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("responseMessage", self.response_message.as_deref());
        v.not_empty_opt("internalNote", self.internal_note.as_deref());
    }
}

/// Query string of `GET /contact/submissions`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD` (inclusive, whole day) or RFC 3339.
    pub end_date: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCounts {
    pub pending: u64,
    pub read: u64,
    pub replied: u64,
    pub archived: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriorityCounts {
    pub urgent: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStats {
    pub total: u64,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
}

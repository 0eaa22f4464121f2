use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::validation::{Validate, Violations};

/// Event
///
/// `date` is an ISO `YYYY-MM-DD` string so upcoming/past splits are plain
/// text comparisons against today's date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Event {
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    pub arabic_description: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<String>,
    pub location: String,
    pub arabic_location: String,
    pub thumbnail: String,
    #[serde(default)]
    pub event_images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEventRequest {
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    pub arabic_description: String,
    pub date: String,
    pub time: String,
    pub registration_deadline: Option<String>,
    pub location: String,
    pub arabic_location: String,
    pub thumbnail: String,
    #[serde(default)]
    pub event_images: Vec<String>,
}

impl Validate for CreateEventRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("title", &self.title);
        v.not_empty("arabicTitle", &self.arabic_title);
        v.not_empty("description", &self.description);
        v.not_empty("arabicDescription", &self.arabic_description);
        v.date("date", &self.date);
        v.not_empty("time", &self.time);
        if let Some(deadline) = &self.registration_deadline {
            v.date("registrationDeadline", deadline);
        }
        v.not_empty("location", &self.location);
        v.not_empty("arabicLocation", &self.arabic_location);
        v.not_empty("thumbnail", &self.thumbnail);
    }
}

impl From<CreateEventRequest> for Event {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            arabic_title: req.arabic_title,
            description: req.description,
            arabic_description: req.arabic_description,
            date: req.date,
            time: req.time,
            registration_deadline: req.registration_deadline,
            location: req.location,
            arabic_location: req.arabic_location,
            thumbnail: req.thumbnail,
            event_images: req.event_images,
        }
    }
}

/// Partial event update. Fields left out keep their stored value, including
/// `eventImages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_images: Option<Vec<String>>,
}

impl Validate for UpdateEventRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("title", self.title.as_deref());
        v.not_empty_opt("arabicTitle", self.arabic_title.as_deref());
        v.not_empty_opt("description", self.description.as_deref());
        v.not_empty_opt("arabicDescription", self.arabic_description.as_deref());
        if let Some(date) = &self.date {
            v.date("date", date);
        }
        v.not_empty_opt("time", self.time.as_deref());
        if let Some(deadline) = &self.registration_deadline {
            v.date("registrationDeadline", deadline);
        }
        v.not_empty_opt("location", self.location.as_deref());
        v.not_empty_opt("arabicLocation", self.arabic_location.as_deref());
        v.not_empty_opt("thumbnail", self.thumbnail.as_deref());
    }
}

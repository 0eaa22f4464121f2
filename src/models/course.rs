use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::{Stored, default_true};
use crate::validation::{Validate, Violations};

/// Course
///
/// `category` references a `CourseCategory` document by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Course {
    pub title: String,
    pub arabic_title: String,
    pub category: Uuid,
    pub description: String,
    pub arabic_description: String,
    pub level: String,
    pub arabic_level: String,
    pub duration: String,
    pub arabic_duration: String,
    pub schedule: String,
    pub arabic_schedule: String,
    pub features: Vec<String>,
    pub arabic_features: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCourseRequest {
    pub title: String,
    pub arabic_title: String,
    pub category: Uuid,
    pub description: String,
    pub arabic_description: String,
    pub level: String,
    pub arabic_level: String,
    pub duration: String,
    pub arabic_duration: String,
    pub schedule: String,
    pub arabic_schedule: String,
    pub features: Vec<String>,
    pub arabic_features: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Validate for CreateCourseRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("title", &self.title);
        v.not_empty("arabicTitle", &self.arabic_title);
        v.not_empty("description", &self.description);
        v.not_empty("arabicDescription", &self.arabic_description);
        v.not_empty("level", &self.level);
        v.not_empty("arabicLevel", &self.arabic_level);
        v.not_empty("duration", &self.duration);
        v.not_empty("arabicDuration", &self.arabic_duration);
        v.not_empty("schedule", &self.schedule);
        v.not_empty("arabicSchedule", &self.arabic_schedule);
        v.min_items("features", &self.features, 1);
        v.min_items("arabicFeatures", &self.arabic_features, 1);
        v.not_empty("image", &self.image);
        v.non_negative("order", self.order);
    }
}

impl From<CreateCourseRequest> for Course {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            title: req.title,
            arabic_title: req.arabic_title,
            category: req.category,
            description: req.description,
            arabic_description: req.arabic_description,
            level: req.level,
            arabic_level: req.arabic_level,
            duration: req.duration,
            arabic_duration: req.arabic_duration,
            schedule: req.schedule,
            arabic_schedule: req.arabic_schedule,
            features: req.features,
            arabic_features: req.arabic_features,
            image: req.image,
            order: req.order,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for UpdateCourseRequest {
    fn validate(&self, v: &mut Violations) {
        let texts = [
            ("title", &self.title),
            ("arabicTitle", &self.arabic_title),
            ("description", &self.description),
            ("arabicDescription", &self.arabic_description),
            ("level", &self.level),
            ("arabicLevel", &self.arabic_level),
            ("duration", &self.duration),
            ("arabicDuration", &self.arabic_duration),
            ("schedule", &self.schedule),
            ("arabicSchedule", &self.arabic_schedule),
            ("image", &self.image),
        ];
        for (field, value) in texts {
            v.not_empty_opt(field, value.as_deref());
        }
        if let Some(features) = &self.features {
            v.min_items("features", features, 1);
        }
        if let Some(features) = &self.arabic_features {
            v.min_items("arabicFeatures", features, 1);
        }
        if let Some(order) = self.order {
            v.non_negative("order", order);
        }
    }
}

// --- Categories ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CourseCategory {
    pub name: String,
    pub arabic_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseCategoryRequest {
    pub name: String,
    pub arabic_name: String,
}

impl Validate for CourseCategoryRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("name", &self.name);
        v.not_empty("arabicName", &self.arabic_name);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCourseCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_name: Option<String>,
}

impl Validate for UpdateCourseCategoryRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("name", self.name.as_deref());
        v.not_empty_opt("arabicName", self.arabic_name.as_deref());
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive literal text to look for.
    #[serde(default)]
    pub query: String,
}

/// Lightweight category reference used wherever a course or FAQ is
/// returned with its category resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub arabic_name: String,
}

impl From<&Stored<CourseCategory>> for CategoryRef {
    fn from(category: &Stored<CourseCategory>) -> Self {
        Self {
            id: category.id,
            name: category.data.name.clone(),
            arabic_name: category.data.arabic_name.clone(),
        }
    }
}

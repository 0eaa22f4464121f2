use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use super::default_true;
use crate::validation::{Validate, Violations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub enum ServiceLevel {
    Foundation,
    Advanced,
    Professional,
    Specialized,
}

impl ServiceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceLevel::Foundation => "Foundation",
            ServiceLevel::Advanced => "Advanced",
            ServiceLevel::Professional => "Professional",
            ServiceLevel::Specialized => "Specialized",
        }
    }
}

/// Service
///
/// An offered training programme. Deleting a service only clears `isActive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    pub features: Vec<String>,
    pub duration: String,
    pub schedule: String,
    pub price: String,
    pub level: ServiceLevel,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateServiceRequest {
    pub icon: String,
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    pub features: Vec<String>,
    pub duration: String,
    pub schedule: String,
    pub price: String,
    pub level: ServiceLevel,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Validate for CreateServiceRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("icon", &self.icon);
        v.not_empty("title", &self.title);
        v.not_empty("arabicTitle", &self.arabic_title);
        v.not_empty("description", &self.description);
        v.min_items("features", &self.features, 1);
        v.not_empty("duration", &self.duration);
        v.not_empty("schedule", &self.schedule);
        v.not_empty("price", &self.price);
        v.non_negative("order", self.order);
    }
}

impl From<CreateServiceRequest> for Service {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            icon: req.icon,
            title: req.title,
            arabic_title: req.arabic_title,
            description: req.description,
            features: req.features,
            duration: req.duration,
            schedule: req.schedule,
            price: req.price,
            level: req.level,
            order: req.order,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ServiceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for UpdateServiceRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("icon", self.icon.as_deref());
        v.not_empty_opt("title", self.title.as_deref());
        v.not_empty_opt("arabicTitle", self.arabic_title.as_deref());
        v.not_empty_opt("description", self.description.as_deref());
        if let Some(features) = &self.features {
            v.min_items("features", features, 1);
        }
        v.not_empty_opt("duration", self.duration.as_deref());
        v.not_empty_opt("schedule", self.schedule.as_deref());
        v.not_empty_opt("price", self.price.as_deref());
        if let Some(order) = self.order {
            v.non_negative("order", order);
        }
    }
}

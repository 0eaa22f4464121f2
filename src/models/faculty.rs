use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

use super::{bool_or_string, opt_bool_or_string};
use crate::validation::{Validate, Violations};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_scholar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Faculty
///
/// A teaching staff member. `email` is unique across the collection.
/// Leadership members are listed separately on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Faculty {
    pub name: String,
    pub arabic_name: String,
    pub position: String,
    pub arabic_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arabic_department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub bio: String,
    pub arabic_bio: String,
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default)]
    pub arabic_specialization: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub is_leadership_team: bool,
    #[serde(default)]
    pub order: i64,
}

/// Fields searched by `?search=` and `/faculty/search`.
pub const SEARCH_FIELDS: &[&str] = &[
    "name",
    "arabicName",
    "position",
    "department",
    "bio",
    "specialization",
];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub arabic_name: String,
    pub position: String,
    pub arabic_position: String,
    pub department: Option<String>,
    pub arabic_department: Option<String>,
    pub image: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub bio: String,
    pub arabic_bio: String,
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default)]
    pub arabic_specialization: Vec<String>,
    pub social_links: Option<SocialLinks>,
    #[serde(default, deserialize_with = "bool_or_string")]
    #[schema(value_type = bool)]
    pub is_leadership_team: bool,
    #[serde(default)]
    pub order: i64,
}

impl Validate for CreateFacultyRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("name", &self.name);
        v.not_empty("arabicName", &self.arabic_name);
        v.not_empty("position", &self.position);
        v.not_empty("arabicPosition", &self.arabic_position);
        v.email("email", &self.email);
        if let Some(phone) = &self.phone {
            v.phone("phone", phone);
        }
        v.not_empty("bio", &self.bio);
        v.not_empty("arabicBio", &self.arabic_bio);
        v.non_negative("order", self.order);
    }
}

impl From<CreateFacultyRequest> for Faculty {
    fn from(req: CreateFacultyRequest) -> Self {
        Self {
            name: req.name,
            arabic_name: req.arabic_name,
            position: req.position,
            arabic_position: req.arabic_position,
            department: req.department,
            arabic_department: req.arabic_department,
            image: req.image,
            email: req.email,
            phone: req.phone,
            bio: req.bio,
            arabic_bio: req.arabic_bio,
            specialization: req.specialization,
            arabic_specialization: req.arabic_specialization,
            social_links: req.social_links,
            is_leadership_team: req.is_leadership_team,
            order: req.order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFacultyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_specialization: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(
        default,
        deserialize_with = "opt_bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<bool>)]
    pub is_leadership_team: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for UpdateFacultyRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("name", self.name.as_deref());
        v.not_empty_opt("arabicName", self.arabic_name.as_deref());
        v.not_empty_opt("position", self.position.as_deref());
        v.not_empty_opt("arabicPosition", self.arabic_position.as_deref());
        if let Some(email) = &self.email {
            v.email("email", email);
        }
        if let Some(phone) = &self.phone {
            v.phone("phone", phone);
        }
        v.not_empty_opt("bio", self.bio.as_deref());
        v.not_empty_opt("arabicBio", self.arabic_bio.as_deref());
        if let Some(order) = self.order {
            v.non_negative("order", order);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FacultyFilter {
    pub department: Option<String>,
    pub search: Option<String>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use super::Stored;
use crate::validation::{Validate, Violations};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeroSection {
    pub title: String,
    pub arabic_title: String,
    pub subtitle: String,
    pub arabic_subtitle: String,
}

impl Validate for HeroSection {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("title", &self.title);
        v.not_empty("arabicTitle", &self.arabic_title);
        v.not_empty("subtitle", &self.subtitle);
        v.not_empty("arabicSubtitle", &self.arabic_subtitle);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateHeroSectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_subtitle: Option<String>,
}

impl Validate for UpdateHeroSectionRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("title", self.title.as_deref());
        v.not_empty_opt("arabicTitle", self.arabic_title.as_deref());
        v.not_empty_opt("subtitle", self.subtitle.as_deref());
        v.not_empty_opt("arabicSubtitle", self.arabic_subtitle.as_deref());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WhyChooseUs {
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    pub arabic_description: String,
}

impl Validate for WhyChooseUs {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("title", &self.title);
        v.not_empty("arabicTitle", &self.arabic_title);
        v.not_empty("description", &self.description);
        v.not_empty("arabicDescription", &self.arabic_description);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateWhyChooseUsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_description: Option<String>,
}

impl Validate for UpdateWhyChooseUsRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("title", self.title.as_deref());
        v.not_empty_opt("arabicTitle", self.arabic_title.as_deref());
        v.not_empty_opt("description", self.description.as_deref());
        v.not_empty_opt("arabicDescription", self.arabic_description.as_deref());
    }
}

/// Response of `GET /admin/home`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    #[schema(value_type = Option<HeroSection>)]
    pub hero_section: Option<Stored<HeroSection>>,
    #[schema(value_type = Vec<WhyChooseUs>)]
    pub why_choose_us: Vec<Stored<WhyChooseUs>>,
}

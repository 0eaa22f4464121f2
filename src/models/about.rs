use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use super::{Stored, default_true};
use crate::validation::{Validate, Violations};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AboutStats {
    pub students_enrolled: i64,
    pub success_rate: i64,
    pub expert_educators: i64,
    pub years_of_excellence: i64,
}

/// About
///
/// The single "about us" page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct About {
    pub title: String,
    pub title_arabic: String,
    pub description: String,
    pub description_arabic: String,
    pub stats: AboutStats,
    pub mission: String,
    pub mission_arabic: String,
    pub vision: String,
    pub vision_arabic: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl About {
    /// Content served before an admin has written the page.
    pub fn placeholder() -> Self {
        Self {
            title: "Welcome to our Academy".to_string(),
            title_arabic: "مرحباً بكم في أكاديميتنا".to_string(),
            description: "Your journey to excellence starts here.".to_string(),
            description_arabic: "رحلتك نحو التميز تبدأ من هنا.".to_string(),
            stats: AboutStats::default(),
            mission: "Our mission is to provide quality education.".to_string(),
            mission_arabic: "مهمتنا تقديم تعليم عالي الجودة.".to_string(),
            vision: "Our vision is to become a leading educational institution.".to_string(),
            vision_arabic: "رؤيتنا أن نصبح مؤسسة تعليمية رائدة.".to_string(),
            is_active: true,
        }
    }
}

/// Either the stored page or the placeholder when none exists yet.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AboutView {
    Stored(Stored<About>),
    Placeholder(About),
}

/// UpsertAboutRequest
///
/// Body of `POST /aboutus`. Every text field is required; `isActive` keeps its
/// stored value when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpsertAboutRequest {
    pub title: String,
    pub title_arabic: String,
    pub description: String,
    pub description_arabic: String,
    pub stats: AboutStats,
    pub mission: String,
    pub mission_arabic: String,
    pub vision: String,
    pub vision_arabic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for UpsertAboutRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("title", &self.title);
        v.not_empty("titleArabic", &self.title_arabic);
        v.not_empty("description", &self.description);
        v.not_empty("descriptionArabic", &self.description_arabic);
        v.not_empty("mission", &self.mission);
        v.not_empty("missionArabic", &self.mission_arabic);
        v.not_empty("vision", &self.vision);
        v.not_empty("visionArabic", &self.vision_arabic);
        v.non_negative("stats.studentsEnrolled", self.stats.students_enrolled);
        v.non_negative("stats.successRate", self.stats.success_rate);
        v.non_negative("stats.expertEducators", self.stats.expert_educators);
        v.non_negative("stats.yearsOfExcellence", self.stats.years_of_excellence);
        if self.stats.success_rate > 100 {
            v.push("stats.successRate must not be greater than 100");
        }
    }
}

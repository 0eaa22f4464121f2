use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::{Validate, Violations};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SocialLink {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Footer
///
/// Singleton document. Social links are embedded and addressed by their own
/// `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Footer {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arabic_description: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpsertFooterRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_description: Option<String>,
}

impl Validate for UpsertFooterRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("description", &self.description);
    }
}

/// Body of `PATCH /footer/description`. Empty strings are ignored rather than
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFooterDescriptionRequest {
    pub description: Option<String>,
    pub arabic_description: Option<String>,
}

impl Validate for UpdateFooterDescriptionRequest {
    fn validate(&self, _v: &mut Violations) {}
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSocialLinkRequest {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
}

impl Validate for CreateSocialLinkRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("platform", &self.platform);
        v.not_empty("url", &self.url);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSocialLinkRequest {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

impl Validate for UpdateSocialLinkRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("platform", self.platform.as_deref());
        v.not_empty_opt("url", self.url.as_deref());
    }
}

impl SocialLink {
    pub fn apply(&mut self, patch: UpdateSocialLinkRequest) {
        if let Some(platform) = patch.platform {
            self.platform = platform;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(icon) = patch.icon {
            self.icon = Some(icon);
        }
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Stored;
use crate::validation::{Validate, Violations};

/// GalleryItem
///
/// `image` is a `data:<mime>;base64,...` URL produced by the upload intake.
/// Both category fields reference `GalleryCategory` documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GalleryItem {
    pub title: String,
    pub arabic_title: String,
    pub image: String,
    pub category: Uuid,
    pub arabic_category: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCategoryRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub arabic_name: String,
}

impl From<&Stored<GalleryCategory>> for GalleryCategoryRef {
    fn from(category: &Stored<GalleryCategory>) -> Self {
        Self {
            id: category.id,
            name: category.data.name.clone(),
            arabic_name: category.data.arabic_name.clone(),
        }
    }
}

/// Gallery item with both category references resolved (`null` when the
/// category was deleted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub title: String,
    pub arabic_title: String,
    pub image: String,
    pub category: Option<GalleryCategoryRef>,
    pub arabic_category: Option<GalleryCategoryRef>,
}

/// Text fields of the multipart create form.
#[derive(Debug, Clone, Default)]
pub struct GalleryForm {
    pub title: Option<String>,
    pub arabic_title: Option<String>,
    pub category: Option<String>,
    pub arabic_category: Option<String>,
}

/// Multipart schema for documentation only; the handler reads the parts itself.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct GalleryUpload {
    pub title: String,
    pub arabic_title: String,
    pub category: Uuid,
    pub arabic_category: Uuid,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Partial update built from a multipart PATCH form.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_category: Option<Uuid>,
}

// --- Categories ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GalleryCategory {
    pub name: String,
    pub arabic_name: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGalleryCategoryRequest {
    pub name: String,
    pub arabic_name: String,
    #[serde(default)]
    pub order: i64,
}

impl Validate for CreateGalleryCategoryRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("name", &self.name);
        v.not_empty("arabicName", &self.arabic_name);
        v.non_negative("order", self.order);
    }
}

impl From<CreateGalleryCategoryRequest> for GalleryCategory {
    fn from(req: CreateGalleryCategoryRequest) -> Self {
        Self {
            name: req.name,
            arabic_name: req.arabic_name,
            order: req.order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateGalleryCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for UpdateGalleryCategoryRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("name", self.name.as_deref());
        v.not_empty_opt("arabicName", self.arabic_name.as_deref());
        if let Some(order) = self.order {
            v.non_negative("order", order);
        }
    }
}

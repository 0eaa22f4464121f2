use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Stored, default_true};
use crate::validation::{Validate, Violations};

/// Faq
///
/// A question/answer pair filed under an `FaqCategory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Faq {
    pub question: String,
    pub arabic_question: String,
    pub answer: String,
    pub arabic_answer: String,
    pub category: Uuid,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// FAQ as returned to clients: the category id is resolved to its names, or
/// `null` when the category no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqView {
    pub question: String,
    pub arabic_question: String,
    pub answer: String,
    pub arabic_answer: String,
    pub category: Option<FaqCategoryRef>,
    pub order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqCategoryRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub arabic_name: String,
}

impl From<&Stored<FaqCategory>> for FaqCategoryRef {
    fn from(category: &Stored<FaqCategory>) -> Self {
        Self {
            id: category.id,
            name: category.data.name.clone(),
            arabic_name: category.data.arabic_name.clone(),
        }
    }
}

impl FaqView {
    pub fn new(faq: Faq, category: Option<FaqCategoryRef>) -> Self {
        Self {
            question: faq.question,
            arabic_question: faq.arabic_question,
            answer: faq.answer,
            arabic_answer: faq.arabic_answer,
            category,
            order: faq.order,
            is_active: faq.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFaqRequest {
    pub question: String,
    pub arabic_question: String,
    pub answer: String,
    pub arabic_answer: String,
    pub category: Uuid,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Validate for CreateFaqRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("question", &self.question);
        v.not_empty("arabicQuestion", &self.arabic_question);
        v.not_empty("answer", &self.answer);
        v.not_empty("arabicAnswer", &self.arabic_answer);
        v.non_negative("order", self.order);
    }
}

impl From<CreateFaqRequest> for Faq {
    fn from(req: CreateFaqRequest) -> Self {
        Self {
            question: req.question,
            arabic_question: req.arabic_question,
            answer: req.answer,
            arabic_answer: req.arabic_answer,
            category: req.category,
            order: req.order,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFaqRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for UpdateFaqRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("question", self.question.as_deref());
        v.not_empty_opt("arabicQuestion", self.arabic_question.as_deref());
        v.not_empty_opt("answer", self.answer.as_deref());
        v.not_empty_opt("arabicAnswer", self.arabic_answer.as_deref());
        if let Some(order) = self.order {
            v.non_negative("order", order);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkDeleteRequest {
    pub ids: Vec<Uuid>,
}

impl Validate for BulkDeleteRequest {
    fn validate(&self, v: &mut Violations) {
        v.min_items("ids", &self.ids, 1);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BulkStatusRequest {
    pub ids: Vec<Uuid>,
    pub is_active: bool,
}

impl Validate for BulkStatusRequest {
    fn validate(&self, v: &mut Violations) {
        v.min_items("ids", &self.ids, 1);
    }
}

// --- Categories ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FaqCategory {
    pub name: String,
    pub arabic_name: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFaqCategoryRequest {
    pub name: String,
    pub arabic_name: String,
    #[serde(default)]
    pub order: i64,
}

impl Validate for CreateFaqCategoryRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty("name", &self.name);
        v.not_empty("arabicName", &self.arabic_name);
        v.non_negative("order", self.order);
    }
}

impl From<CreateFaqCategoryRequest> for FaqCategory {
    fn from(req: CreateFaqCategoryRequest) -> Self {
        Self {
            name: req.name,
            arabic_name: req.arabic_name,
            order: req.order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFaqCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for UpdateFaqCategoryRequest {
    fn validate(&self, v: &mut Violations) {
        v.not_empty_opt("name", self.name.as_deref());
        v.not_empty_opt("arabicName", self.arabic_name.as_deref());
        if let Some(order) = self.order {
            v.non_negative("order", order);
        }
    }
}

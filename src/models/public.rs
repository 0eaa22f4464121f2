use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    Stored, contact::ContactInfo, course::{CategoryRef, Course}, event::Event,
    footer::Footer, gallery::GalleryItem, homepage::{HeroSection, WhyChooseUs},
};

/// Envelope used by the public home endpoints: `{"status": "success", "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicHome {
    #[schema(value_type = Option<HeroSection>)]
    pub hero_section: Option<Stored<HeroSection>>,
    #[schema(value_type = Vec<WhyChooseUs>)]
    pub why_choose_us: Vec<Stored<WhyChooseUs>>,
    #[schema(value_type = Vec<Course>)]
    pub latest_courses: Vec<Stored<Course>>,
    #[schema(value_type = Vec<Event>)]
    pub upcoming_events: Vec<Stored<Event>>,
    #[schema(value_type = Vec<GalleryItem>)]
    pub gallery_images: Vec<Stored<GalleryItem>>,
}

/// A course as listed on the public home page: category resolved and a
/// display icon attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicCourse {
    pub title: String,
    pub arabic_title: String,
    pub category: Option<CategoryRef>,
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
    pub order: i64,
    pub is_active: bool,
    pub icon: String,
}

impl PublicCourse {
    pub fn new(course: Course, category: Option<CategoryRef>, icon: &str) -> Self {
        Self {
            title: course.title,
            arabic_title: course.arabic_title,
            category,
            description: course.description,
            arabic_description: course.arabic_description,
            level: course.level,
            arabic_level: course.arabic_level,
            duration: course.duration,
            arabic_duration: course.arabic_duration,
            schedule: course.schedule,
            arabic_schedule: course.arabic_schedule,
            features: course.features,
            arabic_features: course.arabic_features,
            image: course.image,
            order: course.order,
            is_active: course.is_active,
            icon: icon.to_string(),
        }
    }
}

/// Response of `GET /public/footer`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicFooter {
    #[schema(value_type = Vec<Footer>)]
    pub footer: Vec<Stored<Footer>>,
    #[schema(value_type = Vec<ContactInfo>)]
    pub contact: Vec<Stored<ContactInfo>>,
}

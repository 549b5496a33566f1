use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::reviews::dtos::{RatingStatsDto, ReviewDto};

// ============ Business registration ============

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ServiceInput {
    #[validate(length(min = 1, max = 50, message = "Service name must be between 1-50 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "Icon must be at most 50 characters"))]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct HoursInput {
    #[validate(length(min = 1, max = 100, message = "Days must be between 1-100 characters"))]
    pub days: String,
    #[serde(default)]
    #[validate(length(max = 5, message = "Start time must be at most 5 characters"))]
    pub start_time: Option<String>,
    #[serde(default)]
    #[validate(length(max = 5, message = "End time must be at most 5 characters"))]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterBusinessRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1-200 characters"))]
    pub name: String,
    /// Optional explicit slug; derived from the name when absent.
    #[serde(default)]
    #[validate(length(max = 200, message = "Slug must be at most 200 characters"))]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, max = 255, message = "Address must be between 1-255 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 100, message = "City must be between 1-100 characters"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "District must be at most 100 characters"))]
    pub district: Option<String>,
    #[validate(length(min = 3, max = 20, message = "Phone must be between 3-20 characters"))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Instagram handle must be at most 100 characters"))]
    pub instagram: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceInput>,
    #[serde(default)]
    pub hours: Vec<HoursInput>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterBusinessResponse {
    pub business_id: Uuid,
    pub slug: String,
    pub is_approved: bool,
}

// ============ Listing / filtering ============

#[derive(Debug, Default, Clone)]
pub struct ListBusinessesFilter {
    pub categories: Vec<String>,
    pub cities: Vec<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub business_id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_name: Option<String>,
    pub description: String,
    pub city: String,
    pub district: Option<String>,
    pub avg_rating: f64,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CityFacet {
    pub city: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListBusinessesResponse {
    pub businesses: Vec<BusinessSummary>,
    pub categories: Vec<CategoryFacet>,
    pub cities: Vec<CityFacet>,
}

// ============ Detail page ============

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceDto {
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HoursDto {
    pub days: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_closed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarBusinessDto {
    pub name: String,
    pub slug: String,
    pub city: String,
    pub avg_rating: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessDetailResponse {
    pub business_id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_name: Option<String>,
    pub description: String,
    pub address: String,
    pub city: String,
    pub district: Option<String>,
    pub phone: String,
    pub instagram: Option<String>,
    pub images: Vec<String>,
    pub services: Vec<ServiceDto>,
    pub hours: Vec<HoursDto>,
    pub rating_stats: RatingStatsDto,
    pub latest_reviews: Vec<ReviewDto>,
    pub similar_businesses: Vec<SimilarBusinessDto>,
    pub viewer_has_reviewed: bool,
}

// ============ Owner view ============

#[derive(Debug, Serialize, Deserialize)]
pub struct MyBusinessDto {
    pub business_id: Uuid,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

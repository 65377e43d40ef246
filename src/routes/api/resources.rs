use axum::{Json, extract::Path};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Audio,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub is_premium: bool,
    pub url: &'static str,
}

pub const CATALOG: &[Resource] = &[
    Resource {
        id: 1,
        title: "Understanding Anxiety",
        description: "Learn about anxiety symptoms and coping strategies",
        kind: ResourceKind::Article,
        is_premium: false,
        url: "/resources/anxiety-guide",
    },
    Resource {
        id: 2,
        title: "Guided Meditation Session",
        description: "15-minute guided meditation for stress relief",
        kind: ResourceKind::Audio,
        is_premium: true,
        url: "/resources/meditation-1",
    },
    Resource {
        id: 3,
        title: "Depression Support Guide",
        description: "Comprehensive guide for managing depression",
        kind: ResourceKind::Article,
        is_premium: false,
        url: "/resources/depression-guide",
    },
];

// No accounts, so premium entries are never listed or served.
pub async fn list_resources() -> Json<Vec<Resource>> {
    Json(CATALOG.iter().filter(|r| !r.is_premium).cloned().collect())
}

// Ids that are not numbers simply match nothing.
pub async fn get_resource(Path(id): Path<String>) -> Result<Json<Resource>, ApiError> {
    let resource = id
        .parse::<u32>()
        .ok()
        .and_then(|id| CATALOG.iter().find(|r| r.id == id))
        .ok_or(ApiError::NotFound("Resource not found"))?;
    if resource.is_premium {
        return Err(ApiError::Forbidden("Premium subscription required"));
    }
    Ok(Json(resource.clone()))
}

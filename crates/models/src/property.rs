use bson::oid::ObjectId;
use bson::doc;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};

use crate::db::Store;
use crate::errors::StoreError;

/// Cap on listing reads; the frontend never pages past this.
pub const VISIBLE_LIMIT: i64 = 100;

pub const DEFAULT_IMAGE_URL: &str = "/api/placeholder/400/300";

/// Listing visibility. Archiving is the only deletion mechanism; there is no
/// hard-delete endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Archived,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Archived => "archived",
        }
    }
}

/// A property listing as stored in the `properties` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub location: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub property_type: String,
    pub size: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub features: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub status: ListingStatus,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Creation payload: everything the caller provides. Identifier, status and
/// timestamp are assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    pub title: String,
    pub location: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub property_type: String,
    pub size: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub features: Vec<String>,
    pub description: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

impl PropertyInput {
    fn into_property(self) -> Property {
        Property {
            id: None,
            title: self.title,
            location: self.location,
            price: self.price,
            property_type: self.property_type,
            size: self.size,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            features: self.features,
            description: self.description,
            image_url: self.image_url,
            gallery: self.gallery,
            status: ListingStatus::Active,
            created_at: Utc::now(),
        }
    }
}

fn active_filter() -> bson::Document {
    doc! { "status": ListingStatus::Active.as_str() }
}

/// All active listings, natural store order, capped at [`VISIBLE_LIMIT`].
pub async fn list_active(store: &Store) -> Result<Vec<Property>, StoreError> {
    let cursor = store
        .properties()
        .find(active_filter())
        .limit(VISIBLE_LIMIT)
        .await?;
    Ok(cursor.try_collect().await?)
}

/// A single active listing by id. Archived listings are indistinguishable
/// from absent ones.
pub async fn find_active(store: &Store, id: ObjectId) -> Result<Option<Property>, StoreError> {
    let mut filter = active_filter();
    filter.insert("_id", id);
    Ok(store.properties().find_one(filter).await?)
}

/// Insert a new listing; stamps status and creation time.
pub async fn create(store: &Store, input: PropertyInput) -> Result<Property, StoreError> {
    let mut property = input.into_property();
    let inserted = store.properties().insert_one(&property).await?;
    property.id = inserted.inserted_id.as_object_id();
    Ok(property)
}

/// Replace the whole collection with the given listings. Seed-only.
pub async fn replace_all(store: &Store, items: &[Property]) -> Result<usize, StoreError> {
    store.properties().delete_many(doc! {}).await?;
    let inserted = store.properties().insert_many(items).await?;
    Ok(inserted.inserted_ids.len())
}

pub async fn count(store: &Store) -> Result<u64, StoreError> {
    Ok(store.properties().count_documents(doc! {}).await?)
}

use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};

use crate::db::Store;
use crate::errors::StoreError;
use crate::property::VISIBLE_LIMIT;

pub const DEFAULT_SUBJECT: &str = "Golden Visa Danışmanlığı";

/// A contact-form submission as stored in the `contacts` collection.
///
/// `is_read` is persisted for future admin tooling but no exposed operation
/// sets it true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Submission payload. No content validation; anything persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    pub message: String,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

/// Persist a submission; stamps creation time and the unread flag.
pub async fn create(store: &Store, input: ContactInput) -> Result<Contact, StoreError> {
    let mut contact = Contact {
        id: None,
        name: input.name,
        email: input.email,
        phone: input.phone,
        subject: input.subject,
        message: input.message,
        is_read: false,
        created_at: Utc::now(),
    };
    let inserted = store.contacts().insert_one(&contact).await?;
    contact.id = inserted.inserted_id.as_object_id();
    Ok(contact)
}

/// All submissions, newest first, capped at [`VISIBLE_LIMIT`].
pub async fn list_recent(store: &Store) -> Result<Vec<Contact>, StoreError> {
    let cursor = store
        .contacts()
        .find(doc! {})
        .sort(doc! { "createdAt": -1 })
        .limit(VISIBLE_LIMIT)
        .await?;
    Ok(cursor.try_collect().await?)
}

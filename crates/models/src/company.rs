use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Store;
use crate::errors::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderInfo {
    pub name: String,
    pub title: String,
    pub experience: String,
    pub credentials: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannels {
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub office_hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub successful_applications: i32,
    pub success_rate: i32,
    pub experience_years: i32,
    pub average_process_time: String,
}

/// Singleton-style record in the `company_info` collection describing the
/// business and founder. At most one document is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub founder: FounderInfo,
    pub contact: ContactChannels,
    pub stats: CompanyStats,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Hardcoded record synthesized when the collection is empty.
pub fn default_company_info() -> CompanyInfo {
    CompanyInfo {
        id: None,
        founder: FounderInfo {
            name: "Ali İrfan Kaynak".into(),
            title: "Kurucu & Golden Visa Uzmanı".into(),
            experience: "5+ yıl Yunanistan Golden Visa deneyimi".into(),
            credentials: "Gayrimenkul Yatırım Danışmanı, AB Göçmenlik Uzmanı".into(),
            description: "İzmir merkezli boutique danışmanlık firması Golden Citizen'in \
                          kurucusu Ali İrfan Kaynak, 5 yılı aşkın süredir Türk yatırımcılara \
                          Yunanistan Golden Visa sürecinde rehberlik etmektedir."
                .into(),
            achievements: vec![
                "50+ başarılı Golden Visa başvurusu".into(),
                "100% başarı oranı".into(),
                "İzmir'in en güvenilir Golden Visa uzmanı".into(),
                "Şeffaf ve dürüst danışmanlık yaklaşımı".into(),
            ],
        },
        contact: ContactChannels {
            whatsapp: "+90 533 285 30 31".into(),
            email: "info@goldencitizen.com.tr".into(),
            address: "İzmir, Türkiye".into(),
            office_hours: "Pazartesi - Cuma: 09:00 - 18:00".into(),
        },
        stats: CompanyStats {
            successful_applications: 50,
            success_rate: 100,
            experience_years: 5,
            average_process_time: "3-6 ay".into(),
        },
        updated_at: Utc::now(),
    }
}

/// The current record; when the collection is empty, the hardcoded default is
/// persisted once and returned, so later reads see the same document.
pub async fn current_or_default(store: &Store) -> Result<CompanyInfo, StoreError> {
    if let Some(info) = store.company_info().find_one(doc! {}).await? {
        return Ok(info);
    }
    let mut info = default_company_info();
    let inserted = store.company_info().insert_one(&info).await?;
    info.id = inserted.inserted_id.as_object_id();
    Ok(info)
}

/// Replace the collection with the given record. Seed-only.
pub async fn replace(store: &Store, mut info: CompanyInfo) -> Result<CompanyInfo, StoreError> {
    store.company_info().delete_many(doc! {}).await?;
    let inserted = store.company_info().insert_one(&info).await?;
    info.id = inserted.inserted_id.as_object_id();
    Ok(info)
}

pub async fn count(store: &Store) -> Result<u64, StoreError> {
    Ok(store.company_info().count_documents(doc! {}).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_populated() {
        let info = default_company_info();
        assert!(info.id.is_none());
        assert!(!info.founder.name.is_empty());
        assert_eq!(info.founder.achievements.len(), 4);
        assert_eq!(info.stats.success_rate, 100);
        assert!(!info.contact.whatsapp.is_empty());
    }

    #[test]
    fn document_shape_matches_collection() {
        let document = bson::to_document(&default_company_info()).expect("to_document");
        assert!(!document.contains_key("_id"));
        assert!(document.get_document("founder").is_ok());
        assert!(document.get_document("stats").is_ok());
        assert!(document.get_datetime("updatedAt").is_ok());
        let contact = document.get_document("contact").expect("contact");
        assert!(contact.get_str("officeHours").is_ok());
    }
}

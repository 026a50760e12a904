//! Response shaping: store documents carry BSON object ids and datetimes,
//! the HTTP boundary renders ids as hex strings and timestamps as RFC 3339.

use chrono::{DateTime, Utc};
use serde::Serialize;

use models::company::{CompanyInfo, CompanyStats, ContactChannels, FounderInfo};
use models::contact::Contact;
use models::property::{ListingStatus, Property};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    pub id: String,
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
    pub created_at: DateTime<Utc>,
}

impl From<Property> for PropertyView {
    fn from(p: Property) -> Self {
        Self {
            id: p.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: p.title,
            location: p.location,
            price: p.price,
            property_type: p.property_type,
            size: p.size,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            features: p.features,
            description: p.description,
            image_url: p.image_url,
            gallery: p.gallery,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for ContactView {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: c.name,
            email: c.email,
            phone: c.phone,
            subject: c.subject,
            message: c.message,
            is_read: c.is_read,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoView {
    pub id: String,
    pub founder: FounderInfo,
    pub contact: ContactChannels,
    pub stats: CompanyStats,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyInfo> for CompanyInfoView {
    fn from(info: CompanyInfo) -> Self {
        Self {
            id: info.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            founder: info.founder,
            contact: info.contact,
            stats: info.stats,
            updated_at: info.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn property_view_renders_hex_id_and_rfc3339_timestamp() {
        let oid = ObjectId::new();
        let property = Property {
            id: Some(oid),
            title: "Test Villa".into(),
            location: "Oia".into(),
            price: 100_000,
            property_type: "Villa".into(),
            size: "120 m²".into(),
            bedrooms: 3,
            bathrooms: 2,
            features: vec![],
            description: "d".into(),
            image_url: "/api/placeholder/400/300".into(),
            gallery: vec![],
            status: ListingStatus::Active,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(PropertyView::from(property)).expect("serialize view");
        assert_eq!(json["id"], serde_json::json!(oid.to_hex()));
        assert_eq!(json["type"], "Villa");
        assert_eq!(json["status"], "active");
        // chrono's serde emits RFC 3339
        let stamp = json["createdAt"].as_str().expect("string timestamp");
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
        assert!(json.get("propertyType").is_none());
    }

    #[test]
    fn contact_view_uses_camel_case_fields() {
        let contact = Contact {
            id: Some(ObjectId::new()),
            name: "Ayşe".into(),
            email: "ayse@example.com".into(),
            phone: "+90 555".into(),
            subject: "Konu".into(),
            message: "Merhaba".into(),
            is_read: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(ContactView::from(contact)).expect("serialize view");
        assert_eq!(json["isRead"], serde_json::json!(false));
        assert!(json["id"].as_str().map(|s| s.len() == 24).unwrap_or(false));
    }
}

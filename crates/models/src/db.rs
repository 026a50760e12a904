use mongodb::{Client, Collection, Database};

use configs::StoreConfig;

use crate::company::CompanyInfo;
use crate::contact::Contact;
use crate::errors::StoreError;
use crate::property::Property;

/// Shared handle over the document store.
///
/// Constructed once at startup and passed explicitly to everything that needs
/// it; the underlying client is safe for concurrent use across in-flight
/// requests.
#[derive(Clone)]
pub struct Store {
    client: Client,
    db: Database,
    properties: Collection<Property>,
    contacts: Collection<Contact>,
    company_info: Collection<CompanyInfo>,
}

impl Store {
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&cfg.url).await?;
        let db = client.database(&cfg.db_name);
        Ok(Self {
            properties: db.collection("properties"),
            contacts: db.collection("contacts"),
            company_info: db.collection("company_info"),
            client,
            db,
        })
    }

    pub fn properties(&self) -> &Collection<Property> {
        &self.properties
    }

    pub fn contacts(&self) -> &Collection<Contact> {
        &self.contacts
    }

    pub fn company_info(&self) -> &Collection<CompanyInfo> {
        &self.company_info
    }

    /// Drop the whole database. Used by the test suites for cleanup.
    pub async fn drop_database(&self) -> Result<(), StoreError> {
        self.db.drop().await?;
        Ok(())
    }

    /// Release the underlying client. Safe to call once at shutdown; clones
    /// of this handle stop working afterwards.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Identity payload returned by the API root probe.
#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceIdentity {
    pub message: &'static str,
    pub status: &'static str,
}

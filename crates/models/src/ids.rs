use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed record id: {0}")]
pub struct InvalidRecordId(pub String);

/// Opaque store-generated identifier as it appears at the API boundary.
///
/// Parsing is the single place identifier validation happens; every handler
/// that accepts an id goes through `FromStr` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(ObjectId);

impl RecordId {
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidRecordId(s.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_hex() {
        let oid = ObjectId::new();
        let id: RecordId = oid.to_hex().parse().expect("valid id");
        assert_eq!(id.as_object_id(), oid);
        assert_eq!(id.to_hex(), oid.to_hex());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!("invalid-id".parse::<RecordId>().is_err());
        assert!("123".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
        // right length, non-hex characters
        assert!("zzzzzzzzzzzzzzzzzzzzzzzz".parse::<RecordId>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let oid = ObjectId::new();
        let id = RecordId::from(oid);
        assert_eq!(id.to_string().parse::<RecordId>().expect("round trip"), id);
    }
}

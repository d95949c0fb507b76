//! Person Gallery - Person Records and Persisted Codec
//!
//! A record is a display label plus the token naming its image file.
//! The persisted form is a JSON array of records under a single
//! preference-store key; the image token is serialized as `"image"`,
//! the field name earlier releases of the app wrote, so old payloads
//! decode unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GalleryError, GalleryResult};

/// Display name given to every freshly captured person.
pub const DEFAULT_NAME: &str = "Unknown";

/// A labeled photo in the gallery.
///
/// `image_reference` names the companion file in the documents
/// directory and never changes after creation; it doubles as the
/// record's stable handle for rename/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Display label, free-form (empty permitted).
    pub name: String,
    /// Opaque unique token naming the image file.
    #[serde(rename = "image")]
    pub image_reference: String,
}

impl PersonRecord {
    /// Create a record for a freshly written image file.
    pub fn new(image_reference: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            image_reference: image_reference.into(),
        }
    }

    /// Generate a fresh image reference token.
    pub fn fresh_reference() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Serialize a record list to its persisted byte form.
pub fn encode_records(records: &[PersonRecord]) -> GalleryResult<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

/// Deserialize a persisted byte blob back into a record list.
pub fn decode_records(bytes: &[u8]) -> GalleryResult<Vec<PersonRecord>> {
    serde_json::from_slice(bytes).map_err(|e| GalleryError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_empty() {
        let records: Vec<PersonRecord> = Vec::new();
        let bytes = encode_records(&records).unwrap();
        assert_eq!(decode_records(&bytes).unwrap(), records);
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let records = vec![
            PersonRecord {
                name: "Alice".into(),
                image_reference: "f1.jpg".into(),
            },
            PersonRecord {
                name: "".into(),
                image_reference: PersonRecord::fresh_reference(),
            },
            PersonRecord::new("f3.jpg"),
        ];

        let bytes = encode_records(&records).unwrap();
        let decoded = decode_records(&bytes).unwrap();
        assert_eq!(decoded, records);
        assert_eq!(decoded[2].name, DEFAULT_NAME);
    }

    #[test]
    fn test_decodes_legacy_payload() {
        // Field name "image" is what the shipped app persisted.
        let bytes = br#"[{"name":"Alice","image":"f1.jpg"}]"#;
        let decoded = decode_records(bytes).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].name, "Alice");
        assert_eq!(decoded[0].image_reference, "f1.jpg");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_records(b"not json"),
            Err(GalleryError::Deserialization(_))
        ));
    }

    #[test]
    fn test_fresh_references_are_unique() {
        let a = PersonRecord::fresh_reference();
        let b = PersonRecord::fresh_reference();
        assert_ne!(a, b);
    }
}

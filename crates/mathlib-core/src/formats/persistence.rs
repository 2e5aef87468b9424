//! # Persistence Format
//!
//! Binary serialization for lists of evaluation results.
//!
//! Format: Header (5 bytes) + postcard-serialized `Vec<MathValue>`.
//! - 4 bytes: Magic ("VSUM")
//! - 1 byte: Version
//!
//! Size and header are validated before the payload is decoded.

use crate::primitives::{self, MAX_BATCH_LENGTH};
use crate::{MathError, MathValue};

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum accepted size of an encoded results buffer.
///
/// A full batch of 4x4 matrices needs about 650 KB.
pub const MAX_PERSISTENCE_PAYLOAD_SIZE: usize = 1024 * 1024;

const HEADER_SIZE: usize = 5;

// =============================================================================
// FILE HEADER
// =============================================================================

/// The persistence header precedes all result data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl PersistenceHeader {
    /// Create a new header with current format version.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            magic: *primitives::MAGIC_BYTES,
            version: primitives::FORMAT_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), MathError> {
        if &self.magic != primitives::MAGIC_BYTES {
            return Err(MathError::DeserializationError(
                "Invalid magic bytes".to_string(),
            ));
        }
        if self.version != primitives::FORMAT_VERSION {
            return Err(MathError::DeserializationError(format!(
                "Unsupported version: {} (expected {})",
                self.version,
                primitives::FORMAT_VERSION
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let [a, b, c, d] = self.magic;
        [a, b, c, d, self.version]
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        match bytes {
            [a, b, c, d, version, ..] => Ok(Self {
                magic: [*a, *b, *c, *d],
                version: *version,
            }),
            _ => Err(MathError::DeserializationError(
                "Header too short".to_string(),
            )),
        }
    }
}

impl Default for PersistenceHeader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Serialize results to bytes (header + payload).
pub fn values_to_bytes(values: &[MathValue]) -> Result<Vec<u8>, MathError> {
    if values.len() > MAX_BATCH_LENGTH {
        return Err(MathError::SerializationError(format!(
            "{} values exceed maximum batch length {}",
            values.len(),
            MAX_BATCH_LENGTH
        )));
    }

    let payload =
        postcard::to_stdvec(values).map_err(|e| MathError::SerializationError(e.to_string()))?;

    let mut result = Vec::with_capacity(HEADER_SIZE + payload.len());
    result.extend_from_slice(&PersistenceHeader::new().to_bytes());
    result.extend_from_slice(&payload);
    Ok(result)
}

/// Deserialize results from bytes.
///
/// Validates, in order: minimum size, maximum size, header magic and
/// version. Only then is the payload decoded.
pub fn values_from_bytes(bytes: &[u8]) -> Result<Vec<MathValue>, MathError> {
    if bytes.len() < HEADER_SIZE {
        return Err(MathError::DeserializationError(format!(
            "Data too short: minimum {} bytes required",
            HEADER_SIZE
        )));
    }

    if bytes.len() > MAX_PERSISTENCE_PAYLOAD_SIZE {
        return Err(MathError::DeserializationError(format!(
            "Data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_PERSISTENCE_PAYLOAD_SIZE
        )));
    }

    PersistenceHeader::from_bytes(bytes)?.validate()?;

    let payload = bytes.get(HEADER_SIZE..).unwrap_or_default();
    let values: Vec<MathValue> = postcard::from_bytes(payload).map_err(|e| {
        MathError::DeserializationError(format!("Failed to decode results: {}", e))
    })?;

    if values.len() > MAX_BATCH_LENGTH {
        return Err(MathError::DeserializationError(format!(
            "{} values exceed maximum batch length {}",
            values.len(),
            MAX_BATCH_LENGTH
        )));
    }
    Ok(values)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Matrix3f, Vector3f};

    fn sample() -> Vec<MathValue> {
        vec![
            MathValue::Scalar(13.0),
            MathValue::Bool(true),
            MathValue::Vector(Vector3f::new(1.0, -2.0, 0.5).into()),
            MathValue::Matrix(Matrix3f::translation(2.0, 3.0).into()),
        ]
    }

    #[test]
    fn header_roundtrip() {
        let header = PersistenceHeader::new();
        let restored = PersistenceHeader::from_bytes(&header.to_bytes()).expect("parse header");

        assert_eq!(restored, header);
        assert!(restored.validate().is_ok());
    }

    #[test]
    fn bytes_roundtrip_bit_exact() {
        let bytes1 = values_to_bytes(&sample()).expect("first serialize");
        assert_eq!(&bytes1[0..4], b"VSUM");

        let restored = values_from_bytes(&bytes1).expect("deserialize");
        assert_eq!(restored, sample());

        let bytes2 = values_to_bytes(&restored).expect("second serialize");
        assert_eq!(bytes1, bytes2, "save -> load -> save must be identical");
    }

    #[test]
    fn dimensions_survive_roundtrip() {
        let bytes = values_to_bytes(&sample()).expect("serialize");
        let restored = values_from_bytes(&bytes).expect("deserialize");

        assert_eq!(restored[2].as_vector().map(|v| v.dimension()), Some(3));
        let m = restored[3].as_matrix().expect("matrix");
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.values(), Matrix3f::translation(2.0, 3.0).values());
    }

    #[test]
    fn empty_list_roundtrip() {
        let bytes = values_to_bytes(&[]).expect("serialize");
        assert_eq!(values_from_bytes(&bytes).expect("deserialize"), vec![]);
    }

    #[test]
    fn invalid_magic_rejected() {
        let mut bytes = values_to_bytes(&sample()).expect("serialize");
        bytes[0..4].copy_from_slice(b"XXXX");
        assert!(matches!(
            values_from_bytes(&bytes),
            Err(MathError::DeserializationError(_))
        ));
    }

    #[test]
    fn wrong_version_rejected() {
        let mut bytes = values_to_bytes(&sample()).expect("serialize");
        bytes[4] = primitives::FORMAT_VERSION + 1;
        assert!(values_from_bytes(&bytes).is_err());
    }

    #[test]
    fn short_and_truncated_data_rejected() {
        assert!(values_from_bytes(b"VSU").is_err());

        let bytes = values_to_bytes(&sample()).expect("serialize");
        assert!(values_from_bytes(&bytes[..bytes.len() - 3]).is_err());
    }

    #[test]
    fn oversized_data_rejected_before_decoding() {
        let mut bytes = PersistenceHeader::new().to_bytes().to_vec();
        bytes.resize(MAX_PERSISTENCE_PAYLOAD_SIZE + 1, 0);
        let err = values_from_bytes(&bytes).expect_err("too large");
        assert!(err.to_string().contains("exceeds maximum"));
    }
}

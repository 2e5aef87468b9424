//! # Formats
//!
//! Binary encodings of evaluation results. File I/O lives in the app layer.

mod persistence;

pub use persistence::{
    MAX_PERSISTENCE_PAYLOAD_SIZE, PersistenceHeader, values_from_bytes, values_to_bytes,
};

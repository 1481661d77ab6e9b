//! Record decoding for the companies and travels sources.
//!
//! This module handles:
//! - Parsing raw JSON bytes into arrays of objects
//! - Applying the default policy for missing or falsy fields
//! - Producing typed `CompanyRecord` / `TravelRecord` values

pub mod decoder;
pub mod records;

// Re-export main types
pub use decoder::{decode_companies, decode_company, decode_travel, decode_travels};
pub use records::{CompanyRecord, TravelRecord};

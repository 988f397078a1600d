//! Data models
//!
//! Rust structs representing potential measurement rows.

mod record;

pub use record::{Record, RecordError, RecordResult};

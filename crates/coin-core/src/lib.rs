#![deny(missing_docs)]
#![doc = "Core error taxonomy, interval checks and schema descriptors shared by the coinspace crates."]

pub mod errors;
pub mod interval;
pub mod provenance;

pub use errors::{CoinError, ErrorInfo};
pub use interval::{is_in_interval, Interval};
pub use provenance::SchemaVersion;

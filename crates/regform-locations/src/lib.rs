//! Administrative-division reference index and search
//!
//! The registration form resolves free-text place queries against a static
//! table of administrative divisions (district / amphoe / province with
//! their zipcodes). This crate holds that table and the pure search and
//! resolve logic over it:
//!
//! - [`LocationIndex`]: the immutable reference set, built once at startup
//!   and passed around by reference. There is deliberately no ambient
//!   module-level singleton; tests build a fresh index per run.
//! - [`LocationResolver`]: deterministic substring search over the index
//!   and resolution of a selected record into its canonical field values.
//! - [`ReferenceDataSource`] / [`JsonReferenceData`]: the boundary to the
//!   provider that supplies the record set, with a JSON adapter for the
//!   dataset's published shape.
//!
//! Search is intentionally unranked: a record matches when the query is a
//! case-insensitive substring of any of the three names, and results come
//! back in the index's original order. Determinism over relevance.

#![deny(unsafe_code)]

mod errors;
mod index;
mod resolver;
mod source;

pub use errors::*;
pub use index::*;
pub use resolver::*;
pub use source::*;

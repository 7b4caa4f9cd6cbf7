//! Wire-to-domain schema conversion for the CIM cloud provider API client
//!
//! This crate is the conversion layer between the provider's loosely-typed
//! JSON payloads and the strongly-typed entities the rest of the client
//! works with. The transport decodes bytes into [`schema`] records; this
//! layer turns them into [`domain`] entities; everything else (HTTP,
//! retries, pagination loops, auth) lives outside.
//!
//! # Design
//!
//! - [`schema`] mirrors the wire exactly: nullable fields, polymorphic
//!   sub-objects, mixed encodings and all.
//! - [`domain`] owns semantic types: concrete IP addresses and CIDR ranges,
//!   UTC timestamps, open enumerations that preserve unrecognized codes.
//! - [`convert`] holds one deterministic, pure conversion per entity
//!   (`TryFrom`/`From`) plus the order-preserving collection lifter
//!   [`convert::convert_all`].
//!
//! Conversions are pure functions over their input record: no I/O, no
//! shared state, safe to call concurrently.
//!
//! ```rust
//! use cim_cloud_schema::{domain::Action, schema};
//!
//! let wire: schema::Action = serde_json::from_str(
//!     r#"{"id": 1, "command": "create_server", "status": "success"}"#,
//! )?;
//! let action = Action::try_from(wire)?;
//! assert_eq!(action.id, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod convert;
pub mod domain;
pub mod errors;
pub mod schema;

// Re-export commonly used types
pub use convert::convert_all;
pub use errors::{ConversionError, ConversionResult};

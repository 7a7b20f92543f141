//! fg-core: stable foundation for the dataflow graph builder.
//!
//! Contains:
//! - ids (stable compact IDs for vertices, transforms, edges)
//! - error (the shared error taxonomy)
//! - types (opaque port type references)
//! - profile (per-vertex profiling records)

pub mod error;
pub mod ids;
pub mod profile;
pub mod types;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DagError, DagResult, ensure_name};
pub use ids::*;
pub use profile::VertexProfile;
pub use types::TypeRef;

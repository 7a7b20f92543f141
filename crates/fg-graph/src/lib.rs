//! fg-graph: dataflow graph model for the pipeline generator.
//!
//! Provides:
//! - Ports (`Vertex`), configuration values (`Constant`) and stages (`Transform`)
//! - Edges and the `connect` shorthands that build them
//! - The `Graph` container with `parent_of` reverse lookup and validation
//!
//! # Example
//!
//! ```
//! use fg_graph::{Graph, Transform, Vertex, connect};
//!
//! let mut producer = Transform::new("producer").unwrap();
//! producer.add_port(Vertex::output("data", "u32").unwrap()).unwrap();
//! let mut consumer = Transform::new("consumer").unwrap();
//! consumer.add_port(Vertex::input("data", "u32").unwrap()).unwrap();
//!
//! let mut graph = Graph::new("top");
//! let producer = graph.add_transform(producer).unwrap();
//! let consumer = graph.add_transform(consumer).unwrap();
//! let edge = graph.add_edge(connect(&producer, &consumer).unwrap()).unwrap().clone();
//!
//! assert_eq!(graph.parent_of_id(edge.src()).unwrap().name(), "producer");
//! assert!(graph.validate().is_ok());
//! ```

pub mod connect;
pub mod constant;
pub mod edge;
pub mod graph;
pub mod indexing;
pub mod transform;
pub(crate) mod validate;
pub mod vertex;

// Re-exports for ergonomics
pub use connect::{Endpoint, connect};
pub use constant::{ConstValue, Constant, ProfileFn};
pub use edge::Edge;
pub use fg_core::{DagError, DagResult, TypeRef, VertexProfile};
pub use graph::{DEFAULT_GRAPH_NAME, Graph};
pub use indexing::ParentIndex;
pub use transform::Transform;
pub use vertex::{Direction, Vertex};

//! Directed connections between ports.

use fg_core::{DagError, DagResult, VertexId};

use crate::vertex::Vertex;

/// A directed connection from an output port to an input port.
///
/// Endpoints are held by identity only; the owning transforms (and through
/// them the graph) keep the vertices alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(crate) src: VertexId,
    pub(crate) dst: VertexId,
    pub(crate) name: Option<String>,
}

impl Edge {
    /// Connect two ports in either order.
    ///
    /// Exactly one of them must be an output; the stored edge always runs
    /// from the output to the input.
    pub fn between(a: &Vertex, b: &Vertex) -> DagResult<Self> {
        let (src, dst) = match (a.is_output(), b.is_output()) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            _ => {
                return Err(DagError::DirectionMismatch {
                    a: format!("{} {}", a.direction(), a.name()),
                    b: format!("{} {}", b.direction(), b.name()),
                });
            }
        };
        Ok(Self {
            src: src.id(),
            dst: dst.id(),
            name: None,
        })
    }

    /// Attach a display label.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The output port the data leaves from.
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// The input port the data arrives at.
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

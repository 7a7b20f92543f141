//! Typed, directional connection points.

use std::fmt;

use fg_core::{DagResult, TypeRef, VertexId, ensure_name, next_vertex_id};

/// Which way data flows through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sink-facing input port.
    Input,
    /// Source-facing output port.
    Output,
}

impl Direction {
    /// The direction a peer port must have to be connected to this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Input => Direction::Output,
            Direction::Output => Direction::Input,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Input => "input",
            Direction::Output => "output",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A port of a transform.
///
/// Every vertex gets a unique identity at creation; edges and the graph's
/// parent index refer to vertices by that identity, never by name. Vertices
/// are deliberately not `Clone`: a vertex is moved into exactly one transform.
#[derive(Debug, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    name: String,
    ty: TypeRef,
    direction: Direction,
}

impl Vertex {
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        direction: Direction,
    ) -> DagResult<Self> {
        let name = name.into();
        ensure_name(&name)?;
        Ok(Self {
            id: next_vertex_id(),
            name,
            ty: ty.into(),
            direction,
        })
    }

    /// Create an input port.
    pub fn input(name: impl Into<String>, ty: impl Into<TypeRef>) -> DagResult<Self> {
        Self::new(name, ty, Direction::Input)
    }

    /// Create an output port.
    pub fn output(name: impl Into<String>, ty: impl Into<TypeRef>) -> DagResult<Self> {
        Self::new(name, ty, Direction::Output)
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_input(&self) -> bool {
        self.direction == Direction::Input
    }

    pub fn is_output(&self) -> bool {
        self.direction == Direction::Output
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

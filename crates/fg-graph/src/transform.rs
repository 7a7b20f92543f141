//! Processing stages: named owners of constants and ports.

use std::fmt;

use fg_core::{DagError, DagResult, VertexId, ensure_name};

use crate::constant::Constant;
use crate::vertex::{Direction, Vertex};

/// A processing stage of the dataflow graph.
///
/// Built incrementally as a plain value; once handed to
/// [`Graph::add_transform`](crate::Graph::add_transform) it lives behind a
/// shared handle and its membership can no longer change.
#[derive(Debug)]
pub struct Transform {
    name: String,
    constants: Vec<Constant>,
    inputs: Vec<Vertex>,
    outputs: Vec<Vertex>,
    reads_memory: bool,
    writes_memory: bool,
}

impl Transform {
    /// Create an empty transform.
    pub fn new(name: impl Into<String>) -> DagResult<Self> {
        let name = name.into();
        ensure_name(&name)?;
        Ok(Self {
            name,
            constants: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            reads_memory: false,
            writes_memory: false,
        })
    }

    /// Mark whether the stage reads and/or writes shared memory.
    pub fn with_memory_access(mut self, reads: bool, writes: bool) -> Self {
        self.reads_memory = reads;
        self.writes_memory = writes;
        self
    }

    /// Append a constant; names are unique per transform.
    pub fn add_constant(&mut self, constant: Constant) -> DagResult<&mut Self> {
        if self.constants.iter().any(|c| c.name() == constant.name()) {
            return Err(DagError::DuplicateName {
                name: constant.name().to_string(),
                scope: format!("constants of transform '{}'", self.name),
            });
        }
        self.constants.push(constant);
        Ok(self)
    }

    /// Append a port to the collection matching its direction.
    pub fn add_port(&mut self, vertex: Vertex) -> DagResult<&mut Self> {
        let direction = vertex.direction();
        self.push_port(vertex, direction)
    }

    /// Append an input port; an output vertex is rejected.
    pub fn add_input(&mut self, vertex: Vertex) -> DagResult<&mut Self> {
        self.push_port(vertex, Direction::Input)
    }

    /// Append an output port; an input vertex is rejected.
    pub fn add_output(&mut self, vertex: Vertex) -> DagResult<&mut Self> {
        self.push_port(vertex, Direction::Output)
    }

    fn push_port(&mut self, vertex: Vertex, target: Direction) -> DagResult<&mut Self> {
        if vertex.direction() != target {
            return Err(DagError::InvalidName {
                name: vertex.name().to_string(),
                reason: match target {
                    Direction::Input => "an output vertex cannot be added as an input",
                    Direction::Output => "an input vertex cannot be added as an output",
                },
            });
        }
        let ports = match target {
            Direction::Input => &mut self.inputs,
            Direction::Output => &mut self.outputs,
        };
        if ports.iter().any(|p| p.name() == vertex.name()) {
            return Err(DagError::DuplicateName {
                name: vertex.name().to_string(),
                scope: format!("{}s of transform '{}'", target, self.name),
            });
        }
        ports.push(vertex);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn inputs(&self) -> &[Vertex] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Vertex] {
        &self.outputs
    }

    /// All ports, inputs first.
    pub fn ports(&self) -> impl Iterator<Item = &Vertex> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    pub fn reads_memory(&self) -> bool {
        self.reads_memory
    }

    pub fn writes_memory(&self) -> bool {
        self.writes_memory
    }

    /// Look up a constant by name.
    pub fn c(&self, name: &str) -> DagResult<&Constant> {
        self.constants
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| DagError::NotFound {
                what: "constant",
                name: format!("{}.{}", self.name, name),
            })
    }

    /// Input port at `index`.
    pub fn i(&self, index: usize) -> DagResult<&Vertex> {
        self.inputs.get(index).ok_or(DagError::IndexOutOfRange {
            what: "input port",
            index,
            len: self.inputs.len(),
        })
    }

    /// Output port at `index`.
    pub fn o(&self, index: usize) -> DagResult<&Vertex> {
        self.outputs.get(index).ok_or(DagError::IndexOutOfRange {
            what: "output port",
            index,
            len: self.outputs.len(),
        })
    }

    /// Look up a port by name, inputs before outputs.
    pub fn vertex(&self, name: &str) -> DagResult<&Vertex> {
        self.ports()
            .find(|v| v.name() == name)
            .ok_or_else(|| DagError::NotFound {
                what: "vertex",
                name: format!("{}.{}", self.name, name),
            })
    }

    /// The only port of `direction`, used by the transform connection shorthands.
    pub fn sole_port(&self, direction: Direction) -> DagResult<&Vertex> {
        let ports = match direction {
            Direction::Input => &self.inputs,
            Direction::Output => &self.outputs,
        };
        match ports.as_slice() {
            [only] => Ok(only),
            _ => Err(DagError::AmbiguousPort {
                transform: self.name.clone(),
                direction: direction.as_str(),
                count: ports.len(),
            }),
        }
    }

    /// Whether this transform owns `vertex` (by identity, not by name).
    pub fn has(&self, vertex: &Vertex) -> bool {
        self.has_id(vertex.id())
    }

    pub fn has_id(&self, id: VertexId) -> bool {
        self.ports().any(|v| v.id() == id)
    }

    /// Render the inputs as `a: T, b: T`.
    pub fn to_string_inputs(&self) -> String {
        join_ports(&self.inputs)
    }

    /// Render the outputs as `sum: T`.
    pub fn to_string_outputs(&self) -> String {
        join_ports(&self.outputs)
    }
}

fn join_ports(ports: &[Vertex]) -> String {
    ports
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Signature rendering, e.g. `add(a: T, b: T) -> (sum: T)`.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) -> ({})",
            self.name,
            self.to_string_inputs(),
            self.to_string_outputs()
        )
    }
}

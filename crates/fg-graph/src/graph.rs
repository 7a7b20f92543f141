//! The top-level graph container.

use std::collections::HashMap;
use std::rc::Rc;

use fg_core::{DagError, DagResult, EdgeId, Id, TransformId, VertexId};
use tracing::{debug, warn};

use crate::edge::Edge;
use crate::indexing::ParentIndex;
use crate::transform::Transform;
use crate::validate;
use crate::vertex::Vertex;

/// Name given to graphs created with [`Graph::default`].
pub const DEFAULT_GRAPH_NAME: &str = "FletcherDAG";

/// The dataflow graph: registered transforms and the edges between their ports.
///
/// The graph stores:
/// - Transforms behind shared handles, in registration order (indexed by `TransformId`).
/// - Edges in registration order (indexed by `EdgeId`).
/// - A parent index from every registered vertex to its transform.
///
/// It is append-only. Each `add_*` either succeeds or leaves the graph exactly
/// as it was.
#[derive(Debug)]
pub struct Graph {
    pub(crate) name: String,
    pub(crate) transforms: Vec<Rc<Transform>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) by_name: HashMap<String, TransformId>,
    pub(crate) parents: ParentIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transforms: Vec::new(),
            edges: Vec::new(),
            by_name: HashMap::new(),
            parents: ParentIndex::new(),
        }
    }

    /// Register a transform and return the shared handle to build edges with.
    ///
    /// The graph takes the transform by value, so it is registered exactly
    /// once. The returned handle can be used as an edge endpoint but not
    /// registered again:
    ///
    /// ```compile_fail
    /// use fg_graph::{Graph, Transform};
    ///
    /// let mut first = Graph::new("first");
    /// let handle = first.add_transform(Transform::new("t").unwrap()).unwrap();
    /// let mut second = Graph::new("second");
    /// second.add_transform(handle).unwrap();
    /// ```
    ///
    /// Fails if the name is taken.
    pub fn add_transform(&mut self, transform: Transform) -> DagResult<Rc<Transform>> {
        if self.by_name.contains_key(transform.name()) {
            warn!(graph = %self.name, transform = transform.name(), "duplicate transform name");
            return Err(DagError::DuplicateName {
                name: transform.name().to_string(),
                scope: format!("transforms of graph '{}'", self.name),
            });
        }

        let id = Id::from_index(self.transforms.len() as u32);
        let transform = Rc::new(transform);
        self.parents.insert(id, &transform);
        self.by_name.insert(transform.name().to_string(), id);
        self.transforms.push(Rc::clone(&transform));

        debug!(graph = %self.name, slot = id.index(), "registered transform {transform}");
        Ok(transform)
    }

    /// Register an edge whose endpoints belong to registered transforms.
    pub fn add_edge(&mut self, edge: Edge) -> DagResult<&Edge> {
        for (role, vertex) in [("source", edge.src), ("destination", edge.dst)] {
            if !self.parents.contains(vertex) {
                warn!(
                    graph = %self.name,
                    vertex = vertex.index(),
                    "edge {role} has no owner in graph"
                );
                return Err(DagError::DanglingReference {
                    what: format!("{role} vertex #{}", vertex.index()),
                    graph: self.name.clone(),
                });
            }
        }

        debug!(graph = %self.name, "registered edge {}", self.describe_edge(&edge));
        let idx = self.edges.len();
        self.edges.push(edge);
        Ok(&self.edges[idx])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All transforms, in registration order.
    pub fn transforms(&self) -> &[Rc<Transform>] {
        &self.transforms
    }

    /// All edges, in registration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a transform by name.
    pub fn transform(&self, name: &str) -> Option<&Rc<Transform>> {
        let id = self.by_name.get(name)?;
        self.transform_by_id(*id)
    }

    /// Get a transform by ID (returns None if ID out of bounds).
    pub fn transform_by_id(&self, id: TransformId) -> Option<&Rc<Transform>> {
        self.transforms.get(id.index() as usize)
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index() as usize)
    }

    /// The reverse port -> transform index.
    pub fn parent_index(&self) -> &ParentIndex {
        &self.parents
    }

    /// The registered transform owning `vertex`.
    pub fn parent_of(&self, vertex: &Vertex) -> DagResult<&Rc<Transform>> {
        self.owner(vertex.id()).ok_or_else(|| DagError::NotFound {
            what: "owner of vertex",
            name: vertex.name().to_string(),
        })
    }

    /// [`parent_of`](Self::parent_of) for a bare vertex id, e.g. an edge endpoint.
    pub fn parent_of_id(&self, vertex: VertexId) -> DagResult<&Rc<Transform>> {
        self.owner(vertex).ok_or_else(|| DagError::NotFound {
            what: "owner of vertex",
            name: format!("#{}", vertex.index()),
        })
    }

    /// Resolve a vertex id to the registered port.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.owner(id)?.ports().find(|v| v.id() == id)
    }

    /// Render an edge as `producer.port -> consumer.port`, plus its label.
    pub fn describe_edge(&self, edge: &Edge) -> String {
        let mut out = format!(
            "{} -> {}",
            self.describe_vertex(edge.src),
            self.describe_vertex(edge.dst)
        );
        if let Some(name) = edge.name() {
            out.push_str(&format!(" [{name}]"));
        }
        out
    }

    /// Re-check every structural invariant of the graph.
    pub fn validate(&self) -> DagResult<()> {
        validate::validate_transforms(&self.transforms)?;
        validate::validate_parents(&self.transforms, &self.parents)?;
        validate::validate_edges(&self.transforms, &self.parents, &self.edges, &self.name)
    }

    fn owner(&self, vertex: VertexId) -> Option<&Rc<Transform>> {
        let id = self.parents.owner(vertex)?;
        self.transform_by_id(id)
    }

    fn describe_vertex(&self, id: VertexId) -> String {
        match (self.owner(id), self.vertex(id)) {
            (Some(t), Some(v)) => format!("{}.{}", t.name(), v.name()),
            _ => format!("<vertex #{}>", id.index()),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::connect::connect;
    use crate::constant::Constant;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn relay(name: String) -> Transform {
        let mut t = Transform::new(name).unwrap();
        t.add_port(Vertex::input("x", "T").unwrap()).unwrap();
        t.add_port(Vertex::output("y", "T").unwrap()).unwrap();
        t
    }

    proptest! {
        #[test]
        fn insertion_keeps_names_unique(names in prop::collection::vec("[a-d]{1,2}", 0..12)) {
            let mut t = Transform::new("t").unwrap();
            let mut seen = HashSet::new();
            for name in &names {
                let fresh = seen.insert(name.clone());
                let added = t.add_constant(Constant::new(name.clone(), "0").unwrap()).is_ok();
                prop_assert_eq!(fresh, added);
                let added = t.add_port(Vertex::input(name.clone(), "T").unwrap()).is_ok();
                prop_assert_eq!(fresh, added);
            }
            prop_assert_eq!(t.constants().len(), seen.len());
            prop_assert_eq!(t.inputs().len(), seen.len());
            prop_assert!(t.outputs().is_empty());
        }

        #[test]
        fn parent_of_inverts_ownership(
            shapes in prop::collection::vec((0_usize..4, 0_usize..4), 1..8)
        ) {
            let mut g = Graph::new("G");
            let mut handles = Vec::new();
            for (k, (n_in, n_out)) in shapes.iter().enumerate() {
                let mut t = Transform::new(format!("t{k}")).unwrap();
                for i in 0..*n_in {
                    t.add_port(Vertex::input(format!("i{i}"), "T").unwrap()).unwrap();
                }
                for o in 0..*n_out {
                    t.add_port(Vertex::output(format!("o{o}"), "T").unwrap()).unwrap();
                }
                handles.push(g.add_transform(t).unwrap());
            }

            for t in &handles {
                for v in t.ports() {
                    prop_assert!(Rc::ptr_eq(g.parent_of(v).unwrap(), t));
                }
            }
            prop_assert!(g.validate().is_ok());
        }

        #[test]
        fn registered_edges_are_canonical(
            links in prop::collection::vec((0_usize..4, 0_usize..4, any::<bool>()), 0..16)
        ) {
            let mut g = Graph::new("G");
            let mut stages = Vec::new();
            for k in 0..4 {
                stages.push(g.add_transform(relay(format!("s{k}"))).unwrap());
            }

            for (a, b, flip) in links {
                let out = stages[a].o(0).unwrap();
                let inp = stages[b].i(0).unwrap();
                let edge = (if flip { connect(inp, out) } else { connect(out, inp) }).unwrap();
                g.add_edge(edge).unwrap();
            }

            for e in g.edges() {
                prop_assert!(g.vertex(e.src()).unwrap().is_output());
                prop_assert!(g.vertex(e.dst()).unwrap().is_input());
                let src_owner = g.parent_of_id(e.src()).unwrap();
                let dst_owner = g.parent_of_id(e.dst()).unwrap();
                prop_assert!(g.transforms().iter().any(|t| Rc::ptr_eq(t, src_owner)));
                prop_assert!(g.transforms().iter().any(|t| Rc::ptr_eq(t, dst_owner)));
            }
            prop_assert!(g.validate().is_ok());
        }
    }
}

//! Reverse lookup from a port to the transform owning it.

use std::collections::HashMap;

use fg_core::{TransformId, VertexId};

use crate::transform::Transform;

/// Maps every registered vertex to the id of its owning transform.
///
/// Kept in lock-step with the graph's transform list, so `parent_of` is a
/// hash lookup instead of a scan over all ports.
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    owner: HashMap<VertexId, TransformId>,
}

impl ParentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every port of `transform` as owned by `id`.
    ///
    /// A vertex belongs to a single transform and a transform is registered
    /// once, so no port is indexed twice.
    pub(crate) fn insert(&mut self, id: TransformId, transform: &Transform) {
        for v in transform.ports() {
            let prev = self.owner.insert(v.id(), id);
            debug_assert!(prev.is_none(), "vertex {:?} indexed twice", v.id());
        }
    }

    /// Owner of a vertex, if any registered transform has it.
    pub fn owner(&self, vertex: VertexId) -> Option<TransformId> {
        self.owner.get(&vertex).copied()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.owner.contains_key(&vertex)
    }

    /// Number of indexed vertices.
    pub fn len(&self) -> usize {
        self.owner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;
    use fg_core::Id;

    fn two_port(name: &str) -> Transform {
        let mut t = Transform::new(name).unwrap();
        t.add_port(Vertex::input("i", "T").unwrap()).unwrap();
        t.add_port(Vertex::output("o", "T").unwrap()).unwrap();
        t
    }

    #[test]
    fn index_basic() {
        let a = two_port("a");
        let b = two_port("b");
        let mut idx = ParentIndex::new();
        idx.insert(Id::from_index(0), &a);
        idx.insert(Id::from_index(1), &b);

        assert_eq!(idx.len(), 4);
        assert_eq!(idx.owner(a.i(0).unwrap().id()), Some(Id::from_index(0)));
        assert_eq!(idx.owner(b.o(0).unwrap().id()), Some(Id::from_index(1)));
    }

    #[test]
    fn unknown_vertex_has_no_owner() {
        let idx = ParentIndex::new();
        let stray = Vertex::input("stray", "T").unwrap();
        assert!(idx.is_empty());
        assert_eq!(idx.owner(stray.id()), None);
        assert!(!idx.contains(stray.id()));
    }
}

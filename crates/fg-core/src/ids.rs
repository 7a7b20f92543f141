use core::fmt;
use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU32, Ordering};

/// Identity of a vertex, transform or edge.
///
/// Transform and edge ids are registration slots of their graph; vertex ids
/// come from [`next_vertex_id`]. Slot `n` is stored as `n + 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

pub type VertexId = Id;
pub type TransformId = Id;
pub type EdgeId = Id;

static NEXT_VERTEX: AtomicU32 = AtomicU32::new(0);

/// Allocate a process-wide unique vertex identity.
///
/// Vertices are created standalone and moved into a transform later, so their
/// identity cannot be a slot index of any container.
pub fn next_vertex_id() -> VertexId {
    Id::from_index(NEXT_VERTEX.fetch_add(1, Ordering::Relaxed))
}

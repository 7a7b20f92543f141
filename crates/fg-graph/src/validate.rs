//! Whole-graph validation.
//!
//! `Graph`'s mutators keep these invariants on every call; this pass re-checks
//! them all at once before a graph is handed to an emitter.

use std::collections::HashSet;
use std::rc::Rc;

use fg_core::{DagError, DagResult, Id, VertexId};

use crate::edge::Edge;
use crate::indexing::ParentIndex;
use crate::transform::Transform;
use crate::vertex::{Direction, Vertex};

/// Names unique per scope and ports stored under their own direction.
pub(crate) fn validate_transforms(transforms: &[Rc<Transform>]) -> DagResult<()> {
    let mut names = HashSet::new();
    for t in transforms {
        if !names.insert(t.name()) {
            return Err(DagError::DuplicateName {
                name: t.name().to_string(),
                scope: "graph transforms".to_string(),
            });
        }

        let mut constants = HashSet::new();
        for c in t.constants() {
            if !constants.insert(c.name()) {
                return Err(DagError::DuplicateName {
                    name: c.name().to_string(),
                    scope: format!("constants of transform '{}'", t.name()),
                });
            }
        }

        validate_ports(t, t.inputs(), Direction::Input)?;
        validate_ports(t, t.outputs(), Direction::Output)?;
    }
    Ok(())
}

fn validate_ports(t: &Transform, ports: &[Vertex], direction: Direction) -> DagResult<()> {
    let mut names = HashSet::new();
    for v in ports {
        if v.direction() != direction {
            return Err(DagError::Invariant {
                what: format!("{}.{} is stored among the {}s", t.name(), v.name(), direction),
            });
        }
        if !names.insert(v.name()) {
            return Err(DagError::DuplicateName {
                name: v.name().to_string(),
                scope: format!("{}s of transform '{}'", direction, t.name()),
            });
        }
    }
    Ok(())
}

/// The parent index covers exactly the registered ports, each under its owner.
pub(crate) fn validate_parents(
    transforms: &[Rc<Transform>],
    parents: &ParentIndex,
) -> DagResult<()> {
    let mut total = 0;
    for (i, t) in transforms.iter().enumerate() {
        let expected = Id::from_index(i as u32);
        for v in t.ports() {
            total += 1;
            if parents.owner(v.id()) != Some(expected) {
                return Err(DagError::Invariant {
                    what: format!(
                        "parent index does not map {}.{} to its transform",
                        t.name(),
                        v.name()
                    ),
                });
            }
        }
    }
    if total != parents.len() {
        return Err(DagError::Invariant {
            what: format!(
                "parent index holds {} vertices, transforms own {}",
                parents.len(),
                total
            ),
        });
    }
    Ok(())
}

/// Every edge runs from a registered output to a registered input.
pub(crate) fn validate_edges(
    transforms: &[Rc<Transform>],
    parents: &ParentIndex,
    edges: &[Edge],
    graph: &str,
) -> DagResult<()> {
    let lookup = |id: VertexId, role: &str| {
        find_port(transforms, parents, id).ok_or_else(|| DagError::DanglingReference {
            what: format!("{role} vertex #{}", id.index()),
            graph: graph.to_string(),
        })
    };

    for (i, edge) in edges.iter().enumerate() {
        let src = lookup(edge.src, "source")?;
        let dst = lookup(edge.dst, "destination")?;
        if !src.is_output() || !dst.is_input() {
            return Err(DagError::Invariant {
                what: format!("edge {} does not run from an output to an input", i),
            });
        }
    }
    Ok(())
}

fn find_port<'a>(
    transforms: &'a [Rc<Transform>],
    parents: &ParentIndex,
    id: VertexId,
) -> Option<&'a Vertex> {
    let owner = transforms.get(parents.owner(id)?.index() as usize)?;
    owner.ports().find(|v| v.id() == id)
}

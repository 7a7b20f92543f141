//! Connection builders.
//!
//! [`connect`] accepts any mix of ports and transforms. A transform stands for
//! its single port of the direction the other side needs.

use std::rc::Rc;

use fg_core::DagResult;

use crate::edge::Edge;
use crate::transform::Transform;
use crate::vertex::{Direction, Vertex};

/// One side of a connection.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    Vertex(&'a Vertex),
    Transform(&'a Transform),
}

impl<'a> From<&'a Vertex> for Endpoint<'a> {
    fn from(v: &'a Vertex) -> Self {
        Endpoint::Vertex(v)
    }
}

impl<'a> From<&'a Transform> for Endpoint<'a> {
    fn from(t: &'a Transform) -> Self {
        Endpoint::Transform(t)
    }
}

impl<'a> From<&'a Rc<Transform>> for Endpoint<'a> {
    fn from(t: &'a Rc<Transform>) -> Self {
        Endpoint::Transform(t.as_ref())
    }
}

/// Build an edge between two endpoints.
///
/// - port/port: either order, exactly one must be an output.
/// - transform/port (either order): the transform's only port facing the
///   given port is used.
/// - transform/transform: `a` is the producer; its only output feeds the
///   only input of `b`.
///
/// The returned edge is not registered anywhere yet; pass it to
/// [`Graph::add_edge`](crate::Graph::add_edge).
pub fn connect<'a>(a: impl Into<Endpoint<'a>>, b: impl Into<Endpoint<'a>>) -> DagResult<Edge> {
    match (a.into(), b.into()) {
        (Endpoint::Vertex(a), Endpoint::Vertex(b)) => Edge::between(a, b),
        (Endpoint::Transform(t), Endpoint::Vertex(v))
        | (Endpoint::Vertex(v), Endpoint::Transform(t)) => {
            let port = t.sole_port(v.direction().opposite())?;
            Edge::between(port, v)
        }
        (Endpoint::Transform(producer), Endpoint::Transform(consumer)) => {
            let src = producer.sole_port(Direction::Output)?;
            let dst = consumer.sole_port(Direction::Input)?;
            Edge::between(src, dst)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::DagError;

    fn stage(name: &str, inputs: &[&str], outputs: &[&str]) -> Transform {
        let mut t = Transform::new(name).unwrap();
        for i in inputs {
            t.add_port(Vertex::input(*i, "T").unwrap()).unwrap();
        }
        for o in outputs {
            t.add_port(Vertex::output(*o, "T").unwrap()).unwrap();
        }
        t
    }

    #[test]
    fn vertex_pair_either_order() {
        let src = stage("s", &[], &["y"]);
        let dst = stage("d", &["x"], &[]);
        let e1 = connect(src.o(0).unwrap(), dst.i(0).unwrap()).unwrap();
        let e2 = connect(dst.i(0).unwrap(), src.o(0).unwrap()).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(e1.src(), src.o(0).unwrap().id());
    }

    #[test]
    fn transform_to_vertex_picks_facing_port() {
        let t = stage("t", &["in"], &["out"]);
        let sink = Vertex::input("sink", "T").unwrap();
        let source = Vertex::output("source", "T").unwrap();

        let e = connect(&t, &sink).unwrap();
        assert_eq!(e.src(), t.o(0).unwrap().id());
        assert_eq!(e.dst(), sink.id());

        let e = connect(&source, &t).unwrap();
        assert_eq!(e.src(), source.id());
        assert_eq!(e.dst(), t.i(0).unwrap().id());
    }

    #[test]
    fn transform_shorthand_needs_unique_port() {
        let split = stage("split", &["in"], &["a", "b"]);
        let sink = Vertex::input("sink", "T").unwrap();
        let err = connect(&split, &sink).unwrap_err();
        assert!(matches!(
            err,
            DagError::AmbiguousPort {
                direction: "output",
                count: 2,
                ..
            }
        ));

        let source_only = stage("gen", &[], &["y"]);
        let err = connect(&split, &source_only).unwrap_err();
        assert!(matches!(err, DagError::AmbiguousPort { .. }));
    }

    #[test]
    fn transform_pair_runs_first_to_second() {
        let stage1 = stage("stage1", &[], &["x"]);
        let stage2 = stage("stage2", &["x"], &[]);
        let e = connect(&stage1, &stage2).unwrap();
        assert_eq!(e.src(), stage1.o(0).unwrap().id());
        assert_eq!(e.dst(), stage2.i(0).unwrap().id());
    }

    #[test]
    fn shared_handles_are_endpoints() {
        let a = Rc::new(stage("a", &[], &["y"]));
        let b = Rc::new(stage("b", &["x"], &[]));
        let e = connect(&a, &b).unwrap().named("a_to_b");
        assert_eq!(e.name(), Some("a_to_b"));
    }
}

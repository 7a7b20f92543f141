//! Built-in reference designs.

use fg_core::{DagResult, TypeRef, VertexProfile};
use fg_graph::{ConstValue, Constant, Graph, Transform, Vertex, connect};

/// A named graph recipe the CLI can build.
pub struct Design {
    pub name: &'static str,
    pub about: &'static str,
    pub build: fn() -> DagResult<Graph>,
}

pub const DESIGNS: &[Design] = &[
    Design {
        name: "adder",
        about: "two sources summed into one sink",
        build: adder,
    },
    Design {
        name: "stream",
        about: "memory reader -> filter -> memory writer with profiled constants",
        build: stream,
    },
];

pub fn find(name: &str) -> Option<&'static Design> {
    DESIGNS.iter().find(|d| d.name == name)
}

fn source(name: &str, ty: &TypeRef) -> DagResult<Transform> {
    let mut t = Transform::new(name)?;
    t.add_output(Vertex::output("out", ty.clone())?)?;
    Ok(t)
}

fn adder() -> DagResult<Graph> {
    let word = TypeRef::new("i32");
    let mut graph = Graph::new("adder");

    let lhs = graph.add_transform(source("lhs", &word)?)?;
    let rhs = graph.add_transform(source("rhs", &word)?)?;

    let mut add = Transform::new("add")?;
    add.add_input(Vertex::input("a", word.clone())?)?
        .add_input(Vertex::input("b", word.clone())?)?
        .add_output(Vertex::output("sum", word.clone())?)?
        .add_constant(Constant::new("width", "32")?)?;
    let add = graph.add_transform(add)?;

    let mut sink = Transform::new("sink")?;
    sink.add_input(Vertex::input("in", word)?)?;
    let sink = graph.add_transform(sink)?;

    graph.add_edge(connect(&lhs, add.vertex("a")?)?)?;
    graph.add_edge(connect(rhs.o(0)?, add.vertex("b")?)?)?;
    graph.add_edge(connect(&add, &sink)?.named("result"))?;
    Ok(graph)
}

fn max_cycles(profiles: &[VertexProfile]) -> u32 {
    profiles.iter().map(|p| p.cycles).max().unwrap_or(0)
}

fn stream() -> DagResult<Graph> {
    let beat = TypeRef::new("u64");
    let mut graph = Graph::new("stream");

    let mut reader = Transform::new("reader")?.with_memory_access(true, false);
    reader
        .add_output(Vertex::output("data", beat.clone())?)?
        .add_constant(Constant::new("bus_width", "512")?)?;
    let reader = graph.add_transform(reader)?;

    let mut filter = Transform::new("filter")?;
    filter
        .add_input(Vertex::input("in", beat.clone())?)?
        .add_output(Vertex::output("out", beat.clone())?)?
        .add_constant(Constant::new("predicate", "x > 0")?)?
        .add_constant(Constant::new(
            "fifo_depth",
            ConstValue::profiled(|p| {
                let depth = max_cycles(p).checked_next_power_of_two();
                depth.unwrap_or(u32::MAX).to_string()
            }),
        )?)?;
    let filter = graph.add_transform(filter)?;

    let mut writer = Transform::new("writer")?.with_memory_access(false, true);
    writer
        .add_input(Vertex::input("data", beat)?)?
        .add_constant(Constant::declare("burst_len")?)?;
    let writer = graph.add_transform(writer)?;

    graph.add_edge(connect(&reader, &filter)?.named("raw"))?;
    graph.add_edge(connect(&filter, &writer)?.named("filtered"))?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_design_builds_and_validates() {
        for design in DESIGNS {
            let graph = (design.build)().unwrap();
            assert_eq!(graph.name(), design.name);
            graph.validate().unwrap();
        }
    }

    #[test]
    fn stream_fifo_depth_follows_profile() {
        let graph = stream().unwrap();
        let filter = graph.transform("filter").unwrap();
        let records = [
            VertexProfile {
                cycles: 5,
                ..Default::default()
            },
            VertexProfile {
                cycles: 12,
                ..Default::default()
            },
        ];
        let depth = filter.c("fifo_depth").unwrap().resolve(&records).unwrap();
        assert_eq!(depth, "16");
    }

    #[test]
    fn unknown_design() {
        assert!(find("nope").is_none());
        assert!(find("adder").is_some());
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use hgraph::{
    infra::{
        arbitrary::MutOpsSeq,
        export::{Dot, Export},
        testing::check_consistency,
    },
    Hypergraph,
};

fuzz_target!(|ops: MutOpsSeq<u16, u16>| {
    let mut graph = Hypergraph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    let mut out = Vec::new();
    Dot::unsigned().export(&graph, &mut out).unwrap();

    let statements = out
        .split(|b| *b == b'\n')
        .filter(|line| line.starts_with(b"\t"))
        .count();
    assert_eq!(statements, graph.incidence().count_ones());
});

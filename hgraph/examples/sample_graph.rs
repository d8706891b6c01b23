use std::env;

use hgraph::{
    infra::export::{file_name, Dot},
    Hypergraph,
};

fn main() -> std::io::Result<()> {
    let mut graph = Hypergraph::<u32, u32>::with_tag("testgraph");

    let v0 = graph.add_vertex(50);
    let v1 = graph.add_vertex(0);
    let v2 = graph.add_vertex(0);
    let v3 = graph.add_vertex(5);
    let v4 = graph.add_vertex(10);

    graph.link_vertices([v0, v1, v2], 240);
    graph.link_vertices([v2, v3], 180);
    graph.link_vertices([v3, v4], 120);

    let dot = Dot::unsigned();

    // Pass a directory to write the description to a file instead.
    match env::args().nth(1) {
        Some(dir) => {
            let path = std::path::Path::new(&dir).join(file_name(&graph));
            dot.export_to_path(&graph, &path)?;
            println!("written to {}", path.display());
        }
        None => print!("{}", dot.to_string(&graph)),
    }

    graph.destroy(true);
    Ok(())
}

use std::env;
use std::process::exit;

use starpath::graph;
use starpath::io;
use starpath::types::edge::EdgeDB;
use starpath::types::{GraphError, NodeId};

fn main() {
    env_logger::init();

    let mut args = env::args().collect::<Vec<_>>();
    let json_input = if args.get(1) == Some(&"--json-input".to_string()) {
        args = [vec![args[0].clone()], args[2..].to_vec()].concat();
        true
    } else {
        false
    };
    let mut max_rounds = None;
    if args.len() >= 3 && args[args.len() - 2] == "--max-rounds" {
        match args[args.len() - 1].parse() {
            Ok(n) => max_rounds = Some(n),
            Err(_) => {
                println!("Expected a round count, but got: {}", args[args.len() - 1]);
                return;
            }
        }
        args.truncate(args.len() - 2);
    }
    if args.len() != 4 {
        println!("Usage: starpath [--json-input] <edges-file> <flow-source> <flow-sink> [--max-rounds <n>]");
        println!("Option --json-input reads the edges file as JSON instead of CSV.");
        return;
    }
    let (edges_file, source, sink) = (&args[1], &args[2], &args[3]);

    if let Err(e) = run(edges_file, json_input, source, sink, max_rounds) {
        eprintln!("{e}");
        exit(1);
    }
}

fn run(
    edges_file: &str,
    json_input: bool,
    source: &str,
    sink: &str,
    max_rounds: Option<u64>,
) -> Result<(), GraphError> {
    let db = if json_input {
        io::read_edges_json(edges_file)?
    } else {
        io::read_edges_csv(edges_file)?
    };
    println!(
        "Read {} edges between {} star systems",
        db.edge_count(),
        db.node_count()
    );

    let source = resolve(&db, source)?;
    let sink = resolve(&db, sink)?;

    // Minimum spanning tree over the distances.
    let mst = graph::build_mst(&db)?;
    for edge in &mst.edges {
        println!(
            "Added edge: {} -> {} ({})",
            db.label(edge.from),
            db.label(edge.to),
            edge.distance
        );
    }
    println!("Total MST Weight: {:.2}", mst.total_weight);
    if !mst.spans(db.node_count()) {
        println!("Note: the graph is disconnected; this is a spanning forest.");
    }

    // Maximum hyperflow over the capacities.
    let directed = graph::build_directed(&db)?;
    let (flow, residual) = graph::max_flow(&directed, source, sink, max_rounds)?;
    println!(
        "Total Maximum Hyperflow from {} to {}: {}",
        db.label(source),
        db.label(sink),
        flow
    );
    for edge in db.edges() {
        if edge.capacity > 0.0 {
            let used = edge.capacity - residual.remaining(edge.from, edge.to);
            println!(
                "  {} -> {}: {}/{}",
                db.label(edge.from),
                db.label(edge.to),
                used,
                edge.capacity
            );
        }
    }

    // Diameter of the distance graph.
    let undirected = graph::build_undirected(&db)?;
    let table = graph::all_pairs_shortest_paths(&undirected);
    let diameter = graph::diameter(&table);
    let witness_path = match diameter.endpoints {
        Some((u, v)) => {
            println!(
                "Diameter of the Space Graph: {} light years, between {} and {}",
                diameter.value,
                db.label(u),
                db.label(v)
            );
            graph::reconstruct_path(&undirected, u, v)
        }
        None => {
            println!("Diameter of the Space Graph: 0 (no connected pair)");
            vec![]
        }
    };
    if !witness_path.is_empty() {
        let labels = witness_path
            .iter()
            .map(|n| db.label(*n))
            .collect::<Vec<_>>();
        println!("Longest shortest route: {}", labels.join(" -> "));
    }

    let result = json::object! {
        mst: json::object! {
            totalWeight: mst.total_weight,
            edges: mst.edges.iter().map(|e| {
                json::object! {
                    from: db.label(e.from),
                    to: db.label(e.to),
                    weight: e.distance,
                }
            }).collect::<Vec<_>>(),
        },
        hyperflow: json::object! {
            source: db.label(source),
            sink: db.label(sink),
            value: flow,
        },
        diameter: json::object! {
            value: diameter.value,
            path: witness_path.iter().map(|n| db.label(*n)).collect::<Vec<_>>(),
        },
    };
    println!("{result}");
    Ok(())
}

fn resolve(db: &EdgeDB, label: &str) -> Result<NodeId, GraphError> {
    db.node(label)
        .ok_or_else(|| GraphError::InvalidEndpoint(label.to_string()))
}

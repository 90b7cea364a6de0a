use std::env;
use std::fs;

use indexed_sssp::algorithm::ShortestPathAlgorithm;
use indexed_sssp::graph::NamedGraph;
use indexed_sssp::{Dijkstra, DijkstraConfig, Error};
use serde::Serialize;

const USAGE: &str =
    "usage: route [--json] [--early-exit] [--edges FILE] [--source NAME] [TARGET...]";

/// Swiss towns used when no edge file is given
const DEMO_EDGES: &str = "\
aarau basel 7
aarau chur 9
aarau freiburg 14
basel chur 10
basel dietikon 15
chur dietikon 11
chur freiburg 2
basel zürich 6
zürich freiburg 9
";

#[derive(Debug)]
struct Options {
    json: bool,
    config: DijkstraConfig,
    edges: Option<String>,
    source: Option<String>,
    targets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Route {
    target: String,
    distance: Option<u64>,
    path: Option<Vec<String>>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        json: false,
        config: DijkstraConfig::default(),
        edges: None,
        source: None,
        targets: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--early-exit" => options.config.early_exit = true,
            "--edges" => options.edges = Some(args.next().ok_or("--edges needs a file")?),
            "--source" => options.source = Some(args.next().ok_or("--source needs a name")?),
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {}\n{}", flag, USAGE))
            }
            target => options.targets.push(target.to_string()),
        }
    }

    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let options = parse_args(env::args().skip(1))?;

    let input = match &options.edges {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO_EDGES.to_string(),
    };
    let graph: NamedGraph<u64> = NamedGraph::from_edge_list(&input)?;

    let source_name = match &options.source {
        Some(name) => name.clone(),
        None => match graph.locations().next() {
            Some(name) => name.to_string(),
            None => return Err("edge list is empty".into()),
        },
    };
    let source = graph
        .vertex(&source_name)
        .ok_or_else(|| Error::SourceNotFound(source_name.clone()))?;

    let dijkstra = Dijkstra::with_config(options.config);
    let result = dijkstra.compute_shortest_paths(&graph, source)?;

    let targets: Vec<String> = if options.targets.is_empty() {
        graph
            .locations()
            .filter(|name| *name != source_name)
            .map(str::to_string)
            .collect()
    } else {
        options.targets.clone()
    };

    let mut routes = Vec::with_capacity(targets.len());
    for target in targets {
        let vertex = graph
            .vertex(&target)
            .ok_or_else(|| Error::InvalidVertex(target.clone()))?;
        let path = result.path_to(&vertex).map(|path| {
            path.iter()
                .filter_map(|&v| graph.name(v).map(str::to_string))
                .collect::<Vec<_>>()
        });
        routes.push(Route {
            target,
            distance: result.distance(&vertex),
            path,
        });
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    for route in &routes {
        match (&route.distance, &route.path) {
            (Some(distance), Some(path)) => println!(
                "Distance to {}: {}, Path: {}",
                route.target,
                distance,
                path.join("->")
            ),
            _ => println!("Distance to {}: unreachable", route.target),
        }
    }

    Ok(())
}

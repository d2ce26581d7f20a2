use std::fs::{read_to_string, File};
use std::io::{BufRead, BufReader};

use serde::Deserialize;

use crate::types::edge::EdgeDB;
use crate::types::{Edge, GraphError, NodeRegistry};

/// Reads the dataset from a CSV file with records of the form
/// `source,destination,distanceLY,hyperflowSpiceMegaTons`.
///
/// A header row is tolerated: if the numeric columns of the first line do
/// not parse, the line is skipped. Anywhere else, an unparsable or short
/// record fails ingestion before any algorithm sees the data.
pub fn read_edges_csv(path: &str) -> Result<EdgeDB, GraphError> {
    let mut registry = NodeRegistry::new();
    let mut edges = Vec::new();
    let f = BufReader::new(File::open(path)?);
    for (lineno, line) in f.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match &line.split(',').collect::<Vec<_>>()[..] {
            [from, to, distance, capacity] => {
                let distance = parse_field(distance.trim(), "distance", lineno + 1);
                let capacity = parse_field(capacity.trim(), "capacity", lineno + 1);
                if lineno == 0 && (distance.is_err() || capacity.is_err()) {
                    log::debug!("Skipping header row: {line}");
                    continue;
                }
                let from = registry.intern(parse_label(from.trim(), "source", lineno + 1)?);
                let to = registry.intern(parse_label(to.trim(), "destination", lineno + 1)?);
                edges.push(Edge {
                    from,
                    to,
                    distance: distance?,
                    capacity: capacity?,
                });
            }
            _ => {
                return Err(GraphError::MalformedEdge(format!(
                    "line {}: expected source,destination,distance,capacity, but got {line}",
                    lineno + 1
                )))
            }
        }
    }
    Ok(EdgeDB::new(registry, edges))
}

/// Reads the dataset from a JSON file of the form
/// `{"routes": [{"source": .., "destination": .., "distanceLy": ..,
/// "hyperflowCapacity": ..}, ..]}`.
pub fn read_edges_json(path: &str) -> Result<EdgeDB, GraphError> {
    let contents = read_to_string(path)?;
    let routes: Routes = serde_json::from_str(&contents)
        .map_err(|e| GraphError::MalformedEdge(e.to_string()))?;

    let mut registry = NodeRegistry::new();
    let mut edges = Vec::new();
    for route in &routes.routes {
        check_weight(route.distance_ly, "distanceLy", &route.source)?;
        check_weight(route.hyperflow_capacity, "hyperflowCapacity", &route.source)?;
        let from = registry.intern(&route.source);
        let to = registry.intern(&route.destination);
        edges.push(Edge {
            from,
            to,
            distance: route.distance_ly,
            capacity: route.hyperflow_capacity,
        });
    }
    Ok(EdgeDB::new(registry, edges))
}

fn parse_field(input: &str, name: &str, lineno: usize) -> Result<f64, GraphError> {
    let value: f64 = parse_label(input, name, lineno)?.parse().map_err(|_| {
        GraphError::MalformedEdge(format!("line {lineno}: {name} is not a number: {input}"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(GraphError::MalformedEdge(format!(
            "line {lineno}: {name} must be finite and non-negative, but got {input}"
        )));
    }
    Ok(value)
}

fn check_weight(value: f64, name: &str, source: &str) -> Result<(), GraphError> {
    if !value.is_finite() || value < 0.0 {
        return Err(GraphError::MalformedEdge(format!(
            "route from {source}: {name} must be finite and non-negative, but got {value}"
        )));
    }
    Ok(())
}

fn parse_label<'a>(input: &'a str, name: &str, lineno: usize) -> Result<&'a str, GraphError> {
    unescape(input).ok_or_else(|| {
        GraphError::MalformedEdge(format!(
            "line {lineno}: {name} has an unbalanced quote: {input}"
        ))
    })
}

/// Strips a matching pair of surrounding quotes. None if the field opens
/// with a quote that is never closed.
fn unescape(input: &str) -> Option<&str> {
    match input.chars().next() {
        Some('"') | Some('\'') => {
            if input.len() >= 2 && input.chars().last() == input.chars().next() {
                Some(&input[1..input.len() - 1])
            } else {
                None
            }
        }
        _ => Some(input),
    }
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Routes {
    routes: Vec<Route>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct Route {
    source: String,
    destination: String,
    distance_ly: f64,
    hyperflow_capacity: f64,
}

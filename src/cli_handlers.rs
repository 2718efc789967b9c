use crate::cli::GraphArgs;
use crate::error::Result;
use crate::graph::{self, Graph, TopoOrder};
use crate::search::linear_search;
use crate::sort::{Algorithm, bubble_sort, insertion_sort};
use serde_json::json;
use std::process::ExitCode;

/// Exit status for a graph that has no topological order
pub const EXIT_CYCLE: u8 = 2;

/// Handle the toposort command
pub fn handle_toposort(args: &GraphArgs, verify: bool, as_json: bool) -> Result<ExitCode> {
    let graph = args.load()?;
    let result = graph::topological_sort(&graph);

    let verified = match (&result, verify) {
        (TopoOrder::Sorted { order }, true) => Some(graph::is_topological_order(&graph, order)),
        _ => None,
    };

    if as_json {
        let mut value = serde_json::to_value(&result)?;
        if let Some(verified) = verified {
            value["verified"] = json!(verified);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match &result {
            TopoOrder::Sorted { order } => {
                println!("Topological order: {}", format_list(order));
                if let Some(verified) = verified {
                    println!("Verified:          {}", if verified { "yes" } else { "no" });
                }
            }
            TopoOrder::CycleDetected { unresolved } => {
                println!("Graph contains a cycle.");
                println!("Unresolved vertices: {}", format_list(unresolved));
            }
        }
    }

    if let TopoOrder::CycleDetected { unresolved } = &result {
        tracing::warn!(unresolved = unresolved.len(), "no topological order exists");
        return Ok(ExitCode::from(EXIT_CYCLE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the bfs command
pub fn handle_bfs(args: &GraphArgs, start: usize, as_json: bool) -> Result<ExitCode> {
    let graph = args.load()?;
    let order = graph::bfs(&graph, start)?;

    if as_json {
        let value = json!({ "start": start, "order": order });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("BFS from {start}: {}", format_list(&order));
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the search command
pub fn handle_search(target: i64, values: &[i64], as_json: bool) -> Result<ExitCode> {
    let index = linear_search(values, &target);

    if as_json {
        let value = json!({ "target": target, "index": index });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match index {
            Some(i) => println!("Found {target} at index {i}"),
            None => println!("{target} not found"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the sort command
pub fn handle_sort(algorithm: Algorithm, values: &[i64], as_json: bool) -> Result<ExitCode> {
    let mut sorted = values.to_vec();
    algorithm.sort(&mut sorted);

    if as_json {
        let value = json!({ "algorithm": algorithm, "sorted": sorted });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Before: {}", format_list(values));
        println!("After:  {}", format_list(&sorted));
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the demo command
pub fn handle_demo() -> Result<ExitCode> {
    println!("=== Topological Sort ===");
    let topo_cases: [(&str, usize, &[(usize, usize)]); 5] = [
        (
            "Simple DAG",
            6,
            &[(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)],
        ),
        ("Linear dependency", 4, &[(0, 1), (1, 2), (2, 3)]),
        ("Single node", 1, &[]),
        ("Disconnected DAG", 5, &[(0, 1), (2, 3)]),
        ("Graph with a cycle", 3, &[(0, 1), (1, 2), (2, 0)]),
    ];
    for (name, vertices, edges) in topo_cases {
        let graph = Graph::from_edges(vertices, edges.iter().copied())?;
        match graph::topological_sort(&graph) {
            TopoOrder::Sorted { order } => println!("  {name}: {}", format_list(&order)),
            TopoOrder::CycleDetected { .. } => println!("  {name}: cycle detected"),
        }
    }

    println!();
    println!("=== Breadth First Search ===");
    let graph = Graph::new(vec![
        vec![1, 2],
        vec![0, 3, 4],
        vec![0, 5],
        vec![1],
        vec![1],
        vec![2],
    ])?;
    for start in [0, 1] {
        println!(
            "  From {start}: {}",
            format_list(&graph::bfs(&graph, start)?)
        );
    }
    println!(
        "  Single node: {}",
        format_list(&graph::bfs(&Graph::empty(1), 0)?)
    );

    println!();
    println!("=== Linear Search ===");
    let haystack: &[i64] = &[10, 23, 45, 70, 11, 15];
    let search_cases: [(&[i64], i64); 6] = [
        (haystack, 70),
        (haystack, 100),
        (&[42], 42),
        (&[42], 10),
        (&[], 10),
        (haystack, 10),
    ];
    for (items, target) in search_cases {
        match linear_search(items, &target) {
            Some(i) => println!("  {target} in {}: found at index {i}", format_list(items)),
            None => println!("  {target} in {}: not found", format_list(items)),
        }
    }

    println!();
    println!("=== Sorting ===");
    let sort_cases: [&[i64]; 6] = [
        &[64, 34, 25, 12, 22, 11, 90],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[42],
        &[],
        &[3, 5, 1, 3, 2, 5, 1],
    ];
    for case in sort_cases {
        let mut bubbled = case.to_vec();
        let passes = bubble_sort(&mut bubbled);
        let mut inserted = case.to_vec();
        insertion_sort(&mut inserted);
        println!(
            "  {} -> bubble {} ({passes} passes), insertion {}",
            format_list(case),
            format_list(&bubbled),
            format_list(&inserted)
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[4, 5, 2]), "[4, 5, 2]");
        assert_eq!(format_list::<usize>(&[]), "[]");
    }
}

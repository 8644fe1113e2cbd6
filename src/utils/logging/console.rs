//! Console output utilities
//!
//! Rendering of graph summaries and recommendation lists for the terminal.

use std::fmt::Write as _;

use crate::algorithm::network::OccupationGraph;
use crate::error::Result;
use crate::models::ScoredOccupation;

const HEADERS: [&str; 3] = ["Occupation", "Code", "Avg. Skills Covered"];

/// Print node and edge counts of the occupation network
pub fn print_graph_summary(graph: &OccupationGraph) {
    println!("Number of nodes: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());
}

/// Render recommendations as a bordered table
///
/// Scores are shown with two decimals; a missing code is left blank.
#[must_use]
pub fn format_recommendation_table(recommendations: &[ScoredOccupation]) -> String {
    let rows: Vec<[String; 3]> = recommendations
        .iter()
        .map(|r| {
            [
                r.occupation.clone(),
                r.code.clone().unwrap_or_default(),
                format!("{:.2}", r.score),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "{}", format_row(&HEADERS.map(str::to_string), &widths));
    let _ = writeln!(out, "{border}");
    for row in &rows {
        let _ = writeln!(out, "{}", format_row(row, &widths));
    }
    let _ = write!(out, "{border}");
    out
}

fn format_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        let _ = write!(line, " {cell}{} |", " ".repeat(pad));
    }
    line
}

/// Render recommendations as pretty-printed JSON
pub fn format_recommendation_json(recommendations: &[ScoredOccupation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recommendations)?)
}

/// Print recommendations under a heading
pub fn print_recommendations(recommendations: &[ScoredOccupation]) {
    println!("\nRecommended Careers:");
    println!("{}", format_recommendation_table(recommendations));
}

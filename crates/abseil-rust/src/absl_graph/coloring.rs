//! Graph coloring algorithms.


extern crate alloc;

use alloc::vec::Vec;

use super::Graph;

/// Graph coloring result.
pub struct GraphColoring {
    pub colors: Vec<Option<usize>>,
}

/// Greedy graph coloring.
pub fn greedy_coloring<T>(graph: &Graph<T>) -> GraphColoring {
    let mut colors = vec![None; graph.vertex_count()];
    let mut max_color = 0;

    for v in 0..graph.vertex_count() {
        let mut used_colors = Vec::new();
        for edge in graph.outgoing_edges(v) {
            if let Some(color) = colors[edge.to] {
                used_colors.push(color);
            }
        }

        let mut color = 0;
        while used_colors.contains(&color) {
            color += 1;
        }

        colors[v] = Some(color);
        max_color = max_color.max(color);
    }

    GraphColoring { colors }
}

/// Computes the chromatic number of a graph.
pub fn chromatic_number<T>(graph: &Graph<T>) -> usize {
    let coloring = greedy_coloring(graph);
    coloring.colors.iter().filter_map(|&c| c).map(|c| c + 1).max().unwrap_or(0)
}

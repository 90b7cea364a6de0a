use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with about `edge_factor * n` edges and
/// integer weights in `0..=max_weight`. The same seed gives the same graph.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight));
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-way moves: 1.0 for cardinal steps,
/// 1.4 for diagonals. Vertex `y * width + x` is cell `(x, y)`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = generate_random(50, 3.0, 20, 7);
        let b = generate_random(50, 3.0, 20, 7);
        assert_eq!(a.vertex_count(), 50);
        assert_eq!(a.edge_count(), b.edge_count());
        for u in 0..50 {
            assert_eq!(
                a.outgoing_edges(u).collect::<Vec<_>>(),
                b.outgoing_edges(u).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_grid_degrees() {
        let grid = generate_grid(3, 3);
        assert_eq!(grid.vertex_count(), 9);
        // corner, edge, center
        assert_eq!(grid.neighbors(0).count(), 3);
        assert_eq!(grid.neighbors(1).count(), 5);
        assert_eq!(grid.neighbors(4).count(), 8);
        assert_eq!(grid.weight(0, 4), Some(OrderedFloat(1.4)));
    }
}

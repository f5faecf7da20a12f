use ordered_float::OrderedFloat;
use relax_sssp::graph::generators::grid_graph;
use relax_sssp::graph::{AdjacencyGraph, Graph, UnitWeights, WeightFn, WeightMap};
use relax_sssp::{shortest_path, shortest_paths, Dijkstra, Error, NullVisitor, WeightError};
use std::collections::{HashMap, HashSet, VecDeque};

// The unit-weight scenario graph: two components joined only through 6 <-> 11
fn scenario_graph() -> AdjacencyGraph<u32> {
    AdjacencyGraph::from_edges(
        false,
        vec![
            (1, 2), (1, 3), (1, 4), (1, 5), (2, 6), (3, 8), (5, 7),
            (9, 10), (9, 11), (9, 12), (10, 14), (11, 6), (12, 13), (13, 16),
        ],
    )
}

// Independent breadth-first hop count
fn bfs_distance(graph: &AdjacencyGraph<u32>, source: u32, target: u32) -> Option<usize> {
    let mut seen = HashSet::from([source]);
    let mut queue = VecDeque::from([(source, 0)]);
    while let Some((u, d)) = queue.pop_front() {
        if u == target {
            return Some(d);
        }
        for v in graph.neighbors(&u) {
            if seen.insert(v) {
                queue.push_back((v, d + 1));
            }
        }
    }
    None
}

#[test]
fn test_scenario_path_matches_bfs() {
    let graph = scenario_graph();
    let weights = UnitWeights::new(&graph);

    let path = shortest_path::<u32, u32, _>(&weights, &6, &16)
        .unwrap()
        .expect("16 is reachable from 6");

    assert_eq!(path.first(), Some(&6));
    assert_eq!(path.last(), Some(&16));
    assert_eq!(Some(path.len() - 1), bfs_distance(&graph, 6, 16));
    assert_eq!(path, vec![6, 11, 9, 12, 13, 16]);
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "{:?} is not an edge", pair);
    }
}

#[test]
fn test_source_to_itself() {
    let graph = scenario_graph();
    let weights = UnitWeights::new(&graph);
    let path = shortest_path::<u32, u32, _>(&weights, &7, &7).unwrap();
    assert_eq!(path, Some(vec![7]));
}

#[test]
fn test_unreachable_target_is_none() {
    let mut graph = scenario_graph();
    graph.add_vertex(99);
    let weights = UnitWeights::new(&graph);

    assert_eq!(shortest_path::<u32, u32, _>(&weights, &1, &99).unwrap(), None);
    // Not in the graph at all
    assert_eq!(shortest_path::<u32, u32, _>(&weights, &1, &500).unwrap(), None);

    let all = shortest_paths::<u32, u32, _>(&weights, &1).unwrap();
    assert_eq!(all.len(), graph.vertex_count());
    assert_eq!(all[&99], None);
    assert_eq!(all[&1], Some(vec![1]));
}

#[test]
fn test_missing_source() {
    let graph = scenario_graph();
    let weights = UnitWeights::new(&graph);
    let result = shortest_path::<u32, u32, _>(&weights, &42, &1);
    assert_eq!(result, Err(Error::SourceNotFound));
}

#[test]
fn test_early_exit_matches_full_run() {
    let grid = grid_graph(12, 9);
    let weights = grid.weight_map();
    let dijkstra = Dijkstra::new();

    let source = 0;
    let all = dijkstra.shortest_paths(&weights, &source, NullVisitor).unwrap();

    for target in 0..grid.vertex_count() {
        let single = dijkstra.shortest_path(&weights, &source, &target, NullVisitor).unwrap();
        assert_eq!(single, all[&target], "paths to {} differ", target);
    }
}

#[test]
fn test_weighted_directed_graph() {
    let graph = AdjacencyGraph::from_edges(
        true,
        vec![(0, 1), (0, 2), (1, 3), (2, 1), (2, 3), (2, 4), (3, 4), (4, 0), (4, 3)],
    );
    let weights = WeightMap::from_map(
        &graph,
        vec![
            ((0, 1), 10.0),
            ((0, 2), 5.0),
            ((1, 3), 1.0),
            ((2, 1), 3.0),
            ((2, 3), 9.0),
            ((2, 4), 2.0),
            ((3, 4), 4.0),
            ((4, 0), 7.0),
            ((4, 3), 6.0),
        ],
    );

    let state = Dijkstra::new().find_shortest_paths(&weights, &0, NullVisitor).unwrap();
    let expected = HashMap::from([(0, 0.0), (1, 8.0), (2, 5.0), (3, 9.0), (4, 7.0)]);
    for (vertex, distance) in expected {
        assert_eq!(state.distance(&vertex), Some(distance));
    }
    assert_eq!(state.parent(&3), Some(&1));
    assert_eq!(state.parent(&1), Some(&2));

    let path = shortest_path(&weights, &0, &3).unwrap();
    assert_eq!(path, Some(vec![0, 2, 1, 3]));
}

#[test]
fn test_path_finding_with_obstacles() {
    let mut grid = grid_graph(10, 10);

    // A wall in column 5 with a gap at the bottom two rows
    for y in 0..8 {
        let obstacle = y * 10 + 5;
        let neighbors: Vec<usize> = grid.graph.neighbors(&obstacle).collect();
        for v in neighbors {
            grid.graph.remove_edge(&obstacle, &v);
        }
    }

    let weights = grid.weight_map();
    let path = shortest_path(&weights, &0, &9).unwrap().expect("path around the wall");

    assert_eq!(path[0], 0);
    assert_eq!(path[path.len() - 1], 9);
    for pair in path.windows(2) {
        assert!(grid.graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }
    for y in 0..8 {
        assert!(!path.contains(&(y * 10 + 5)), "Path should avoid the wall");
    }
}

#[test]
fn test_negative_weight_aborts_run() {
    let graph = AdjacencyGraph::from_edges(true, vec![("a", "b"), ("b", "c"), ("c", "a")]);
    let weights = WeightMap::from_map(
        &graph,
        vec![(("a", "b"), 1), (("b", "c"), 2), (("c", "a"), -4)],
    );

    let result = shortest_paths(&weights, &"a");
    assert!(matches!(result, Err(Error::InvalidWeight(WeightError::Negative { .. }))));
}

#[test]
fn test_missing_weight_aborts_run() {
    let graph = AdjacencyGraph::from_edges(true, vec![(1, 2), (2, 3)]);
    let weights = WeightMap::from_map(&graph, vec![((1, 2), OrderedFloat(1.0))]);

    let result = shortest_path(&weights, &1, &3);
    assert!(matches!(result, Err(Error::InvalidWeight(WeightError::Missing { .. }))));
}

#[test]
fn test_bad_weight_beyond_target_is_not_consulted() {
    let graph = AdjacencyGraph::from_edges(true, vec![(1, 2), (2, 3)]);
    let weights = WeightMap::from_map(&graph, vec![((1, 2), 1.0), ((2, 3), -1.0)]);

    assert_eq!(shortest_path(&weights, &1, &2).unwrap(), Some(vec![1, 2]));
}

#[test]
fn test_integer_distances_saturate() {
    let graph = AdjacencyGraph::from_edges(true, vec![(1, 2), (2, 3)]);
    let weights = WeightMap::from_map(&graph, vec![((1, 2), 200u8), ((2, 3), 100)]);

    let state = Dijkstra::new().find_shortest_paths(&weights, &1, NullVisitor).unwrap();
    assert_eq!(state.distance(&3), Some(u8::MAX));
    assert_eq!(shortest_path(&weights, &1, &3).unwrap(), Some(vec![1, 2, 3]));

    // A wrapped sum (44) through 2 would beat the direct edge
    let graph = AdjacencyGraph::from_edges(true, vec![(1, 2), (2, 3), (1, 3)]);
    let weights = WeightMap::from_map(
        &graph,
        vec![((1, 2), 200u8), ((2, 3), 100), ((1, 3), 250)],
    );
    let state = Dijkstra::new().find_shortest_paths(&weights, &1, NullVisitor).unwrap();
    assert_eq!(state.distance(&3), Some(250));
    assert_eq!(shortest_path(&weights, &1, &3).unwrap(), Some(vec![1, 3]));
}

#[test]
fn test_city_pathfinding() {
    let grid = grid_graph(25, 18);
    let weights = grid.weight_map();
    let width = 25;

    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let paths = shortest_paths(&weights, &source).unwrap();

        for (to_name, &(tx, ty)) in &locations {
            let target = ty * width + tx;
            let path = paths[&target]
                .as_ref()
                .unwrap_or_else(|| panic!("Should find a path from {} to {}", from_name, to_name));

            assert_eq!(path[0], source, "Path should start at source");
            assert_eq!(path[path.len() - 1], target, "Path should end at target");
            for pair in path.windows(2) {
                assert!(grid.graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
            }
        }
    }
}

#[test]
fn test_weights_from_closure() {
    // An edge costs the sum of its endpoints
    let graph = AdjacencyGraph::from_edges(false, vec![(0, 10), (10, 11), (0, 4), (4, 11), (11, 20)]);
    let weights = WeightFn::new(&graph, |u: &i64, v: &i64| Some(u + v));

    let path = shortest_path(&weights, &0, &20).unwrap();
    assert_eq!(path, Some(vec![0, 4, 11, 20]));

    let bad = WeightFn::new(&graph, |u: &i64, v: &i64| if *v == 11 { None } else { Some(u - v) });
    assert!(matches!(
        shortest_path(&bad, &0, &20),
        Err(Error::InvalidWeight(_))
    ));
}

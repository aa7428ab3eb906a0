use super::*;

fn diamond() -> HashMap<char, Vec<char>> {
    HashMap::from([
        ('s', vec!['a', 'b']),
        ('a', vec!['c']),
        ('b', vec!['c']),
        ('c', vec!['d']),
    ])
}

fn layered() -> HashMap<char, Vec<char>> {
    HashMap::from([
        ('s', vec!['a', 'b']),
        ('a', vec!['c', 'd']),
        ('b', vec!['d', 'e', 'a']),
        ('c', vec!['f']),
        ('d', vec!['f']),
        ('e', vec!['f']),
        ('f', vec!['s']),
    ])
}

/// Runs a BFS over a fixed adjacency map, recording classified edges and
/// the order in which nodes were visited.
fn run(
    graph: &HashMap<char, Vec<char>>,
    start: char,
) -> (BfsResult<char>, Vec<(char, char, BfsEdge)>, Vec<char>) {
    let mut edges = Vec::new();
    let mut order = Vec::new();
    let depths = bfs_from(start, |state, node| {
        order.push(*node);
        for &next in graph.get(node).into_iter().flatten() {
            let class = state.look(next);
            edges.push((*node, next, class));
        }
    });
    (depths, edges, order)
}

#[test]
fn test_layer_assignment() {
    let (depths, edges, _) = run(&diamond(), 's');

    assert_eq!(depths[&'s'], 0);
    assert_eq!(depths[&'a'], 1);
    assert_eq!(depths[&'b'], 1);
    assert_eq!(depths[&'c'], 2);
    assert_eq!(depths[&'d'], 3);

    // Second discovery of c comes from b, one layer up: a tight cross-edge.
    assert!(edges.contains(&('a', 'c', BfsEdge::Tree)));
    assert!(edges.contains(&('b', 'c', BfsEdge::Tight)));
}

/// Loose covers both sideways (same layer) and backward edges.
#[test]
fn test_loose_edges() {
    let (depths, edges, _) = run(&layered(), 's');

    assert_eq!(depths[&'a'], 1);
    assert_eq!(depths[&'b'], 1);
    assert!(edges.contains(&('b', 'a', BfsEdge::Loose)));
    assert!(edges.contains(&('f', 's', BfsEdge::Loose)));
}

/// Assigned depth is the shortest edge count, and every classification
/// agrees with the final layering.
#[test]
fn test_minimality_and_classification_consistency() {
    let (depths, edges, _) = run(&layered(), 's');

    let expected = [
        ('s', 0),
        ('a', 1),
        ('b', 1),
        ('c', 2),
        ('d', 2),
        ('e', 2),
        ('f', 3),
    ];
    for (node, depth) in expected {
        assert_eq!(depths[&node], depth, "layer of {node}");
    }

    for (from, to, class) in edges {
        match class {
            BfsEdge::Tree | BfsEdge::Tight => {
                assert_eq!(depths[&to], depths[&from] + 1, "{from}->{to}");
            }
            BfsEdge::Loose => {
                assert!(depths[&to] <= depths[&from], "{from}->{to}");
            }
        }
    }
}

#[test]
fn test_visit_order_by_layer() {
    let (depths, _, order) = run(&layered(), 's');

    assert_eq!(order.len(), depths.len());
    for pair in order.windows(2) {
        assert!(depths[&pair[0]] <= depths[&pair[1]]);
    }
}

#[test]
fn test_visit_at_most_once() {
    let graph = HashMap::from([
        ('a', vec!['b', 'b']),
        ('b', vec!['c', 'a']),
        ('c', vec!['a', 'b']),
    ]);
    let (depths, _, order) = run(&graph, 'a');

    assert_eq!(order, vec!['a', 'b', 'c']);
    assert_eq!(depths.len(), 3);
}

/// The handle reports the finalized layer of the node being visited.
#[test]
fn test_depth_handle_matches_result() {
    let graph = diamond();
    let mut observed = Vec::new();
    let depths = bfs_from('s', |state, node| {
        observed.push((*node, state.depth()));
        for &next in graph.get(node).into_iter().flatten() {
            state.look(next);
        }
    });

    for (node, seen) in observed {
        assert_eq!(seen, Some(depths[&node]));
    }
}

/// All seed-discovered nodes land in layer 0, whichever seed names them.
#[test]
fn test_multiple_seeds() {
    let graph = HashMap::from([('x', vec!['z']), ('y', vec!['z', 'w'])]);
    let depths = bfs(
        |state| {
            state.look('x');
            state.look('y');
        },
        |state, node| {
            for &next in graph.get(node).into_iter().flatten() {
                state.look(next);
            }
        },
    );

    assert_eq!(depths[&'x'], 0);
    assert_eq!(depths[&'y'], 0);
    assert_eq!(depths[&'z'], 1);
    assert_eq!(depths[&'w'], 1);
}

/// Re-seeding an already-seeded node classifies as Tight at layer 0.
#[test]
fn test_duplicate_seed_look() {
    let mut second = None;
    let depths = bfs(
        |state| {
            state.look('x');
            second = Some(state.look('x'));
        },
        |_, _| {},
    );

    assert_eq!(second, Some(BfsEdge::Tight));
    assert_eq!(depths[&'x'], 0);
}

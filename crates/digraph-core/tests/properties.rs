use digraph_core::DiGraph;
use proptest::prelude::*;

const VERTICES: usize = 16;

fn edge_list() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..VERTICES, 0..VERTICES), 0..200)
}

fn build(edges: &[(usize, usize)]) -> DiGraph {
    let mut graph = DiGraph::new(VERTICES);
    for &(source, target) in edges {
        graph.add_edge(source, target).unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn edge_count_equals_outdegree_sum(edges in edge_list()) {
        let graph = build(&edges);
        let total: usize = graph
            .vertices()
            .map(|v| graph.outdegree(v).unwrap())
            .sum();
        prop_assert_eq!(total, graph.edge_count());
    }

    #[test]
    fn indegree_matches_adjacency_membership(edges in edge_list()) {
        let graph = build(&edges);
        for target in graph.vertices() {
            let from_sets = graph
                .vertices()
                .filter(|&source| graph.has_edge(source, target))
                .count();
            prop_assert_eq!(graph.indegree(target).unwrap(), from_sets);
        }
    }

    #[test]
    fn insertion_is_idempotent(edges in edge_list()) {
        let once = build(&edges);

        let mut twice = DiGraph::new(VERTICES);
        for &(source, target) in &edges {
            twice.add_edge(source, target).unwrap();
            twice.add_edge(source, target).unwrap();
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn invalid_endpoints_never_mutate(
        edges in edge_list(),
        source in VERTICES..VERTICES * 2,
        target in 0..VERTICES,
    ) {
        let mut graph = build(&edges);
        let before = graph.clone();
        prop_assert!(graph.add_edge(source, target).is_err());
        prop_assert!(graph.add_edge(target, source).is_err());
        prop_assert_eq!(graph, before);
    }
}

/// Initializes `env_logger` once for tests; `RUST_LOG=trace` shows structural events
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every weighted graph should implement the traits of `crate::ops`.
/// Generates randomized tests that compare a graph against a dense reference matrix.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident<$w:ty>, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::{init_test_logging, test_graph_ops}};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;
            use num::{One, Zero};

            type Reference = Vec<Vec<Option<$w>>>;

            fn random_weight<R: Rng>(rng: &mut R) -> $w {
                weight::<$w, _>(rng.random_range(1..100u32)).unwrap()
            }

            /// Creates a list of at most `m_ub` random edges for nodes `0..n` without duplicates
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: u32, loops: bool) -> Vec<Edge<$w>> {
                let mut edges = (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        Edge::new(u, v, random_weight(rng))
                    })
                    .filter(|e| loops || !e.is_loop())
                    .collect_vec();
                edges.sort_unstable_by_key(|e| e.endpoints());
                edges.dedup_by_key(|e| e.endpoints());

                edges
            }

            fn reference_of(n: NumNodes, edges: &[Edge<$w>]) -> Reference {
                let mut adj_matrix: Reference = vec![vec![None; n as usize]; n as usize];
                for e in edges {
                    adj_matrix[e.src as usize][e.dest as usize] = Some(e.weight);
                }
                adj_matrix
            }

            fn assert_matches_reference(graph: &$graph<$w>, adj_matrix: &Reference) {
                let n = adj_matrix.len() as NumNodes;
                assert_eq!(graph.number_of_nodes(), n);

                for u in 0..n {
                    for v in 0..n {
                        let expected = adj_matrix[u as usize][v as usize];
                        assert_eq!(graph.edge_weight(u, v), expected);
                        assert_eq!(graph.has_edge(u, v), expected.is_some());
                    }

                    let expected_neighbours = (0..n)
                        .filter_map(|v| adj_matrix[u as usize][v as usize].map(|w| Edge::new(u, v, w)))
                        .collect_vec();
                    assert_eq!(graph.vertex_neighbours(u).unwrap(), expected_neighbours);
                    assert_eq!(graph.degree_of(u) as usize, expected_neighbours.len());
                }
            }

            $(
                test_graph_ops!($graph<$w>: $trait);
            )*
        }
    };
    ($graph:ident<$w:ty>: GraphNew) => {
        #[test]
        fn graph_new() {
            init_test_logging();
            assert_eq!(<$graph<$w>>::try_new(0), Err(GraphError::InvalidVertexCount));

            for n in 1..30 {
                let graph = <$graph<$w>>::try_new(n).unwrap();

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertex_weights().into_iter().all(|w| w == <$w>::zero()));
                assert_matches_reference(&graph, &reference_of(n, &[]));
            }
        }
    };
    ($graph:ident<$w:ty>: WeightedAdjacency) => {
        #[test]
        fn test_weighted_adjacency() {
            init_test_logging();
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub, true);
                        let graph = <$graph<$w>>::try_from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.edges().collect_vec(), edges);
                        assert_matches_reference(&graph, &reference_of(n, &edges));

                        for u in 0..n {
                            assert!(graph.try_edge_weight(u, n).unwrap_err().is_out_of_bounds());
                            assert!(!graph.has_edge(n, u));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$w:ty>: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            init_test_logging();
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [1 as NumNodes, 5, 20] {
                let edges = random_edges(rng, n, n * 3, true);
                let mut graph = <$graph<$w>>::try_from_edges(n, edges.iter()).unwrap();
                let mut adj_matrix = reference_of(n, &edges);
                let mut weights = vec![<$w>::zero(); n as usize];

                for _ in 0..10 {
                    let u = rng.random_range(0..graph.number_of_nodes());
                    let w = random_weight(rng);
                    graph.update_vertex(u, w).unwrap();
                    weights[u as usize] = w;

                    let w = random_weight(rng);
                    let id = graph.add_vertex(w).unwrap();
                    assert_eq!(id as usize, weights.len());
                    weights.push(w);

                    for row in adj_matrix.iter_mut() {
                        row.push(None);
                    }
                    adj_matrix.push(vec![None; weights.len()]);

                    assert_eq!(graph.vertex_weights(), weights);
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                    assert_matches_reference(&graph, &adj_matrix);
                }
            }
        }
    };
    ($graph:ident<$w:ty>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            init_test_logging();
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [2 as NumNodes, 10, 30] {
                let mut graph = <$graph<$w>>::try_new(n).unwrap();
                let mut adj_matrix = reference_of(n, &[]);
                let mut m: NumEdges = 0;

                for _ in 0..(n * 10) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = random_weight(rng);

                    match rng.random_range(0..5) {
                        0 => {
                            graph.update_edge(u, v, w).unwrap();
                            adj_matrix[u as usize][v as usize] = Some(w);
                        }
                        1 => {
                            graph.update_edge_symmetric(u, v, w).unwrap();
                            adj_matrix[u as usize][v as usize] = Some(w);
                            adj_matrix[v as usize][u as usize] = Some(w);
                            assert_eq!(graph.edge_weight(u, v), graph.edge_weight(v, u));
                        }
                        2 => {
                            graph.add_edge(u, v, w).unwrap();
                            adj_matrix[u as usize][v as usize] = Some(w);
                            m += 1;
                        }
                        3 => {
                            graph.add_edge_symmetric(u, v, w).unwrap();
                            adj_matrix[u as usize][v as usize] = Some(w);
                            adj_matrix[v as usize][u as usize] = Some(w);
                            m += 1;
                        }
                        _ => {
                            graph.clear_edge(u, v).unwrap();
                            adj_matrix[u as usize][v as usize] = None;
                        }
                    }

                    assert_eq!(graph.number_of_edges(), m);
                }

                assert_matches_reference(&graph, &adj_matrix);

                // rejected operations change nothing
                let before = graph.clone();
                assert!(graph.update_edge(n, 0, random_weight(rng)).is_err());
                assert!(graph.add_edge_symmetric(0, n, random_weight(rng)).is_err());
                assert!(graph.clear_edge(n, n).is_err());
                assert_eq!(graph, before);
            }
        }
    };
    ($graph:ident<$w:ty>: Complement) => {
        #[test]
        fn test_complement() {
            init_test_logging();
            let rng = &mut Pcg64Mcg::seed_from_u64(6);

            for n in [1 as NumNodes, 2, 10, 25] {
                for m_ub in [n, n * 4, n * n] {
                    let edges = random_edges(rng, n, m_ub, false);
                    let graph = <$graph<$w>>::try_from_edges(n, edges.iter()).unwrap();
                    let complement = graph.complement().unwrap();

                    let m = edges.len() as NumEdges;
                    let pairs = (n as NumEdges) * (n as NumEdges - 1);
                    assert_eq!(complement.number_of_edges(), pairs - m);
                    assert_eq!(complement.edges().count() as NumEdges, pairs - m);

                    for u in 0..n {
                        for v in 0..n {
                            let expected = (u != v && !graph.has_edge(u, v)).then(<$w>::one);
                            assert_eq!(complement.edge_weight(u, v), expected);
                        }
                    }

                    let double = complement.complement().unwrap();
                    assert_eq!(double.number_of_edges(), m);
                    for e in &edges {
                        assert!(double.has_edge(e.src, e.dest));
                    }
                    assert_eq!(double.edges().count(), edges.len());
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

// tests/unit_pagerank.rs
//! Behavioral properties of the rank iteration.

use pagerank_core::graph::{build, BuildOptions, EndpointPolicy, ParallelEdgePolicy};
use pagerank_core::rank::iterate;
use pagerank_core::{GraphInput, RankEngine, RankError, RankMap, RankParams};

fn params(damping: f64, iterations: usize) -> RankParams {
    RankParams {
        damping_factor: damping,
        max_iterations: iterations,
    }
}

fn rank(g: &GraphInput, damping: f64, iterations: usize) -> RankMap {
    RankEngine::new(BuildOptions::default(), params(damping, iterations))
        .compute(g)
        .unwrap()
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn test_mass_conserved_without_dangling() {
    let g = GraphInput::from_pairs(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "C"), ("C", "A"), ("C", "D"), ("D", "A")],
    );
    for iterations in 1..=20 {
        let r = rank(&g, 1.0, iterations);
        assert!(close(r.total(), 1.0, 1e-9), "sum {} after {iterations}", r.total());
    }
}

#[test]
fn test_dangling_mass_redistributed() {
    let g = GraphInput::from_pairs(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    for iterations in [1, 2, 10, 50] {
        let r = rank(&g, 1.0, iterations);
        assert!(close(r.total(), 1.0, 1e-9), "sum {} after {iterations}", r.total());
    }
}

#[test]
fn test_cycle_converges_to_uniform() {
    let g = GraphInput::from_pairs(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "A")],
    );
    let r = rank(&g, 0.85, 100);
    for (id, value) in r.iter() {
        assert!(close(value, 0.2, 1e-4), "{id} = {value}");
    }
}

#[test]
fn test_triangle_scenario() {
    let g = GraphInput::from_pairs(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    let r = RankEngine::default().compute(&g).unwrap();
    for id in ["A", "B", "C"] {
        assert!(close(r.get(id).unwrap(), 0.333, 1e-3));
    }
}

#[test]
fn test_zero_iterations_is_identity() {
    let g = GraphInput::from_pairs(&["A", "B", "C", "D"], &[("A", "B"), ("B", "A"), ("C", "A")]);
    for damping in [0.0, 0.3, 0.85, 1.0] {
        let r = rank(&g, damping, 0);
        for (_, value) in r.iter() {
            assert!(close(value, 0.25, f64::EPSILON));
        }
    }
}

#[test]
fn test_empty_graph_fails() {
    let g = GraphInput::from_pairs(&[], &[("A", "B")]);
    for p in [params(0.85, 100), params(0.0, 0), params(2.0, 5)] {
        let err = RankEngine::new(BuildOptions::default(), p).compute(&g).unwrap_err();
        assert_eq!(err, RankError::InvalidGraph);
    }
}

#[test]
fn test_empty_graph_fails_before_edge_checks() {
    let g = GraphInput::from_pairs(&[], &[("A", "B")]);
    let options = BuildOptions {
        unknown_endpoints: EndpointPolicy::Reject,
        ..BuildOptions::default()
    };
    let err = RankEngine::new(options, RankParams::default()).compute(&g).unwrap_err();
    assert_eq!(err, RankError::InvalidGraph);
}

#[test]
fn test_parallel_edges_double_weight() {
    // After one pass at d=1, B and C are dangling and each hand 1/9 to every
    // vertex, so each vertex holds 2/9 from them.
    let dangling_part = 2.0 / 9.0;
    let g = GraphInput::from_pairs(&["A", "B", "C"], &[("A", "B"), ("A", "B"), ("A", "C")]);
    let r = rank(&g, 1.0, 1);
    let from_a_to_b = r.get("B").unwrap() - dangling_part;
    let from_a_to_c = r.get("C").unwrap() - dangling_part;
    assert!(close(from_a_to_b, 2.0 * from_a_to_c, 1e-12));
    assert!(close(from_a_to_b, 2.0 / 9.0, 1e-12));
}

#[test]
fn test_collapsed_parallel_edges_count_once() {
    let g = GraphInput::from_pairs(&["A", "B", "C"], &[("A", "B"), ("A", "B"), ("A", "C")]);
    let options = BuildOptions {
        parallel_edges: ParallelEdgePolicy::Collapse,
        ..BuildOptions::default()
    };
    let r = RankEngine::new(options, params(1.0, 1)).compute(&g).unwrap();
    assert!(close(r.get("B").unwrap(), r.get("C").unwrap(), 1e-12));
}

#[test]
fn test_isolated_vertex_gets_jump_and_redistribution() {
    // A <-> B, C isolated. C is its own only dangling source, so
    // c' = (1-d)/n + d * c / n.
    let g = GraphInput::from_pairs(&["A", "B", "C"], &[("A", "B"), ("B", "A")]);
    let d = 0.85;
    let n = 3.0;
    let mut expected = 1.0 / n;
    for iterations in 1..=10 {
        expected = (1.0 - d) / n + d * expected / n;
        let r = rank(&g, d, iterations);
        assert!(close(r.get("C").unwrap(), expected, 1e-12));
    }
}

#[test]
fn test_unknown_target_leaks_under_permit() {
    let g = GraphInput::from_pairs(&["A", "B"], &[("A", "B"), ("A", "Z"), ("B", "A")]);
    let r = rank(&g, 1.0, 1);
    assert!(r.get("Z").is_none());
    assert_eq!(r.len(), 2);
    assert!(close(r.total(), 0.75, 1e-12));
    assert!(close(r.get("B").unwrap(), 0.25, 1e-12));
}

#[test]
fn test_unknown_endpoint_rejected_under_reject() {
    let g = GraphInput::from_pairs(&["A", "B"], &[("A", "B"), ("A", "Z")]);
    let options = BuildOptions {
        unknown_endpoints: EndpointPolicy::Reject,
        ..BuildOptions::default()
    };
    let err = RankEngine::new(options, RankParams::default()).compute(&g).unwrap_err();
    assert_eq!(
        err,
        RankError::MalformedEdge {
            from: "A".into(),
            to: "Z".into()
        }
    );
}

#[test]
fn test_self_loop_keeps_rank() {
    let g = GraphInput::from_pairs(&["A", "B"], &[("A", "A"), ("B", "A")]);
    let r = rank(&g, 1.0, 5);
    assert!(close(r.get("A").unwrap(), 1.0, 1e-12));
    assert!(close(r.get("B").unwrap(), 0.0, 1e-12));
}

#[test]
fn test_duplicate_vertex_rejected() {
    let g = GraphInput::from_pairs(&["A", "B", "A"], &[]);
    let err = RankEngine::default().compute(&g).unwrap_err();
    assert_eq!(err, RankError::DuplicateVertex("A".into()));
}

#[test]
fn test_out_of_range_damping_passes_through() {
    let g = GraphInput::from_pairs(&["A", "B"], &[("A", "B"), ("B", "A")]);
    let r = rank(&g, 1.5, 1);
    // base term (1 - 1.5) / 2 = -0.25, plus 1.5 * 0.5 from the partner.
    assert!(close(r.get("A").unwrap(), 0.5, 1e-12));
}

#[test]
fn test_iterate_matches_engine() {
    let g = GraphInput::from_pairs(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
    let (adjacency, initial) = build(&g.vertices, &g.edges, &BuildOptions::default()).unwrap();
    let direct = iterate(&adjacency, initial, &params(0.85, 30)).unwrap();
    assert_eq!(direct, rank(&g, 0.85, 30));
}

#[test]
fn test_output_follows_vertex_order() {
    let g = GraphInput::from_pairs(&["C", "A", "B"], &[("A", "B")]);
    let r = rank(&g, 0.85, 10);
    let ids: Vec<&str> = r.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["C", "A", "B"]);
}

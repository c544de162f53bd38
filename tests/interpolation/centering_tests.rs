use divdiff::interpolation::centering::{clamp_centering_index, clamp_degree, nearest_index};
use divdiff::interpolation::errors::InterpolationError;

fn uniform_x(n: usize) -> Vec<f64> {
    (0..n).map(|i| 0.2 + 0.5 * i as f64).collect()
}

#[test]
fn exact_hit_selects_that_node() {
    let x = uniform_x(11);
    for (i, &xi) in x.iter().enumerate() {
        assert_eq!(nearest_index(&x, xi), i);
    }
}

#[test]
fn tie_prefers_lower_index() {
    let x = [0.0, 1.0, 2.0];
    // 0.5 is equidistant from 0.0 and 1.0; the first scan wins
    assert_eq!(nearest_index(&x, 0.5), 0);
    assert_eq!(nearest_index(&x, 1.5), 1);
}

#[test]
fn off_range_queries_select_the_edges() {
    let x = uniform_x(11);
    assert_eq!(nearest_index(&x, -100.0), 0);
    assert_eq!(nearest_index(&x, 100.0), x.len() - 1);
}

#[test]
fn clamp_is_a_no_op_when_the_window_fits() {
    assert_eq!(clamp_centering_index(3, 11, 4), 3);
    assert_eq!(clamp_centering_index(0, 11, 10), 0);
}

#[test]
fn clamp_pulls_back_near_the_right_edge() {
    // nearest node 10 with a degree-4 window needs rows 10..=14; pull to 6
    assert_eq!(clamp_centering_index(10, 11, 4), 6);
    assert_eq!(clamp_centering_index(10, 11, 0), 10);
}

#[test]
fn window_stays_in_bounds_for_every_query_and_degree() {
    let n = 11;
    let x = uniform_x(n);

    for degree in 0..n {
        let mut xq = -2.0;
        while xq <= 8.0 {
            let c = clamp_centering_index(nearest_index(&x, xq), n, degree);
            assert!(c + degree <= n - 1, "window [{c}, {}] escapes n={n}", c + degree);
            xq += 0.01;
        }
    }
}

#[test]
fn negative_degree_rejected() {
    let err = clamp_degree(-1, 10).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidDegree { got: -1 }));
}

#[test]
fn oversized_degree_clamps_silently() {
    assert_eq!(clamp_degree(15, 10).unwrap(), 10);
}

#[test]
fn in_range_degree_passes_through() {
    assert_eq!(clamp_degree(0, 10).unwrap(), 0);
    assert_eq!(clamp_degree(7, 10).unwrap(), 7);
}

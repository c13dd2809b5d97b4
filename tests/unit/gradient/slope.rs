use super::*;

#[test]
fn same_x_is_vertical() {
    let k = SlopeKind::classify(Point::new(560.0, 80.0), Point::new(560.0, 620.0));
    assert_eq!(k, SlopeKind::Vertical);
    assert_eq!(k.slope(), None);
    assert_eq!(k.perpendicular_slope(), Some(0.0));
    assert!(k.is_degenerate());
}

#[test]
fn same_y_is_horizontal() {
    let k = SlopeKind::classify(Point::new(1040.0, 350.0), Point::new(80.0, 350.0));
    assert_eq!(k, SlopeKind::Horizontal);
    assert_eq!(k.slope(), Some(0.0));
    assert_eq!(k.perpendicular_slope(), None);
    assert!(k.is_degenerate());
}

#[test]
fn identical_points_classify_vertical_first() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(SlopeKind::classify(p, p), SlopeKind::Vertical);
}

#[test]
fn oblique_axis_has_negative_reciprocal_perpendicular() {
    let cases = [
        (Point::new(0.0, 0.0), Point::new(4.0, 2.0)),
        (Point::new(100.0, 80.0), Point::new(20.0, 620.0)),
        (Point::new(-3.0, 7.5), Point::new(9.0, -1.25)),
    ];
    for (a, b) in cases {
        let k = SlopeKind::classify(a, b);
        let SlopeKind::Default {
            slope,
            perpendicular,
        } = k
        else {
            panic!("expected oblique axis for {a:?} -> {b:?}");
        };
        assert!((slope - (b.y - a.y) / (b.x - a.x)).abs() < 1e-12);
        assert!((perpendicular - (-1.0 / slope)).abs() < 1e-12);
        assert!(!k.is_degenerate());
    }
}

#[test]
fn near_axis_aligned_deltas_take_degenerate_branches() {
    let k = SlopeKind::classify(Point::new(10.0, 0.0), Point::new(10.0 + 1e-9, 500.0));
    assert_eq!(k, SlopeKind::Vertical);
    let k = SlopeKind::classify(Point::new(0.0, 10.0), Point::new(500.0, 10.0 - 1e-9));
    assert_eq!(k, SlopeKind::Horizontal);
}

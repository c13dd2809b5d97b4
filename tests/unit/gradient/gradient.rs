use super::*;

const CYAN: Rgb8 = Rgb8::new(0, 255, 255);
const MAGENTA: Rgb8 = Rgb8::new(255, 0, 255);

#[test]
fn color_map_has_interval_plus_one_entries_with_exact_endpoints() {
    let pairs = [
        (CYAN, MAGENTA),
        (Rgb8::new(0, 0, 0), Rgb8::new(255, 0, 0)),
        (Rgb8::new(113, 27, 248), Rgb8::new(12, 200, 3)),
    ];
    for interval in [1u32, 2, 3, 7, 540, 960] {
        for (p, s) in pairs {
            let colors: Vec<Rgb8> = Gradient::interpolate(interval, p, s).collect();
            assert_eq!(colors.len(), interval as usize + 1);
            assert_eq!(colors.first(), Some(&p));
            assert_eq!(colors.last(), Some(&s));
        }
    }
}

#[test]
fn interpolation_is_monotonic_per_channel() {
    let colors: Vec<Rgb8> = Gradient::interpolate(100, CYAN, MAGENTA).collect();
    assert!(colors.windows(2).all(|w| w[0].r <= w[1].r && w[0].g >= w[1].g));
    assert!(colors.iter().all(|c| c.b == 255));
    let mid = colors[50];
    assert!((i32::from(mid.r) - 128).abs() <= 1);
    assert!((i32::from(mid.g) - 128).abs() <= 1);
}

#[test]
fn interpolation_is_restartable() {
    let it = Gradient::interpolate(10, CYAN, MAGENTA);
    let a: Vec<Rgb8> = it.clone().collect();
    let b: Vec<Rgb8> = it.collect();
    assert_eq!(a, b);
}

#[test]
fn interval_follows_dominant_delta() {
    let g = Gradient::new(
        Point::new(1040.0, 300.0),
        Point::new(80.0, 400.0),
        CYAN,
        MAGENTA,
    )
    .unwrap();
    assert_eq!(g.interval(), 960);
    assert_eq!(g.interval_axis(), IntervalAxis::Horizontal);
    assert_eq!(g.colors().len(), 961);

    let g = Gradient::new(
        Point::new(600.0, 80.0),
        Point::new(520.4, 619.6),
        CYAN,
        MAGENTA,
    )
    .unwrap();
    assert_eq!(g.interval(), 540);
    assert_eq!(g.interval_axis(), IntervalAxis::Vertical);
}

#[test]
fn equal_deltas_step_vertically() {
    let g = Gradient::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0), CYAN, MAGENTA).unwrap();
    assert_eq!(g.interval_axis(), IntervalAxis::Vertical);
    assert_eq!(g.interval(), 5);
}

#[test]
fn degenerate_axes_are_classified_not_rejected() {
    let g = Gradient::new(
        Point::new(560.0, 80.0),
        Point::new(560.0, 620.0),
        CYAN,
        MAGENTA,
    )
    .unwrap();
    assert_eq!(g.slope_kind(), SlopeKind::Vertical);

    let g = Gradient::new(
        Point::new(1040.0, 350.0),
        Point::new(80.0, 350.0),
        CYAN,
        MAGENTA,
    )
    .unwrap();
    assert_eq!(g.slope_kind(), SlopeKind::Horizontal);
}

#[test]
fn rejects_sub_pixel_or_non_finite_axes() {
    let p = Point::new(10.0, 10.0);
    assert!(matches!(
        Gradient::new(p, Point::new(10.2, 10.3), CYAN, MAGENTA),
        Err(BorderError::Validation(_))
    ));
    assert!(matches!(
        Gradient::new(p, Point::new(f64::NAN, 3.0), CYAN, MAGENTA),
        Err(BorderError::Validation(_))
    ));
}

#[test]
fn reversed_swaps_colors_on_same_axis() {
    let g = Gradient::new(
        Point::new(100.0, 80.0),
        Point::new(1020.0, 620.0),
        CYAN,
        MAGENTA,
    )
    .unwrap();
    let r = g.reversed();
    assert_eq!(r.start(), g.start());
    assert_eq!(r.end(), g.end());
    assert_eq!(r.primary(), MAGENTA);
    assert_eq!(r.secondary(), CYAN);
    assert_eq!(r.colors().first(), Some(&MAGENTA));
    assert_eq!(r.colors().last(), Some(&CYAN));
    assert_eq!(
        r,
        Gradient::new(g.start(), g.end(), MAGENTA, CYAN).unwrap()
    );
}

use super::*;
use crate::geometry::coordinates::{Axis, Coordinates};

const CYAN: Rgb8 = Rgb8::new(0, 255, 255);
const MAGENTA: Rgb8 = Rgb8::new(255, 0, 255);

fn dims() -> Dimensions {
    Dimensions::new(400, 300).unwrap()
}

fn axes(step: u32) -> Vec<Axis> {
    Coordinates::generate(dims(), step).unwrap().axes().to_vec()
}

fn axis_at(angle: u32) -> Axis {
    axes(30)
        .into_iter()
        .find(|a| a.angle_deg == angle)
        .unwrap()
}

fn render(axis: Axis, trim: bool) -> FrameRGBA {
    let g = Gradient::new(axis.start, axis.end, CYAN, MAGENTA).unwrap();
    let mut layer = Layer::new(dims()).unwrap();
    layer.apply_gradient(&g);
    if trim {
        layer.trim().unwrap();
    }
    layer.into_frame().unwrap()
}

fn rgb(px: [u8; 4]) -> Rgb8 {
    Rgb8::new(px[0], px[1], px[2])
}

fn close_to(px: [u8; 4], c: Rgb8, tol: i32) -> bool {
    let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).abs();
    d(px[0], c.r) <= tol && d(px[1], c.g) <= tol && d(px[2], c.b) <= tol
}

fn in_interior(x: u32, y: u32) -> bool {
    let o = Dimensions::INTERIOR_OFFSET;
    x >= o && x < 400 - o && y >= o && y < 300 - o
}

fn outside_layer(x: u32, y: u32) -> bool {
    let o = Dimensions::LAYER_OFFSET;
    x < o || x >= 400 - o || y < o || y >= 300 - o
}

#[test]
fn new_layer_is_transparent() {
    let frame = Layer::new(dims()).unwrap().into_frame().unwrap();
    assert_eq!((frame.width, frame.height), (400, 300));
    assert_eq!(frame.data.len(), 400 * 300 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn untrimmed_gradient_covers_the_whole_canvas() {
    for axis in axes(30) {
        let frame = render(axis, false);
        for (x, y) in [(0, 0), (399, 0), (0, 299), (399, 299), (200, 150), (80, 80)] {
            let a = frame.pixel(x, y).unwrap()[3];
            assert!(a > 0, "angle {} pixel ({x},{y}) alpha {a}", axis.angle_deg);
        }
    }
}

#[test]
fn trim_clears_interior_and_outer_margin() {
    for axis in axes(30) {
        let frame = render(axis, true);
        for y in 0..300 {
            for x in 0..400 {
                if in_interior(x, y) || outside_layer(x, y) {
                    assert_eq!(
                        frame.pixel(x, y).unwrap()[3],
                        0,
                        "angle {} pixel ({x},{y})",
                        axis.angle_deg
                    );
                }
            }
        }
    }
}

#[test]
fn trim_leaves_every_band_pixel_opaque() {
    for axis in axes(6) {
        let frame = render(axis, true);
        for y in 70..230 {
            for x in 70..330 {
                if !in_interior(x, y) {
                    assert_eq!(
                        frame.pixel(x, y).unwrap()[3],
                        255,
                        "angle {} pixel ({x},{y})",
                        axis.angle_deg
                    );
                }
            }
        }
    }
}

#[test]
fn vertical_axis_fills_top_and_bottom_strips() {
    let frame = render(axis_at(270), true);
    assert_eq!(frame.pixel(200, 75), Some([0, 255, 255, 255]));
    assert_eq!(frame.pixel(90, 75), Some([0, 255, 255, 255]));
    assert_eq!(frame.pixel(200, 225), Some([255, 0, 255, 255]));

    // Rows step one pixel at a time from the start row.
    let near_start = frame.pixel(200, 82).unwrap();
    assert!(close_to(near_start, CYAN, 8), "{near_start:?}");
    let near_end = frame.pixel(200, 218).unwrap();
    assert!(close_to(near_end, MAGENTA, 8), "{near_end:?}");
}

#[test]
fn horizontal_axis_fills_side_strips_with_primary_on_start_side() {
    let axis = axis_at(360);
    assert!(axis.start.x > axis.end.x);

    let frame = render(axis, true);
    assert_eq!(frame.pixel(325, 150), Some([0, 255, 255, 255]));
    assert_eq!(frame.pixel(75, 150), Some([255, 0, 255, 255]));

    let samples: Vec<Rgb8> = (90..310)
        .step_by(20)
        .map(|x| rgb(frame.pixel(x, 80).unwrap()))
        .collect();
    // Red rises and green falls when walking right to left.
    assert!(samples.windows(2).all(|w| w[0].r >= w[1].r && w[0].g <= w[1].g));
}

#[test]
fn oblique_axes_start_primary_and_end_secondary() {
    for axis in axes(30) {
        let frame = render(axis, true);
        let at = |p: Point| frame.pixel(p.x.floor() as u32, p.y.floor() as u32).unwrap();

        let s = at(axis.start);
        assert!(s[3] > 200, "angle {} start alpha {}", axis.angle_deg, s[3]);
        assert!(close_to(s, CYAN, 20), "angle {} start {s:?}", axis.angle_deg);

        let e = at(axis.end);
        assert!(e[3] > 200, "angle {} end alpha {}", axis.angle_deg, e[3]);
        assert!(close_to(e, MAGENTA, 20), "angle {} end {e:?}", axis.angle_deg);
    }
}

#[test]
fn reversed_gradient_swaps_the_sides() {
    let axis = axis_at(360);
    let g = Gradient::new(axis.start, axis.end, CYAN, MAGENTA)
        .unwrap()
        .reversed();
    let mut layer = Layer::new(dims()).unwrap();
    layer.apply_gradient(&g);
    layer.trim().unwrap();
    let frame = layer.into_frame().unwrap();
    assert_eq!(frame.pixel(325, 150), Some([255, 0, 255, 255]));
    assert_eq!(frame.pixel(75, 150), Some([0, 255, 255, 255]));
}

#[test]
fn guides_outline_the_rectangles() {
    let axis = axis_at(270);
    let g = Gradient::new(axis.start, axis.end, CYAN, MAGENTA).unwrap();
    let mut layer = Layer::new(dims()).unwrap();
    layer.apply_gradient(&g);
    layer.trim().unwrap();
    layer.draw_guides(&g);
    let frame = layer.into_frame().unwrap();

    assert_eq!(frame.pixel(70, 150), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(90, 150), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(329, 150), Some([255, 255, 255, 255]));
    // Pixels off every outline stay untouched.
    assert_eq!(frame.pixel(150, 150).unwrap()[3], 0);
    assert_eq!(frame.pixel(30, 150).unwrap()[3], 0);
}

#[test]
fn blur_softens_band_edges_but_not_the_middle() {
    let axis = axis_at(270);
    let g = Gradient::new(axis.start, axis.end, CYAN, MAGENTA).unwrap();
    let mut layer = Layer::new(dims()).unwrap();
    layer.apply_gradient(&g);
    layer.trim().unwrap();
    layer.blur(2.0).unwrap();
    let frame = layer.into_frame().unwrap();

    // Just inside the interior now picks up some of the band.
    assert!(frame.pixel(200, 91).unwrap()[3] > 0);
    assert!(frame.pixel(200, 91).unwrap()[3] < 255);
    assert_eq!(frame.pixel(200, 150).unwrap()[3], 0);
    assert_eq!(frame.pixel(200, 80).unwrap()[3], 255);
}

#[test]
fn blur_rejects_out_of_range_sigma_and_ignores_zero() {
    let mut layer = Layer::new(dims()).unwrap();
    assert!(matches!(layer.blur(-1.0), Err(BorderError::Validation(_))));
    assert!(matches!(layer.blur(1000.0), Err(BorderError::Validation(_))));
    assert_eq!(Layer::blur_radius(dims(), 2.0).unwrap(), 6);
    assert_eq!(Layer::blur_radius(dims(), 100.0).unwrap(), 300);
    layer.blur(0.0).unwrap();
    let frame = layer.into_frame().unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

use super::*;

#[test]
fn rgb8_conversions_agree() {
    let c = Rgb8::from((0, 255, 255));
    assert_eq!(c, Rgb8::from([0, 255, 255]));
    assert_eq!(c.to_array(), [0, 255, 255]);
}

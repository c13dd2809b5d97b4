use crate::foundation::error::{BorderError, BorderResult};
use crate::foundation::math::mul_div255_u8;

pub(crate) type PremulRgba8 = [u8; 4];

pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> BorderResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BorderError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        match px[3] {
            0 => px[..3].fill(0),
            255 => {}
            _ => unpremultiply_rgb(px),
        }
    }
}

// Every partially covered pixel becomes fully opaque, keeping its straight color.
pub(crate) fn make_opaque_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        if px[3] != 0 && px[3] != 255 {
            unpremultiply_rgb(px);
            px[3] = 255;
        }
    }
}

fn unpremultiply_rgb(px: &mut [u8]) {
    let a = u16::from(px[3]);
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

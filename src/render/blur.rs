use crate::foundation::error::{BorderError, BorderResult};

/// Kernel radius covering three standard deviations of a Gaussian with `sigma`.
pub fn kernel_radius(sigma: f32) -> BorderResult<u32> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(BorderError::validation(format!(
            "blur sigma must be finite and >= 0, got {sigma}"
        )));
    }
    Ok((sigma * 3.0).ceil() as u32)
}

/// Blur a premultiplied RGBA8 buffer with a separable Gaussian.
///
/// Edges clamp to the nearest in-bounds pixel. `radius == 0` returns a copy of `src`, and radii
/// beyond the larger image side are clamped to it.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> BorderResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BorderError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(BorderError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let radius = radius.min(width.max(height));
    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    convolve(src, &mut tmp, width, height, &kernel, Direction::Rows);
    convolve(&tmp, &mut out, width, height, &kernel, Direction::Columns);
    Ok(out)
}

// Weights in Q16 fixed point, summing to exactly 1 << 16.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> BorderResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BorderError::validation("blur sigma must be > 0"));
    }

    let r = i64::from(radius);
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = i as f64;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(BorderError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

#[derive(Clone, Copy)]
enum Direction {
    Rows,
    Columns,
}

// One 1D pass of the separable kernel, clamping samples at the image border.
fn convolve(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], dir: Direction) {
    let radius = (k.len() / 2) as i64;
    let (w, h) = (i64::from(width), i64::from(height));
    for (i, out) in dst.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i as i64 % w, i as i64 / w);
        let mut acc = [0u64; 4];
        for (ki, &kw) in k.iter().enumerate() {
            let off = ki as i64 - radius;
            let (sx, sy) = match dir {
                Direction::Rows => ((x + off).clamp(0, w - 1), y),
                Direction::Columns => (x, (y + off).clamp(0, h - 1)),
            };
            let idx = ((sy * w + sx) as usize) * 4;
            for (a, &v) in acc.iter_mut().zip(&src[idx..idx + 4]) {
                *a += u64::from(kw) * u64::from(v);
            }
        }
        for (o, a) in out.iter_mut().zip(acc) {
            *o = q16_to_u8(a);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;

use fractrio_core::IterationResult;
use rayon::prelude::*;

use crate::buffer::RenderBuffer;
use crate::iteration_buffer::IterationBuffer;

/// A linear RGB color, one `f64` per channel.
///
/// Produced unclamped; the output sink clamps in [`to_rgba8`](Self::to_rgba8).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp to `[0, 1]` and quantize to opaque RGBA8. NaN becomes 0.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            255,
        ]
    }
}

#[inline]
fn channel_to_u8(v: f64) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    (v * 255.0).round() as u8
}

/// Map an escape time to the cubic palette.
///
/// With `t = iter / max_iter`:
/// `R = 9(1−t)t³`, `G = 15(1−t)²t²`, `B = 8.5(1−t)³t`.
/// Both ends of the range (`t = 0` and interior points at `t = 1`) are black.
#[inline]
pub fn colorize(iter: IterationResult, max_iter: u32) -> Rgb {
    if max_iter == 0 {
        return Rgb::BLACK;
    }
    let t = iter.iterations() as f64 / max_iter as f64;
    let s = 1.0 - t;
    Rgb {
        r: 9.0 * s * t * t * t,
        g: 15.0 * s * s * t * t,
        b: 8.5 * s * s * s * t,
    }
}

/// Colorize an entire iteration buffer into an RGBA pixel buffer.
pub fn colorize_frame(iter_buf: &IterationBuffer) -> RenderBuffer {
    let max_iter = iter_buf.max_iterations;
    let mut pixels = vec![0u8; iter_buf.data.len() * 4];
    pixels
        .par_chunks_mut(4)
        .zip(iter_buf.data.par_iter())
        .for_each(|(pixel, &result)| {
            pixel.copy_from_slice(&colorize(result, max_iter).to_rgba8());
        });
    RenderBuffer {
        width: iter_buf.width,
        height: iter_buf.height,
        pixels,
    }
}

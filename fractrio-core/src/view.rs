use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;
use crate::variant::Variant;

/// Zoom multiplier reached at the far end of the slider (`t = 1`).
pub const ZOOM_RANGE_FLOOR: f64 = 0.00001;

/// Side length, in pixels, of the top-left legend region where a pointer
/// probe reports the variant's reference center instead of a mapped point.
pub const HOT_ZONE_SIZE: f64 = 100.0;

/// Pixel dimensions of the display surface. Both sides are at least 1; the
/// only constructor is [`SurfaceSize::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The aspect ratio of the surface (width / height).
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Map a pixel position (origin top-left, y down) to normalized device
    /// coordinates in `[-1, 1]²` (origin center, y up).
    #[inline]
    pub fn pixel_to_ndc(&self, px: f64, py: f64) -> (f64, f64) {
        let w = self.width as f64;
        let h = self.height as f64;
        ((px / w) * 2.0 - 1.0, ((h - py) / h) * 2.0 - 1.0)
    }

    /// NDC of the center of pixel `(px, py)`, the position a rasterizer
    /// interpolates for that fragment.
    #[inline]
    pub fn pixel_center_to_ndc(&self, px: u32, py: u32) -> (f64, f64) {
        self.pixel_to_ndc(px as f64 + 0.5, py as f64 + 0.5)
    }
}

/// A consistent copy of the view, read once per frame.
///
/// The render pass works from a snapshot so a zoom value is never paired
/// with another variant's center, even if input arrives mid-frame.
///
/// Snapshots only come from [`ViewMapper::snapshot`], so `zoom > 0` holds
/// for every value a caller can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSnapshot {
    variant: Variant,
    zoom: f64,
    base_zoom: f64,
    center: Complex,
    /// Slider position in `[0, 1]`.
    zoom_t: f64,
}

impl ViewSnapshot {
    fn for_variant(variant: Variant) -> Self {
        let base_zoom = variant.base_zoom();
        Self {
            variant,
            zoom: base_zoom,
            base_zoom,
            center: variant.center(),
            zoom_t: 0.0,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn base_zoom(&self) -> f64 {
        self.base_zoom
    }

    #[inline]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[inline]
    pub fn zoom_t(&self) -> f64 {
        self.zoom_t
    }

    /// Map a normalized screen position to the complex plane:
    /// `c = (sx · aspect, sy) / zoom + center`.
    #[inline]
    pub fn forward(&self, (sx, sy): (f64, f64), aspect: f64) -> Complex {
        let pos = Complex::new(sx * aspect, sy);
        pos / self.zoom + self.center
    }

    /// Map a pixel position on `surface` to the complex plane.
    ///
    /// Goes through [`forward`](Self::forward) so the coordinate shown under
    /// the pointer is exactly the point rendered there.
    #[inline]
    pub fn inverse(&self, (px, py): (f64, f64), surface: SurfaceSize) -> Complex {
        self.forward(surface.pixel_to_ndc(px, py), surface.aspect())
    }

    /// Pointer probe: inside the top-left hot-zone the reference center is
    /// reported directly, anywhere else the inverse mapping is used.
    pub fn probe(&self, (px, py): (f64, f64), surface: SurfaceSize) -> Complex {
        if px <= HOT_ZONE_SIZE && py <= HOT_ZONE_SIZE {
            self.center
        } else {
            self.inverse((px, py), surface)
        }
    }
}

/// Owns the view state: active variant, zoom curve, and reference center.
///
/// A single owner (the UI thread) mutates it through
/// [`select_variant`](Self::select_variant) and [`set_zoom_t`](Self::set_zoom_t);
/// renderers take a [`ViewSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewMapper {
    state: ViewSnapshot,
}

impl ViewMapper {
    pub fn new(variant: Variant) -> Self {
        Self {
            state: ViewSnapshot::for_variant(variant),
        }
    }

    /// Switch variant and reset zoom and slider, even if `variant` is
    /// already active.
    pub fn select_variant(&mut self, variant: Variant) {
        self.state = ViewSnapshot::for_variant(variant);
        debug!(variant = %variant, zoom = self.state.zoom, "Selected variant");
    }

    /// Apply a slider position: `zoom = base_zoom · 0.00001^t`.
    ///
    /// `t` is clamped to `[0, 1]`; NaN is treated as 0. Larger `t` gives a
    /// smaller zoom factor.
    pub fn set_zoom_t(&mut self, t: f64) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.state.zoom_t = t;
        self.state.zoom = self.state.base_zoom * ZOOM_RANGE_FLOOR.powf(t);
    }

    #[inline]
    pub fn forward(&self, screen_pos: (f64, f64), aspect: f64) -> Complex {
        self.state.forward(screen_pos, aspect)
    }

    #[inline]
    pub fn inverse(&self, pixel_pos: (f64, f64), surface: SurfaceSize) -> Complex {
        self.state.inverse(pixel_pos, surface)
    }

    pub fn probe(&self, pixel_pos: (f64, f64), surface: SurfaceSize) -> Complex {
        self.state.probe(pixel_pos, surface)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state
    }

    pub fn variant(&self) -> Variant {
        self.state.variant()
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom()
    }

    pub fn base_zoom(&self) -> f64 {
        self.state.base_zoom()
    }

    pub fn center(&self) -> Complex {
        self.state.center()
    }

    pub fn zoom_t(&self) -> f64 {
        self.state.zoom_t()
    }
}

impl Default for ViewMapper {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

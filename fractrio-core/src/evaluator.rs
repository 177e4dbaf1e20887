use crate::complex::Complex;
use crate::error::CoreError;
use crate::variant::Variant;

/// Reference step budget per point.
pub const MAX_ITER: u32 = 1000;

/// Damping applied to the previous orbit point in the [`Variant::Perturbed`]
/// recurrence.
pub const PERTURBATION: f64 = 0.5667;

/// Squared bailout magnitude: an orbit with `x² + y² > 4` has escaped.
const BAILOUT_SQ: f64 = 4.0;

/// Escape time of a single point: the number of completed steps before the
/// orbit left the bailout disc, in `[0, max_iter]`.
///
/// A value equal to `max_iter` means the point did not escape within the
/// budget and is treated as interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct IterationResult(u32);

impl IterationResult {
    #[inline]
    pub const fn new(iterations: u32) -> Self {
        Self(iterations)
    }

    #[inline]
    pub const fn iterations(self) -> u32 {
        self.0
    }

    /// `true` when the orbit used the whole budget without escaping.
    #[inline]
    pub const fn is_interior(self, max_iter: u32) -> bool {
        self.0 >= max_iter
    }
}

/// Parameters controlling iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EvalParams {
    /// Step budget before a point is declared interior.
    max_iterations: u32,
}

/// Validates `max_iterations` on load so a bad preferences file cannot
/// produce a zero budget.
impl<'de> serde::Deserialize<'de> for EvalParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            max_iterations: u32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.max_iterations).map_err(serde::de::Error::custom)
    }
}

impl EvalParams {
    pub fn new(max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self { max_iterations })
    }

    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITER,
        }
    }
}

/// Escape-time evaluator bound to a validated step budget.
///
/// Stateless apart from its parameters, so a single instance can be shared
/// across threads and called for every pixel of a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalEvaluator {
    params: EvalParams,
}

impl FractalEvaluator {
    pub fn new(params: EvalParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    #[inline]
    pub fn evaluate(&self, c: Complex, variant: Variant) -> IterationResult {
        evaluate(c, variant, self.params.max_iterations)
    }
}

/// Iterate `c` under `variant` for at most `max_iter` steps.
///
/// Returns the number of steps completed before `x² + y² > 4`, or `max_iter`
/// if the orbit never left the bailout disc. A zero budget performs no steps.
#[inline]
pub fn evaluate(c: Complex, variant: Variant, max_iter: u32) -> IterationResult {
    match variant {
        Variant::Mandelbrot => escape_time(c, max_iter, mandelbrot_step),
        Variant::BurningShip => escape_time(c, max_iter, burning_ship_step),
        Variant::Perturbed => perturbed_escape_time(c, max_iter),
    }
}

#[inline]
fn escape_time(
    c: Complex,
    max_iter: u32,
    step: impl Fn(f64, f64, Complex) -> (f64, f64),
) -> IterationResult {
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    for n in 0..max_iter {
        (x, y) = step(x, y, c);
        if Complex::new(x, y).norm_sq() > BAILOUT_SQ {
            return IterationResult(n);
        }
    }
    IterationResult(max_iter)
}

#[inline]
fn mandelbrot_step(x: f64, y: f64, c: Complex) -> (f64, f64) {
    (x * x - y * y + c.re, 2.0 * x * y + c.im)
}

/// Both components are negated after the update. Not equivalent to taking
/// `|x|, |y|` before squaring.
#[inline]
fn burning_ship_step(x: f64, y: f64, c: Complex) -> (f64, f64) {
    let x_new = x * x - y * y + c.re;
    let y_new = -((2.0 * x * y).abs() + c.im);
    (-x_new, y_new)
}

fn perturbed_escape_time(c: Complex, max_iter: u32) -> IterationResult {
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let (mut x_prev, mut y_prev) = (0.0_f64, 0.0_f64);
    for n in 0..max_iter {
        let x_new = x * x - y * y + c.re + PERTURBATION * x_prev;
        let y_new = 2.0 * x * y + c.im + PERTURBATION * y_prev;
        // Feedback uses the state from before this step.
        (x_prev, y_prev) = (x, y);
        (x, y) = (x_new, y_new);
        if Complex::new(x, y).norm_sq() > BAILOUT_SQ {
            return IterationResult(n);
        }
    }
    IterationResult(max_iter)
}

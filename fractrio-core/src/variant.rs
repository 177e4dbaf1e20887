use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// The escape-time recurrence being explored.
///
/// Each variant carries a fixed reference center (the point the view is
/// anchored on) and a default zoom. Neither is configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `z² + c`.
    #[default]
    Mandelbrot,
    /// `z² + c` with the imaginary cross term folded through `|·|` and both
    /// components negated each step.
    BurningShip,
    /// `z² + c` plus a damped feedback term from the previous orbit point.
    Perturbed,
}

impl Variant {
    /// All variants, in selector order.
    pub const ALL: [Variant; 3] = [Variant::Mandelbrot, Variant::BurningShip, Variant::Perturbed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::Perturbed => "Perturbed",
        }
    }

    /// Reference center on the complex plane.
    pub const fn center(self) -> Complex {
        match self {
            Self::Mandelbrot => Complex::new(-0.74364388703, 0.13182590421),
            Self::BurningShip => Complex::new(-1.831, -0.004),
            Self::Perturbed => Complex::new(-0.74543, 0.11301),
        }
    }

    /// Zoom applied when the variant is selected (slider at 0).
    pub const fn base_zoom(self) -> f64 {
        match self {
            Self::Mandelbrot => 50_000.0,
            Self::BurningShip => 100_000.0,
            Self::Perturbed => 120_000.0,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    /// Accepts the display label or an identifier spelling, ignoring case,
    /// spaces, `_` and `-` (`"Burning Ship"`, `"burning_ship"`, `"burningShip"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "burningship" => Ok(Self::BurningShip),
            "perturbed" => Ok(Self::Perturbed),
            _ => Err(CoreError::UnknownVariant(s.to_string())),
        }
    }
}

//! Demo settings.
//!
//! The defaults are the literals the demo was written around; the binary
//! lets a few of them be overridden from the command line.

use crate::bakery::{DEFAULT_AMOUNT, DEFAULT_INGREDIENT};
use crate::error::{Error, Result};

/// Upper bound on random samples per run; every sample is kept in memory.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Inputs for one run of the demo driver.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    /// How many random samples to print.
    pub samples: usize,
    /// Seed for the random source; `None` uses the thread-local RNG.
    pub seed: Option<u64>,
    /// Text handed to both decorations.
    pub greeting: String,
    /// First reading, in metric units.
    pub plane_speed: f64,
    /// Second reading, in metric units.
    pub wind_speed: f64,
    /// Readings are divided by this to convert them.
    pub unit_divisor: f64,
    /// Ingredient the bakery hands to cake makers.
    pub ingredient: String,
    /// Amount, in grams, the bakery hands to cake makers.
    pub amount: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            samples: 10,
            seed: None,
            greeting: "HELLO".to_string(),
            plane_speed: 200.0,
            wind_speed: 10.0,
            unit_divisor: 1000.0,
            ingredient: DEFAULT_INGREDIENT.to_string(),
            amount: DEFAULT_AMOUNT,
        }
    }
}

impl DemoSettings {
    /// Checks that these settings can be run.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the sample count exceeds [`MAX_SAMPLES`], a
    /// reading is not finite, or the divisor is zero or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.samples > MAX_SAMPLES {
            return Err(Error::Config(format!(
                "at most {MAX_SAMPLES} samples allowed, got {}",
                self.samples
            )));
        }
        for (name, value) in [
            ("plane speed", self.plane_speed),
            ("wind speed", self.wind_speed),
        ] {
            if !value.is_finite() {
                return Err(Error::Config(format!("{name} must be finite, got {value}")));
            }
        }
        if !self.unit_divisor.is_finite() || self.unit_divisor == 0.0 {
            return Err(Error::Config(format!(
                "unit divisor must be finite and non-zero, got {}",
                self.unit_divisor
            )));
        }
        Ok(())
    }
}

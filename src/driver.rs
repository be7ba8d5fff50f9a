//! Demo driver.
//!
//! Walks through every callback style once, writing the transcript to the
//! given sink:
//!
//! ```text
//! We made a cake! This one:Chocolate cake, no need for extra ingredents
//! We made a cake! This one:Generic cake with500grams of suger
//! <one random sample per line>
//! *********
//! HELLO
//! *********
//!
//! NON RELAted STRING
//! 0.21000000000000002
//! ```

use std::io::Write;

use tracing::{debug, info};

use crate::bakery::{Bakery, ChocolateCakeMaker, generic_cake_maker};
use crate::config::DemoSettings;
use crate::error::Result;
use crate::invoker::{
    decorate_and_write, make_random_source, make_seeded_random_source, sum_converted_values,
};
use crate::shapes::{Supplier, UnaryOperator};

/// Values produced by a run, for callers that want more than the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    /// Random samples, in the order they were printed.
    pub samples: Vec<f64>,
    /// Sum of both readings after unit conversion.
    pub converted_sum: f64,
}

/// Runs the demo against `out`.
///
/// # Errors
///
/// Returns `Error::Config` for invalid settings (before anything is
/// written) and `Error::Io` if `out` cannot be written.
pub fn run<W>(out: &mut W, settings: &DemoSettings) -> Result<DemoSummary>
where
    W: Write + ?Sized,
{
    settings.validate()?;
    info!(samples = settings.samples, seed = ?settings.seed, "running demo");

    bake_both_ways(out, settings)?;
    let samples = print_samples(out, settings)?;
    decorate_greeting(out, &settings.greeting)?;
    let converted_sum = print_converted_sum(out, settings)?;

    out.flush()?;
    Ok(DemoSummary {
        samples,
        converted_sum,
    })
}

fn bake_both_ways<W>(out: &mut W, settings: &DemoSettings) -> Result<()>
where
    W: Write + ?Sized,
{
    debug!("baking with explicit and closure makers");
    let bakery = Bakery::new(settings.ingredient.as_str(), settings.amount);
    bakery.do_baking(out, &ChocolateCakeMaker)?;
    bakery.do_baking(out, &generic_cake_maker())?;
    Ok(())
}

fn print_samples<W>(out: &mut W, settings: &DemoSettings) -> Result<Vec<f64>>
where
    W: Write + ?Sized,
{
    let mut rng: Supplier<f64> = match settings.seed {
        Some(seed) => make_seeded_random_source(seed),
        None => make_random_source(),
    };

    let mut samples = Vec::new();
    for _ in 0..settings.samples {
        let sample = rng();
        writeln!(out, "{sample}")?;
        samples.push(sample);
    }
    debug!(count = samples.len(), "printed random samples");
    Ok(samples)
}

fn decorate_greeting<W>(out: &mut W, greeting: &str) -> Result<()>
where
    W: Write + ?Sized,
{
    decorate_and_write(out, greeting, |stuff| {
        format!("*********\n{stuff}\n*********\n")
    })?;
    decorate_and_write(out, greeting, |_| "NON RELAted STRING".to_string())?;
    debug!(greeting, "printed decorations");
    Ok(())
}

fn print_converted_sum<W>(out: &mut W, settings: &DemoSettings) -> Result<f64>
where
    W: Write + ?Sized,
{
    let divisor = settings.unit_divisor;
    let to_mach: UnaryOperator<f64> = Box::new(move |speed| speed / divisor);

    let sum = sum_converted_values(settings.plane_speed, settings.wind_speed, to_mach);
    writeln!(out, "{sum}")?;
    debug!(sum, "printed converted sum");
    Ok(sum)
}

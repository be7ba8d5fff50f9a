//! Callback invoker.
//!
//! Applies caller-supplied functions to caller-supplied values. Nothing here
//! inspects the callbacks; they run exactly once per input, in argument order.

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::shapes::Supplier;

/// Converts both readings with `convert` and returns their sum.
///
/// ```
/// use lambda_bakery::invoker::sum_converted_values;
///
/// let sum = sum_converted_values(200.0, 10.0, |speed| speed / 1000.0);
/// assert!((sum - 0.21).abs() < 1e-12);
/// ```
pub fn sum_converted_values<F>(val1: f64, val2: f64, convert: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let first = convert(val1);
    let second = convert(val2);
    trace!(val1, val2, first, second, "converted readings");
    first + second
}

/// Fallible form of [`sum_converted_values`].
///
/// The first error returned by `convert` is handed back unchanged and
/// `val2` is not converted after `val1` failed.
///
/// # Errors
///
/// Whatever `convert` returns.
pub fn try_sum_converted_values<F, E>(val1: f64, val2: f64, convert: F) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    Ok(convert(val1)? + convert(val2)?)
}

/// Writes `decorate(text)` followed by a newline to `out`.
///
/// # Errors
///
/// Returns the IO error if `out` cannot be written.
pub fn decorate_and_write<W, F>(out: &mut W, text: &str, decorate: F) -> io::Result<()>
where
    W: Write + ?Sized,
    F: Fn(&str) -> String,
{
    let decorated = decorate(text);
    trace!(text, decorated = %decorated, "decorated text");
    writeln!(out, "{decorated}")
}

/// Prints `decorate(text)` to standard output.
///
/// # Errors
///
/// Returns the IO error if stdout is closed.
pub fn decorate_and_print<F>(text: &str, decorate: F) -> io::Result<()>
where
    F: Fn(&str) -> String,
{
    decorate_and_write(&mut io::stdout().lock(), text, decorate)
}

/// Returns a supplier of uniformly distributed samples in `[0, 1)`.
///
/// Backed by the thread-local RNG; every call is an independent sample and
/// nothing about the sequence is reproducible.
pub fn make_random_source() -> Supplier<f64> {
    Box::new(|| rand::thread_rng().r#gen::<f64>())
}

/// Like [`make_random_source`], but the sequence is fixed by `seed`.
pub fn make_seeded_random_source(seed: u64) -> Supplier<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Box::new(move || rng.r#gen::<f64>())
}

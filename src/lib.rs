//! Lambda Bakery
//!
//! Single-method capabilities and closures, demonstrated with a bakery, a
//! random number source, some string decorations and a unit conversion.
//!
//! # Overview
//!
//! This library provides:
//! - A callback invoker that applies caller-supplied functions to values
//! - The standard function shapes (supplier, consumer, predicate, ...) as type aliases
//! - A single-method `CakeMaker` capability, implemented explicitly and by closure
//! - A demo driver that exercises all of the above and writes a transcript
//!
//! # Modules
//!
//! - [`error`] - Error types for the crate
//! - [`shapes`] - Function shape aliases
//! - [`invoker`] - Callback invoker
//! - [`bakery`] - The cake maker capability and its consumer
//! - [`config`] - Demo settings
//! - [`driver`] - Demo driver
//!
//! # Example
//!
//! ```
//! use lambda_bakery::{DemoSettings, driver};
//!
//! let settings = DemoSettings {
//!     seed: Some(1),
//!     ..DemoSettings::default()
//! };
//! let mut transcript = Vec::new();
//! let summary = driver::run(&mut transcript, &settings)?;
//! assert_eq!(summary.samples.len(), 10);
//! # Ok::<(), lambda_bakery::Error>(())
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod bakery;
pub mod config;
pub mod driver;
pub mod error;
pub mod invoker;
pub mod shapes;

// Re-export commonly used types at the crate root
pub use bakery::{Bakery, CakeMaker, ChocolateCakeMaker};
pub use config::DemoSettings;
pub use driver::DemoSummary;
pub use error::{Error, Result};

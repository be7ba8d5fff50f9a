//! The bakery: a capability with a single operation.
//!
//! [`CakeMaker`] has exactly one method, so anything callable with the same
//! signature is a cake maker too. [`Bakery`] cannot tell an explicit
//! implementation from a closure; only the returned text differs.

use std::io::{self, Write};

use tracing::debug;

/// Ingredient handed to every cake maker unless overridden.
pub const DEFAULT_INGREDIENT: &str = "suger";

/// Amount, in grams, handed to every cake maker unless overridden.
pub const DEFAULT_AMOUNT: u32 = 500;

/// Something that can bake a cake from an extra ingredient and an amount.
pub trait CakeMaker {
    /// Bakes a cake and describes it.
    fn make_cake(&self, extra_ingredient: &str, amount: u32) -> String;
}

impl<F> CakeMaker for F
where
    F: Fn(&str, u32) -> String,
{
    fn make_cake(&self, extra_ingredient: &str, amount: u32) -> String {
        self(extra_ingredient, amount)
    }
}

/// Explicit implementation that ignores what it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChocolateCakeMaker;

impl CakeMaker for ChocolateCakeMaker {
    fn make_cake(&self, _extra_ingredient: &str, _amount: u32) -> String {
        "Chocolate cake, no need for extra ingredents".to_string()
    }
}

/// Closure implementation that bakes with whatever it is given.
pub fn generic_cake_maker() -> impl Fn(&str, u32) -> String {
    |ingredient, amount| format!("Generic cake with{amount}grams of {ingredient}")
}

/// Consumer of cake makers.
#[derive(Debug, Clone)]
pub struct Bakery {
    ingredient: String,
    amount: u32,
}

impl Default for Bakery {
    fn default() -> Self {
        Self::new(DEFAULT_INGREDIENT, DEFAULT_AMOUNT)
    }
}

impl Bakery {
    /// Creates a bakery that hands `ingredient` and `amount` to its makers.
    pub fn new(ingredient: impl Into<String>, amount: u32) -> Self {
        Self {
            ingredient: ingredient.into(),
            amount,
        }
    }

    /// Asks `maker` for a cake and formats the announcement.
    pub fn bake<M>(&self, maker: &M) -> String
    where
        M: CakeMaker + ?Sized,
    {
        let cake = maker.make_cake(&self.ingredient, self.amount);
        debug!(ingredient = %self.ingredient, amount = self.amount, cake = %cake, "baked");
        format!("We made a cake! This one:{cake}")
    }

    /// Bakes with `maker` and writes the announcement as one line.
    ///
    /// # Errors
    ///
    /// Returns the IO error if `out` cannot be written.
    pub fn do_baking<W, M>(&self, out: &mut W, maker: &M) -> io::Result<()>
    where
        W: Write + ?Sized,
        M: CakeMaker + ?Sized,
    {
        writeln!(out, "{}", self.bake(maker))
    }
}

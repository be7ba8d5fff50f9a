//! The standard function shapes, as plain type aliases.
//!
//! ```text
//! Supplier        ()      -> x
//! Consumer        x       -> ()
//! BiConsumer      x, y    -> ()
//! Callable        ()      -> Result<x>
//! Runnable        ()      -> ()
//! Function        x       -> y
//! BiFunction      x, y    -> z
//! Predicate       &x      -> bool
//! UnaryOperator   x1      -> x2
//! BinaryOperator  x1, x2  -> x3
//! ```
//!
//! Shapes that produce a value without taking one (`Supplier`, `Callable`,
//! `Runnable`) are `FnMut` so they may carry state, such as an RNG.

use crate::error::Result;

/// `() -> T`
pub type Supplier<T> = Box<dyn FnMut() -> T>;

/// `T -> ()`
pub type Consumer<T> = Box<dyn Fn(T)>;

/// `T, U -> ()`
pub type BiConsumer<T, U> = Box<dyn Fn(T, U)>;

/// `() -> Result<T>`
pub type Callable<T> = Box<dyn FnMut() -> Result<T>>;

/// `() -> ()`
pub type Runnable = Box<dyn FnMut()>;

/// `T -> R`
pub type Function<T, R> = Box<dyn Fn(T) -> R>;

/// `T, U -> R`
pub type BiFunction<T, U, R> = Box<dyn Fn(T, U) -> R>;

/// `&T -> bool`
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// `T -> T`
pub type UnaryOperator<T> = Function<T, T>;

/// `T, T -> T`
pub type BinaryOperator<T> = BiFunction<T, T, T>;

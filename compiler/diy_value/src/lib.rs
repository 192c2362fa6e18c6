//! DIY Lisp values and environments.
//!
//! Code and data share one representation: the reader produces [`Value`]
//! trees and the evaluator reduces them to other [`Value`]s. This crate owns
//! that type together with everything a value can point at:
//!
//! - [`Value`], [`Heap`], [`Symbol`], [`Closure`]: the tagged union and its payloads
//! - [`Environment`]: chained binding frames captured by closures
//! - [`LispError`] and the factory functions in [`errors`]
//! - the node-shape predicates in [`predicates`]
//!
//! Closures hold their defining environment and environments hold values, so
//! the two have to live in the same crate.

mod environment;
pub mod errors;
pub mod predicates;
mod symbol;
mod value;

pub use environment::Environment;
pub use errors::{LispError, LispResult};
pub use predicates::{
    is_atom, is_boolean, is_closure, is_integer, is_list, is_string, is_symbol,
};
pub use symbol::Symbol;
pub use value::{unparse, Closure, Heap, Value};

//! User-defined functions.

use std::fmt;

use super::Value;
use crate::{Environment, Symbol};

/// A function created by `lambda` or `defn`.
///
/// The environment is shared with the scope the closure was created in, not
/// copied: a later `define` in that scope is visible from the body.
pub struct Closure {
    env: Environment,
    params: Vec<Symbol>,
    body: Value,
}

impl Closure {
    pub fn new(env: Environment, params: Vec<Symbol>, body: Value) -> Self {
        Closure { env, params, body }
    }

    /// The environment the closure was created in.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn params(&self) -> &[Symbol] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &Value {
        &self.body
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured environment usually contains the closure itself (`defn`), so
// it is left out to keep the output finite.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

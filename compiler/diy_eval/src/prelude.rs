//! Standard library written in DIY Lisp.

use diy_parse::parse_multiple;
use diy_value::{Environment, LispResult};

use crate::evaluate;

/// Source of the prelude, evaluated by [`load_prelude`].
pub const PRELUDE_SOURCE: &str = include_str!("prelude.diy");

/// Evaluate the prelude's definitions into `env`.
pub fn load_prelude(env: &Environment) -> LispResult<()> {
    let definitions = parse_multiple(PRELUDE_SOURCE)?;
    for definition in &definitions {
        evaluate(definition, env)?;
    }
    tracing::debug!(definitions = definitions.len(), "prelude loaded");
    Ok(())
}

/// A fresh root environment with the prelude loaded.
pub fn prelude_environment() -> LispResult<Environment> {
    let env = Environment::new();
    load_prelude(&env)?;
    Ok(env)
}

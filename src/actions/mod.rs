//! Action Set model: the declarative request a host hands to the pipeline.

mod builder;
mod model;

pub use builder::ActionSetBuilder;
pub use model::{ActionSet, FitMode, Shape};

#[cfg(test)]
#[path = "../../tests/unit/actions/mod.rs"]
mod tests;

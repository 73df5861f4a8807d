pub mod assign;
pub mod condition;
pub mod config;
pub mod control;
pub mod eval;
pub mod host;
pub mod loops;
pub mod state;

#[cfg(test)]
pub mod test_support;

pub use assign::assign;
pub use condition::resolve_condition;
pub use eval::{evaluate, evaluate_parsed, evaluate_str};
pub use loops::resolve_iterable;

pub mod evaluator;

pub use evaluator::{evaluate, evaluate_with, quote};

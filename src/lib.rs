pub mod config;
pub mod domain;
pub mod evaluation;
pub mod export;
pub mod fixtures;
pub mod setup;
pub mod solver;
pub mod utils;

pub use domain::{
    CombinationResult, HaulError, HaulParameters, HaulResult, RankedResultSet, TableKind,
    TieBreak, TimeTable,
};
pub use evaluation::{evaluate, evaluate_with, quote};

pub mod error;
pub mod types;

pub use error::{HaulError, HaulResult, TableKind};
pub use types::*;

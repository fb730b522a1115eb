pub mod report;
pub mod run;

pub use clap::Parser;
pub use run::{run, Args};

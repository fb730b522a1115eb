pub mod init;
pub mod init_types;

pub use init::{apply_overrides, default_parameters, load_parameters, parse_parameters};
pub use init_types::{Overrides, ParameterFile};

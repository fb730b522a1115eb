pub mod csv_export;
pub mod json;
pub mod summary;

pub use csv_export::{save_to_csv, write_csv, CSV_HEADER};
pub use json::{save_json, write_json};
pub use summary::{best_summary, save_summary};

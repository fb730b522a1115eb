use serde::Deserialize;

use crate::domain::{TieBreak, TimeTable};

/// Parameter file layout. Every field is optional; missing ones keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    pub trips: Option<u32>,
    pub load_times: Option<TimeTable>,
    pub transport_times: Option<TimeTable>,
    pub tie_break: Option<TieBreak>,
}

/// Edits applied on top of the loaded parameters, in the order given.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub load_times: Vec<(String, f64)>,
    pub transport_times: Vec<(String, f64)>,
    pub trips: Option<u32>,
    pub tie_break: Option<TieBreak>,
}

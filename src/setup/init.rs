use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::constant::{DEFAULT_LOAD_TIMES, DEFAULT_TRANSPORT_TIMES, DEFAULT_TRIPS};
use crate::domain::{HaulParameters, HaulResult, TieBreak};
use crate::setup::init_types::{Overrides, ParameterFile};

/// Built-in equipment and route tables with the default trip count.
pub fn default_parameters() -> HaulParameters {
    HaulParameters {
        load_times: DEFAULT_LOAD_TIMES.into_iter().collect(),
        transport_times: DEFAULT_TRANSPORT_TIMES.into_iter().collect(),
        trips: DEFAULT_TRIPS,
        tie_break: TieBreak::default(),
    }
}

/// Parse a JSON parameter file and merge it over the defaults.
pub fn parse_parameters(json: &str) -> HaulResult<HaulParameters> {
    let file: ParameterFile = serde_json::from_str(json)?;
    let mut params = default_parameters();

    if let Some(load_times) = file.load_times {
        params.load_times = load_times;
    }
    if let Some(transport_times) = file.transport_times {
        params.transport_times = transport_times;
    }
    if let Some(trips) = file.trips {
        params.trips = trips;
    }
    if let Some(tie_break) = file.tie_break {
        params.tie_break = tie_break;
    }

    Ok(params)
}

/// Load parameters from `path`, or the built-in defaults when no path is given.
pub fn load_parameters(path: Option<&Path>) -> HaulResult<HaulParameters> {
    let Some(path) = path else {
        info!("No parameter file given, using built-in tables");
        return Ok(default_parameters());
    };

    let content = fs::read_to_string(path)?;
    let params = parse_parameters(&content)?;
    info!(
        "Loaded {} equipment and {} routes from {}",
        params.load_times.len(),
        params.transport_times.len(),
        path.display()
    );
    Ok(params)
}

pub fn apply_overrides(params: &mut HaulParameters, overrides: &Overrides) {
    for (name, minutes) in &overrides.load_times {
        let previous = params.load_times.insert(name.clone(), *minutes);
        debug!("Load time {name}: {previous:?} -> {minutes}");
    }
    for (name, minutes) in &overrides.transport_times {
        let previous = params.transport_times.insert(name.clone(), *minutes);
        debug!("Transport time {name}: {previous:?} -> {minutes}");
    }
    if let Some(trips) = overrides.trips {
        params.trips = trips;
    }
    if let Some(tie_break) = overrides.tie_break {
        params.tie_break = tie_break;
    }
}

use itertools::Itertools;
use tracing::{debug, trace};

use crate::domain::{
    CombinationResult, HaulError, HaulParameters, HaulResult, RankedResultSet, TableKind,
    TieBreak, TimeTable,
};

/// Evaluate every (equipment, route) pair and rank them by total time.
///
/// Pairs are produced with the load table as the outer loop and the transport
/// table as the inner loop; the sort is stable, so equal totals keep that order.
pub fn evaluate(
    load_times: &TimeTable,
    transport_times: &TimeTable,
    trips: u32,
) -> HaulResult<RankedResultSet> {
    rank(load_times, transport_times, trips, TieBreak::InputOrder)
}

/// Same as [`evaluate`] but takes the tables, trip count and tie-break policy from `params`.
pub fn evaluate_with(params: &HaulParameters) -> HaulResult<RankedResultSet> {
    rank(
        &params.load_times,
        &params.transport_times,
        params.trips,
        params.tie_break,
    )
}

/// Total time for one chosen equipment and route.
pub fn quote(
    load_times: &TimeTable,
    transport_times: &TimeTable,
    trips: u32,
    equipment: &str,
    route: &str,
) -> HaulResult<f64> {
    validate_trips(trips)?;

    let load = load_times.get(equipment).ok_or_else(|| HaulError::UnknownKey {
        table: TableKind::Load,
        key: equipment.to_string(),
    })?;
    let transport = transport_times
        .get(route)
        .ok_or_else(|| HaulError::UnknownKey {
            table: TableKind::Transport,
            key: route.to_string(),
        })?;

    validate_minutes(equipment, load)?;
    validate_minutes(route, transport)?;

    let (_, total) = combine(equipment, route, load, transport, trips)?;
    Ok(total)
}

fn rank(
    load_times: &TimeTable,
    transport_times: &TimeTable,
    trips: u32,
    tie_break: TieBreak,
) -> HaulResult<RankedResultSet> {
    validate_inputs(load_times, transport_times, trips)?;

    let mut results: Vec<CombinationResult> = load_times
        .iter()
        .cartesian_product(transport_times.iter().collect::<Vec<_>>())
        .map(|((equipment, load), (route, transport))| -> HaulResult<CombinationResult> {
            let (per_trip, total) = combine(equipment, route, load, transport, trips)?;
            Ok(CombinationResult {
                equipment: equipment.to_string(),
                route: route.to_string(),
                per_trip_minutes: per_trip,
                total_minutes: total,
            })
        })
        .collect::<HaulResult<_>>()?;

    debug!(
        "Evaluated {} combinations ({} equipment x {} routes, {} trips)",
        results.len(),
        load_times.len(),
        transport_times.len(),
        trips
    );

    // sort_by is stable
    match tie_break {
        TieBreak::InputOrder => {
            results.sort_by(|a, b| a.total_minutes.total_cmp(&b.total_minutes));
        }
        TieBreak::Name => {
            results.sort_by(|a, b| {
                a.total_minutes
                    .total_cmp(&b.total_minutes)
                    .then_with(|| a.equipment.cmp(&b.equipment))
                    .then_with(|| a.route.cmp(&b.route))
            });
        }
    }

    for r in &results {
        trace!(
            "{} + {}: {:.2} per trip, {:.2} total",
            r.equipment,
            r.route,
            r.per_trip_minutes,
            r.total_minutes
        );
    }

    Ok(RankedResultSet::from_sorted(results))
}

/// Per-trip and total minutes for one pair. Adding `0.0` turns `-0.0` into
/// `0.0` so `total_cmp` sees equal totals as ties.
fn combine(
    equipment: &str,
    route: &str,
    load: f64,
    transport: f64,
    trips: u32,
) -> HaulResult<(f64, f64)> {
    let per_trip = load + transport + 0.0;
    let total = per_trip * f64::from(trips);
    if !total.is_finite() {
        return Err(HaulError::invalid(
            format!("{equipment} + {route}"),
            "total time overflows",
        ));
    }
    Ok((per_trip, total))
}

fn validate_inputs(load_times: &TimeTable, transport_times: &TimeTable, trips: u32) -> HaulResult<()> {
    validate_trips(trips)?;

    if load_times.is_empty() {
        return Err(HaulError::EmptyInput {
            table: TableKind::Load,
        });
    }
    if transport_times.is_empty() {
        return Err(HaulError::EmptyInput {
            table: TableKind::Transport,
        });
    }

    for (name, minutes) in load_times.iter().chain(transport_times.iter()) {
        validate_minutes(name, minutes)?;
    }
    Ok(())
}

fn validate_trips(trips: u32) -> HaulResult<()> {
    if trips == 0 {
        return Err(HaulError::invalid("trips", "trip count must be at least 1"));
    }
    Ok(())
}

fn validate_minutes(name: &str, minutes: f64) -> HaulResult<()> {
    if !minutes.is_finite() {
        return Err(HaulError::invalid(name, format!("{minutes} is not a finite time")));
    }
    if minutes < 0.0 {
        return Err(HaulError::invalid(name, format!("{minutes} is negative")));
    }
    Ok(())
}

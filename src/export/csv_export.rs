use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::domain::{HaulResult, RankedResultSet};
use crate::utils::format_minutes;

pub const CSV_HEADER: [&str; 4] = [
    "Equipo",
    "Ruta",
    "Tiempo por viaje (min)",
    "Tiempo total (min)",
];

/// Write the ranked table, one row per combination in ranked order.
pub fn write_csv<W: Write>(ranked: &RankedResultSet, writer: W) -> HaulResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for r in ranked {
        wtr.write_record([
            r.equipment.as_str(),
            r.route.as_str(),
            format_minutes(r.per_trip_minutes).as_str(),
            format_minutes(r.total_minutes).as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn save_to_csv(ranked: &RankedResultSet, path: &Path) -> HaulResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv(ranked, file)?;
    info!("Wrote {} combinations to {}", ranked.len(), path.display());
    Ok(())
}

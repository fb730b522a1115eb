use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::{CombinationResult, HaulResult, RankedResultSet};

#[derive(Serialize)]
struct Report<'a> {
    best: &'a CombinationResult,
    results: &'a RankedResultSet,
}

pub fn write_json<W: Write>(ranked: &RankedResultSet, writer: W) -> HaulResult<()> {
    let report = Report {
        best: ranked.best(),
        results: ranked,
    };
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

pub fn save_json(ranked: &RankedResultSet, path: &Path) -> HaulResult<()> {
    let file = std::fs::File::create(path)?;
    write_json(ranked, file)?;
    info!("Wrote JSON report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeTable;
    use crate::evaluation::evaluate;

    #[test]
    fn report_has_best_and_all_results() {
        let load: TimeTable = [("A", 10.0), ("B", 5.0)].into_iter().collect();
        let transport: TimeTable = [("X", 20.0), ("Y", 1.0)].into_iter().collect();
        let ranked = evaluate(&load, &transport, 2).unwrap();

        let mut buf = Vec::new();
        write_json(&ranked, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["best"]["equipo"], "B");
        assert_eq!(value["best"]["ruta"], "Y");
        assert_eq!(value["best"]["tiempo_total"], 12.0);
        assert_eq!(value["results"].as_array().unwrap().len(), 4);
    }
}

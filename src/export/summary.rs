use std::path::Path;

use tracing::info;

use crate::domain::{CombinationResult, HaulResult, RankedResultSet};

/// One-line recommendation for the fastest combination.
pub fn best_summary(best: &CombinationResult) -> String {
    format!(
        "Mejor alternativa: {} + {} -> {:.1} minutos",
        best.equipment, best.route, best.total_minutes
    )
}

pub fn save_summary(ranked: &RankedResultSet, path: &Path) -> HaulResult<()> {
    std::fs::write(path, best_summary(ranked.best()))?;
    info!("Wrote best alternative to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_one_decimal() {
        let best = CombinationResult {
            equipment: "Cargador frontal".into(),
            route: "Ruta 3".into(),
            per_trip_minutes: 20.0,
            total_minutes: 100.0,
        };
        assert_eq!(
            best_summary(&best),
            "Mejor alternativa: Cargador frontal + Ruta 3 -> 100.0 minutos"
        );
    }

    #[test]
    fn summary_rounds_total() {
        let best = CombinationResult {
            equipment: "Mixto".into(),
            route: "Ruta 1".into(),
            per_trip_minutes: 8.33,
            total_minutes: 24.99,
        };
        assert_eq!(best_summary(&best), "Mejor alternativa: Mixto + Ruta 1 -> 25.0 minutos");
    }
}

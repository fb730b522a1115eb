use colored::*;

use crate::domain::{CombinationResult, RankedResultSet};
use crate::utils::format_minutes;

/// Plain rows of the ranked table, header first.
pub fn table_lines(ranked: &RankedResultSet) -> Vec<String> {
    let equipment_width = column_width("Equipo", ranked.iter().map(|r| r.equipment.as_str()));
    let route_width = column_width("Ruta", ranked.iter().map(|r| r.route.as_str()));

    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(format!(
        "{:>3}  {:<ew$}  {:<rw$}  {:>22}  {:>18}",
        "#",
        "Equipo",
        "Ruta",
        "Tiempo por viaje (min)",
        "Tiempo total (min)",
        ew = equipment_width,
        rw = route_width,
    ));

    for (rank, r) in ranked.iter().enumerate() {
        lines.push(format!(
            "{:>3}  {:<ew$}  {:<rw$}  {:>22}  {:>18}",
            rank + 1,
            r.equipment,
            r.route,
            format_minutes(r.per_trip_minutes),
            format_minutes(r.total_minutes),
            ew = equipment_width,
            rw = route_width,
        ));
    }
    lines
}

/// Horizontal bars of total time, longest bar = slowest combination.
pub fn chart_lines(ranked: &RankedResultSet, width: usize) -> Vec<String> {
    let labels: Vec<String> = ranked.iter().map(combination_label).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max_total = ranked
        .iter()
        .map(|r| r.total_minutes)
        .fold(0.0_f64, f64::max);

    ranked
        .iter()
        .zip(&labels)
        .map(|(r, label)| {
            let len = if max_total > 0.0 {
                ((r.total_minutes / max_total) * width as f64).round() as usize
            } else {
                0
            };
            let pad = label_width - label.chars().count();
            format!(
                "{}{}  {} {:.1}",
                label,
                " ".repeat(pad),
                "█".repeat(len),
                r.total_minutes
            )
        })
        .collect()
}

pub fn combination_label(r: &CombinationResult) -> String {
    format!("{} • {}", r.equipment, r.route)
}

pub fn print_ranking(ranked: &RankedResultSet) {
    println!("{}", "Combinaciones ordenadas por tiempo total (menor primero):".bold());
    for (i, line) in table_lines(ranked).into_iter().enumerate() {
        match i {
            0 => println!("{}", line.bold()),
            1 => println!("{}", line.green()),
            _ => println!("{line}"),
        }
    }
}

pub fn print_chart(ranked: &RankedResultSet, width: usize) {
    println!();
    println!("{}", "Comparación gráfica".bold());
    for line in chart_lines(ranked, width) {
        println!("{line}");
    }
}

pub fn print_selection(equipment: &str, route: &str, minutes: f64) {
    println!(
        "Tiempo estimado (selección actual: {} + {}): {} minutos",
        equipment,
        route,
        format!("{minutes:.1}").cyan()
    );
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

use haul::export::{best_summary, write_csv, CSV_HEADER};
use haul::fixtures::{generate_random_inputs, generate_random_parameters};
use haul::{evaluate, evaluate_with, quote, HaulError, TimeTable};

fn table(entries: &[(&str, f64)]) -> TimeTable {
    entries.iter().map(|&(n, m)| (n, m)).collect()
}

#[test]
fn result_count_is_product_of_table_sizes() {
    for seed in 0..50 {
        let params = generate_random_inputs(seed);
        let ranked = evaluate_with(&params).unwrap();
        assert_eq!(
            ranked.len(),
            params.load_times.len() * params.transport_times.len()
        );

        // every pair exactly once
        for (equipment, _) in params.load_times.iter() {
            for (route, _) in params.transport_times.iter() {
                let hits = ranked
                    .iter()
                    .filter(|r| r.equipment == equipment && r.route == route)
                    .count();
                assert_eq!(hits, 1);
            }
        }
    }
}

#[test]
fn totals_are_exact_and_sorted() {
    for seed in 0..50 {
        let params = generate_random_inputs(seed);
        let ranked = evaluate_with(&params).unwrap();

        for r in &ranked {
            let load = params.load_times.get(&r.equipment).unwrap();
            let transport = params.transport_times.get(&r.route).unwrap();
            assert_eq!(r.per_trip_minutes, load + transport);
            assert_eq!(r.total_minutes, r.per_trip_minutes * f64::from(params.trips));
            assert!(ranked.best().total_minutes <= r.total_minutes);
        }

        assert!(ranked
            .results()
            .windows(2)
            .all(|w| w[0].total_minutes <= w[1].total_minutes));
    }
}

#[test]
fn evaluation_is_repeatable() {
    let params = generate_random_parameters(11, 5, 8);
    assert_eq!(evaluate_with(&params).unwrap(), evaluate_with(&params).unwrap());
}

#[test]
fn quote_agrees_with_evaluate() {
    let params = generate_random_parameters(42, 6, 9);
    let ranked = evaluate_with(&params).unwrap();

    for r in &ranked {
        let q = quote(
            &params.load_times,
            &params.transport_times,
            params.trips,
            &r.equipment,
            &r.route,
        )
        .unwrap();
        assert_eq!(q, r.total_minutes);
    }
}

#[test]
fn single_combination_scenario() {
    let ranked = evaluate(
        &table(&[("Cargador frontal", 8.0)]),
        &table(&[("Ruta 3", 12.0)]),
        5,
    )
    .unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked.best().total_minutes, 100.0);
    assert_eq!(
        best_summary(ranked.best()),
        "Mejor alternativa: Cargador frontal + Ruta 3 -> 100.0 minutos"
    );
}

#[test]
fn fastest_equipment_is_recommended() {
    let ranked = evaluate(&table(&[("A", 10.0), ("B", 5.0)]), &table(&[("X", 20.0)]), 1).unwrap();

    assert_eq!(ranked.best().equipment, "B");
    assert_eq!(ranked.best().total_minutes, 25.0);
    assert_eq!(ranked.results()[1].equipment, "A");
    assert_eq!(ranked.results()[1].total_minutes, 30.0);
}

#[test]
fn contract_violations() {
    let load = table(&[("A", 1.0)]);
    let transport = table(&[("X", 1.0)]);

    assert!(matches!(
        evaluate(&load, &transport, 0),
        Err(HaulError::InvalidParameter { .. })
    ));
    assert!(matches!(
        evaluate(&TimeTable::new(), &transport, 1),
        Err(HaulError::EmptyInput { .. })
    ));
    assert!(matches!(
        quote(&load, &transport, 1, "Excavadora", "X"),
        Err(HaulError::UnknownKey { .. })
    ));
}

#[test]
fn default_tables_recommend_front_loader_on_route_three() {
    let params = haul::setup::default_parameters();
    let ranked = evaluate_with(&params).unwrap();

    assert_eq!(ranked.len(), 15);
    assert_eq!(ranked.best().equipment, "Cargador frontal");
    assert_eq!(ranked.best().route, "Ruta 3");
    assert_eq!(ranked.best().total_minutes, 100.0);

    let mut buf = Vec::new();
    write_csv(&ranked, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER.join(",").as_str()));
    assert_eq!(lines.next(), Some("Cargador frontal,Ruta 3,20.0,100.0"));
    assert_eq!(lines.count(), 14);
}

#[test]
fn negative_zero_times_report_as_zero() {
    let ranked = evaluate(&table(&[("A", 0.0), ("B", -0.0)]), &table(&[("X", -0.0)]), 1).unwrap();

    assert_eq!(ranked.best().equipment, "A");
    assert_eq!(
        best_summary(ranked.best()),
        "Mejor alternativa: A + X -> 0.0 minutos"
    );
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::{HaulParameters, TieBreak, TimeTable};

/// Largest generated time, in minutes.
const MAX_MINUTES: f64 = 40.0;

/// Random times on the same half-minute grid the parameter inputs use.
fn random_table(rng: &mut ChaCha8Rng, prefix: &str, count: usize) -> TimeTable {
    (1..=count)
        .map(|i| {
            let steps = rng.gen_range(0..=(MAX_MINUTES * 2.0) as u32);
            (format!("{prefix} {i}"), f64::from(steps) * 0.5)
        })
        .collect()
}

/// Seeded random parameters with `equipment` load entries and `routes` transport entries.
pub fn generate_random_parameters(seed: u64, equipment: usize, routes: usize) -> HaulParameters {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let load_times = random_table(&mut rng, "Equipo", equipment);
    let transport_times = random_table(&mut rng, "Ruta", routes);
    let trips = rng.gen_range(1..=50);

    HaulParameters {
        load_times,
        transport_times,
        trips,
        tie_break: TieBreak::InputOrder,
    }
}

/// Same as [`generate_random_parameters`] with table sizes drawn from the seed too.
pub fn generate_random_inputs(seed: u64) -> HaulParameters {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let equipment = rng.gen_range(1..=12);
    let routes = rng.gen_range(1..=20);
    generate_random_parameters(rng.gen(), equipment, routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_tables() {
        assert_eq!(generate_random_inputs(7), generate_random_inputs(7));
    }

    #[test]
    fn sizes_and_grid() {
        let params = generate_random_parameters(3, 4, 6);
        assert_eq!(params.load_times.len(), 4);
        assert_eq!(params.transport_times.len(), 6);
        assert!(params.trips >= 1);
        for (_, minutes) in params.load_times.iter().chain(params.transport_times.iter()) {
            assert!((0.0..=MAX_MINUTES).contains(&minutes));
            assert_eq!((minutes * 2.0).fract(), 0.0);
        }
    }
}

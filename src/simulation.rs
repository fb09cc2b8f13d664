//! Functionality for running the hotel simulation.
use crate::diagnostics::LogDiagnostics;
use crate::hotel::RoomScope;
use crate::model::HotelModel;
use crate::model::parameters::HotelParameters;
use crate::output::{DataWriter, Summary, write_summary};
use anyhow::Result;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// Choose the seed for a run: the one given, else a random one
pub fn choose_seed(seed: Option<u64>) -> u64 {
    // Random seeds must fit in a TOML integer
    seed.unwrap_or_else(|| u64::from(rand::random::<u32>()))
}

/// Run the simulation.
///
/// # Arguments:
///
/// * `parameters` - Validated hotel parameters
/// * `seed` - Seed for generating arrivals
/// * `output_path` - The folder to which output files will be written
/// * `room_details` - Whether to write the occupancy of every room to file
pub fn run(
    parameters: &HotelParameters,
    seed: u64,
    output_path: &Path,
    room_details: bool,
) -> Result<Summary> {
    info!("Random seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = HotelModel::new(parameters, &mut rng, Box::new(LogDiagnostics));
    info!(
        "Generated {} booking requests over {} days",
        model.pending_arrivals(),
        model.modeling_days()
    );

    let mut writer = DataWriter::create(output_path, room_details)?;
    while !model.is_finished() {
        let day = model.current_day();
        model.tick()?;
        if model.current_day() != day {
            info!(
                "Day {}: {} guests served, {} lost",
                model.current_day(),
                model.served_guests(RoomScope::Hotel),
                model.total_lost_clients()
            );
        }

        writer.write_hotel_stats(&model)?;
        writer.write_room_occupancy(&model)?;
    }
    writer.flush()?;

    let summary = Summary::from_model(&model, seed);
    write_summary(output_path, &summary)?;
    for (scope, stats) in &summary.scopes {
        info!(
            "{scope}: booked for {}% of a week, earned {}, {} guests served",
            stats.lifetime_occupancy_percent, stats.earnings, stats.served_guests
        );
    }
    info!(
        "{} guests lost, {}% of requests served",
        summary.total_lost_clients, summary.percent_of_served_clients
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::parameters;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn test_choose_seed() {
        assert_eq!(choose_seed(Some(12)), 12);
        assert!(choose_seed(None) <= u64::from(u32::MAX));
    }

    #[rstest]
    fn test_run(parameters: HotelParameters) {
        let dir = tempdir().unwrap();
        let summary = run(&parameters, 3, dir.path(), true).unwrap();

        assert_eq!(summary.seed, 3);
        assert_eq!(summary.total_ticks, parameters.total_ticks());
        assert_eq!(summary.final_day, parameters.modeling_days);
        assert!(dir.path().join("hotel_stats.csv").is_file());
        assert!(dir.path().join("room_occupancy.csv").is_file());
        assert!(dir.path().join("summary.toml").is_file());
    }

    #[rstest]
    fn test_run_reproducible(parameters: HotelParameters) {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        assert_eq!(
            run(&parameters, 8, first.path(), false).unwrap(),
            run(&parameters, 8, second.path(), false).unwrap()
        );
    }
}

//! Integration tests which run the bundled scenarios through the model.
use hotelsim::diagnostics::NoDiagnostics;
use hotelsim::guest::RoomCategory;
use hotelsim::hotel::RoomScope;
use hotelsim::model::HotelModel;
use hotelsim::model::parameters::HotelParameters;
use hotelsim::units::Money;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Get the path to a bundled scenario.
fn get_model_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[rstest]
#[case("default")]
#[case("overbooked")]
fn test_parameters_from_path(#[case] name: &str) {
    let parameters = HotelParameters::from_path(get_model_dir(name)).unwrap();
    assert!(parameters.seed.is_some());
    assert!(parameters.calendar_days() > parameters.modeling_days);
}

#[rstest]
#[case("default")]
#[case("overbooked")]
fn test_run_scenario(#[case] name: &str) {
    let parameters = HotelParameters::from_path(get_model_dir(name)).unwrap();
    let mut rng = StdRng::seed_from_u64(parameters.seed.unwrap());
    let mut model = HotelModel::new(&parameters, &mut rng, Box::new(NoDiagnostics));
    let requests = model.pending_arrivals() as u32;

    let mut served = 0;
    while !model.is_finished() {
        model.tick().unwrap();

        // Served counts only ever go up
        let now_served = model.served_guests(RoomScope::Hotel);
        assert!(now_served >= served);
        served = now_served;
    }

    assert_eq!(model.pending_arrivals(), 0);
    assert_eq!(model.current_day(), parameters.modeling_days);
    assert!(served + model.total_lost_clients() <= requests);

    // Hotel-wide figures are the sum of the category figures
    let categories = || RoomCategory::iter().map(RoomScope::Category);
    assert_eq!(
        categories().map(|scope| model.served_guests(scope)).sum::<u32>(),
        served
    );
    let earnings: Money = categories().map(|scope| model.total_earnings(scope)).sum();
    assert!((earnings.value() - model.total_earnings(RoomScope::Hotel).value()).abs() < 1e-6);

    // Lifetime occupancy is measured against a week, so a busy run goes over 100
    let most_weeks = (parameters.modeling_days + 1) * 100 / 8;
    for scope in RoomScope::iter() {
        assert!(model.lifetime_occupancy_percent(scope) <= most_weeks);
        assert!(model.weekly_occupancy_percent(scope) <= 100);
    }
}

#[test]
fn test_overbooked_loses_guests() {
    let parameters = HotelParameters::from_path(get_model_dir("overbooked")).unwrap();
    let mut rng = StdRng::seed_from_u64(parameters.seed.unwrap());
    let mut model = HotelModel::new(&parameters, &mut rng, Box::new(NoDiagnostics));
    model.run_to_end().unwrap();

    // There are no luxury rooms to fall back to
    assert_eq!(model.occupancy_strings(RoomCategory::Luxury.into()).len(), 0);
    assert_eq!(model.weekly_occupancy_percent(RoomCategory::Luxury.into()), 0);
    assert!(model.total_lost_clients() > 0);
    assert!(model.percent_of_served_clients() < 100);
}

use assert_approx_eq::assert_approx_eq;
use salescast::data::{FuturePeriod, Observation, ObservationSet};
use salescast::error::ForecastError;
use salescast::forecast::{generate, MIN_FORECAST_PERIODS};
use salescast::model::RegressionModel;

// Fits to sales = leads - 10 exactly.
fn unit_slope_model() -> RegressionModel {
    let mut set = ObservationSet::new();
    set.push(Observation::new("Jan 2023", 11.0, 1.0, 550.0).unwrap());
    set.push(Observation::new("Feb 2023", 12.0, 2.0, 600.0).unwrap());
    RegressionModel::fit(&set).unwrap()
}

#[test]
fn test_generate_rejects_too_few_periods() {
    let model = unit_slope_model();
    let periods = vec![
        FuturePeriod::new("Jul 2023", 220.0),
        FuturePeriod::new("Aug 2023", 230.0),
    ];

    let err = generate(&periods, &model, 50.0).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::InsufficientForecastPoints { needed: 3, got: 2 }
    ));
}

#[test]
fn test_generate_preserves_input_order() {
    let model = unit_slope_model();
    let periods = vec![
        FuturePeriod::new("Sep 2023", 240.0),
        FuturePeriod::new("Jul 2023", 220.0),
        FuturePeriod::new("Aug 2023", 230.0),
        FuturePeriod::new("Oct 2023", 250.0),
    ];

    let forecasts = generate(&periods, &model, 50.0).unwrap();
    let labels: Vec<&str> = forecasts.iter().map(|f| f.period.as_str()).collect();
    assert_eq!(labels, vec!["Sep 2023", "Jul 2023", "Aug 2023", "Oct 2023"]);
}

#[test]
fn test_generate_computes_the_full_record() {
    let model = unit_slope_model();
    let periods = vec![
        FuturePeriod::new("Jul 2023", 220.0),
        FuturePeriod::new("Aug 2023", 230.0),
        FuturePeriod::new("Sep 2023", 240.0),
    ];

    let forecasts = generate(&periods, &model, 50.0).unwrap();
    assert_eq!(forecasts.len(), 3);

    let first = &forecasts[0];
    assert_eq!(first.period, "Jul 2023");
    assert_approx_eq!(first.leads, 220.0);
    assert_approx_eq!(first.sales, 210.0);
    assert_approx_eq!(first.ad_spend, 220.0 * 50.0);
    assert_approx_eq!(first.cpl, 50.0);
    assert_approx_eq!(first.cpa, 220.0 * 50.0 / 210.0);
    assert_approx_eq!(first.conversion_rate, 210.0 / 220.0 * 100.0);
}

#[test]
fn test_generate_accepts_exactly_the_minimum() {
    let model = unit_slope_model();
    let periods: Vec<FuturePeriod> = (0..MIN_FORECAST_PERIODS)
        .map(|i| FuturePeriod::new(format!("Period {}", i), 100.0 + i as f64))
        .collect();

    let forecasts = generate(&periods, &model, 50.0).unwrap();
    assert_eq!(forecasts.len(), MIN_FORECAST_PERIODS);
}

#[test]
fn test_zero_predicted_sales_surfaces_as_non_finite_cpa() {
    let model = unit_slope_model();
    let periods = vec![
        FuturePeriod::new("Jul 2023", 10.0), // predicts exactly 0 sales
        FuturePeriod::new("Aug 2023", 230.0),
        FuturePeriod::new("Sep 2023", 240.0),
    ];

    let forecasts = generate(&periods, &model, 50.0).unwrap();
    let degenerate = &forecasts[0];
    assert_eq!(degenerate.sales, 0.0);
    assert!(degenerate.cpa.is_infinite());
    assert_eq!(degenerate.conversion_rate, 0.0);
}

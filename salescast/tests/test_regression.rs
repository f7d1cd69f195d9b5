use assert_approx_eq::assert_approx_eq;
use rstest::rstest;
use salescast::data::{Observation, ObservationSet};
use salescast::error::ForecastError;
use salescast::model::RegressionModel;

fn observation(period: &str, leads: f64, sales: f64, ad_spend: f64) -> Observation {
    Observation::new(period, leads, sales, ad_spend).unwrap()
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_fit_is_absent_below_two_points(#[case] count: usize) {
    let mut set = ObservationSet::new();
    for i in 0..count {
        set.push(observation("Jan 2023", 100.0 + i as f64, 20.0, 5000.0));
    }

    let err = RegressionModel::fit(&set).unwrap_err();
    assert!(matches!(err, ForecastError::InsufficientData(_)));
}

#[test]
fn test_two_point_fit_is_exact() {
    let mut set = ObservationSet::new();
    set.push(observation("Jan 2023", 105.0, 22.0, 5250.0));
    set.push(observation("Feb 2023", 120.0, 27.0, 6000.0));

    let model = RegressionModel::fit(&set).unwrap();
    assert_approx_eq!(model.slope(), 1.0 / 3.0);
    assert_approx_eq!(model.intercept(), -13.0);
    // Two points always lie exactly on the fitted line.
    assert_approx_eq!(model.r_squared(), 1.0);
}

#[test]
fn test_identical_leads_fall_back_to_zero_slope() {
    let mut set = ObservationSet::new();
    set.push(observation("Jan 2023", 150.0, 10.0, 5000.0));
    set.push(observation("Feb 2023", 150.0, 20.0, 5000.0));
    set.push(observation("Mar 2023", 150.0, 30.0, 5000.0));

    let model = RegressionModel::fit(&set).unwrap();
    assert_eq!(model.slope(), 0.0);
    assert_approx_eq!(model.intercept(), 20.0);
}

#[test]
fn test_identical_sales_yield_non_finite_r_squared() {
    let mut set = ObservationSet::new();
    set.push(observation("Jan 2023", 100.0, 25.0, 5000.0));
    set.push(observation("Feb 2023", 150.0, 25.0, 5000.0));
    set.push(observation("Mar 2023", 200.0, 25.0, 5000.0));

    let model = RegressionModel::fit(&set).unwrap();
    assert!(!model.r_squared().is_finite());
}

#[test]
fn test_predictions_follow_the_fitted_line() {
    let mut set = ObservationSet::new();
    set.push(observation("Jan 2023", 11.0, 1.0, 100.0));
    set.push(observation("Feb 2023", 12.0, 2.0, 100.0));

    let model = RegressionModel::fit(&set).unwrap();
    assert_approx_eq!(model.slope(), 1.0);
    assert_approx_eq!(model.intercept(), -10.0);
    assert_approx_eq!(model.predict_sales(20.0), 10.0);
    assert_approx_eq!(model.required_leads(10.0), 20.0);
}

#[test]
fn test_flat_model_inversion_is_non_finite() {
    let mut set = ObservationSet::new();
    set.push(observation("Jan 2023", 150.0, 10.0, 5000.0));
    set.push(observation("Feb 2023", 150.0, 30.0, 5000.0));

    let model = RegressionModel::fit(&set).unwrap();
    assert_eq!(model.slope(), 0.0);
    assert!(!model.required_leads(40.0).is_finite());
}

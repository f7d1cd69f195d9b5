use assert_approx_eq::assert_approx_eq;
use pretty_assertions::assert_eq;
use salescast::export::{export_forecasts, EXPORT_FILE_NAME};
use salescast::input::{parse_future_period, parse_observation};
use salescast::session::ForecastSession;
use salescast::store::DataStore;
use salescast::utils::next_period_labels;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_full_forecasting_workflow() {
    let mut session = ForecastSession::new();

    // Enter history the way the presentation layer hands it over.
    let first = parse_observation("Jan 2023", "105", "22", "5250").unwrap();
    let second = parse_observation("Feb 2023", "120", "27", "6000").unwrap();
    session.add_observation(first);
    assert!(session.regression().is_none());
    session.add_observation(second);

    let model = session.regression().unwrap();
    assert_approx_eq!(model.slope(), 1.0 / 3.0);
    assert_approx_eq!(model.intercept(), -13.0);

    // Switch to the full reference campaign for planning.
    session.load_sample_data();
    let model = session.regression().unwrap();
    assert!(model.r_squared() >= 0.95 && model.r_squared() <= 1.0);

    let budget_plan = session.forecast_from_budget(10_000.0).unwrap();
    assert_approx_eq!(budget_plan.leads, 200.0);
    assert!(budget_plan.sales.is_finite());

    let sales_plan = session
        .forecast_from_sales_target(budget_plan.sales)
        .unwrap();
    assert_approx_eq!(sales_plan.leads, budget_plan.leads, 1e-6);

    // Plan the next quarter after the history's last month.
    let labels = next_period_labels("Jun 2023", 3).unwrap();
    assert_eq!(labels, vec!["Jul 2023", "Aug 2023", "Sep 2023"]);
    for (label, leads) in labels.iter().zip(["220", "230", "240"]) {
        session.add_future_period(parse_future_period(label, leads).unwrap());
    }

    let generated = session.generate_forecasts().unwrap().to_vec();
    assert_eq!(generated.len(), 3);
    let output_labels: Vec<&str> = generated.iter().map(|f| f.period.as_str()).collect();
    assert_eq!(output_labels, vec!["Jul 2023", "Aug 2023", "Sep 2023"]);

    // Export the generated forecasts.
    let export_dir = tempdir().unwrap();
    let path = export_forecasts(session.forecasts(), export_dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("period,x,y,adSpend,cpl,cpa,conversionRate"));
    assert_eq!(text.lines().count(), 4);

    // Persist and restore the session.
    let store_dir = tempdir().unwrap();
    let store = DataStore::new(store_dir.path()).unwrap();
    session.save(&store).unwrap();

    let restored = ForecastSession::load(&store).unwrap();
    assert_eq!(restored.observations(), session.observations());
    assert_eq!(restored.future_periods(), session.future_periods());
    assert!(restored.regression().is_some());

    // Clearing the store leaves the next load empty.
    store.clear().unwrap();
    let blank = ForecastSession::load(&store).unwrap();
    assert!(blank.observations().is_empty());
    assert!(blank.regression().is_none());
}

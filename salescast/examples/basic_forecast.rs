use salescast::export::export_forecasts;
use salescast::input::parse_future_period;
use salescast::session::ForecastSession;
use salescast::utils::next_period_labels;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Salescast: Basic Forecasting Example");
    println!("====================================\n");

    // Load the reference campaign history
    println!("Loading sample campaign history...");
    let mut session = ForecastSession::new();
    session.load_sample_data();
    println!("Loaded {} observations\n", session.observations().len());

    // Inspect the fitted model
    let model = session.regression().expect("sample data fits a line");
    println!("Fitted lead-to-sales model:");
    println!("  slope:     {:.4}", model.slope());
    println!("  intercept: {:.4}", model.intercept());
    println!("  R-squared: {:.4}\n", model.r_squared());

    // Plan the next quarter after the last observed month
    let last_period = session
        .observations()
        .get(session.observations().len() - 1)
        .expect("history is non-empty")
        .period()
        .to_string();
    println!("Planning the three months after {}...", last_period);

    let labels = next_period_labels(&last_period, 3)?;
    for (label, leads) in labels.iter().zip(["220", "235", "250"]) {
        session.add_future_period(parse_future_period(label, leads)?);
    }

    // Generate and display the forecasts
    let forecasts = session.generate_forecasts()?;
    println!("\n{:<10} {:>8} {:>8} {:>10} {:>8} {:>8}", "Period", "Leads", "Sales", "Ad spend", "CPA", "Conv %");
    for forecast in forecasts {
        println!(
            "{:<10} {:>8.0} {:>8.1} {:>10.0} {:>8.2} {:>8.2}",
            forecast.period,
            forecast.leads,
            forecast.sales,
            forecast.ad_spend,
            forecast.cpa,
            forecast.conversion_rate
        );
    }

    // Export to CSV
    let export_dir = std::env::temp_dir();
    let path = export_forecasts(session.forecasts(), &export_dir)?;
    println!("\nForecasts exported to {}", path.display());

    Ok(())
}

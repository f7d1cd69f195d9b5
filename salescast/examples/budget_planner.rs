use salescast::session::ForecastSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Salescast: Budget Planning Example");
    println!("==================================\n");

    let mut session = ForecastSession::new();
    session.load_sample_data();

    let model = session.regression().expect("sample data fits a line");
    println!(
        "Model over {} observations: sales = {:.4} * leads + {:.4} (R² {:.3})\n",
        session.observations().len(),
        model.slope(),
        model.intercept(),
        model.r_squared()
    );

    // What does a given budget buy?
    for budget in [5_000.0, 10_000.0, 20_000.0] {
        let plan = session.forecast_from_budget(budget)?;
        println!(
            "Budget {:>8.0} -> {:>6.1} leads, {:>5.1} sales (CPL {:.2}, CPA {:.2})",
            plan.budget, plan.leads, plan.sales, plan.cpl, plan.cpa
        );
    }
    println!();

    // What does a given sales target cost?
    for target in [30.0, 40.0, 60.0] {
        let plan = session.forecast_from_sales_target(target)?;
        println!(
            "Target {:>5.0} sales -> {:>6.1} leads, budget {:>9.2} (CPA {:.2})",
            plan.target, plan.leads, plan.budget, plan.cpa
        );
    }

    Ok(())
}

//! Reference data set for demonstrations and tests

use crate::data::Observation;

/// Fixed cost per lead of the reference campaign
const SAMPLE_CPL: f64 = 50.0;

/// Six months of reference campaign history.
///
/// Leads range from 105 to 210 with a near-linear lead-to-sales
/// relationship and ad spend at a fixed cost per lead of 50. Derived
/// metrics are recomputed at construction, as everywhere else.
pub fn sample_observations() -> Vec<Observation> {
    let records = [
        ("Jan 2023", 105.0, 22.0),
        ("Feb 2023", 120.0, 27.0),
        ("Mar 2023", 142.0, 32.0),
        ("Apr 2023", 165.0, 36.0),
        ("May 2023", 180.0, 40.0),
        ("Jun 2023", 210.0, 45.0),
    ];

    records
        .iter()
        .map(|&(period, leads, sales)| {
            Observation::new(period, leads, sales, leads * SAMPLE_CPL)
                .expect("reference data is valid")
        })
        .collect()
}

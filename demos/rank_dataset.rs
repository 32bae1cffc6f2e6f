use std::error::Error;

use log::LevelFilter;

use outrank::algorithms::{Method, RankOptions};
use outrank::core::{DecisionMatrix, Norm};

/// Rank a small car-fleet dataset with all four methods. The three criteria
/// (purchase price in EUR, fuel consumption in l/100km, CO2 emissions in
/// g/km) are all minimised, so the matrix can be used as-is.
///
/// Run with:
///
/// `cargo run --example rank_dataset`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let names = ["City hatch", "Family estate", "Compact SUV", "Plug-in hybrid"];
    let matrix = DecisionMatrix::new(vec![
        vec![18_900.0, 5.6, 128.0],
        vec![27_400.0, 6.3, 142.0],
        vec![31_200.0, 7.8, 169.0],
        vec![36_800.0, 2.1, 48.0],
    ])?;

    let options = RankOptions {
        weights: None,
        norm: Some(Norm::Range),
    };

    for method in [Method::Topsis, Method::Rsm, Method::SpCs, Method::UtaDis] {
        let ranking = method.rank(&matrix, options.clone())?;

        println!("{method}:");
        for entry in &ranking {
            println!("  {:<15} {:.4}", names[entry.index], entry.score);
        }

        // the serialised form handed to a presentation layer
        println!("  as JSON: {}\n", serde_json::to_string(&ranking)?);
    }

    Ok(())
}

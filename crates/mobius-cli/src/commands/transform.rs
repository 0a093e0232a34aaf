use super::format_point;
use crate::cli::TransformArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::parser;
use tracing::{info, warn};

pub fn run(args: TransformArgs) -> Result<()> {
    let app = build_config(&args.params)?;
    let transform = app.transform.transform();
    info!(
        "Transforming {} point(s) with zoom {} ({} policy).",
        args.points.len(),
        transform.zoom,
        transform.policy
    );

    let points = args
        .points
        .iter()
        .map(|text| parser::parse_point3(text).map_err(|e| CliError::Argument(e.to_string())))
        .collect::<Result<Vec<_>>>()?;

    for point in &points {
        match transform.try_apply(point) {
            Ok(mapped) => println!("{}", format_point(&mapped, app.output.precision)),
            Err(e) => {
                warn!("Point {:?} fell back to the transform center: {}", point, e);
                println!(
                    "{}  # {}",
                    format_point(&transform.apply(point), app.output.precision),
                    e
                );
            }
        }
    }
    Ok(())
}

use crate::cli::FitCircleArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::parser;
use mobiusview::core::shapes::{CircleFit, CircleShape, CircumcircleError};
use mobiusview::engine::selection::CircleView;
use tracing::info;

fn describe(
    step: usize,
    fit: std::result::Result<CircleFit, CircumcircleError>,
    precision: usize,
) -> String {
    match fit {
        Ok(fit) => format!(
            "step {}: center = ({:.prec$}, {:.prec$}), radius = {:.prec$}",
            step,
            fit.center.x,
            fit.center.y,
            fit.radius,
            prec = precision
        ),
        Err(e) => format!("step {}: no circle recovered ({})", step, e),
    }
}

pub fn run(args: FitCircleArgs) -> Result<()> {
    let app = build_config(&args.params)?;
    let center = parser::parse_point2(&args.circle_center)
        .map_err(|e| CliError::Argument(e.to_string()))?;
    if !(args.radius.is_finite() && args.radius >= 0.0) {
        return Err(CliError::Argument(format!(
            "Circle radius must be finite and non-negative, got {}",
            args.radius
        )));
    }

    let transform = app.transform.transform();
    let precision = app.output.precision;
    let mut view = CircleView::new(CircleShape::new(
        center,
        args.radius,
        app.output.circle_segments,
    ));
    info!(
        "Fitting circle of radius {} with {} segments.",
        args.radius, app.output.circle_segments
    );

    println!("{}", describe(0, view.fit(&transform), precision));
    for step in 1..=args.zoom_steps {
        if view.zoom_in(&transform).is_none() {
            println!("step {}: circle is degenerate, stopping", step);
            break;
        }
        println!("{}", describe(step, view.fit(&transform), precision));
    }
    Ok(())
}

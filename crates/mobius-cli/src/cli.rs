use clap::{Args, Parser, Subcommand};
use mobiusview::core::transform::ScalingPolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "MobiusView Contributors",
    version,
    about = "MobiusView CLI - Apply a conformal Möbius zoom to circles, spheres, planes and molecules, and export the result as CSV.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform every shape and the molecule of a scene file and write CSV tables.
    Render(RenderArgs),
    /// Transform individual points given on the command line.
    Transform(TransformArgs),
    /// Transform a circle and recover the circle through its image.
    FitCircle(FitCircleArgs),
}

/// Transform parameters shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct TransformParams {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the zoom parameter L.
    #[arg(short, long, value_name = "FLOAT", allow_hyphen_values = true)]
    pub zoom: Option<f64>,

    /// Override the transform center, given as 'x,y,z'.
    #[arg(long, value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub center: Option<String>,

    /// Override the scaling policy (linear, exponential, distance-weighted).
    #[arg(short, long, value_name = "POLICY")]
    pub policy: Option<ScalingPolicy>,

    /// Override the segment count of every sampled shape (plane resolution included).
    #[arg(long, value_name = "INT")]
    pub segments: Option<u32>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S transform.zoom=1.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the scene description in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory the CSV tables are written to. Created if missing.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,

    /// Center the transform on the atom with this index, slightly offset so
    /// the atom itself stays finite.
    #[arg(long, value_name = "INDEX", conflicts_with = "center")]
    pub pick_atom: Option<usize>,

    #[command(flatten)]
    pub params: TransformParams,
}

/// Arguments for the `transform` subcommand.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Points to transform, each given as 'x,y,z'. Options go before the
    /// points.
    #[arg(required = true, value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub points: Vec<String>,

    #[command(flatten)]
    pub params: TransformParams,
}

/// Arguments for the `fit-circle` subcommand.
#[derive(Args, Debug)]
pub struct FitCircleArgs {
    /// Center of the source circle, given as 'x,y'.
    #[arg(long, value_name = "X,Y", default_value = "0,0", allow_hyphen_values = true)]
    pub circle_center: String,

    /// Radius of the source circle.
    #[arg(short, long, value_name = "FLOAT", default_value_t = 1.0)]
    pub radius: f64,

    /// Repeatedly replace the circle by its recovered image this many times.
    #[arg(long, value_name = "INT", default_value_t = 0)]
    pub zoom_steps: usize,

    #[command(flatten)]
    pub params: TransformParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_arguments_parse() {
        let cli = Cli::parse_from([
            "mobius", "-vv", "render", "-i", "scene.toml", "-o", "out", "--zoom", "-1.5",
            "--policy", "linear",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.input, PathBuf::from("scene.toml"));
                assert_eq!(args.params.zoom, Some(-1.5));
                assert_eq!(args.params.policy, Some(ScalingPolicy::Linear));
            }
            other => panic!("Expected 'render' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn transform_accepts_negative_coordinates() {
        let cli = Cli::parse_from([
            "mobius", "transform", "--center", "0,0,-1", "-1,0,0", "2,-3,0.5",
        ]);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.points, ["-1,0,0", "2,-3,0.5"]);
                assert_eq!(args.params.center.as_deref(), Some("0,0,-1"));
            }
            other => panic!("Expected 'transform' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn pick_atom_conflicts_with_center() {
        let result = Cli::try_parse_from([
            "mobius", "render", "-i", "s.toml", "-o", "out", "--pick-atom", "0", "--center",
            "1,0,0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = Cli::try_parse_from(["mobius", "fit-circle", "--policy", "cubic"]);
        assert!(result.is_err());
    }
}

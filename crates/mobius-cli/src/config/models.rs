use mobiusview::engine::config::TransformConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputConfig {
    /// Replaces the segment count of every sampled shape when set.
    pub segments: Option<u32>,
    /// Segment count for circles sampled from the command line.
    pub circle_segments: u32,
    /// Decimal places for coordinates printed to stdout.
    pub precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub transform: TransformConfig,
    pub output: OutputConfig,
}

use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub checker: CheckerParams,
    #[command(flatten)]
    pub ruling: RulingParams,
}

/// Deviation thresholds, in whatever coordinate frame the checker is fed.
/// Contract: `suboptimal_distance < bad_distance`.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerParams {
    #[arg(long, default_value_t = 5.0)]
    pub suboptimal_distance: f32,

    #[arg(long, default_value_t = 12.0)]
    pub bad_distance: f32,
}

impl Default for CheckerParams {
    fn default() -> Self {
        Self {
            suboptimal_distance: 5.0,
            bad_distance: 12.0,
        }
    }
}

/// Placement of the ruling on the canvas. The origin is the left end of the
/// under line; the guide lines extend `width` pixels to the right.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RulingParams {
    #[arg(long, default_value_t = 20.0)]
    pub ruling_x: f32,

    #[arg(long, default_value_t = 420.0)]
    pub ruling_y: f32,

    #[arg(long, default_value_t = 760.0)]
    pub ruling_width: f32,

    #[arg(long, default_value_t = 150.0)]
    pub scale: f32,

    #[arg(long, default_value_t = 4)]
    pub line_count: usize,
}

impl Default for RulingParams {
    fn default() -> Self {
        Self {
            ruling_x: 20.0,
            ruling_y: 420.0,
            ruling_width: 760.0,
            scale: 150.0,
            line_count: 4,
        }
    }
}

use {
    crate::types::Pixel,
    anyhow::Context as _,
    serde::{Deserialize, Serialize},
    std::path::{Path, PathBuf},
};

/// Near-white background of the playing field.
pub const FIELD_COLOR: Pixel = Pixel::from_rgb(0xfb, 0xf9, 0xf6);
/// The ball.
pub const BALL_COLOR: Pixel = Pixel::from_rgb(0x2c, 0x3d, 0x51);

/// Tuning of a play session. Every field has a default, so a config file
/// only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub field_color: Pixel,
    pub ball_color: Pixel,
    /// Minimum number of frames between two dispatched fire actions.
    pub deadzone_frames: u64,
    /// Seconds without a moving (or any) ball before the session stops.
    pub timeout_secs: i64,
    /// Distance in pixels from the ball box to the surroundedness probes.
    pub probe_margin: u32,
    /// A ball box must be strictly larger than this on both axes.
    pub min_ball_size: i32,
    /// Field sides must exceed this many ball widths.
    pub field_units: i32,
    /// Where the raster is dumped when no ball can be found at startup.
    pub proof_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            field_color: FIELD_COLOR,
            ball_color: BALL_COLOR,
            deadzone_frames: 1,
            timeout_secs: 2,
            probe_margin: 3,
            min_ball_size: 4,
            field_units: 10,
            proof_path: PathBuf::from("no-ball-proof.png"),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs_err::read(path)?;
        serde_json::from_slice(&data)
            .with_context(|| format!("failed to parse config file {:?}", path.display()))
    }

    pub fn with_field_color(mut self, color: Pixel) -> Self {
        self.field_color = color;
        self
    }

    pub fn with_ball_color(mut self, color: Pixel) -> Self {
        self.ball_color = color;
        self
    }

    pub fn with_deadzone_frames(mut self, frames: u64) -> Self {
        self.deadzone_frames = frames;
        self
    }

    pub fn with_timeout_secs(mut self, secs: i64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_probe_margin(mut self, margin: u32) -> Self {
        self.probe_margin = margin;
        self
    }

    pub fn with_proof_path(mut self, path: PathBuf) -> Self {
        self.proof_path = path;
        self
    }
}

mod session;

use {
    anyhow::Context as _,
    clap::{Parser, Subcommand},
    looptap::{GameConfig, Pixel},
    std::{path::PathBuf, time::Duration},
    tracing_subscriber::{filter::LevelFilter, EnvFilter},
};

#[derive(Parser)]
pub struct Args {
    /// JSON file with game settings. Flags below override it.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Minimum number of frames between two fire actions.
    #[clap(long, global = true)]
    pub deadzone_frames: Option<u64>,
    /// Sleep between frames, in milliseconds.
    #[clap(long, global = true, default_value_t = 1)]
    pub interval_ms: u64,
    /// Background color of the playing field, as `#rrggbb`.
    #[clap(long, global = true)]
    pub field_color: Option<Pixel>,
    /// Color of the ball, as `#rrggbb`.
    #[clap(long, global = true)]
    pub ball_color: Option<Pixel>,
    /// Where to save the screenshot if no ball is found at startup.
    #[clap(long, global = true)]
    pub proof_path: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play on the live screen.
    Play,
    /// Run the player over a directory of PNG frames.
    Replay {
        dir: PathBuf,
        /// Print stats as JSON.
        #[clap(long)]
        json: bool,
        /// Simulated seconds between two frames.
        #[clap(long, default_value_t = 0)]
        secs_per_frame: i64,
    },
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("failed to load config from {:?}", path.display()))?,
            None => GameConfig::new(),
        };
        if let Some(frames) = self.deadzone_frames {
            config = config.with_deadzone_frames(frames);
        }
        if let Some(color) = self.field_color {
            config = config.with_field_color(color);
        }
        if let Some(color) = self.ball_color {
            config = config.with_ball_color(color);
        }
        if let Some(path) = &self.proof_path {
            config = config.with_proof_path(path.clone());
        }
        Ok(config)
    }
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env()?,
        )
        .init();

    let config = args.game_config()?;
    let interval = Duration::from_millis(args.interval_ms);
    match args.command {
        Command::Play => session::play(config, interval),
        Command::Replay {
            dir,
            json,
            secs_per_frame,
        } => {
            let stats = session::replay(config, &dir, secs_per_frame)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{stats:?}");
            }
            Ok(())
        }
    }
}

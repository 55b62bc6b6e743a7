use {
    anyhow::Context as _,
    looptap::{Game, GameConfig, GameFrame, GameStats, ImageFrame, ManualClock, RecordingControls},
    looptap_desktop::{Context, DesktopControls, ScreenFrame},
    std::{path::Path, thread, time::Duration},
    tracing::info,
};

pub fn play(config: GameConfig, interval: Duration) -> anyhow::Result<()> {
    let context = Context::new().context("failed to open the desktop")?;
    let mut screen = ScreenFrame::new(context.clone())?;
    let mut controls = DesktopControls::new(context);
    let mut game = Game::new(config, screen.size());

    while game.step(&mut screen, &mut controls) {
        thread::sleep(interval);
    }
    info!("session over: {:?}", game.stats());
    Ok(())
}

pub fn replay(config: GameConfig, dir: &Path, secs_per_frame: i64) -> anyhow::Result<GameStats> {
    let mut frames = ImageFrame::load_dir(dir)?;
    let mut controls = RecordingControls::new();
    let clock = ManualClock::new(0);
    let mut game = Game::with_clock(config, frames.size(), clock.clone());

    loop {
        let keep_playing = game.step(&mut frames, &mut controls);
        clock.advance(secs_per_frame);
        if !keep_playing || frames.remaining() == 0 {
            break;
        }
    }
    info!(
        "replayed {} frames, {} control events",
        game.frame_count(),
        controls.events().len()
    );
    info!("session over: {:?}", game.stats());
    Ok(game.stats().clone())
}

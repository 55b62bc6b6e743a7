use {
    crate::{
        ball::{is_ball_surrounded, BallDetector, Via},
        clock::{Clock, SystemClock},
        config::GameConfig,
        field::{Absorb, FieldCalibration},
        fire::FirePolicy,
        frame::{GameControls, GameFrame},
        types::{Rect, Size},
    },
    serde::Serialize,
    tracing::{debug, error, info},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The playing field is not known yet.
    Bootstrap,
    Active,
    /// Terminal.
    Stopped,
}

/// Counters for one play session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub frames: u64,
    pub fires: u64,
    pub ignored_fires: u64,
    pub field: Option<Rect>,
}

/// State of one play session. Call [`Game::step`] once per frame until it
/// returns false.
pub struct Game<C = SystemClock> {
    config: GameConfig,
    screen: Size,
    clock: C,
    detector: BallDetector,
    calibration: FieldCalibration,
    fire_policy: FirePolicy,
    phase: Phase,
    ball: Rect,
    frame_count: u64,
    last_seen: i64,
    last_moved: i64,
    has_fired: bool,
    stats: GameStats,
}

impl Game<SystemClock> {
    pub fn new(config: GameConfig, screen: Size) -> Self {
        Self::with_clock(config, screen, SystemClock)
    }
}

impl<C: Clock> Game<C> {
    pub fn with_clock(config: GameConfig, screen: Size, clock: C) -> Self {
        let now = clock.now_secs();
        Self {
            detector: BallDetector::new(config.ball_color, config.min_ball_size, screen),
            calibration: FieldCalibration::new(config.min_ball_size, config.field_units),
            fire_policy: FirePolicy::new(config.deadzone_frames),
            config,
            screen,
            clock,
            phase: Phase::Bootstrap,
            ball: Rect::default(),
            frame_count: 0,
            last_seen: now,
            last_moved: now,
            has_fired: false,
            stats: GameStats::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ball(&self) -> Rect {
        self.ball
    }

    pub fn field(&self) -> Option<Rect> {
        self.calibration.field()
    }

    pub fn have_field(&self) -> bool {
        self.calibration.have_field(self.ball)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Processes one frame. Returns false once the session is over.
    pub fn step<F, K>(&mut self, frame: &mut F, controls: &mut K) -> bool
    where
        F: GameFrame + ?Sized,
        K: GameControls + ?Sized,
    {
        let keep_playing = match self.phase {
            Phase::Bootstrap => self.calibrate(frame, controls),
            Phase::Active => self.play(frame, controls),
            Phase::Stopped => false,
        };
        if !keep_playing {
            self.phase = Phase::Stopped;
        }

        self.frame_count += 1;
        self.stats.frames = self.frame_count;
        keep_playing
    }

    /// Locates the ball in `zone` and records the sighting.
    fn find_ball<F: GameFrame + ?Sized>(&mut self, frame: &F, zone: Rect) -> Option<Rect> {
        let sighting = self.detector.locate(frame, self.ball, zone)?;
        let now = self.clock.now_secs();
        if sighting.rect != self.ball {
            if sighting.via == Via::Scanned {
                debug!(frame = self.frame_count, ball = %sighting.rect, "ball new");
            }
            self.last_moved = now;
        }
        self.ball = sighting.rect;
        self.last_seen = now;
        Some(sighting.rect)
    }

    fn calibrate<F, K>(&mut self, frame: &mut F, controls: &mut K) -> bool
    where
        F: GameFrame + ?Sized,
        K: GameControls + ?Sized,
    {
        frame.next();

        // The field is unknown, so the whole screen is searched.
        let Some(ball) = self.find_ball(&*frame, Rect::from_size(self.screen)) else {
            if self.calibration.field().is_none() {
                error!(
                    "no ball found: proof saved to {:?}",
                    self.config.proof_path.display()
                );
                frame.save_png(&self.config.proof_path);
                return false;
            }
            return true;
        };

        let absorbed = self.calibration.absorb(ball);
        if absorbed == Absorb::Unchanged && self.calibration.field() == Some(ball) {
            // The ball has not moved since the first sighting: start screen.
            controls.focus(ball.center_x(), ball.center_y());
            controls.fire();
            self.calibration.expand(self.screen);
            info!(frame = self.frame_count, "game started");
        } else if self.calibration.have_field(ball) {
            self.calibration.add_safety_margin(ball.width(), self.screen);
            if let Some(field) = self.calibration.field() {
                // Keep the pointer from covering the field.
                controls.move_pointer(field.x1, field.y1);
                info!(frame = self.frame_count, %field, "game field");
                self.stats.field = Some(field);
            }
            self.phase = Phase::Active;
        }
        true
    }

    fn play<F, K>(&mut self, frame: &mut F, controls: &mut K) -> bool
    where
        F: GameFrame + ?Sized,
        K: GameControls + ?Sized,
    {
        frame.next();

        let zone = self
            .calibration
            .field()
            .unwrap_or_else(|| Rect::from_size(self.screen));
        let Some(ball) = self.find_ball(&*frame, zone) else {
            let keep_playing = self.clock.now_secs() - self.last_seen < self.config.timeout_secs;
            if !keep_playing {
                info!(frame = self.frame_count, "ball lost, game stopped");
            }
            return keep_playing;
        };

        let surrounded = is_ball_surrounded(
            &*frame,
            ball,
            self.config.field_color,
            self.config.probe_margin,
            self.screen,
        );
        if surrounded {
            if !self.has_fired {
                self.has_fired = self.fire(controls);
            }
        } else {
            self.has_fired = false;
        }

        let keep_playing = self.clock.now_secs() - self.last_moved < self.config.timeout_secs;
        if !keep_playing {
            info!(frame = self.frame_count, "game stopped");
        }
        keep_playing
    }

    fn fire<K: GameControls + ?Sized>(&mut self, controls: &mut K) -> bool {
        let ignored = self.fire_policy.ignored();
        if !self.fire_policy.try_fire(self.frame_count) {
            self.stats.ignored_fires += 1;
            return false;
        }
        controls.fire();
        self.stats.fires += 1;
        info!("[{}] (ign. {}) FIRE!", self.frame_count, ignored);
        true
    }
}

/// Debounce for fire actions: at least `deadzone_frames` frames must pass
/// between two dispatches. Suppressed attempts are only counted.
#[derive(Debug, Clone, Default)]
pub struct FirePolicy {
    deadzone_frames: u64,
    last_fire: Option<u64>,
    ignored: u32,
}

impl FirePolicy {
    pub fn new(deadzone_frames: u64) -> Self {
        Self {
            deadzone_frames,
            last_fire: None,
            ignored: 0,
        }
    }

    /// Returns true if the fire action should be dispatched on `frame`.
    pub fn try_fire(&mut self, frame: u64) -> bool {
        let ready = self
            .last_fire
            .is_none_or(|last| frame.saturating_sub(last) >= self.deadzone_frames);
        if ready {
            self.ignored = 0;
            self.last_fire = Some(frame);
        } else {
            self.ignored += 1;
        }
        ready
    }

    /// Attempts suppressed since the last dispatch.
    pub fn ignored(&self) -> u32 {
        self.ignored
    }
}

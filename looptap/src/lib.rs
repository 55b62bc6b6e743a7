//! Perception and decision core of an automated Loop Tap player.
//!
//! The game shows a ball circling over a near-white field. [`Game`] tracks the
//! ball frame by frame and presses the activate key once the ball is no
//! longer surrounded by field background. Screen capture and input injection
//! are supplied by the caller through [`GameFrame`] and [`GameControls`].

pub mod ball;
pub mod clock;
pub mod config;
pub mod field;
pub mod fire;
pub mod frame;
pub mod game;
pub mod raster;
pub mod region;
pub mod types;

#[cfg(test)]
mod test_util;

pub use crate::{
    clock::{Clock, ManualClock, SystemClock},
    config::GameConfig,
    frame::{GameControls, GameFrame},
    game::{Game, GameStats, Phase},
    raster::{ControlEvent, ImageFrame, RecordingControls},
    types::{Pixel, Rect, Size},
};

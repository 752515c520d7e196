//! skydash — a terminal dodge-and-boost arcade game.
//!
//! The player steers a ship over a parallax-scrolling backdrop while a
//! stream of enemies drifts in from the right edge.  Difficulty ramps up
//! over time by raising the number of simultaneously live enemies.
//!
//! The library holds the whole simulation so integration tests can drive
//! it headlessly; the binary only adds terminal plumbing on top.

pub mod assets;
pub mod background;
pub mod clock;
pub mod display;
pub mod engine;
pub mod entities;
pub mod input;
pub mod light;

/// Target simulation and presentation rate, frames per second.
pub const FRAME_RATE: u32 = 30;

/// Player movement speed at startup, cells per frame.
pub const DEFAULT_SPEED: i32 = 2;

/// Upper bound for the runtime-adjustable movement speed.
pub const SPEED_MAX: i32 = 10;

/// Live-enemy quota at startup.
pub const DEFAULT_ENEMIES: usize = 10;

/// Seconds of collision-free play between difficulty increases.
pub const INCREASE_TIME: u32 = 5;

/// Leftward enemy drift, cells per frame.
pub const ENEMY_SPEED: i32 = 2;

/// Cells the player is knocked back on a collision.
pub const COLLISION_PENALTY: i32 = 2;

/// Cells the player is nudged forward on each difficulty increase.
pub const PROGRESS_BONUS: i32 = 2;

/// Base horizontal scroll velocity for the backdrop (negative = leftward).
pub const BACKGROUND_SCROLL: i32 = -2;

//! The per-frame engine — spawn, input, movement, collision, difficulty.
//!
//! `Game` owns the player, the live-enemy set and the backdrop; the
//! image store, RNG and canvas are borrowed capabilities passed into
//! every step.  One `step` call is one fixed-rate simulation frame.

use log::{debug, info};
use rand::Rng;

use crate::assets::ImageStore;
use crate::background::ParallaxBackground;
use crate::display::Canvas;
use crate::entities::{Enemy, Player};
use crate::input::Intent;
use crate::{
    BACKGROUND_SCROLL, COLLISION_PENALTY, DEFAULT_ENEMIES, FRAME_RATE, INCREASE_TIME,
    PROGRESS_BONUS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

pub struct Game {
    pub player: Player,
    /// Live enemies; order carries no meaning.
    pub enemies: Vec<Enemy>,
    pub background: ParallaxBackground,
    /// Target number of simultaneously live enemies.
    pub enemy_quota: usize,
    /// Frames since the last collision or difficulty increase.
    pub progress_timer: u32,
    pub status: Status,
}

impl Game {
    /// Board dimensions come from the canvas and stay fixed for the
    /// session.
    pub fn new(store: &mut ImageStore, board: (i32, i32)) -> Game {
        let (_, board_h) = board;
        Game {
            player: Player::new(store, 10, board_h / 2),
            enemies: Vec::new(),
            background: ParallaxBackground::new(&["far", "near"], store, BACKGROUND_SCROLL, 0),
            enemy_quota: DEFAULT_ENEMIES,
            progress_timer: 0,
            status: Status::Running,
        }
    }

    /// Advance the simulation by one frame.  `intents` is everything the
    /// input layer drained this frame — zero or many, all consumed.
    pub fn step(
        &mut self,
        intents: &[Intent],
        store: &mut ImageStore,
        rng: &mut impl Rng,
        canvas: &mut dyn Canvas,
    ) {
        if self.status == Status::Running {
            self.simulate(intents, store, rng, canvas);
        } else if self.status == Status::Paused {
            // Frozen, but key releases must still land or movement keys
            // would stick across the resume.  Everything else waits.
            for intent in intents {
                if matches!(intent, Intent::Stop(_) | Intent::BoostUp) {
                    self.player.apply_intent(*intent);
                }
            }
        }

        // Loop control last, matching the frame order: the presented
        // frame reflects this step's simulation either way.
        for intent in intents {
            match intent {
                Intent::Quit => {
                    info!("quit requested");
                    self.status = Status::GameOver;
                }
                Intent::Pause if self.status == Status::Running => {
                    info!("paused");
                    self.status = Status::Paused;
                }
                Intent::Pause if self.status == Status::Paused => {
                    info!("resumed");
                    self.status = Status::Running;
                }
                _ => {}
            }
        }
    }

    fn simulate(
        &mut self,
        intents: &[Intent],
        store: &mut ImageStore,
        rng: &mut impl Rng,
        canvas: &mut dyn Canvas,
    ) {
        let board = canvas.size();

        // 1–2. Fresh frame, backdrop first so sprites draw over it.
        canvas.clear();
        self.background.update(canvas);

        // 3. Refill toward the quota, one enemy per frame.
        if self.enemies.len() < self.enemy_quota {
            self.enemies.push(Enemy::spawn("manta", store, board, rng));
        }

        // 4. Input, then the player's clamped move-and-draw.
        for intent in intents {
            self.player.apply_intent(*intent);
        }
        self.player.update(canvas);

        // 5–6. Cull the ones that finished crossing, drift the rest.
        self.enemies.retain(|e| !e.is_gone());
        for enemy in &mut self.enemies {
            enemy.update(canvas);
        }

        // 7. Collision: every overlapping enemy is consumed this frame.
        let before = self.enemies.len();
        let player = &self.player.entity;
        self.enemies.retain(|e| !e.entity.overlaps(player));
        let collided = self.enemies.len() < before;
        if collided {
            debug!("ouch: {} enemies consumed", before - self.enemies.len());
            self.player.nudge_x(-COLLISION_PENALTY, board.0);
            self.progress_timer = 0;
        }

        // 8. Difficulty: a full collision-free interval raises the quota
        //    and rewards the player with a small forward nudge.  A
        //    collision frame leaves the timer at zero.
        if !collided {
            self.progress_timer += 1;
            if self.progress_timer > INCREASE_TIME * FRAME_RATE {
                self.progress_timer = 0;
                self.player.nudge_x(PROGRESS_BONUS, board.0);
                self.enemy_quota += 1;
                info!("enemy quota raised to {}", self.enemy_quota);
            }
        }
    }
}

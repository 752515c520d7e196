//! Game entities — the base movable sprite and its two specializations.
//!
//! `Entity` carries position, velocity and the resolved image; `Player`
//! adds input-driven velocity, boundary clamping and the mirror draw;
//! `Enemy` adds right-edge spawning and the off-screen despawn signal.

use std::rc::Rc;

use rand::Rng;

use crate::assets::{Image, ImageStore};
use crate::display::Canvas;
use crate::input::{Axis, Direction, Intent};
use crate::{DEFAULT_SPEED, ENEMY_SPEED, SPEED_MAX};

// ── Entity ────────────────────────────────────────────────────────────────────

/// Any movable, drawable game object.  `size` is fixed at construction
/// from the resolved image and never changes.
#[derive(Clone, Debug)]
pub struct Entity {
    /// Image-store key this entity was resolved from.
    pub kind: String,
    pub x: i32,
    pub y: i32,
    /// Velocity in cells per frame.
    pub x_vel: i32,
    pub y_vel: i32,
    pub width: i32,
    pub height: i32,
    image: Option<Rc<Image>>,
}

impl Entity {
    /// Resolve `kind` through the store.  A missing image degrades to a
    /// 1×1 invisible entity; the store has already logged the miss.
    pub fn new(kind: &str, store: &mut ImageStore, x: i32, y: i32) -> Entity {
        let image = store.get(kind);
        let (width, height) = image
            .as_ref()
            .map(|img| (img.width, img.height))
            .unwrap_or((1, 1));
        Entity {
            kind: kind.to_string(),
            x,
            y,
            x_vel: 0,
            y_vel: 0,
            width,
            height,
            image,
        }
    }

    /// Draw at an explicit position (mirror copies, background tiling).
    pub fn display(&self, canvas: &mut dyn Canvas, x: i32, y: i32) {
        if let Some(image) = &self.image {
            canvas.blit(image, x, y);
        }
    }

    /// Advance by one frame of velocity, then draw at the new position.
    /// No bounds checking at this level.
    pub fn update(&mut self, canvas: &mut dyn Canvas) {
        self.x += self.x_vel;
        self.y += self.y_vel;
        self.display(canvas, self.x, self.y);
    }

    /// Whether the store resolved an image for this entity.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Axis-aligned bounding-rectangle overlap test.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub entity: Entity,
    /// Cells per frame for input-driven movement, adjustable in
    /// `[1, SPEED_MAX]`.
    pub movement_speed: i32,
    /// When set, a second copy is drawn reflected about the board's
    /// horizontal midline.
    pub mirror_enabled: bool,
}

impl Player {
    pub fn new(store: &mut ImageStore, x: i32, y: i32) -> Player {
        let mut entity = Entity::new("player/default", store, x, y);
        // The ship falls until boost is held.
        entity.y_vel = DEFAULT_SPEED;
        Player {
            entity,
            movement_speed: DEFAULT_SPEED,
            mirror_enabled: false,
        }
    }

    /// Consume one discrete input event.  Loop-control intents (quit,
    /// pause) belong to the engine and are ignored here.
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Move(Direction::Left) => self.entity.x_vel = -self.movement_speed,
            Intent::Move(Direction::Right) => self.entity.x_vel = self.movement_speed,
            Intent::Move(Direction::Up) => self.entity.y_vel = -self.movement_speed,
            Intent::Move(Direction::Down) => self.entity.y_vel = self.movement_speed,
            Intent::Stop(Axis::Horizontal) => self.entity.x_vel = 0,
            Intent::Stop(Axis::Vertical) => self.entity.y_vel = 0,
            Intent::BoostDown => self.entity.y_vel = -self.movement_speed,
            Intent::BoostUp => self.entity.y_vel = self.movement_speed,
            Intent::SpeedDown => self.movement_speed = (self.movement_speed - 1).max(1),
            Intent::SpeedUp => self.movement_speed = (self.movement_speed + 1).min(SPEED_MAX),
            Intent::MirrorToggle => self.mirror_enabled = !self.mirror_enabled,
            Intent::Quit | Intent::Pause => {}
        }
    }

    /// Predictive clamp, then the base update.  If the next position
    /// would leave the board on an axis, the position snaps to the
    /// boundary and that axis's velocity is zeroed, so pressure against
    /// a wall cannot accumulate drift.
    pub fn update(&mut self, canvas: &mut dyn Canvas) {
        let (board_w, board_h) = canvas.size();
        let e = &mut self.entity;

        if e.x + e.x_vel > board_w - e.width {
            e.x = board_w - e.width;
            e.x_vel = 0;
        } else if e.x + e.x_vel < 0 {
            e.x = 0;
            e.x_vel = 0;
        }
        if e.y + e.y_vel > board_h - e.height {
            e.y = board_h - e.height;
            e.y_vel = 0;
        } else if e.y + e.y_vel < 0 {
            e.y = 0;
            e.y_vel = 0;
        }

        e.update(canvas);

        if self.mirror_enabled {
            let half = board_h / 2;
            let mirror_y = half - (self.entity.y - half) - self.entity.height;
            self.entity.display(canvas, self.entity.x, mirror_y);
        }
    }

    /// Horizontal nudge (collision penalty, progress bonus), re-clamped
    /// immediately so the on-board invariant holds every frame.
    pub fn nudge_x(&mut self, delta: i32, board_w: i32) {
        let e = &mut self.entity;
        e.x = (e.x + delta).clamp(0, board_w - e.width);
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub entity: Entity,
}

impl Enemy {
    /// Spawn off the right edge at a random height, drifting left at the
    /// fixed enemy speed.
    pub fn spawn(
        kind: &str,
        store: &mut ImageStore,
        board: (i32, i32),
        rng: &mut impl Rng,
    ) -> Enemy {
        let (board_w, board_h) = board;
        let x = board_w + rng.gen_range(0..=board_w);
        let mut entity = Entity::new(&format!("enemy/{kind}"), store, x, 0);
        entity.y = rng.gen_range(0..=(board_h - entity.height).max(0));
        entity.x_vel = -ENEMY_SPEED;
        Enemy { entity }
    }

    /// Plain drift; leaving the board is intentional and is the despawn
    /// signal.
    pub fn update(&mut self, canvas: &mut dyn Canvas) {
        self.entity.update(canvas);
    }

    /// Fully off the left edge — ready to be culled.
    pub fn is_gone(&self) -> bool {
        self.entity.x < -self.entity.width
    }
}

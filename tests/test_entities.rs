mod common;

use common::{builtin_store, TestCanvas};

use rand::rngs::StdRng;
use rand::SeedableRng;

use skydash::entities::{Enemy, Entity, Player};
use skydash::input::{Axis, Direction, Intent};
use skydash::{DEFAULT_SPEED, ENEMY_SPEED, SPEED_MAX};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Entity ────────────────────────────────────────────────────────────────────

#[test]
fn entity_size_comes_from_image() {
    let mut store = builtin_store();
    let e = Entity::new("enemy/manta", &mut store, 0, 0);
    assert!(e.width > 0);
    assert!(e.height > 0);
}

#[test]
fn entity_update_advances_then_draws() {
    let mut store = builtin_store();
    let mut canvas = TestCanvas::new(100, 50);
    let mut e = Entity::new("enemy/manta", &mut store, 10, 20);
    e.x_vel = -3;
    e.y_vel = 2;
    e.update(&mut canvas);
    assert_eq!((e.x, e.y), (7, 22));
    assert_eq!(canvas.blits, vec![(7, 22)]); // drawn at the new position
}

#[test]
fn entity_with_missing_image_draws_nothing() {
    let mut store = builtin_store();
    let mut canvas = TestCanvas::new(100, 50);
    let mut e = Entity::new("no/such/image", &mut store, 5, 5);
    assert_eq!((e.width, e.height), (1, 1));
    e.update(&mut canvas);
    assert!(canvas.blits.is_empty());
}

#[test]
fn entity_overlap_detection() {
    let mut store = builtin_store();
    let a = Entity::new("enemy/manta", &mut store, 10, 10);
    let mut b = Entity::new("enemy/manta", &mut store, 10 + a.width - 1, 10);
    assert!(a.overlaps(&b)); // one-cell overlap
    b.x = 10 + a.width;
    assert!(!a.overlaps(&b)); // touching edges do not overlap
    b.x = 10;
    b.y = 10 + a.height;
    assert!(!a.overlaps(&b));
}

// ── Player input ──────────────────────────────────────────────────────────────

#[test]
fn release_zeroes_exactly_one_axis() {
    let mut store = builtin_store();
    let mut p = Player::new(&mut store, 50, 50);
    p.apply_intent(Intent::Move(Direction::Left));
    p.apply_intent(Intent::Move(Direction::Up));
    assert_eq!(p.entity.x_vel, -p.movement_speed);
    assert_eq!(p.entity.y_vel, -p.movement_speed);

    p.apply_intent(Intent::Stop(Axis::Vertical));
    assert_eq!(p.entity.y_vel, 0);
    assert_eq!(p.entity.x_vel, -p.movement_speed); // horizontal untouched
}

#[test]
fn speed_stays_within_bounds() {
    let mut store = builtin_store();
    let mut p = Player::new(&mut store, 50, 50);
    for _ in 0..100 {
        p.apply_intent(Intent::SpeedDown);
    }
    assert_eq!(p.movement_speed, 1);
    for _ in 0..100 {
        p.apply_intent(Intent::SpeedUp);
    }
    assert_eq!(p.movement_speed, SPEED_MAX);
}

#[test]
fn boost_press_and_release() {
    let mut store = builtin_store();
    let mut p = Player::new(&mut store, 50, 50);
    assert_eq!(p.entity.y_vel, DEFAULT_SPEED); // falling from the start
    p.apply_intent(Intent::BoostDown);
    assert_eq!(p.entity.y_vel, -p.movement_speed);
    p.apply_intent(Intent::BoostUp);
    assert_eq!(p.entity.y_vel, p.movement_speed);
}

#[test]
fn mirror_toggle_flips() {
    let mut store = builtin_store();
    let mut p = Player::new(&mut store, 50, 50);
    assert!(!p.mirror_enabled);
    p.apply_intent(Intent::MirrorToggle);
    assert!(p.mirror_enabled);
    p.apply_intent(Intent::MirrorToggle);
    assert!(!p.mirror_enabled);
}

#[test]
fn loop_control_intents_do_not_touch_the_player() {
    let mut store = builtin_store();
    let mut p = Player::new(&mut store, 50, 50);
    let before = p.entity.clone();
    p.apply_intent(Intent::Quit);
    p.apply_intent(Intent::Pause);
    assert_eq!(p.entity.x_vel, before.x_vel);
    assert_eq!(p.entity.y_vel, before.y_vel);
}

// ── Player movement & clamping ────────────────────────────────────────────────

#[test]
fn wall_press_clamps_and_zeroes_velocity() {
    let mut store = builtin_store();
    let mut canvas = TestCanvas::new(640, 480);
    let mut p = Player::new(&mut store, 0, 100);
    p.entity.y_vel = 0;
    p.apply_intent(Intent::Move(Direction::Left));
    p.update(&mut canvas);
    assert_eq!(p.entity.x, 0);
    assert_eq!(p.entity.x_vel, 0);
}

#[test]
fn clamp_holds_on_every_edge() {
    let mut store = builtin_store();
    let mut canvas = TestCanvas::new(640, 480);
    let mut p = Player::new(&mut store, 635, 476);
    p.apply_intent(Intent::Move(Direction::Right));
    p.apply_intent(Intent::Move(Direction::Down));
    p.update(&mut canvas);
    assert_eq!(p.entity.x, 640 - p.entity.width);
    assert_eq!(p.entity.y, 480 - p.entity.height);
    assert_eq!(p.entity.x_vel, 0);
    assert_eq!(p.entity.y_vel, 0);
}

#[test]
fn mirror_draws_reflected_copy() {
    let mut store = builtin_store();
    let mut canvas = TestCanvas::new(640, 480);
    let mut p = Player::new(&mut store, 100, 100);
    p.entity.y_vel = 0;
    p.apply_intent(Intent::MirrorToggle);
    p.update(&mut canvas);

    let half = 480 / 2;
    let expected_mirror_y = half - (p.entity.y - half) - p.entity.height;
    assert_eq!(canvas.blits, vec![(100, 100), (100, expected_mirror_y)]);
}

#[test]
fn nudge_is_reclamped() {
    let mut store = builtin_store();
    let mut p = Player::new(&mut store, 1, 100);
    p.nudge_x(-5, 640);
    assert_eq!(p.entity.x, 0); // never leaves the board
    p.nudge_x(10_000, 640);
    assert_eq!(p.entity.x, 640 - p.entity.width);
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_spawns_off_the_right_edge() {
    let mut store = builtin_store();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let e = Enemy::spawn("manta", &mut store, (640, 480), &mut rng);
        assert!(e.entity.x >= 640);
        assert!(e.entity.x <= 640 * 2);
        assert!(e.entity.y >= 0);
        assert!(e.entity.y <= 480 - e.entity.height);
        assert_eq!(e.entity.x_vel, -ENEMY_SPEED);
        assert_eq!(e.entity.y_vel, 0);
    }
}

#[test]
fn enemy_crosses_and_despawns_on_schedule() {
    let mut store = builtin_store();
    let mut canvas = TestCanvas::new(640, 480);
    let mut rng = seeded_rng();
    let mut e = Enemy::spawn("manta", &mut store, (640, 480), &mut rng);

    // First frame where x < -width: the frame after x + width stops
    // being a positive multiple of the drift speed.
    let distance = e.entity.x + e.entity.width;
    let frames = distance / ENEMY_SPEED + 1;

    for _ in 0..frames - 1 {
        e.update(&mut canvas);
    }
    assert!(!e.is_gone());
    e.update(&mut canvas);
    assert!(e.is_gone());
}

//! Input capability — crossterm events translated into discrete intents.
//!
//! A dedicated thread blocks on `event::read` and forwards everything
//! through a channel, so the frame loop never blocks on I/O.  Each frame
//! the loop drains the channel completely: zero or many intents, none
//! dropped.  Key-release events arrive on terminals that support the
//! kitty keyboard-enhancement protocol; `main` requests the flags.

use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

// ── Intents ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One discrete input event, already divorced from the key that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Quit,
    Pause,
    /// Movement key pressed: set that axis to ±movement_speed.
    Move(Direction),
    /// Movement key released: zero that axis, leave the other alone.
    Stop(Axis),
    /// Space pressed: boost upward.
    BoostDown,
    /// Space released: resume falling.
    BoostUp,
    SpeedDown,
    SpeedUp,
    MirrorToggle,
}

// ── Event plumbing ────────────────────────────────────────────────────────────

/// Spawn the blocking reader thread.  The thread exits when the receiver
/// is dropped.
pub fn spawn_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });
    rx
}

/// Drain every pending event and translate the recognized ones.
pub fn drain_intents(rx: &mpsc::Receiver<Event>) -> Vec<Intent> {
    let mut intents = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        if let Some(intent) = translate(&ev) {
            trace!("intent: {:?}", intent);
            intents.push(intent);
        }
    }
    intents
}

fn translate(ev: &Event) -> Option<Intent> {
    let Event::Key(KeyEvent {
        code,
        kind,
        modifiers,
        ..
    }) = ev
    else {
        return None;
    };

    match kind {
        KeyEventKind::Press => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Intent::Quit)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),
            KeyCode::Left => Some(Intent::Move(Direction::Left)),
            KeyCode::Right => Some(Intent::Move(Direction::Right)),
            KeyCode::Up => Some(Intent::Move(Direction::Up)),
            KeyCode::Down => Some(Intent::Move(Direction::Down)),
            KeyCode::Char(' ') => Some(Intent::BoostDown),
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(Intent::SpeedDown),
            KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::SpeedUp),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(Intent::MirrorToggle),
            _ => None,
        },
        KeyEventKind::Release => match code {
            KeyCode::Left | KeyCode::Right => Some(Intent::Stop(Axis::Horizontal)),
            KeyCode::Up | KeyCode::Down => Some(Intent::Stop(Axis::Vertical)),
            KeyCode::Char(' ') => Some(Intent::BoostUp),
            _ => None,
        },
        // A held key is already moving the player; repeats add nothing.
        KeyEventKind::Repeat => None,
    }
}

//! Rendering layer — the `Canvas` capability and its terminal backend.
//!
//! The simulation only ever talks to the `Canvas` trait; all crossterm
//! I/O is confined to `TermCanvas::flip`.  No game logic lives here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::assets::Image;
use crate::engine::{Game, Status};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_PAUSED: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

// ── Canvas capability ─────────────────────────────────────────────────────────

/// A fixed-size drawing surface.  One blit per sprite per frame; the
/// concrete backend decides what presentation means.
pub trait Canvas {
    /// (width, height) in cells, fixed for the session.
    fn size(&self) -> (i32, i32);

    /// Reset the frame buffer to the empty backdrop.
    fn clear(&mut self);

    /// Draw `image` with its top-left corner at (x, y).  Out-of-bounds
    /// portions are clipped; spaces in the sprite are transparent.
    fn blit(&mut self, image: &Image, x: i32, y: i32);
}

// ── Terminal backend ──────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct CanvasCell {
    ch: char,
    color: Color,
}

const EMPTY: CanvasCell = CanvasCell {
    ch: ' ',
    color: Color::Reset,
};

/// A cell buffer composed off-screen and presented in one queued burst.
pub struct TermCanvas {
    width: i32,
    height: i32,
    cells: Vec<CanvasCell>,
}

impl TermCanvas {
    pub fn new(width: u16, height: u16) -> TermCanvas {
        TermCanvas {
            width: width as i32,
            height: height as i32,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Write a text run directly into the buffer (HUD and hints).
    pub fn text(&mut self, x: i32, y: i32, s: &str, color: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x + i as i32, y, ch, color);
        }
    }

    fn put(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = CanvasCell { ch, color };
    }

    /// Present the composed frame: queue every cell, park the cursor,
    /// flush once.
    pub fn flip<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut current = Color::Reset;
        out.queue(style::SetForegroundColor(current))?;
        for row in 0..self.height {
            out.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.width {
                let cell = self.cells[(row * self.width + col) as usize];
                if cell.color != current {
                    out.queue(style::SetForegroundColor(cell.color))?;
                    current = cell.color;
                }
                out.queue(Print(cell.ch))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, (self.height - 1).max(0) as u16))?;
        out.flush()
    }
}

impl Canvas for TermCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn blit(&mut self, image: &Image, x: i32, y: i32) {
        for row in 0..image.height {
            for col in 0..image.width {
                if let Some(ch) = image.cell(col, row) {
                    self.put(x + col, y + row, ch, image.color);
                }
            }
        }
    }
}

// ── HUD (row 0) and controls hint (last row) ─────────────────────────────────

pub fn draw_hud(canvas: &mut TermCanvas, game: &Game) {
    let (width, height) = canvas.size();

    let status = format!(
        "Speed: {:>2}   Enemies: {:>2}/{:<2}{}",
        game.player.movement_speed,
        game.enemies.len(),
        game.enemy_quota,
        if game.player.mirror_enabled { "   [MIRROR]" } else { "" },
    );
    canvas.text(1, 0, &status, C_HUD);

    if game.status == Status::Paused {
        let label = "[ PAUSED ]";
        canvas.text(width / 2 - label.len() as i32 / 2, 0, label, C_PAUSED);
    }

    canvas.text(
        1,
        height - 1,
        "←↑↓→ move   SPACE boost   Z/X speed   M mirror   P pause   Q quit",
        C_HINT,
    );
}

//! Image store — name → character-cell sprite lookup.
//!
//! Lookups are lazy and memoized, including failures: a name that cannot
//! be resolved is cached as a `None` sentinel so the disk is probed once.
//! Sprites on disk live under `<dir>/<name>.txt` as plain text grids
//! (spaces are transparent) and override the built-in set.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::style::Color;
use log::{debug, warn};

// ── Sprite ────────────────────────────────────────────────────────────────────

/// A rectangular grid of character cells with one foreground colour.
#[derive(Clone, Debug)]
pub struct Image {
    rows: Vec<Vec<char>>,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl Image {
    /// Parse a text grid.  Returns `None` for blank input.
    pub fn from_text(text: &str, color: Color) -> Option<Image> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 || rows.is_empty() {
            return None;
        }
        Some(Image {
            height: rows.len() as i32,
            width: width as i32,
            rows,
            color,
        })
    }

    /// The visible character at (col, row), if any.  Spaces and cells
    /// outside the grid are transparent.
    pub fn cell(&self, col: i32, row: i32) -> Option<char> {
        if col < 0 || row < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .filter(|ch| *ch != ' ')
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

pub struct ImageStore {
    dir: PathBuf,
    store: HashMap<String, Option<Rc<Image>>>,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> ImageStore {
        ImageStore {
            dir: dir.into(),
            store: HashMap::new(),
        }
    }

    /// Get an image, loading it on first use.  A name that fails to load
    /// yields `None` now and on every later call, without touching the
    /// disk again.
    pub fn get(&mut self, name: &str) -> Option<Rc<Image>> {
        if let Some(hit) = self.store.get(name) {
            return hit.clone();
        }
        let loaded = self.load(name).map(Rc::new);
        if loaded.is_none() {
            warn!("image not found: {}", name);
        }
        self.store.insert(name.to_string(), loaded.clone());
        loaded
    }

    /// Whether `name` has already been looked up (hit or sentinel).
    pub fn probed(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    fn load(&self, name: &str) -> Option<Image> {
        let path = self.dir.join(format!("{name}.txt"));
        if let Ok(text) = fs::read_to_string(&path) {
            if let Some(image) = Image::from_text(&text, Color::White) {
                debug!("loaded {} from {}", name, path.display());
                return Some(image);
            }
        }
        builtin(name)
    }
}

// ── Built-in sprites ──────────────────────────────────────────────────────────

/// Sprites compiled into the binary so the game runs with no asset
/// directory at all.
fn builtin(name: &str) -> Option<Image> {
    match name {
        "player/default" => Image::from_text(" /\\\n}==>\n \\/", Color::Cyan),
        "enemy/manta" => Image::from_text("  /\\\n<=()=\n  \\/", Color::Red),
        "background/far" => Some(starfield(96, 32, 61, '.', Color::DarkGrey)),
        "background/near" => Some(starfield(96, 32, 37, '*', Color::Grey)),
        _ => None,
    }
}

/// Deterministic scatter of `star` characters, one per roughly `step`
/// cells.
fn starfield(width: i32, height: i32, step: u32, star: char, color: Color) -> Image {
    let mut rows = Vec::with_capacity(height as usize);
    for row in 0..height {
        let mut line = Vec::with_capacity(width as usize);
        for col in 0..width {
            // Cheap integer hash; good enough for set dressing.
            let h = (row as u32)
                .wrapping_mul(2_654_435_761)
                .wrapping_add(col as u32)
                .wrapping_mul(40_503);
            line.push(if h % step == 0 { star } else { ' ' });
        }
        rows.push(line);
    }
    Image {
        rows,
        width,
        height,
        color,
    }
}

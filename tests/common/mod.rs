#![allow(dead_code)]

use skydash::assets::{Image, ImageStore};
use skydash::display::Canvas;

/// Headless canvas that records blit positions instead of drawing.
pub struct TestCanvas {
    pub width: i32,
    pub height: i32,
    pub blits: Vec<(i32, i32)>,
}

impl TestCanvas {
    pub fn new(width: i32, height: i32) -> TestCanvas {
        TestCanvas {
            width,
            height,
            blits: Vec::new(),
        }
    }
}

impl Canvas for TestCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.blits.clear();
    }

    fn blit(&mut self, _image: &Image, x: i32, y: i32) {
        self.blits.push((x, y));
    }
}

/// Store pointed at a directory that does not exist, so only the
/// built-in sprites resolve.
pub fn builtin_store() -> ImageStore {
    ImageStore::new("definitely-not-a-directory")
}

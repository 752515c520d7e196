//! Parallax backdrop — tiled layers scrolling at per-depth rates.
//!
//! Layer `i` of `N` moves at `base * (i + 1) / N` on each axis, so the
//! last layer scrolls at full speed and earlier layers lag behind it,
//! which reads as depth.  Each tile wraps seamlessly: the position resets
//! once a full tile has scrolled past, and duplicates are drawn one
//! tile-size behind the scroll direction so the wrap boundary never shows
//! a gap.

use log::{debug, warn};

use crate::assets::ImageStore;
use crate::display::Canvas;
use crate::entities::Entity;

pub struct ParallaxBackground {
    pub layers: Vec<Entity>,
}

impl ParallaxBackground {
    /// Build layers from image names, slowest first.  A name the store
    /// cannot resolve is skipped rather than drawn as a hole.
    pub fn new(
        names: &[&str],
        store: &mut ImageStore,
        base_x: i32,
        base_y: i32,
    ) -> ParallaxBackground {
        let count = names.len() as i32;
        let mut layers = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let mut layer = Entity::new(&format!("background/{name}"), store, 0, 0);
            if !layer.has_image() {
                warn!("skipping background layer without an image: {}", name);
                continue;
            }
            layer.x_vel = base_x * (i as i32 + 1) / count;
            layer.y_vel = base_y * (i as i32 + 1) / count;
            debug!("layer {}: x_vel {}, y_vel {}", name, layer.x_vel, layer.y_vel);
            layers.push(layer);
        }
        ParallaxBackground { layers }
    }

    /// One frame: wrap-reset, draw tile plus edge duplicates, advance.
    /// The wrap check runs before any drawing so a stale out-of-range
    /// position is never rendered.
    pub fn update(&mut self, canvas: &mut dyn Canvas) {
        for layer in &mut self.layers {
            if layer.x.abs() >= layer.width {
                layer.x = 0;
            }
            if layer.y.abs() >= layer.height {
                layer.y = 0;
            }

            layer.display(canvas, layer.x, layer.y);
            if layer.x_vel != 0 {
                layer.display(canvas, layer.x - layer.x_vel.signum() * layer.width, layer.y);
            }
            if layer.y_vel != 0 {
                layer.display(canvas, layer.x, layer.y - layer.y_vel.signum() * layer.height);
                // Diagonal scroll needs a fourth copy for the corner.
                if layer.x_vel != 0 {
                    layer.display(
                        canvas,
                        layer.x - layer.x_vel.signum() * layer.width,
                        layer.y - layer.y_vel.signum() * layer.height,
                    );
                }
            }

            layer.x += layer.x_vel;
            layer.y += layer.y_vel;
        }
    }
}

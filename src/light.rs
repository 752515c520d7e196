//! Optional smart-light glue — sets a bridge-connected light when the
//! game starts and stops.
//!
//! Pure side-effect plumbing, never on the frame path.  The bridge
//! speaks a one-request JSON-over-HTTP protocol, small enough to write
//! against `TcpStream` directly; every failure is logged and swallowed
//! so a flaky bridge can never take the game down.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use log::{debug, warn};
use serde_json::json;

const TIMEOUT: Duration = Duration::from_secs(2);

/// Handle to one light on one bridge.
pub struct Orb {
    bridge: String,
    light: String,
}

impl Orb {
    pub fn new(bridge: impl Into<String>, light: impl Into<String>) -> Orb {
        Orb {
            bridge: bridge.into(),
            light: light.into(),
        }
    }

    pub fn set_on(&self, on: bool) {
        self.put_state(json!({ "on": on }));
    }

    /// Colour as RGB, converted to the hue/sat/bri triple the bridge
    /// expects.
    pub fn set_rgb(&self, r: u8, g: u8, b: u8) {
        let (hue, sat, bri) = rgb_to_hsb(r, g, b);
        self.put_state(json!({ "hue": hue, "sat": sat, "bri": bri }));
    }

    fn put_state(&self, body: serde_json::Value) {
        let payload = body.to_string();
        let request = format!(
            "PUT /api/skydash/lights/{}/state HTTP/1.1\r\n\
             Host: {}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{}",
            self.light,
            self.bridge,
            payload.len(),
            payload,
        );
        match self.send(&request) {
            Ok(()) => debug!("light {} ← {}", self.light, payload),
            Err(err) => warn!("light {} unreachable: {}", self.light, err),
        }
    }

    fn send(&self, request: &str) -> std::io::Result<()> {
        let addr = if self.bridge.contains(':') {
            self.bridge.clone()
        } else {
            format!("{}:80", self.bridge)
        };
        let mut stream = TcpStream::connect(&addr)?;
        stream.set_read_timeout(Some(TIMEOUT))?;
        stream.set_write_timeout(Some(TIMEOUT))?;
        stream.write_all(request.as_bytes())?;
        // Drain whatever the bridge answers; the response body is noise.
        let mut sink = Vec::new();
        let _ = stream.read_to_end(&mut sink);
        Ok(())
    }
}

/// RGB → (hue 0..=65535, sat 0..=254, bri 0..=254).
fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let (rf, gf, bf) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let hue_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    let hue_deg = if hue_deg < 0.0 { hue_deg + 360.0 } else { hue_deg };

    let sat = if max == 0.0 { 0.0 } else { delta / max };
    (
        (hue_deg / 360.0 * 65_535.0) as u16,
        (sat * 254.0) as u8,
        (max * 254.0) as u8,
    )
}

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use env_logger::{Builder, Env, Target};
use log::{info, LevelFilter};
use rand::thread_rng;

use skydash::assets::ImageStore;
use skydash::clock::FrameClock;
use skydash::display::{self, Canvas, TermCanvas};
use skydash::engine::{Game, Status};
use skydash::input;
use skydash::light::Orb;
use skydash::FRAME_RATE;

/// A terminal dodge-and-boost arcade game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging (written to skydash.log)
    #[arg(short, long)]
    verbose: bool,

    /// Directory with <name>.txt sprite overrides
    #[arg(long, default_value = "images")]
    assets: PathBuf,

    /// Fixed board size as WIDTHxHEIGHT (defaults to the terminal size)
    #[arg(long)]
    board: Option<String>,

    /// Address of a smart-light bridge to tint during play
    #[arg(short, long)]
    bridge: Option<String>,

    /// Id of a light on the bridge
    #[arg(short, long)]
    light: Option<String>,
}

/// The terminal owns stdout while the game runs, so logs go to a file
/// instead of corrupting the screen.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    if let Ok(file) = File::create("skydash.log") {
        builder.target(Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

fn parse_board(spec: &str) -> Option<(u16, u16)> {
    let (w, h) = spec.split_once('x')?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, assets: PathBuf, width: u16, height: u16) -> std::io::Result<()> {
    let mut store = ImageStore::new(assets);
    let mut canvas = TermCanvas::new(width, height);
    let mut game = Game::new(&mut store, canvas.size());
    let rx = input::spawn_reader();
    let mut rng = thread_rng();
    let mut clock = FrameClock::new();

    info!("board {}x{}", width, height);
    while game.status != Status::GameOver {
        let intents = input::drain_intents(&rx);
        game.step(&intents, &mut store, &mut rng, &mut canvas);
        display::draw_hud(&mut canvas, &game);
        canvas.flip(out)?;
        clock.tick(FRAME_RATE);
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let orb = args
        .bridge
        .as_ref()
        .zip(args.light.as_ref())
        .map(|(bridge, light)| Orb::new(bridge.clone(), light.clone()));
    if let Some(orb) = &orb {
        orb.set_on(true);
        orb.set_rgb(0, 0, 255);
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events; terminals without the protocol fall
    // back to press-only input.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let (width, height) = match args.board.as_deref().and_then(parse_board) {
        Some(board) => board,
        None => terminal::size()?,
    };

    let result = run(&mut out, args.assets, width, height);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Some(orb) = &orb {
        orb.set_on(false);
    }
    info!("goodbye");
    result
}

//! Terminal snake runner (default binary).
//!
//! Asks for a username, loads the stored profile, then drives the engine at
//! the level's tick rate and renders every frame through the framebuffer
//! renderer. The profile is saved on save-and-exit, on game over and on quit.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_snake::core::{EngineSnapshot, GameEngine};
use tui_snake::input::{map_key, should_quit, CommandQueue};
use tui_snake::session::{finish_session, load_profile, open_store, SessionEnd};
use tui_snake::store::Profile;
use tui_snake::term::{FrameBuffer, GameView, PlayerStatusView, TerminalRenderer, Viewport};
use tui_snake::types::TickOutcome;
use tui_snake::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let username = match &config.username {
        Some(name) => name.clone(),
        None => prompt_username()?,
    };

    let mut store = open_store(&config);
    let profile = load_profile(store.as_ref(), &username);
    let seed = config.seed_or_clock();
    let mut engine = GameEngine::with_seed(profile.start_level(), seed);
    info!(username = %username, seed, level = engine.level(), "session starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut engine, &profile, &config);
    // Always try to restore terminal state.
    let _ = term.exit();
    let end = result?;

    match finish_session(store.as_mut(), &username, &engine, end) {
        Ok(saved) => println!(
            "{username}: {} with score {} at level {} (best {}, level {})",
            end.as_str(),
            engine.score(),
            engine.level(),
            saved.high_score,
            saved.level
        ),
        Err(err) => {
            error!(error = %err, "profile save failed");
            eprintln!("could not save profile: {err}");
        }
    }
    Ok(())
}

fn prompt_username() -> Result<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter your username: ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("no username given");
        }
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    engine: &mut GameEngine,
    profile: &Profile,
    config: &AppConfig,
) -> Result<SessionEnd> {
    let view = GameView::default();
    let player = PlayerStatusView {
        username: &profile.username,
        high_score: profile.high_score,
    };
    let mut snap = EngineSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut queue = CommandQueue::new();

    // Engine stays in Ready until the first tick, which is the get-ready overlay.
    let mut next_tick = Instant::now() + Duration::from_millis(config.start_delay_ms as u64);

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Some(&player), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(SessionEnd::Quit);
                    }
                    if let Some(command) = map_key(key) {
                        queue.push_in(snap.phase, command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        match engine.tick(queue.next_command()) {
            TickOutcome::Continue => {}
            TickOutcome::LevelUp(level) => info!(level, "level up"),
            TickOutcome::SaveRequested => return Ok(SessionEnd::Saved),
            TickOutcome::GameOver(reason) => {
                engine.snapshot_into(&mut snap);
                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                view.render_into(&snap, Some(&player), Viewport::new(w, h), &mut fb);
                term.draw_swap(&mut fb)?;
                wait_for_key()?;
                return Ok(SessionEnd::GameOver(reason));
            }
        }
        next_tick = Instant::now() + Duration::from_millis(engine.tick_interval_ms() as u64);
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

//! Terminal runner (default binary).
//!
//! Renders with the framebuffer renderer, reads keys through crossterm and
//! drives gravity with millisecond timestamps since startup.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use falling_blocks::core::{GameSnapshot, GameState};
use falling_blocks::input::{handle_key_event, should_quit};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::FRAME_MS;
use falling_blocks::{EventLog, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut log = EventLog::open(config.log_path.as_deref())?;
    log.session_start(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    let game = result?;
    eprintln!(
        "[falling-blocks] seed {} score {} level {} restarts {}",
        config.seed,
        game.score(),
        game.level(),
        game.games_over()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<GameState> {
    let mut game = GameState::with_rules(config.seed, config.rules());
    game.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started_at = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = started_at;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(game);
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_frame {
            next_frame = now + frame;
            game.tick(now.duration_since(started_at).as_millis() as u64);
        }

        if let Some(event) = game.take_last_event() {
            log.record_lock(now.duration_since(started_at).as_millis() as u64, &event);
        }
    }
}

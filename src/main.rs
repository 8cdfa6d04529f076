//! Terminal platformer runner.
//!
//! Drives the fixed-timestep core: poll input until the tick deadline, apply
//! one simulation tick, draw, repeat. Death is handled here, not in the
//! core: after a short pause the episode is reset.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_platformer::core::{demo_level, validate_tile_tables, Game};
use tui_platformer::input::{should_quit, InputHandler};
use tui_platformer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_platformer::types::{GameEvent, Point, DEATH_PAUSE_TICKS, SPAWN_X, SPAWN_Y, TICK_MS};

fn main() -> Result<()> {
    // The kind tables must be complete before anything renders.
    validate_tile_tables()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(demo_level(), Point::new(SPAWN_X, SPAWN_Y));
    let mut input = InputHandler::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dead_ticks: u32 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for ev in game.tick(input.intent()) {
                match ev {
                    GameEvent::Jump | GameEvent::Died => term.bell()?,
                    GameEvent::Landed => {}
                }
            }

            if game.player().alive {
                dead_ticks = 0;
            } else {
                dead_ticks += 1;
                if dead_ticks >= DEATH_PAUSE_TICKS {
                    game.reset();
                    input.reset();
                    dead_ticks = 0;
                }
            }
        }
    }
}

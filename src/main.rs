//! Terminal runner: the external driver the game core expects.
//!
//! Owns the gravity timer (the core only stores the interval), translates
//! key events into actions, and renders the derived view every frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use blockfall::core::Session;
use blockfall::input::handle_key_event;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, GamePhase};

/// Step size for the `+`/`-` speed keys, in milliseconds.
const SPEED_STEP_MS: u32 = 50;

/// Lower bound so the game stays playable when speeding up.
const MIN_SPEED_MS: u32 = 50;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = Session::new(seed);

    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        term.draw(&fb)?;

        // The timer is re-armed from the session's current speed every
        // iteration, so SetSpeed takes effect on the next interval.
        let tick_duration = Duration::from_millis(session.speed_ms() as u64);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = driver_action(&session, key) {
                        session.apply(action);
                    }
                }
            }
        }

        match session.phase() {
            GamePhase::Active => {
                if last_tick.elapsed() >= tick_duration {
                    last_tick = Instant::now();
                    session.apply(GameAction::Tick);
                }
            }
            // No ticks are delivered outside Active, and the next interval
            // starts fresh on resume.
            _ => last_tick = Instant::now(),
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Driver-level key handling on top of the core mapping table.
fn driver_action(session: &Session, key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Enter => Some(GameAction::Start),
        // Escape resumes from pause; the table maps it to Pause otherwise.
        KeyCode::Esc if session.phase() == GamePhase::Paused => Some(GameAction::Resume),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::SetSpeed(
            session.speed_ms().saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS),
        )),
        KeyCode::Char('-') => Some(GameAction::SetSpeed(
            session.speed_ms().saturating_add(SPEED_STEP_MS),
        )),
        _ => handle_key_event(key),
    }
}

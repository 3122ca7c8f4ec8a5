use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use colormatch_core::SavedSession;

use crate::game::Session;
use crate::storage;
use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = crate::logger::init(&storage::log_path()) {
        eprintln!("Logging disabled: {}", e);
    }

    let mut session = open_session(storage::load());

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut session);
    let saved = storage::save(&session.to_saved());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    saved
}

/// Resumes `saved` when it restores cleanly, otherwise deals a new board.
fn open_session(saved: Option<SavedSession>) -> Session {
    let Some(saved) = saved else {
        return Session::new(storage::session_rng());
    };
    match Session::from_saved(&saved, storage::session_rng()) {
        Ok(session) => {
            log::info!("resumed session, tally {}/{}", session.correct, session.fail);
            session
        }
        Err(e) => {
            log::warn!("saved session rejected: {}", e);
            Session::new(storage::session_rng())
        }
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, session))?;

        if let Event::Key(key) = event::read()? {
            // Only handle Press events (crossterm sends Press+Release on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_key(session, key) {
                return Ok(());
            }
        }
    }
}

/// Handle a key event. Returns true if the app should quit.
fn handle_key(session: &mut Session, key: KeyEvent) -> bool {
    if session.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => {
                session.show_quit_confirm = false;
            }
        }
        return false;
    }

    match key.code {
        KeyCode::Up => session.move_cursor(-1, 0),
        KeyCode::Down => session.move_cursor(1, 0),
        KeyCode::Left => session.move_cursor(0, -1),
        KeyCode::Right => session.move_cursor(0, 1),

        KeyCode::Enter | KeyCode::Char(' ') => session.toggle_at_cursor(),

        KeyCode::Char(c @ '1'..='9') => {
            session.toggle_numbered(c as usize - '0' as usize);
        }

        KeyCode::Char('c') | KeyCode::Char('C') => {
            session.check();
        }

        KeyCode::Char('n') | KeyCode::Char('N') => session.start_new_game(),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            session.show_quit_confirm = true;
        }

        _ => {}
    }
    false
}

use colormatch_core::{NUM_COLS, NUM_ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::game::{Outcome, Session};

// ── Constants ────────────────────────────────────────────────────────────────

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 5;

/// Grid plus its rounded border.
const GRID_WIDTH: u16 = CELL_WIDTH * NUM_COLS as u16 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * NUM_ROWS as u16 + 2;

const PANEL_WIDTH: u16 = 26;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, session: &Session) {
    let area = f.area();

    let outer = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH),
        Constraint::Length(2),
        Constraint::Length(PANEL_WIDTH),
        Constraint::Min(0),
    ])
    .split(outer[1]);

    draw_grid(f, session, h_chunks[1]);
    draw_info_panel(f, session, h_chunks[3]);
    draw_status(f, session, outer[3]);
    draw_key_hints(f, outer[5]);

    if session.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

fn swatch(c: colormatch_core::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Black or white, whichever reads better on top of `c`.
fn contrast(c: colormatch_core::Color) -> Color {
    let luma = 0.299 * c.r as f32 + 0.587 * c.g as f32 + 0.114 * c.b as f32;
    if luma > 140.0 {
        Color::Black
    } else {
        Color::White
    }
}

// ── Grid rendering ───────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, session: &Session, area: Rect) {
    let block = Block::bordered()
        .title(" Color Match ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); NUM_ROWS]).split(inner);
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); NUM_COLS]).split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            draw_cell(f, session, row, col, *cell_area);
        }
    }
}

fn draw_cell(f: &mut Frame, session: &Session, row: usize, col: usize, area: Rect) {
    let color = session.game.color(row, col);
    let fg = contrast(color);
    let is_cursor = row == session.cursor_row && col == session.cursor_col;

    let block = if is_cursor {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray))
    };

    let mark = if session.game.is_selected(row, col) { "X" } else { "" };
    let label = format!("{}", row * NUM_COLS + col + 1);

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            mark,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(label, Style::default().fg(fg))),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .style(Style::default().bg(swatch(color)));

    f.render_widget(text, area);
}

// ── Info panel ───────────────────────────────────────────────────────────────

fn draw_info_panel(f: &mut Frame, session: &Session, area: Rect) {
    let v = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let hint_block = Block::bordered()
        .title(" Hint ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));
    let hint = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            session.blended.to_hex(),
            Style::default().fg(contrast(session.blended)),
        )),
    ])
    .block(hint_block)
    .alignment(Alignment::Center)
    .style(Style::default().bg(swatch(session.blended)));
    f.render_widget(hint, v[0]);

    let block = Block::bordered()
        .title(" Score ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let lines = vec![
        Line::from(vec![
            Span::styled(" Correct:   ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", session.correct),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Failures:  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", session.fail),
                Style::default().fg(if session.fail > 0 { Color::Red } else { Color::White }),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Selected:  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", session.game.selected_count(), colormatch_core::MAX_SELECTED),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, v[2]);
}

// ── Status line ──────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, session: &Session, area: Rect) {
    let line = match (session.outcome, session.limit_reached) {
        (Some(Outcome::Correct), _) => Line::from(Span::styled(
            "✓ Correct! Press n for a new board",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        (Some(Outcome::Incorrect), _) => Line::from(Span::styled(
            "✗ Not quite. Keep trying",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        (None, true) => Line::from(Span::styled(
            "Only two cells can be selected",
            Style::default().fg(Color::Yellow),
        )),
        (None, false) => Line::from(Span::styled(
            "Find the two cells that blend into the hint",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move  ", Style::default().fg(Color::Gray)),
        Span::styled("Spc", Style::default().fg(Color::Yellow)),
        Span::styled(" Select  ", Style::default().fg(Color::Gray)),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::styled(" Select cell  ", Style::default().fg(Color::Gray)),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::styled(" Check  ", Style::default().fg(Color::Gray)),
        Span::styled("n", Style::default().fg(Color::Yellow)),
        Span::styled(" New game  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(36, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Save and quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled("Enter", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled("Any key", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render(session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, session)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn renders_grid_and_hint() {
        let session = Session::new(StdRng::seed_from_u64(1));
        let screen = render(&session);
        assert!(screen.contains("Color Match"));
        assert!(screen.contains("Hint"));
        assert!(screen.contains(&session.blended.to_hex()));
    }

    #[test]
    fn selected_cells_are_marked() {
        let mut session = Session::new(StdRng::seed_from_u64(2));
        assert!(!render(&session).contains('X'));
        session.toggle_numbered(5);
        assert!(render(&session).contains('X'));
    }

    #[test]
    fn contrast_picks_readable_text() {
        assert_eq!(contrast(colormatch_core::Color::rgb(255, 255, 255)), Color::Black);
        assert_eq!(contrast(colormatch_core::Color::rgb(0, 0, 40)), Color::White);
    }
}

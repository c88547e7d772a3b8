//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::input::BoardGeometry;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Mark, Position, Square};

const HELP: &str = "1-9/click: place  arrows+enter: cursor  r: restart  q: quit";

/// Draws the whole screen and returns where the board landed.
pub fn draw(frame: &mut Frame, app: &App) -> BoardGeometry {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Minimax - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let (cell_width, cell_height) = app.cell_size();
    let geometry = BoardGeometry::centered(chunks[1], cell_width, cell_height);
    draw_board(frame, chunks[1], &geometry, app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    geometry
}

fn draw_board(frame: &mut Frame, area: Rect, geometry: &BoardGeometry, app: &App) {
    let ghost = app.ghost();
    for pos in Position::ALL {
        // Small terminals clip the board rather than overflow the buffer.
        let rect = geometry.cell_rect(pos).intersection(area);
        if rect.is_empty() {
            continue;
        }
        let preview = ghost.and_then(|(at, mark)| (at == pos).then_some(mark));
        draw_cell(frame, rect, app, pos, preview);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, preview: Option<Mark>) {
    let border_style = if pos == app.cursor() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let span = match (app.session().state().board().get(pos), preview) {
        (Square::Occupied(mark), _) => Span::styled(mark.to_string(), mark_style(mark)),
        (Square::Empty, Some(mark)) => Span::styled(
            mark.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        (Square::Empty, None) => Span::styled(
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    if inner.height == 0 {
        return;
    }
    let middle = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Line::from(span)).alignment(Alignment::Center),
        middle,
    );
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

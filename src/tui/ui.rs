//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::{App, Focus};
use crate::{BoardView, Player, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen areas of the last frame that react to mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Cell rectangles, indexed like the board.
    pub cells: [Rect; 9],
    /// The sort toggle control.
    pub sort_toggle: Rect,
    /// Inner area of the move list; one row per entry.
    pub moves: Rect,
    /// Index of the first visible move entry.
    pub moves_offset: usize,
}

impl HitMap {
    /// Returns the board cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        Position::iter()
            .zip(self.cells)
            .find_map(|(pos, cell)| cell.contains(point).then_some(pos))
    }

    /// Checks whether the coordinates fall on the sort toggle.
    pub fn on_sort_toggle(&self, column: u16, row: u16) -> bool {
        self.sort_toggle.contains(ScreenPosition::new(column, row))
    }

    /// Returns the display index of the move entry under the coordinates.
    ///
    /// The index may point past the last entry when the list is shorter
    /// than its area.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.moves.contains(ScreenPosition::new(column, row)) {
            return None;
        }
        Some(usize::from(row - self.moves.y) + self.moves_offset)
    }
}

/// Draws the whole screen and returns the clickable areas.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(30)])
        .split(chunks[1]);

    let view = app.controller().board_view();
    let cells = draw_board(frame, body[0], app, &view);
    let mut hit_map = draw_move_list(frame, body[1], app);
    hit_map.cells = cells;

    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9/Enter: play | Tab: switch pane | S: sort | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hit_map
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &BoardView) -> [Rect; 9] {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            if let Some(pos) = Position::from_index(index) {
                draw_cell(frame, cell_area, app, view, pos);
            }
            cells[index] = cell_area;
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &BoardView, pos: Position) {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.bg(app.highlight()).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = Text::from(vec![Line::default(), Line::from(symbol)]);
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) -> HitMap {
    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let sort = Paragraph::new(app.controller().sort_label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(sort, panes[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Moves")
        .border_style(focus_style(app.focus() == Focus::History));
    let inner = block.inner(panes[1]);

    let items: Vec<ListItem> = app
        .controller()
        .moves()
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label()).style(style)
        })
        .collect();

    let mut list = List::new(items).block(block);
    if app.focus() == Focus::History {
        list = list
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
    }

    let mut state = ListState::default().with_selected(Some(app.selected_index()));
    frame.render_stateful_widget(list, panes[1], &mut state);

    HitMap {
        cells: [Rect::default(); 9],
        sort_toggle: panes[0],
        moves: inner,
        moves_offset: state.offset(),
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

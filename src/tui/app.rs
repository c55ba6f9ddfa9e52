//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::Color;
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;
use super::ui::HitMap;
use crate::{GameController, MoveEntry, Position};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move navigation list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Wraps the [`GameController`] with everything that only matters to the
/// terminal: cursor, focus, list selection and the clickable areas of the
/// last frame.
#[derive(Debug, Clone)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    highlight: Color,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `controller`.
    #[instrument(skip(controller))]
    pub fn new(controller: GameController, highlight: Color) -> Self {
        let selected_move = controller.current_move();
        Self {
            controller,
            cursor: Position::Center,
            focus: Focus::default(),
            selected_move,
            highlight,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the move number selected in the history pane.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Gets the background color of winning cells.
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// Checks whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the clickable areas of the frame just drawn.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus switched");
            }
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_digit(c) {
                    self.focus = Focus::Board;
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to(self.selected_move),
            },
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => self.step_selection(code),
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event, acting on left-button presses only.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = self.hit_map.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos);
        } else if self.hit_map.on_sort_toggle(mouse.column, mouse.row) {
            self.toggle_sort();
        } else if let Some(index) = self.hit_map.move_row_at(mouse.column, mouse.row) {
            let Some(entry) = self.controller.moves().get(index).copied() else {
                debug!(index, "Click below the last move");
                return;
            };
            self.focus = Focus::History;
            self.selected_move = entry.move_number;
            self.jump_to(entry.move_number);
        }
    }

    /// Returns the display index of the selected move.
    pub fn selected_index(&self) -> usize {
        self.controller
            .moves()
            .iter()
            .position(|entry| entry.move_number == self.selected_move)
            .unwrap_or(0)
    }

    fn play(&mut self, pos: Position) {
        if self.controller.click(pos) {
            self.selected_move = self.controller.current_move();
        }
    }

    fn jump_to(&mut self, move_number: usize) {
        match self.controller.jump_to(move_number) {
            Ok(()) => info!(move_number, "Jumped to move"),
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    fn toggle_sort(&mut self) {
        self.controller.toggle_sort();
        info!(order = %self.controller.sort_order(), "Move list order changed");
    }

    fn step_selection(&mut self, key: KeyCode) {
        let moves: Vec<MoveEntry> = self.controller.moves();
        let index = self.selected_index();
        let index = match key {
            KeyCode::Up => index.saturating_sub(1),
            KeyCode::Down => (index + 1).min(moves.len().saturating_sub(1)),
            _ => index,
        };
        if let Some(entry) = moves.get(index) {
            self.selected_move = entry.move_number;
        }
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }
}

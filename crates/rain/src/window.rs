//! Window controller: turns input events into window state and geometry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rain_core::{CanvasSize, CellMetrics, Drag, WindowSettings, WindowState};
use ratatui::layout::{Margin, Position, Rect};

/// Smallest outer size a window can be resized to, border included.
const MIN_WIDTH: u16 = 4;
const MIN_HEIGHT: u16 = 3;

/// What the application should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Continue,
    Close,
}

/// A bordered window floating on the terminal screen.
///
/// In fullscreen mode the window covers the whole screen and drops its border.
#[derive(Debug)]
pub struct WindowController {
    state: WindowState,
    cell: CellMetrics,
    /// Terminal screen area.
    screen: Rect,
    /// Outer window area when not fullscreen.
    frame: Rect,
    /// Last known mouse position.
    pointer: Position,
}

impl WindowController {
    /// Create a window centered on `screen`, sized for the configured canvas.
    pub fn new(settings: &WindowSettings, screen: Rect) -> Self {
        let cell = settings.cell();
        let inner = cell.cells_for(settings.canvas());
        let width = inner.width.saturating_add(2).min(screen.width);
        let height = inner.height.saturating_add(2).min(screen.height);
        let frame = Rect::new(
            screen.x + (screen.width - width) / 2,
            screen.y + (screen.height - height) / 2,
            width,
            height,
        );

        let mut window = Self {
            state: WindowState::new(settings.fullscreen),
            cell,
            screen,
            frame,
            pointer: Position::ORIGIN,
        };
        let canvas = window.canvas_area();
        window.pointer = Position::new(
            canvas.x + canvas.width / 2,
            canvas.y + canvas.height / 2,
        );
        window
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn cell(&self) -> CellMetrics {
        self.cell
    }

    /// Area covered by the window, border included.
    pub fn outer(&self) -> Rect {
        if self.state.fullscreen() {
            self.screen
        } else {
            self.frame
        }
    }

    /// Area the rain is drawn in.
    pub fn canvas_area(&self) -> Rect {
        if self.state.fullscreen() {
            self.screen
        } else {
            self.frame.inner(Margin::new(1, 1))
        }
    }

    /// Canvas size in canvas units.
    pub fn canvas(&self) -> CanvasSize {
        self.cell.canvas_for(self.canvas_area())
    }

    /// Where to place the terminal cursor, or `None` to keep it hidden.
    pub fn cursor_position(&self) -> Option<Position> {
        self.state.cursor_visible().then_some(self.pointer)
    }

    /// Track a change of the terminal size, keeping the window on screen.
    pub fn set_screen(&mut self, screen: Rect) {
        if screen == self.screen {
            return;
        }
        tracing::debug!(width = screen.width, height = screen.height, "screen resized");
        self.screen = screen;
        self.frame = self.frame.clamp(screen);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Response {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('k' | 'K') if ctrl => self.lock_keyboard(),
            KeyCode::Char('l' | 'L') if ctrl => self.unlock_keyboard(),
            KeyCode::Char('c' | 'C') if ctrl => return self.close(),
            KeyCode::F(11) | KeyCode::Char('f') => self.toggle_fullscreen(),
            KeyCode::Esc | KeyCode::Char('q') => return self.close(),
            _ => {}
        }
        Response::Continue
    }

    /// Handles mouse buttons, drags and motion.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        self.pointer = pos;
        let ctrl = mouse.modifiers.contains(KeyModifiers::CONTROL);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Right) if ctrl => {
                self.state.hide_cursor();
                tracing::info!("cursor hidden");
            }
            MouseEventKind::Down(MouseButton::Left) if ctrl => {
                self.state.show_cursor();
                tracing::info!("cursor shown");
            }
            MouseEventKind::Down(MouseButton::Left) => self.start_drag(pos),
            MouseEventKind::Drag(MouseButton::Left) => self.drag_to(pos),
            MouseEventKind::Up(MouseButton::Left) => self.state.end_drag(),
            _ => {}
        }
    }

    fn toggle_fullscreen(&mut self) {
        if self.state.toggle_fullscreen() {
            tracing::info!(fullscreen = self.state.fullscreen(), "fullscreen toggled");
        } else {
            tracing::debug!("fullscreen toggle ignored, keyboard locked");
        }
    }

    fn close(&mut self) -> Response {
        if self.state.may_close() {
            tracing::info!("close requested");
            Response::Close
        } else {
            tracing::debug!("close ignored, keyboard locked");
            Response::Continue
        }
    }

    fn lock_keyboard(&mut self) {
        self.state.lock_keyboard();
        tracing::info!("keyboard locked");
    }

    fn unlock_keyboard(&mut self) {
        self.state.unlock_keyboard();
        tracing::info!("keyboard unlocked");
    }

    fn start_drag(&mut self, pos: Position) {
        if self.state.fullscreen() || !self.frame.contains(pos) {
            return;
        }
        let corner = Position::new(
            self.frame.right().saturating_sub(1),
            self.frame.bottom().saturating_sub(1),
        );
        let drag = if pos == corner {
            Drag::Resize
        } else {
            Drag::Move {
                dx: pos.x - self.frame.x,
                dy: pos.y - self.frame.y,
            }
        };
        self.state.begin_drag(drag);
    }

    fn drag_to(&mut self, pos: Position) {
        let screen = self.screen;
        match self.state.drag() {
            Some(Drag::Move { dx, dy }) => {
                let max_x = screen.right().saturating_sub(self.frame.width).max(screen.x);
                let max_y = screen.bottom().saturating_sub(self.frame.height).max(screen.y);
                self.frame.x = pos.x.saturating_sub(dx).clamp(screen.x, max_x);
                self.frame.y = pos.y.saturating_sub(dy).clamp(screen.y, max_y);
            }
            Some(Drag::Resize) => {
                let max_width = screen.right().saturating_sub(self.frame.x);
                let max_height = screen.bottom().saturating_sub(self.frame.y);
                self.frame.width = pos
                    .x
                    .saturating_add(1)
                    .saturating_sub(self.frame.x)
                    .max(MIN_WIDTH)
                    .min(max_width);
                self.frame.height = pos
                    .y
                    .saturating_add(1)
                    .saturating_sub(self.frame.y)
                    .max(MIN_HEIGHT)
                    .min(max_height);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }
    }

    fn left_down(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row, KeyModifiers::NONE)
    }

    fn left_drag(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Drag(MouseButton::Left), column, row, KeyModifiers::NONE)
    }

    fn left_up(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Up(MouseButton::Left), column, row, KeyModifiers::NONE)
    }

    fn window() -> WindowController {
        WindowController::new(&WindowSettings::default(), Rect::new(0, 0, 120, 40))
    }

    #[test]
    fn test_default_window_is_centered_800x600() {
        let window = window();
        assert_eq!(window.outer(), Rect::new(19, 4, 82, 32));
        assert_eq!(window.canvas_area(), Rect::new(20, 5, 80, 30));
        assert_eq!(window.canvas(), CanvasSize::new(800, 600));
    }

    #[test]
    fn test_small_screen_clamps_window() {
        let window = WindowController::new(&WindowSettings::default(), Rect::new(0, 0, 80, 24));
        assert_eq!(window.outer(), Rect::new(0, 0, 80, 24));
        assert_eq!(window.canvas(), CanvasSize::new(780, 440));
    }

    #[test]
    fn test_fullscreen_toggle() {
        let mut window = window();
        assert_eq!(
            window.handle_key(key(KeyCode::F(11), KeyModifiers::NONE)),
            Response::Continue
        );
        assert!(window.state().fullscreen());
        assert_eq!(window.canvas_area(), Rect::new(0, 0, 120, 40));
        assert_eq!(window.canvas(), CanvasSize::new(1200, 800));

        window.handle_key(key(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(!window.state().fullscreen());
    }

    #[test]
    fn test_lock_gates_fullscreen_and_close() {
        let mut window = window();
        window.handle_key(key(
            KeyCode::Char('K'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert!(!window.state().keyboard_enabled());

        window.handle_key(key(KeyCode::F(11), KeyModifiers::NONE));
        assert!(!window.state().fullscreen());
        assert_eq!(
            window.handle_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Response::Continue
        );
        assert_eq!(
            window.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Response::Continue
        );

        window.handle_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(window.state().keyboard_enabled());
        assert_eq!(
            window.handle_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            Response::Close
        );
    }

    #[test]
    fn test_plain_letters_do_not_lock() {
        let mut window = window();
        window.handle_key(key(KeyCode::Char('k'), KeyModifiers::NONE));
        window.handle_key(key(KeyCode::Char('l'), KeyModifiers::NONE));
        assert!(window.state().keyboard_enabled());
    }

    #[test]
    fn test_cursor_hide_and_show() {
        let mut window = window();
        let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        let right = MouseEventKind::Down(MouseButton::Right);
        window.handle_mouse(mouse(right, 30, 10, ctrl_shift));
        assert!(!window.state().cursor_visible());
        assert_eq!(window.cursor_position(), None);

        window.handle_mouse(mouse(MouseEventKind::Moved, 31, 11, KeyModifiers::NONE));
        let left = MouseEventKind::Down(MouseButton::Left);
        window.handle_mouse(mouse(left, 32, 12, ctrl_shift));
        assert!(window.state().cursor_visible());
        assert_eq!(window.cursor_position(), Some(Position::new(32, 12)));
        assert_eq!(window.state().drag(), None);
    }

    #[test]
    fn test_drag_moves_window_keeping_offset() {
        let mut window = window();
        window.handle_mouse(left_down(25, 6));
        assert_eq!(window.state().drag(), Some(Drag::Move { dx: 6, dy: 2 }));

        window.handle_mouse(left_drag(20, 5));
        assert_eq!(window.outer(), Rect::new(14, 3, 82, 32));
        assert_eq!(window.canvas(), CanvasSize::new(800, 600));

        // clamped to the screen edges
        window.handle_mouse(left_drag(0, 0));
        assert_eq!(window.outer(), Rect::new(0, 0, 82, 32));
        window.handle_mouse(left_drag(119, 39));
        assert_eq!(window.outer(), Rect::new(38, 8, 82, 32));

        window.handle_mouse(left_up(119, 39));
        assert_eq!(window.state().drag(), None);
    }

    #[test]
    fn test_drag_works_while_locked() {
        let mut window = window();
        window.handle_key(key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        window.handle_mouse(left_down(19, 4));
        window.handle_mouse(left_drag(20, 4));
        assert_eq!(window.outer().x, 20);
    }

    #[test]
    fn test_press_outside_window_does_not_drag() {
        let mut window = window();
        window.handle_mouse(left_down(2, 2));
        assert_eq!(window.state().drag(), None);
    }

    #[test]
    fn test_corner_drag_resizes() {
        let mut window = window();
        window.handle_mouse(left_down(100, 35));
        assert_eq!(window.state().drag(), Some(Drag::Resize));

        window.handle_mouse(left_drag(60, 20));
        assert_eq!(window.outer(), Rect::new(19, 4, 42, 17));
        assert_eq!(window.canvas(), CanvasSize::new(400, 300));

        window.handle_mouse(left_drag(0, 0));
        assert_eq!(window.outer(), Rect::new(19, 4, MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_corner_drag_at_coordinate_limit() {
        let mut window = window();
        window.handle_mouse(left_down(100, 35));
        window.handle_mouse(left_drag(u16::MAX, u16::MAX));
        assert_eq!(window.outer(), Rect::new(19, 4, 101, 36));
    }

    #[test]
    fn test_screen_shrink_reclamps_window() {
        let mut window = window();
        window.set_screen(Rect::new(0, 0, 60, 20));
        let outer = window.outer();
        assert!(outer.right() <= 60 && outer.bottom() <= 20);
        assert_eq!(outer.width, 60);
        assert_eq!(outer.height, 20);
    }
}

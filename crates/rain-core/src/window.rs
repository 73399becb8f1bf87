//! Window flags mutated by input handlers.

/// An in-progress left-button drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drag {
    /// Moving the window; the pointer stays at this offset from its top-left corner.
    Move { dx: u16, dy: u16 },
    /// Resizing the window from its bottom-right corner.
    Resize,
}

/// Independent window flags plus the drag origin.
///
/// The keyboard lock only gates the fullscreen and close shortcuts; dragging,
/// resizing and cursor visibility stay available while locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    fullscreen: bool,
    keyboard_enabled: bool,
    cursor_visible: bool,
    drag: Option<Drag>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl WindowState {
    pub fn new(fullscreen: bool) -> Self {
        Self {
            fullscreen,
            keyboard_enabled: true,
            cursor_visible: true,
            drag: None,
        }
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn keyboard_enabled(&self) -> bool {
        self.keyboard_enabled
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// Flip fullscreen if the keyboard is enabled. Returns whether it flipped.
    pub fn toggle_fullscreen(&mut self) -> bool {
        if !self.keyboard_enabled {
            return false;
        }
        self.fullscreen = !self.fullscreen;
        true
    }

    /// Whether the close shortcut may take effect.
    pub fn may_close(&self) -> bool {
        self.keyboard_enabled
    }

    pub fn lock_keyboard(&mut self) {
        self.keyboard_enabled = false;
    }

    pub fn unlock_keyboard(&mut self) {
        self.keyboard_enabled = true;
    }

    pub fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }

    pub fn show_cursor(&mut self) {
        self.cursor_visible = true;
    }

    pub fn begin_drag(&mut self, drag: Drag) {
        self.drag = Some(drag);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

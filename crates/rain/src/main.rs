use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use rain_animation::RainState;
use rain_core::Settings;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Position, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Block,
};

mod logging;
mod terminal;
mod window;

use terminal::MouseCaptureGuard;
use window::{Response, WindowController};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _logging = logging::init();
    let settings = rain_config::load().wrap_err("failed to load configuration")?;

    let terminal = ratatui::init();
    let result = run(terminal, settings);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, settings: Settings) -> color_eyre::Result<()> {
    let capture = MouseCaptureGuard::new()?;
    let screen = Rect::from((Position::ORIGIN, terminal.size()?));
    let result = App::new(settings, screen).run(terminal);
    capture.release()?;
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    settings: Settings,
    /// Window geometry and input state.
    window: WindowController,
    /// Falling glyph animation.
    rain: RainState,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of the given size.
    pub fn new(settings: Settings, screen: Rect) -> Self {
        let window = WindowController::new(&settings.window, screen);
        let rain = RainState::new(settings.animation.clone(), window.canvas());
        tracing::info!(
            width = window.canvas().width,
            height = window.canvas().height,
            columns = rain.columns().len(),
            "app started"
        );
        Self {
            running: true,
            settings,
            window,
            rain,
        }
    }

    /// Run the application's main loop.
    ///
    /// Input is polled until the next tick is due, so the animation keeps a
    /// fixed cadence regardless of input.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let tick_rate = self.rain.settings().tick_interval();
        let mut last_tick = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            self.handle_crossterm_events(timeout)?;
            if last_tick.elapsed() >= tick_rate {
                self.rain.tick();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.window.set_screen(frame.area());
        self.sync_canvas();

        let state = self.window.state();
        if !state.fullscreen() {
            let title = Line::from(format!(" {} ", self.settings.window.title)).centered();
            let help = Line::from(vec![
                " F11".bold().green(),
                " fullscreen  ".dark_gray(),
                "Esc".bold().green(),
                " close  ".dark_gray(),
                "^K/^L".bold().green(),
                " lock/unlock ".dark_gray(),
            ])
            .centered();
            let mut block = Block::bordered()
                .border_style(Style::new().fg(Color::Green))
                .title(title)
                .title_bottom(help);
            if !state.keyboard_enabled() {
                block = block.title(Line::from(" locked ".red().bold()).right_aligned());
            }
            frame.render_widget(block, self.window.outer());
        }

        frame.render_widget(
            self.rain.widget(self.window.cell()),
            self.window.canvas_area(),
        );

        if let Some(position) = self.window.cursor_position() {
            frame.set_cursor_position(position);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            self.on_event(event::read()?);
        }
        Ok(())
    }

    /// Dispatches one input event to the window controller.
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.window.handle_key(key) == Response::Close {
                    self.quit();
                }
            }
            Event::Mouse(mouse) => self.window.handle_mouse(mouse),
            Event::Resize(width, height) => self.window.set_screen(Rect::new(0, 0, width, height)),
            _ => {}
        }
        self.sync_canvas();
    }

    /// Bring the column state in line with the current canvas size.
    fn sync_canvas(&mut self) {
        self.rain.resize(self.window.canvas());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

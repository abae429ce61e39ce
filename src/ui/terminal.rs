use crate::app::{App, AppMode};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::{render_analysis, render_help, render_input, render_sentence, render_status};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::info;

/// Redraw interval; partial mappings show up at this pace while resolving.
const TICK: Duration = Duration::from_millis(50);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    // dropped after `terminal` so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        info!("Entering event loop");

        loop {
            if app.mode() == AppMode::Quit {
                info!("Leaving event loop");
                return Ok(());
            }

            self.render_frame(app)?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let theme = self.theme;

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);

            frame.render_widget(render_input(&state.input, state.mode, &theme), chunks[0]);

            if state.mode == AppMode::Help {
                frame.render_widget(render_help(&theme), chunks[2]);
            } else {
                if let Some(sentence) = &state.sentence {
                    frame.render_widget(render_sentence(sentence, &theme), chunks[1]);
                }
                let analysis = render_analysis(&state.rows, state.selected, &theme);
                frame.render_widget(analysis, chunks[2]);
            }

            frame.render_widget(render_status(&state, &theme), chunks[3]);

            if state.mode == AppMode::Input {
                // inside the input border
                let column = state.cursor_column.min(chunks[0].width.saturating_sub(3));
                let x = chunks[0].x + 1 + column;
                frame.set_cursor_position((x, chunks[0].y + 1));
            }
        })?;

        Ok(())
    }
}

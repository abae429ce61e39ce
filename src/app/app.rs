use super::event::AppEvent;
use super::input::InputBuffer;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::analysis::{reference_link, MorphologyTag, Session};
use crate::engine::TextscanError;
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Destination of an activated tag link.
///
/// The terminal build copies the link to the clipboard.
pub trait LinkTarget {
    fn open(&mut self, url: &str) -> Result<(), TextscanError>;
}

pub struct App {
    mode: AppMode,
    input: InputBuffer,
    session: Session,
    link_target: Box<dyn LinkTarget>,
    /// Index into the flattened (token, tag) list of the current mapping
    selected: usize,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, link_target: Box<dyn LinkTarget>) -> Self {
        Self {
            mode: AppMode::Input,
            input: InputBuffer::new(),
            session,
            link_target,
            selected: 0,
            message: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.handle_event(AppEvent::Quit);
            return;
        }

        match self.mode {
            AppMode::Input => self.handle_input_key(key.code),
            AppMode::Browse => self.handle_browse_key(key.code),
            AppMode::Help => self.mode = AppMode::Input,
            AppMode::Quit => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Esc => self.input.clear(),
            KeyCode::Enter => {
                let event = command_to_app_event(parse_command(self.input.text()));
                self.handle_event(event);
            }
            KeyCode::Tab => {
                if self.tag_count() > 0 {
                    self.selected = self.selected.min(self.tag_count() - 1);
                    self.mode = AppMode::Browse;
                }
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Up => self.select_previous(),
            KeyCode::Right | KeyCode::Down => self.select_next(),
            KeyCode::Enter => self.handle_event(AppEvent::CopyLink),
            KeyCode::Tab | KeyCode::Esc => self.mode = AppMode::Input,
            _ => {}
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Submit(sentence) => {
                // an empty field analyzes nothing
                if sentence.trim().is_empty() {
                    return;
                }
                self.session.submit(&sentence);
                self.selected = 0;
                self.message = None;
                self.mode = AppMode::Input;
            }
            AppEvent::CopyLink => self.open_selected_link(),
            AppEvent::Quit => {
                self.session.cancel();
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::Invalid(input) => {
                self.message = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    pub fn select_next(&mut self) {
        let count = self.tag_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.tag_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Currently highlighted tag with its (row, tag) position.
    pub fn selected_tag(&self) -> Option<((usize, usize), MorphologyTag)> {
        let snapshot = self.session.snapshot();
        let selected = snapshot
            .mapping
            .iter()
            .enumerate()
            .flat_map(|(row, entry)| {
                entry
                    .tags
                    .iter()
                    .enumerate()
                    .map(move |(column, tag)| ((row, column), *tag))
            })
            .nth(self.selected);
        selected
    }

    fn tag_count(&self) -> usize {
        self.session
            .snapshot()
            .mapping
            .iter()
            .map(|entry| entry.tags.len())
            .sum()
    }

    fn open_selected_link(&mut self) {
        let Some((_, tag)) = self.selected_tag() else {
            return;
        };

        let link = reference_link(&tag);
        if link.is_empty() {
            self.message = Some(format!("No reference for {}", tag));
            return;
        }

        match self.link_target.open(link) {
            Ok(()) => {
                info!("Opened reference link for {}", tag);
                self.message = Some(format!("Copied link for {} to clipboard", tag));
            }
            Err(e) => {
                warn!("Failed to open reference link for {}: {}", tag, e);
                self.message = Some(e.to_string());
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let snapshot = self.session.snapshot();
        let mut state = if snapshot.generation == 0 {
            RenderState::empty(self.mode)
        } else {
            RenderState::from_snapshot(self.mode, &snapshot)
        };
        state.input = self.input.text().to_string();
        state.cursor_column = self.input.cursor_column();
        state.message = self.message.clone();
        if self.mode == AppMode::Browse {
            state.selected = self.selected_tag().map(|(position, _)| position);
        }
        state
    }
}

use crate::config::AppConfig;
use crate::logging;
use crate::router::{Router, USER_DETAIL_PATTERN};
use crate::search::{SearchComponent, SubmitEvent};
use crate::tui::search::InputState;
use crate::tui::ui;
use crate::SearchModule;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Which view the router currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Search,
    UserDetail {
        username: String,
        page: String,
        per_page: String,
    },
}

pub struct App {
    pub search: SearchComponent<Router>,
    pub input: InputState,
    pub status_message: String,
    tick_rate: Duration,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            search: SearchModule.create_component(Router::with_default_routes()),
            input: InputState::default(),
            status_message: "Type a username and press Enter".to_string(),
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> crate::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| crate::UserSearchError::Terminal(e.to_string()))?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Current view, derived from the router location
    pub fn view(&self) -> View {
        let router = self.search.navigator();
        match router.current_match() {
            Some(matched) if matched.pattern == USER_DETAIL_PATTERN => View::UserDetail {
                username: matched.param("username").unwrap_or_default().to_string(),
                page: router.current().query.get("page").unwrap_or_default().to_string(),
                per_page: router
                    .current()
                    .query
                    .get("per_page")
                    .unwrap_or_default()
                    .to_string(),
            },
            _ => View::Search,
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.view() {
            View::Search => self.handle_search_key(key),
            View::UserDetail { .. } => self.handle_detail_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.search.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search.on_input(String::new());
                    self.input.home();
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(|input, text| {
                    input.insert(text, c);
                    true
                });
            }
            KeyCode::Backspace => {
                self.edit(|input, text| input.backspace(text));
            }
            KeyCode::Delete => {
                self.edit(|input, text| input.delete(text));
            }
            KeyCode::Left => self.input.move_left(&self.search.search_query),
            KeyCode::Right => self.input.move_right(&self.search.search_query),
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(&self.search.search_query),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.search.navigator_mut().back();
                self.status_message = "Back to search".to_string();
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Apply an edit to a copy of the query and feed it back through the
    /// form's input binding
    fn edit(&mut self, apply: impl FnOnce(&mut InputState, &mut String) -> bool) {
        let mut text = self.search.search_query.clone();
        if apply(&mut self.input, &mut text) {
            self.search.on_input(text);
        }
    }

    fn submit(&mut self) {
        let mut event = SubmitEvent::new();
        self.search.on_submit(&mut event);

        if self.search.is_input_error {
            self.status_message = self.search.input_error_message.clone();
            return;
        }

        let router = self.search.navigator();
        self.status_message = match router.last_error() {
            Some(e) => e.to_string(),
            None => {
                logging::debug("TUI", &format!("Showing {}", router.current_url()));
                format!("Opened {}", router.current_url())
            }
        };
    }
}

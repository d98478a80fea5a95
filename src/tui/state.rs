use crate::model::{AppEvent, Notification};
use crate::orchestrator::UiCommand;
use crate::view::{HomeState, PageSize, ResultsState, Route, Table};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Results,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// What the event loop should do after a key press.
#[derive(Debug)]
pub enum KeyAction {
    None,
    Send(UiCommand),
    Quit,
}

pub struct UiState {
    pub screen: Screen,
    pub location: String,
    pub show_help: bool,
    pub home: HomeState,
    pub results: ResultsState,
    pub toast: Option<Toast>,
}

impl UiState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            screen: Screen::Home,
            location: Route::Home.location(),
            show_help: false,
            home: HomeState::default(),
            results: ResultsState::new(page_size),
            toast: None,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toast = Some(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }

    pub fn visible_toast(&self) -> Option<&Notification> {
        self.toast
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < TOAST_TTL)
            .map(|t| &t.notification)
    }

    /// Switch screens for `location`; entering the results view may start a load.
    pub fn navigate(&mut self, location: &str) -> Option<UiCommand> {
        let route = Route::parse(location);
        self.location = route.location();
        match route {
            Route::Home => {
                self.screen = Screen::Home;
                let was_loading = self.results.pending().is_some();
                self.results.navigate(&Route::Home);
                was_loading.then_some(UiCommand::Abandon)
            }
            Route::Results { .. } => {
                self.screen = Screen::Results;
                self.results
                    .navigate(&route)
                    .map(|(token, username)| UiCommand::Load { token, username })
            }
        }
    }

    pub fn apply_event(&mut self, ev: AppEvent) -> Option<UiCommand> {
        match ev {
            AppEvent::LookupFinished {
                location,
                notification,
            } => {
                self.home.finish_search();
                self.notify(notification);
                location.and_then(|loc| self.navigate(&loc))
            }
            AppEvent::AggregationCompleted { token, result } => {
                self.results.apply(token, *result);
                None
            }
        }
    }

    pub fn handle_key(&mut self, k: KeyEvent) -> KeyAction {
        if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }
        if k.code == KeyCode::F(1) {
            self.show_help = !self.show_help;
            return KeyAction::None;
        }
        match self.screen {
            Screen::Home => self.handle_home_key(k),
            Screen::Results => self.handle_results_key(k),
        }
    }

    fn handle_home_key(&mut self, k: KeyEvent) -> KeyAction {
        match k.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => match self.home.begin_search() {
                Some(username) => KeyAction::Send(UiCommand::Search(username)),
                None => KeyAction::None,
            },
            KeyCode::Backspace => {
                self.home.pop_char();
                KeyAction::None
            }
            KeyCode::Char(c) => {
                self.home.push_char(c);
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn handle_results_key(&mut self, k: KeyEvent) -> KeyAction {
        let focus = self.results.focus;
        match k.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                KeyAction::None
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                match self.navigate(&Route::Home.location()) {
                    Some(cmd) => KeyAction::Send(cmd),
                    None => KeyAction::None,
                }
            }
            KeyCode::Char('r') => {
                let location = self.location.clone();
                match self.navigate(&location) {
                    Some(cmd) => KeyAction::Send(cmd),
                    None => KeyAction::None,
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.results.focus = focus.toggle();
                KeyAction::None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.results.update_page(focus, |p, total| p.next_page(total));
                KeyAction::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                self.results.update_page(focus, |p, _| p.prev_page());
                KeyAction::None
            }
            KeyCode::Char('s') => {
                self.results
                    .update_page(focus, |p, _| p.with_page_size(p.page_size.cycle()));
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    pub fn focused(&self, table: Table) -> bool {
        self.results.focus == table
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;

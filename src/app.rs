use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::api::{
    ApiError, MovieDetailsBundle, MovieRecommendation, MovieSummary, UserRecommendation,
};
use crate::view::{DetailView, RecommendationCard};

/// Delay before a similar-movie selection reopens the modal, covering the
/// close transition of the previous one.
pub const MODAL_REOPEN_DELAY_MS: u64 = 500;

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browse,
    ByMovie,
    ByUser,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            Self::Browse => Self::ByMovie,
            Self::ByMovie => Self::ByUser,
            Self::ByUser => Self::Browse,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Browse => Self::ByUser,
            Self::ByMovie => Self::Browse,
            Self::ByUser => Self::ByMovie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::ByMovie => "By Movie",
            Self::ByUser => "By User",
        }
    }

    pub const ALL: [View; 3] = [Self::Browse, Self::ByMovie, Self::ByUser];
}

/// Input mode for the text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Lifecycle of one fetch target: idle until first submitted, then loading,
/// then either results or an error message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

/// Monotonic request generation for one fetch target. A reply stamped with a
/// superseded generation is discarded, so the latest request wins no matter
/// the arrival order.
#[derive(Debug, Default, Clone, Copy)]
struct Ticket(u64);

impl Ticket {
    fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Commands sent from the UI to the fetch dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search {
        ticket: u64,
        query: String,
    },
    FetchDetails {
        ticket: u64,
        movie_id: u64,
        delay_ms: u64,
    },
    RecommendByMovie {
        ticket: u64,
        movie_title: String,
    },
    RecommendByUser {
        ticket: u64,
        user_id: String,
    },
}

/// Results sent from fetch tasks back to the UI, stamped with the ticket of
/// the request that produced them.
#[derive(Debug)]
pub enum Message {
    SearchDone {
        ticket: u64,
        result: Result<Vec<MovieSummary>, ApiError>,
    },
    DetailsDone {
        ticket: u64,
        movie_id: u64,
        result: Result<MovieDetailsBundle, ApiError>,
    },
    MovieRecsDone {
        ticket: u64,
        result: Result<Vec<MovieRecommendation>, ApiError>,
    },
    UserRecsDone {
        ticket: u64,
        result: Result<Vec<UserRecommendation>, ApiError>,
    },
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub show_help: bool,
    pub input_mode: InputMode,

    // Browse view state
    pub query: String,
    pub search: FetchState<MovieSummary>,
    pub browse_selected: usize,

    // Recommendation form state
    pub movie_title: String,
    pub movie_recs: FetchState<RecommendationCard>,
    pub movie_scroll: u16,
    pub user_id: String,
    pub user_recs: FetchState<RecommendationCard>,
    pub user_scroll: u16,

    // Detail modal, replaced wholesale on every open; at most one exists
    pub detail: Option<DetailView>,
    pub detail_scroll: u16,
    pub similar_selected: usize,

    // Request generations, one per fetch target
    search_ticket: Ticket,
    details_ticket: Ticket,
    movie_ticket: Ticket,
    user_ticket: Ticket,

    // Status message
    pub status_msg: String,

    cmd_tx: mpsc::UnboundedSender<Command>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// App whose commands go nowhere. Used in tests.
    pub fn new() -> Self {
        let (cmd_tx, _) = mpsc::unbounded_channel();
        Self::with_sender(cmd_tx)
    }

    /// App wired to a live command channel; the caller drives the receiver.
    pub fn with_channels() -> (Self, mpsc::UnboundedReceiver<Command>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        (Self::with_sender(cmd_tx), cmd_rx)
    }

    fn with_sender(cmd_tx: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            should_quit: false,
            view: View::Browse,
            show_help: false,
            input_mode: InputMode::Normal,

            query: String::new(),
            search: FetchState::Idle,
            browse_selected: 0,

            movie_title: String::new(),
            movie_recs: FetchState::Idle,
            movie_scroll: 0,
            user_id: String::new(),
            user_recs: FetchState::Idle,
            user_scroll: 0,

            detail: None,
            detail_scroll: 0,
            similar_selected: 0,

            search_ticket: Ticket::default(),
            details_ticket: Ticket::default(),
            movie_ticket: Ticket::default(),
            user_ticket: Ticket::default(),

            status_msg: String::new(),

            cmd_tx,
        }
    }

    fn send(&self, cmd: Command) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Request details for a movie; the modal opens once they arrive.
    pub fn open_movie(&mut self, movie_id: u64) {
        let ticket = self.details_ticket.issue();
        self.send(Command::FetchDetails {
            ticket,
            movie_id,
            delay_ms: 0,
        });
    }

    /// Submit the browse search box as typed.
    pub fn submit_search(&mut self) {
        let ticket = self.search_ticket.issue();
        self.search = FetchState::Loading;
        self.browse_selected = 0;
        self.send(Command::Search {
            ticket,
            query: self.query.clone(),
        });
    }

    /// Submit the movie form as typed; the server does the validating.
    pub fn submit_movie_form(&mut self) {
        let ticket = self.movie_ticket.issue();
        self.movie_recs = FetchState::Loading;
        self.movie_scroll = 0;
        self.send(Command::RecommendByMovie {
            ticket,
            movie_title: self.movie_title.clone(),
        });
    }

    /// Submit the user form as typed; the server does the validating.
    pub fn submit_user_form(&mut self) {
        let ticket = self.user_ticket.issue();
        self.user_recs = FetchState::Loading;
        self.user_scroll = 0;
        self.send(Command::RecommendByUser {
            ticket,
            user_id: self.user_id.clone(),
        });
    }

    /// Fold a fetch result into view state. Stale tickets are dropped here.
    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::SearchDone { ticket, result } => {
                if !self.search_ticket.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(movies) => {
                        self.browse_selected = 0;
                        self.status_msg = format!("{} movies found", movies.len());
                        self.search = FetchState::Loaded(movies);
                    }
                    Err(err) => {
                        self.search = FetchState::Failed(err.user_message());
                    }
                }
            }
            Message::DetailsDone {
                ticket,
                movie_id,
                result,
            } => {
                if !self.details_ticket.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(bundle) => {
                        // One assignment replaces the whole modal
                        self.detail = Some(DetailView::new(bundle));
                        self.detail_scroll = 0;
                        self.similar_selected = 0;
                        tracing::debug!(movie_id, "movie details loaded");
                    }
                    Err(err) => {
                        // Nothing user-visible on this path; the modal simply
                        // does not appear.
                        tracing::error!(movie_id, error = %err, "movie details fetch failed");
                    }
                }
            }
            Message::MovieRecsDone { ticket, result } => {
                if !self.movie_ticket.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(recs) => {
                        self.movie_scroll = 0;
                        self.movie_recs = FetchState::Loaded(
                            recs.into_iter().map(RecommendationCard::from_movie).collect(),
                        );
                    }
                    Err(err) => {
                        self.movie_recs = FetchState::Failed(err.user_message());
                    }
                }
            }
            Message::UserRecsDone { ticket, result } => {
                if !self.user_ticket.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(recs) => {
                        self.user_scroll = 0;
                        self.user_recs = FetchState::Loaded(
                            recs.into_iter().map(RecommendationCard::from_user).collect(),
                        );
                    }
                    Err(err) => {
                        self.user_recs = FetchState::Failed(err.user_message());
                    }
                }
            }
        }
    }

    /// Keyboard dispatch across overlays, input mode and the active view.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }
        if key.code == KeyCode::Char('?') && self.input_mode == InputMode::Normal {
            self.show_help = true;
            return;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_input_key(key);
            return;
        }

        // The detail modal captures keys while open
        if self.detail.is_some() {
            self.handle_modal_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.view = self.view.next();
            }
            KeyCode::BackTab => {
                self.view = self.view.prev();
            }
            KeyCode::Char('1') => {
                self.view = View::Browse;
            }
            KeyCode::Char('2') => {
                self.view = View::ByMovie;
            }
            KeyCode::Char('3') => {
                self.view = View::ByUser;
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
            }
            _ => match self.view {
                View::Browse => self.handle_browse_key(key),
                View::ByMovie | View::ByUser => self.handle_form_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                match self.view {
                    View::Browse => self.submit_search(),
                    View::ByMovie => self.submit_movie_form(),
                    View::ByUser => self.submit_user_form(),
                }
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.active_input_mut().pop();
            }
            KeyCode::Char(c) => {
                self.active_input_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if let FetchState::Loaded(movies) = &self.search {
                    if self.browse_selected + 1 < movies.len() {
                        self.browse_selected += 1;
                    }
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.browse_selected = self.browse_selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let FetchState::Loaded(movies) = &self.search {
                    if let Some(movie) = movies.get(self.browse_selected) {
                        let id = movie.id;
                        self.open_movie(id);
                    }
                }
            }
            KeyCode::Esc => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.search = FetchState::Idle;
                    self.browse_selected = 0;
                    self.status_msg.clear();
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let scroll = self.results_scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let scroll = self.results_scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                let scroll = self.results_scroll_mut();
                *scroll = scroll.saturating_add(10);
            }
            KeyCode::PageUp => {
                let scroll = self.results_scroll_mut();
                *scroll = scroll.saturating_sub(10);
            }
            KeyCode::Enter => match self.view {
                View::ByMovie => self.submit_movie_form(),
                _ => self.submit_user_form(),
            },
            KeyCode::Esc => {
                self.active_input_mut().clear();
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.detail = None;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(detail) = &self.detail {
                    if self.similar_selected + 1 < detail.similar.len() {
                        self.similar_selected += 1;
                    }
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.similar_selected = self.similar_selected.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(10);
            }
            KeyCode::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(10);
            }
            KeyCode::Enter => {
                self.open_selected_similar();
            }
            _ => {}
        }
    }

    /// Close the modal and request details for the selected similar movie.
    /// The refetch is delayed so the close transition finishes first.
    fn open_selected_similar(&mut self) {
        let Some(detail) = &self.detail else { return };
        let Some(card) = detail.similar.get(self.similar_selected) else {
            return;
        };
        let movie_id = card.movie_id;

        self.detail = None;
        let ticket = self.details_ticket.issue();
        self.send(Command::FetchDetails {
            ticket,
            movie_id,
            delay_ms: MODAL_REOPEN_DELAY_MS,
        });
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.view {
            View::Browse => &mut self.query,
            View::ByMovie => &mut self.movie_title,
            View::ByUser => &mut self.user_id,
        }
    }

    fn results_scroll_mut(&mut self) -> &mut u16 {
        match self.view {
            View::ByUser => &mut self.user_scroll,
            _ => &mut self.movie_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GENERIC_FETCH_ERROR, MovieDetails};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn summary(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            vote_average: 7.0,
        }
    }

    fn bundle(title: &str, similar_ids: &[u64]) -> MovieDetailsBundle {
        MovieDetailsBundle {
            details: MovieDetails {
                title: title.to_string(),
                poster_path: String::new(),
                overview: String::new(),
                release_date: String::new(),
                vote_average: 8.0,
                vote_count: 10,
                runtime: 120,
                genres: Vec::new(),
            },
            cast: Vec::new(),
            similar: similar_ids.iter().map(|&id| summary(id, "Similar")).collect(),
        }
    }

    fn movie_rec(title: &str) -> MovieRecommendation {
        MovieRecommendation {
            title: title.to_string(),
            poster_path: String::new(),
            overview: String::new(),
            similarity_score: 90.0,
            vote_average: 8.0,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = App::new();
        assert_eq!(app.view, View::Browse);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::ByMovie);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::ByUser);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::Browse);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.view, View::ByUser);
    }

    #[test]
    fn test_number_keys_jump_to_view() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.view, View::ByUser);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.view, View::Browse);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Char('j')));
        assert!(!app.show_help);
        assert_eq!(app.view, View::Browse);
    }

    #[test]
    fn test_editing_fills_active_buffer() {
        let mut app = App::new();
        app.view = View::ByMovie;
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "Up!".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.movie_title, "Up");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.movie_title, "Up");
    }

    #[test]
    fn test_enter_submits_movie_form() {
        let (mut app, mut cmd_rx) = App::with_channels();
        app.view = View::ByMovie;
        app.movie_title = "Inception".to_string();
        app.input_mode = InputMode::Editing;

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.movie_recs, FetchState::Loading);
        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            Command::RecommendByMovie {
                ticket: 1,
                movie_title: "Inception".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_form_submits_as_typed() {
        // No client-side validation; the server reports missing input
        let (mut app, mut cmd_rx) = App::with_channels();
        app.view = View::ByUser;
        app.submit_user_form();

        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            Command::RecommendByUser {
                ticket: 1,
                user_id: String::new(),
            }
        );
    }

    #[test]
    fn test_search_results_loaded() {
        let mut app = App::new();
        app.submit_search();
        assert_eq!(app.search, FetchState::Loading);

        app.handle_message(Message::SearchDone {
            ticket: 1,
            result: Ok(vec![summary(1, "Alien"), summary(2, "Aliens")]),
        });

        match &app.search {
            FetchState::Loaded(movies) => assert_eq!(movies.len(), 2),
            other => panic!("expected loaded results, got {:?}", other),
        }
        assert_eq!(app.status_msg, "2 movies found");
        assert_eq!(app.browse_selected, 0);
    }

    #[test]
    fn test_stale_search_result_dropped() {
        let mut app = App::new();
        app.submit_search(); // ticket 1
        app.submit_search(); // ticket 2

        app.handle_message(Message::SearchDone {
            ticket: 1,
            result: Ok(vec![summary(1, "Old")]),
        });
        assert_eq!(app.search, FetchState::Loading);

        app.handle_message(Message::SearchDone {
            ticket: 2,
            result: Ok(vec![summary(2, "New")]),
        });
        match &app.search {
            FetchState::Loaded(movies) => assert_eq!(movies[0].title, "New"),
            other => panic!("expected loaded results, got {:?}", other),
        }
    }

    #[test]
    fn test_details_last_request_wins() {
        let mut app = App::new();
        app.open_movie(1); // ticket 1
        app.open_movie(2); // ticket 2

        // A superseded reply never touches the modal, in any arrival order
        app.handle_message(Message::DetailsDone {
            ticket: 1,
            movie_id: 1,
            result: Ok(bundle("Old", &[])),
        });
        assert!(app.detail.is_none());

        app.handle_message(Message::DetailsDone {
            ticket: 2,
            movie_id: 2,
            result: Ok(bundle("New", &[])),
        });
        assert_eq!(app.detail.as_ref().unwrap().title, "New");

        app.handle_message(Message::DetailsDone {
            ticket: 1,
            movie_id: 1,
            result: Ok(bundle("Old", &[])),
        });
        assert_eq!(app.detail.as_ref().unwrap().title, "New");
    }

    #[test]
    fn test_opening_replaces_previous_modal() {
        let mut app = App::new();
        app.open_movie(1);
        app.handle_message(Message::DetailsDone {
            ticket: 1,
            movie_id: 1,
            result: Ok(bundle("First", &[10, 11])),
        });
        app.similar_selected = 1;
        app.detail_scroll = 7;

        app.open_movie(2);
        app.handle_message(Message::DetailsDone {
            ticket: 2,
            movie_id: 2,
            result: Ok(bundle("Second", &[])),
        });

        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.title, "Second");
        assert!(detail.similar.is_empty());
        assert_eq!(app.similar_selected, 0);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_similar_selection_closes_then_refetches_delayed() {
        let (mut app, mut cmd_rx) = App::with_channels();
        app.handle_message(Message::DetailsDone {
            ticket: 0,
            movie_id: 1,
            result: Ok(bundle("Seed", &[42, 43])),
        });
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.similar_selected, 1);

        app.handle_key(key(KeyCode::Enter));

        assert!(app.detail.is_none());
        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            Command::FetchDetails {
                ticket: 1,
                movie_id: 43,
                delay_ms: MODAL_REOPEN_DELAY_MS,
            }
        );
    }

    #[test]
    fn test_browse_enter_opens_selected_movie() {
        let (mut app, mut cmd_rx) = App::with_channels();
        app.submit_search();
        let _ = cmd_rx.try_recv();
        app.handle_message(Message::SearchDone {
            ticket: 1,
            result: Ok(vec![summary(603, "The Matrix"), summary(604, "Reloaded")]),
        });

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            Command::FetchDetails {
                ticket: 1,
                movie_id: 604,
                delay_ms: 0,
            }
        );
    }

    #[test]
    fn test_backend_error_shows_server_text() {
        let mut app = App::new();
        app.submit_movie_form();
        app.handle_message(Message::MovieRecsDone {
            ticket: 1,
            result: Err(ApiError::Backend("Movie title is required".to_string())),
        });
        assert_eq!(app.movie_recs, FetchState::Failed("Movie title is required".to_string()));
    }

    #[test]
    fn test_other_errors_show_generic_text() {
        let mut app = App::new();
        app.submit_user_form();
        app.handle_message(Message::UserRecsDone {
            ticket: 1,
            result: Err(ApiError::Malformed("success response without payload")),
        });
        assert_eq!(app.user_recs, FetchState::Failed(GENERIC_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_details_failure_is_silent() {
        let mut app = App::new();
        app.status_msg = "3 movies found".to_string();
        app.open_movie(7);
        app.handle_message(Message::DetailsDone {
            ticket: 1,
            movie_id: 7,
            result: Err(ApiError::Backend("Movie not found".to_string())),
        });

        assert!(app.detail.is_none());
        assert_eq!(app.status_msg, "3 movies found");
    }

    #[test]
    fn test_recs_become_cards() {
        let mut app = App::new();
        app.submit_movie_form();
        app.handle_message(Message::MovieRecsDone {
            ticket: 1,
            result: Ok(vec![movie_rec("Interstellar")]),
        });

        match &app.movie_recs {
            FetchState::Loaded(cards) => {
                assert_eq!(cards[0].title, "Interstellar");
                assert_eq!(cards[0].score, "Similarity: 90% | Rating: ⭐ 8/10");
            }
            other => panic!("expected loaded cards, got {:?}", other),
        }
    }

    #[test]
    fn test_modal_captures_keys() {
        let mut app = App::new();
        app.handle_message(Message::DetailsDone {
            ticket: 0,
            movie_id: 1,
            result: Ok(bundle("Seed", &[1, 2, 3])),
        });

        // Tab would switch views if the modal were not open
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::Browse);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.detail.is_none());
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::ByMovie);
    }

    #[test]
    fn test_browse_esc_clears_query_and_results() {
        let mut app = App::new();
        app.query = "alien".to_string();
        app.submit_search();
        app.handle_message(Message::SearchDone {
            ticket: 1,
            result: Ok(vec![summary(1, "Alien")]),
        });

        app.handle_key(key(KeyCode::Esc));
        assert!(app.query.is_empty());
        assert_eq!(app.search, FetchState::Idle);
    }

    #[test]
    fn test_form_scroll_bounds() {
        let mut app = App::new();
        app.view = View::ByMovie;
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.movie_scroll, 0);
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.movie_scroll, 11);
        app.handle_key(key(KeyCode::PageUp));
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.movie_scroll, 0);
    }
}

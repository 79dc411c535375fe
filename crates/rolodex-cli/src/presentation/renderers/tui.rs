//! Interactive screen for the contact book.
//!
//! The renderer owns UI-only state (mode, search query, selection, form
//! fields, status banner, footer clock) and talks to the controller over two
//! channels: [`UiCommand`] out, [`TuiEvent`] in. It never calls the network
//! itself, so every failure leaves the screen interactive.

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::presentation::presenters::present_roster;
use crate::presentation::view_models::{ContactDraft, FormState, StatusBadge};
use crate::presentation::views::tui::{ConfirmView, FormView, RosterView, StatusBarView};
use rolodex_types::{filter_contacts, sort_by_name, Contact};

/// Events sent from the controller to the renderer.
pub enum TuiEvent {
    /// A fresh snapshot of the backend list, with its load timestamp
    Snapshot {
        contacts: Vec<Contact>,
        refreshed_at: String,
    },
    /// Update the status banner
    Status(StatusBadge),
    /// The pending form submit succeeded; close the form
    FormClosed,
}

/// Commands sent from the renderer to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Reload,
    Create(ContactDraft),
    Update { name: String, draft: ContactDraft },
    Delete(String),
    Quit,
}

enum Mode {
    Browse,
    Search,
    AddForm(FormState),
    EditForm { original: String, form: FormState },
    ConfirmDelete(String),
}

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const CLOCK_REFRESH: Duration = Duration::from_secs(60);

pub struct TuiRenderer {
    contacts: Vec<Contact>,
    mode: Mode,
    query: String,
    selected: usize,
    status: Option<StatusBadge>,
    clock: String,
    clock_tick: Instant,
    should_quit: bool,
    cmd_tx: Sender<UiCommand>,
}

impl TuiRenderer {
    pub fn new(cmd_tx: Sender<UiCommand>) -> Self {
        Self {
            contacts: Vec::new(),
            mode: Mode::Browse,
            query: String::new(),
            selected: 0,
            status: None,
            clock: crate::presentation::formatters::time::now_clock(),
            clock_tick: Instant::now(),
            should_quit: false,
            cmd_tx,
        }
    }

    /// Set up the terminal, run the event loop, restore the terminal.
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            if self.clock_tick.elapsed() >= CLOCK_REFRESH {
                self.clock = crate::presentation::formatters::time::now_clock();
                self.clock_tick = Instant::now();
            }

            terminal.draw(|f| self.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            loop {
                match rx.try_recv() {
                    Ok(tui_event) => self.apply_event(tui_event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                let _ = self.cmd_tx.send(UiCommand::Quit);
                break;
            }
        }

        Ok(())
    }

    fn apply_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Snapshot {
                contacts,
                refreshed_at,
            } => {
                self.contacts = contacts;
                self.clock = refreshed_at;
                self.clock_tick = Instant::now();
                self.clamp_selection();
            }
            TuiEvent::Status(badge) => {
                self.status = Some(badge);
            }
            TuiEvent::FormClosed => {
                if matches!(self.mode, Mode::AddForm(_) | Mode::EditForm { .. }) {
                    self.mode = Mode::Browse;
                }
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Take the mode out so transitions can consume form state without
        // fighting the borrow of self
        let mode = std::mem::replace(&mut self.mode, Mode::Browse);
        self.mode = match mode {
            Mode::Browse => self.on_browse_key(key),
            Mode::Search => self.on_search_key(key),
            Mode::AddForm(form) => self.on_add_key(key, form),
            Mode::EditForm { original, form } => self.on_edit_key(key, original, form),
            Mode::ConfirmDelete(name) => self.on_confirm_key(key, name),
        };
    }

    fn on_browse_key(&mut self, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                Mode::Browse
            }
            KeyCode::Char('/') => Mode::Search,
            KeyCode::Char('a') => Mode::AddForm(FormState::empty()),
            KeyCode::Char('e') => match self.selected_contact() {
                Some(c) => Mode::EditForm {
                    original: c.name.clone(),
                    form: FormState::prefilled(&c.name, &c.phone, &c.email),
                },
                None => Mode::Browse,
            },
            KeyCode::Char('d') => match self.selected_contact() {
                Some(c) => Mode::ConfirmDelete(c.name.clone()),
                None => Mode::Browse,
            },
            KeyCode::Char('r') => {
                let _ = self.cmd_tx.send(UiCommand::Reload);
                Mode::Browse
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Mode::Browse
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
                Mode::Browse
            }
            KeyCode::Home => {
                self.selected = 0;
                Mode::Browse
            }
            _ => Mode::Browse,
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Mode::Browse,
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
                Mode::Search
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected = 0;
                Mode::Search
            }
            _ => Mode::Search,
        }
    }

    fn on_add_key(&mut self, key: KeyEvent, mut form: FormState) -> Mode {
        match key.code {
            KeyCode::Esc => Mode::Browse,
            KeyCode::Enter => {
                // Form stays open until the controller confirms; failed
                // submits keep the input for correction
                let _ = self.cmd_tx.send(UiCommand::Create(form.draft.clone()));
                Mode::AddForm(form)
            }
            _ => {
                edit_form(&mut form, key);
                Mode::AddForm(form)
            }
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent, original: String, mut form: FormState) -> Mode {
        match key.code {
            KeyCode::Esc => Mode::Browse,
            KeyCode::Enter => {
                let _ = self.cmd_tx.send(UiCommand::Update {
                    name: original.clone(),
                    draft: form.draft.clone(),
                });
                Mode::EditForm { original, form }
            }
            _ => {
                edit_form(&mut form, key);
                Mode::EditForm { original, form }
            }
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent, name: String) -> Mode {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let _ = self.cmd_tx.send(UiCommand::Delete(name));
                Mode::Browse
            }
            _ => Mode::Browse,
        }
    }

    /// The contact under the cursor, in filtered+sorted display order.
    fn selected_contact(&self) -> Option<Contact> {
        self.visible().into_iter().nth(self.selected)
    }

    fn visible(&self) -> Vec<Contact> {
        sort_by_name(&filter_contacts(&self.contacts, &self.query))
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Contact list
            Constraint::Length(3), // Status banner + summary footer
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

        self.render_search(f, chunks[0]);

        let roster = present_roster(&self.contacts, &self.query);
        let selection = if roster.rows.is_empty() {
            None
        } else {
            Some(self.selected.min(roster.rows.len() - 1))
        };
        f.render_widget(RosterView::new(&roster, selection), chunks[1]);

        f.render_widget(
            StatusBarView::new(self.status.as_ref(), roster.total, roster.shown, &self.clock),
            chunks[2],
        );

        f.render_widget(Paragraph::new(self.help_line()), chunks[3]);

        match &self.mode {
            Mode::AddForm(form) => f.render_widget(FormView::new("Add contact", form), f.area()),
            Mode::EditForm { form, .. } => {
                f.render_widget(FormView::new("Edit contact", form), f.area())
            }
            Mode::ConfirmDelete(name) => f.render_widget(ConfirmView::new(name), f.area()),
            Mode::Browse | Mode::Search => {}
        }
    }

    fn render_search(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let searching = matches!(self.mode, Mode::Search);
        let border_style = if searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let cursor = if searching { "█" } else { "" };

        let search = Paragraph::new(Line::from(vec![
            Span::raw(self.query.as_str()),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Search "),
        );
        f.render_widget(search, area);
    }

    fn help_line(&self) -> Line<'static> {
        let keys: &[(&str, &str)] = match self.mode {
            Mode::Browse => &[
                ("[q]", "uit "),
                ("[/]", "search "),
                ("[a]", "dd "),
                ("[e]", "dit "),
                ("[d]", "elete "),
                ("[r]", "efresh "),
                ("[j/k]", "select"),
            ],
            Mode::Search => &[("[Esc]", " done "), ("[Enter]", " done")],
            Mode::AddForm(_) | Mode::EditForm { .. } => &[
                ("[Tab]", " next field "),
                ("[Enter]", " submit "),
                ("[Esc]", " cancel"),
            ],
            Mode::ConfirmDelete(_) => &[("[y]", " delete "), ("[n/Esc]", " cancel")],
        };

        let mut spans = Vec::new();
        for (key, rest) in keys {
            spans.push(Span::styled(
                key.to_string(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::styled(
                rest.to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    }
}

fn edit_form(form: &mut FormState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.insert(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn renderer_with(contacts: Vec<Contact>) -> (TuiRenderer, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel();
        let mut renderer = TuiRenderer::new(tx);
        renderer.contacts = contacts;
        (renderer, rx)
    }

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Bob", "555", "bob@x.com").unwrap(),
            Contact::new("alice", "777", "a@x.com").unwrap(),
        ]
    }

    #[test]
    fn q_quits_and_notifies_controller() {
        let (mut renderer, rx) = renderer_with(Vec::new());
        renderer.handle_key_event(key(KeyCode::Char('q')));
        assert!(renderer.should_quit);
        // Quit is sent from the event loop, not the key handler
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn r_sends_reload() {
        let (mut renderer, rx) = renderer_with(Vec::new());
        renderer.handle_key_event(key(KeyCode::Char('r')));
        assert_eq!(rx.try_recv().unwrap(), UiCommand::Reload);
    }

    #[test]
    fn submit_from_add_form_sends_create_and_keeps_form_open() {
        let (mut renderer, rx) = renderer_with(Vec::new());
        renderer.handle_key_event(key(KeyCode::Char('a')));
        for c in "Eve".chars() {
            renderer.handle_key_event(key(KeyCode::Char(c)));
        }
        renderer.handle_key_event(key(KeyCode::Enter));

        match rx.try_recv().unwrap() {
            UiCommand::Create(draft) => assert_eq!(draft.name, "Eve"),
            other => panic!("expected Create, got {:?}", other),
        }
        assert!(matches!(renderer.mode, Mode::AddForm(_)));
    }

    #[test]
    fn form_closed_event_returns_to_browse() {
        let (mut renderer, _rx) = renderer_with(Vec::new());
        renderer.handle_key_event(key(KeyCode::Char('a')));
        renderer.apply_event(TuiEvent::FormClosed);
        assert!(matches!(renderer.mode, Mode::Browse));
    }

    #[test]
    fn edit_opens_prefilled_for_selected_row() {
        let (mut renderer, _rx) = renderer_with(sample());
        // display order is alice, Bob; select second row
        renderer.handle_key_event(key(KeyCode::Down));
        renderer.handle_key_event(key(KeyCode::Char('e')));
        match &renderer.mode {
            Mode::EditForm { original, form } => {
                assert_eq!(original, "Bob");
                assert_eq!(form.draft.phone, "555");
            }
            _ => panic!("expected edit form"),
        }
    }

    #[test]
    fn delete_requires_confirmation_before_sending() {
        let (mut renderer, rx) = renderer_with(sample());
        renderer.handle_key_event(key(KeyCode::Char('d')));
        assert!(rx.try_recv().is_err(), "no command before confirmation");
        renderer.handle_key_event(key(KeyCode::Char('y')));
        assert_eq!(rx.try_recv().unwrap(), UiCommand::Delete("alice".into()));
    }

    #[test]
    fn confirmation_can_be_declined() {
        let (mut renderer, rx) = renderer_with(sample());
        renderer.handle_key_event(key(KeyCode::Char('d')));
        renderer.handle_key_event(key(KeyCode::Char('n')));
        assert!(rx.try_recv().is_err());
        assert!(matches!(renderer.mode, Mode::Browse));
    }

    #[test]
    fn search_narrows_selection_scope() {
        let (mut renderer, _rx) = renderer_with(sample());
        renderer.handle_key_event(key(KeyCode::Char('/')));
        for c in "bob".chars() {
            renderer.handle_key_event(key(KeyCode::Char(c)));
        }
        renderer.handle_key_event(key(KeyCode::Enter));
        renderer.handle_key_event(key(KeyCode::Char('e')));
        match &renderer.mode {
            Mode::EditForm { original, .. } => assert_eq!(original, "Bob"),
            _ => panic!("expected edit form for the only match"),
        }
    }

    #[test]
    fn snapshot_clamps_selection() {
        let (mut renderer, _rx) = renderer_with(sample());
        renderer.selected = 1;
        renderer.apply_event(TuiEvent::Snapshot {
            contacts: vec![Contact::new("Solo", "1", "s@x.com").unwrap()],
            refreshed_at: "2026-01-01 00:00".into(),
        });
        assert_eq!(renderer.selected, 0);
        assert_eq!(renderer.clock, "2026-01-01 00:00");
    }
}

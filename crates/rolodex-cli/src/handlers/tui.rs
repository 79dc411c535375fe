//! Controller for the interactive screen.
//!
//! The controller owns the in-memory contact snapshot and is the only place
//! that mutates it. It executes commands from the renderer one at a time, so
//! every reload is serialized: a mutation's reload always completes before
//! its success banner is emitted, and two loads can never race.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Result;

use crate::presentation::formatters::time::now_clock;
use crate::presentation::renderers::{TuiEvent, TuiRenderer, UiCommand};
use crate::presentation::view_models::{ContactDraft, StatusBadge};
use rolodex_client::ApiClient;
use rolodex_types::Contact;

/// Seam between the controller and the network layer; lets tests drive the
/// controller against a scripted backend.
trait ContactApi {
    fn list(&self) -> rolodex_client::Result<Vec<Contact>>;
    fn create(&self, contact: &Contact) -> rolodex_client::Result<()>;
    fn update(&self, name: &str, contact: &Contact) -> rolodex_client::Result<()>;
    fn delete(&self, name: &str) -> rolodex_client::Result<()>;
}

impl ContactApi for ApiClient {
    fn list(&self) -> rolodex_client::Result<Vec<Contact>> {
        ApiClient::list(self)
    }

    fn create(&self, contact: &Contact) -> rolodex_client::Result<()> {
        ApiClient::create(self, contact)
    }

    fn update(&self, name: &str, contact: &Contact) -> rolodex_client::Result<()> {
        ApiClient::update(self, name, contact)
    }

    fn delete(&self, name: &str) -> rolodex_client::Result<()> {
        ApiClient::delete(self, name)
    }
}

/// Spawn the renderer thread and run the controller loop on this one.
pub fn handle(client: ApiClient) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel(); // Controller -> Renderer
    let (cmd_tx, cmd_rx) = mpsc::channel(); // Renderer -> Controller

    let ui_handle = thread::spawn(move || TuiRenderer::new(cmd_tx).run(event_rx));

    let result = run_controller(&client, event_tx, cmd_rx);

    match ui_handle.join() {
        Ok(ui_result) => ui_result?,
        Err(e) => eprintln!("TUI thread panicked: {:?}", e),
    }

    result
}

fn run_controller(
    client: &dyn ContactApi,
    tx: Sender<TuiEvent>,
    rx: Receiver<UiCommand>,
) -> Result<()> {
    let mut controller = Controller::new(client, tx);

    // Initial load
    if controller.refresh() {
        controller.loaded_status();
    }

    while let Ok(command) = rx.recv() {
        if !controller.apply(command) {
            break;
        }
    }

    Ok(())
}

struct Controller<'a> {
    client: &'a dyn ContactApi,
    contacts: Vec<Contact>,
    tx: Sender<TuiEvent>,
}

impl<'a> Controller<'a> {
    fn new(client: &'a dyn ContactApi, tx: Sender<TuiEvent>) -> Self {
        Self {
            client,
            contacts: Vec::new(),
            tx,
        }
    }

    /// Returns false on Quit.
    fn apply(&mut self, command: UiCommand) -> bool {
        match command {
            UiCommand::Quit => return false,
            UiCommand::Reload => {
                if self.refresh() {
                    self.loaded_status();
                }
            }
            UiCommand::Create(draft) => self.create(draft),
            UiCommand::Update { name, draft } => self.update(name, draft),
            UiCommand::Delete(name) => self.delete(name),
        }
        true
    }

    /// Replace the snapshot with the backend's current state. On failure the
    /// previous snapshot stays on screen and a connection error is reported.
    fn refresh(&mut self) -> bool {
        match self.client.list() {
            Ok(contacts) => {
                self.contacts = contacts;
                self.send(TuiEvent::Snapshot {
                    contacts: self.contacts.clone(),
                    refreshed_at: now_clock(),
                });
                true
            }
            Err(_) => {
                self.status(StatusBadge::error("Error connecting to server"));
                false
            }
        }
    }

    fn create(&mut self, draft: ContactDraft) {
        let Ok(contact) = Contact::new(draft.name, draft.phone, draft.email) else {
            self.status(StatusBadge::warning("All fields are required"));
            return;
        };

        match self.client.create(&contact) {
            Ok(()) => {
                // Exactly one full reload before the success banner
                self.refresh();
                self.send(TuiEvent::FormClosed);
                self.status(StatusBadge::success("Contact added"));
            }
            // Form stays open; the input is preserved for correction
            Err(e) => self.status(StatusBadge::error(e.to_string())),
        }
    }

    fn update(&mut self, name: String, draft: ContactDraft) {
        let Ok(contact) = Contact::new(draft.name, draft.phone, draft.email) else {
            self.status(StatusBadge::warning("All fields are required"));
            return;
        };

        match self.client.update(&name, &contact) {
            Ok(()) => {
                self.refresh();
                self.send(TuiEvent::FormClosed);
                self.status(StatusBadge::success("Contact updated"));
            }
            Err(e) => self.status(StatusBadge::error(e.to_string())),
        }
    }

    fn delete(&mut self, name: String) {
        match self.client.delete(&name) {
            Ok(()) => {
                self.refresh();
                self.status(StatusBadge::success("Contact deleted"));
            }
            // Recoverable: report and keep the last observed list, no reload
            Err(e) => self.status(StatusBadge::error(e.to_string())),
        }
    }

    fn loaded_status(&self) {
        self.status(StatusBadge::success(format!(
            "Loaded {} contacts",
            self.contacts.len()
        )));
    }

    fn status(&self, badge: StatusBadge) {
        self.send(TuiEvent::Status(badge));
    }

    fn send(&self, event: TuiEvent) {
        // Ignore errors if the renderer has quit
        let _ = self.tx.send(event);
    }
}

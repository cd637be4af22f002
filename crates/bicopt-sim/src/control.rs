//! Serialized control loop.
//!
//! Platform timers, physics contact callbacks and UI input may arrive on
//! different threads. They all send [`HostCommand`]s through a cloneable
//! [`ControlHandle`]; a single background thread owns the [`GameSession`]
//! and applies commands strictly in arrival order.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use bicopt_core::commands::HostCommand;
use bicopt_core::enums::HostileKind;
use bicopt_core::events::{ContactEvent, SessionEvent};
use bicopt_core::state::SessionSnapshot;
use bicopt_core::types::TickTicket;

use crate::session::GameSession;

#[derive(Debug)]
enum ControlMessage {
    Command(HostCommand),
    Snapshot(mpsc::Sender<SessionSnapshot>),
    DrainEvents(mpsc::Sender<Vec<SessionEvent>>),
    Shutdown,
}

/// Cloneable sender for host input. Sends never block.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    tx: mpsc::Sender<ControlMessage>,
}

/// Sink the scene host uses to report physics contacts from its own thread.
#[derive(Debug, Clone)]
pub struct ContactSink {
    tx: mpsc::Sender<ControlMessage>,
}

/// Owns the control thread.
pub struct ControlLoop {
    handle: ControlHandle,
    thread: Option<JoinHandle<GameSession>>,
}

impl ControlHandle {
    /// Queue a command. Returns false once the loop has shut down.
    pub fn send(&self, command: HostCommand) -> bool {
        self.tx.send(ControlMessage::Command(command)).is_ok()
    }

    pub fn confirm_placement(&self) -> bool {
        self.send(HostCommand::ConfirmPlacement)
    }

    pub fn fire(&self) -> bool {
        self.send(HostCommand::Fire)
    }

    pub fn tick(&self, dt: f64) -> bool {
        self.send(HostCommand::Tick { dt })
    }

    pub fn contact(&self, event: ContactEvent) -> bool {
        self.send(HostCommand::Contact { event })
    }

    pub fn spawner_tick(&self, kind: HostileKind, ticket: TickTicket) -> bool {
        self.send(HostCommand::SpawnerTick { kind, ticket })
    }

    pub fn contact_sink(&self) -> ContactSink {
        ContactSink {
            tx: self.tx.clone(),
        }
    }

    /// Snapshot taken after every command queued before this call.
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx.send(ControlMessage::Snapshot(reply_tx)).ok()?;
        reply_rx.recv().ok()
    }

    /// Session events emitted since the last drain.
    pub fn drain_events(&self) -> Vec<SessionEvent> {
        let (reply_tx, reply_rx) = mpsc::channel();
        if self.tx.send(ControlMessage::DrainEvents(reply_tx)).is_err() {
            return Vec::new();
        }
        reply_rx.recv().unwrap_or_default()
    }
}

impl ContactSink {
    /// Marshal a contact onto the control thread.
    pub fn report(&self, event: ContactEvent) -> bool {
        self.tx
            .send(ControlMessage::Command(HostCommand::Contact { event }))
            .is_ok()
    }
}

impl ControlLoop {
    /// Move `session` onto a control thread and hand its scene host a
    /// contact sink.
    pub fn spawn(mut session: GameSession) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = ControlHandle { tx };
        session.subscribe_contacts(handle.contact_sink());

        let thread = thread::spawn(move || run_loop(rx, session));

        Self {
            handle,
            thread: Some(thread),
        }
    }

    pub fn handle(&self) -> ControlHandle {
        self.handle.clone()
    }

    /// Stop the thread after draining queued commands and return the
    /// session. `None` if the control thread panicked.
    pub fn shutdown(mut self) -> Option<GameSession> {
        let thread = self.thread.take()?;
        self.handle.tx.send(ControlMessage::Shutdown).ok();
        match thread.join() {
            Ok(session) => Some(session),
            Err(_) => {
                log::error!("Control thread panicked");
                None
            }
        }
    }
}

impl Drop for ControlLoop {
    fn drop(&mut self) {
        if let Some(thread) = self.thread.take() {
            self.handle.tx.send(ControlMessage::Shutdown).ok();
            let _ = thread.join();
        }
    }
}

fn run_loop(rx: mpsc::Receiver<ControlMessage>, mut session: GameSession) -> GameSession {
    while let Ok(message) = rx.recv() {
        match message {
            ControlMessage::Command(command) => session.apply(command),
            ControlMessage::Snapshot(reply) => {
                let _ = reply.send(session.snapshot());
            }
            ControlMessage::DrainEvents(reply) => {
                let _ = reply.send(session.drain_events());
            }
            ControlMessage::Shutdown => break,
        }
    }
    session
}

//! The session controller that owns the conversation log and drives
//! one model request at a time.
use tokio::sync::mpsc;

use crate::core::SessionConfig;
use crate::gemini::{self, Role};

use super::context::build_context;
use super::models::{Message, MessageLog};

/// Assistant greeting seeded into every new session.
pub const GREETING: &str = "¡Bienvenido al futuro de los viajes! Soy tu copiloto MANATURY, potenciado por IA generativa avanzada. ¿Qué destino exploraremos hoy?";

/// Shown when the model answers but the reply carries no usable text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "Mis sensores han detectado una anomalía en el flujo temporal. ¿Podrías reformular tu consulta?";

/// Shown when the model request fails outright.
pub const FAILURE_FALLBACK: &str =
    "Error de sincronización con la red neural de Manatury. Por favor, reintenta la conexión.";

/// Change notifications for the presentation layer. Published after
/// every log append and every busy transition so a subscriber can
/// redraw without polling.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    MessageAppended(Message),
    BusyChanged(bool),
}

/// A single conversation with the travel copilot.
///
/// The log is append-only and mutated exclusively here; the busy flag
/// guarantees at most one model request in flight, so assistant
/// replies land in the same order their user turns were submitted.
/// Failures never escape `submit` as errors: they become a fixed
/// fallback turn so the conversation stays renderable.
///
/// Use `Session::builder()` to construct a valid `Session`.
pub struct Session {
    config: SessionConfig,
    log: MessageLog,
    busy: bool,
    // Token for the single in-flight request slot
    turn: u64,
    events: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl Session {
    pub fn builder(config: SessionConfig) -> SessionBuilder {
        SessionBuilder::new(config)
    }

    /// The full ordered conversation, read-only.
    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    /// True exactly while a model request is outstanding.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Runs one user turn. Input that is empty after trimming, or a
    /// call arriving while a request is already in flight, is rejected
    /// silently with no log mutation. Every accepted submit appends
    /// the user turn and, eventually, exactly one assistant turn:
    /// the model's reply, or a fixed fallback when the reply is empty
    /// or the request fails.
    pub async fn submit(&mut self, text: &str) {
        if text.trim().is_empty() || self.busy {
            return;
        }

        // The context covers the log as it was before this turn; the
        // pending text rides along as a synthetic final entry.
        let contents = build_context(&self.log, text);

        self.append(Message::new(Role::User, text));
        self.set_busy(true);
        self.turn += 1;
        let token = self.turn;

        let result = gemini::generate_content(
            &contents,
            &self.config.system_instruction,
            &self.config.api_hostname,
            &self.config.api_key,
            &self.config.model,
        )
        .await;

        // A completion is only applied when it belongs to the request
        // currently in flight; a stale one is dropped.
        if token == self.turn {
            let reply = match result {
                Ok(response) => match gemini::response_text(&response) {
                    Some(text) if !text.trim().is_empty() => text,
                    _ => EMPTY_REPLY_FALLBACK.to_string(),
                },
                Err(error) => {
                    tracing::error!("Model request failed: {:#}", error);
                    FAILURE_FALLBACK.to_string()
                }
            };
            self.append(Message::new(Role::Assistant, &reply));
        }

        self.set_busy(false);
    }

    fn append(&mut self, msg: Message) {
        self.log.push(msg.clone());
        self.publish(SessionEvent::MessageAppended(msg));
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.publish(SessionEvent::BusyChanged(busy));
    }

    fn publish(&self, event: SessionEvent) {
        // A dropped receiver must not affect the session
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}

pub struct SessionBuilder {
    config: SessionConfig,
    events: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            events: None,
        }
    }

    /// Subscribes the given channel to session change notifications.
    pub fn events(mut self, transmitter: mpsc::UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(transmitter);
        self
    }

    pub fn build(self) -> Session {
        let mut session = Session {
            config: self.config,
            log: MessageLog::new(),
            busy: false,
            turn: 0,
            events: self.events,
        };
        session.append(Message::new(Role::Assistant, GREETING));
        session
    }
}

//! # Calculator Session
//!
//! One session owns one engine for one user, created fresh at session
//! start and dropped at session end; nothing persists in between.
//!
//! A session can be driven directly through [`Session::handle_key`],
//! or spawned onto the runtime with [`Session::spawn`]:
//!
//! ```text
//! ┌────┐  Key (mpsc)  ┌─────────┐  display (watch)  ┌──────────┐
//! │ UI │─────────────▶│ Session │──────────────────▶│ Renderer │
//! └────┘              └─────────┘                   └──────────┘
//! ```
//!
//! The run loop handles keys strictly one at a time, so at most one
//! evaluation is ever in flight for a given state instance; a second
//! evaluation cannot start while one is outstanding.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    config::CalculatorConfig,
    engine::CalculatorEngine,
    evaluator::{EvalError, Evaluator, EvaluatorRegistry},
    keys::Key,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Evaluator error: {0}")]
    Eval(#[from] EvalError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// One interactive calculator session.
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    engine: CalculatorEngine,
}

/// Channel endpoints of a spawned session.
pub struct SessionHandle {
    pub id: Uuid,
    pub keys: mpsc::Sender<Key>,
    pub display: watch::Receiver<String>,
    pub task: JoinHandle<SessionResult<()>>,
}

impl Session {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            engine: CalculatorEngine::new(evaluator),
        }
    }

    /// Build a session wired to the registry's primary evaluator.
    pub async fn from_registry(registry: &EvaluatorRegistry) -> SessionResult<Self> {
        let evaluator = registry.get_primary().await?;
        Ok(Self::new(evaluator))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn display(&self) -> &str {
        self.engine.display()
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub async fn handle_key(&mut self, key: Key) -> String {
        self.engine.handle_key(key).await.to_string()
    }

    /// Drive the session from a key event channel.
    ///
    /// Each resulting display value is published for rendering. The
    /// loop ends when the key channel closes or the last display
    /// watcher is dropped.
    #[instrument(level = "debug", skip(self, keys, display), fields(session_id = %self.id))]
    pub async fn run(
        mut self,
        mut keys: mpsc::Receiver<Key>,
        display: watch::Sender<String>,
    ) -> SessionResult<()> {
        debug!("session started");
        while let Some(key) = keys.recv().await {
            let rendered = self.engine.handle_key(key).await.to_string();
            if display.send(rendered).is_err() {
                debug!("all display watchers dropped, stopping");
                break;
            }
        }
        debug!("session finished");
        Ok(())
    }

    /// Spawn a session onto the runtime, returning its channel ends.
    pub async fn spawn(
        config: &CalculatorConfig,
        registry: &EvaluatorRegistry,
    ) -> SessionResult<SessionHandle> {
        let session = Self::from_registry(registry).await?;
        let id = session.id();
        let (key_tx, key_rx) = mpsc::channel(config.key_buffer_size);
        let (display_tx, display_rx) = watch::channel(session.display().to_string());
        let task = tokio::spawn(session.run(key_rx, display_tx));
        Ok(SessionHandle {
            id,
            keys: key_tx,
            display: display_rx,
            task,
        })
    }
}

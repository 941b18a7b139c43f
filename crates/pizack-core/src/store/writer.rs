//! Background writer applying collection snapshots to storage in order.

use std::sync::Arc;

use log::{debug, error};
use tokio::{
    sync::{mpsc, oneshot},
    task::{self, JoinHandle},
};

use crate::{
    error::{PizackError, Result},
    storage::{Storage, STORAGE_KEY},
};

/// Outcome of the most recent write; `Err` carries the failure message.
type WriteOutcome = std::result::Result<(), String>;

enum Command {
    Save(String),
    Flush(oneshot::Sender<WriteOutcome>),
}

/// Handle to the writer task. Dropping every handle lets the task drain its
/// queue and exit.
pub(crate) struct Writer {
    tx: mpsc::UnboundedSender<Command>,
    handle: JoinHandle<WriteOutcome>,
}

impl Writer {
    /// Spawn the writer task on the current runtime.
    pub(crate) fn spawn(storage: Arc<dyn Storage>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(storage, rx));
        Self { tx, handle }
    }

    pub(crate) fn save(&self, snapshot: String) {
        if self.tx.send(Command::Save(snapshot)).is_err() {
            error!("Order writer has stopped; snapshot dropped");
        }
    }

    /// Wait for every queued snapshot, then report whether the newest one
    /// reached storage.
    pub(crate) async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(ack_tx))
            .map_err(|_| stopped())?;
        let outcome = ack_rx.await.map_err(|_| stopped())?;
        outcome.map_err(save_failed)
    }

    pub(crate) async fn shutdown(self) -> Result<()> {
        drop(self.tx);
        let outcome = self.handle.await.map_err(|e| PizackError::Configuration {
            message: format!("Task join error: {e}"),
        })?;
        outcome.map_err(save_failed)
    }
}

fn stopped() -> PizackError {
    PizackError::Configuration {
        message: "Order writer has stopped".to_string(),
    }
}

fn save_failed(message: String) -> PizackError {
    PizackError::SaveFailed { message }
}

async fn run(storage: Arc<dyn Storage>, mut rx: mpsc::UnboundedReceiver<Command>) -> WriteOutcome {
    // Each snapshot is the whole collection, so only the newest write decides
    // whether storage matches memory.
    let mut last: WriteOutcome = Ok(());

    while let Some(command) = rx.recv().await {
        let mut latest = match command {
            Command::Save(snapshot) => snapshot,
            Command::Flush(ack) => {
                let _ = ack.send(last.clone());
                continue;
            }
        };

        // Coalesce queued saves; flushes queued behind a snapshot are
        // acknowledged once it is written.
        let mut acks: Vec<oneshot::Sender<WriteOutcome>> = Vec::new();
        while let Ok(next) = rx.try_recv() {
            match next {
                Command::Save(snapshot) if acks.is_empty() => latest = snapshot,
                Command::Save(snapshot) => {
                    last = write(&storage, latest).await;
                    for ack in acks.drain(..) {
                        let _ = ack.send(last.clone());
                    }
                    latest = snapshot;
                }
                Command::Flush(ack) => acks.push(ack),
            }
        }

        last = write(&storage, latest).await;
        for ack in acks {
            let _ = ack.send(last.clone());
        }
    }
    debug!("Order writer stopped");
    last
}

async fn write(storage: &Arc<dyn Storage>, snapshot: String) -> WriteOutcome {
    let storage = Arc::clone(storage);
    let outcome = task::spawn_blocking(move || storage.set_item(STORAGE_KEY, &snapshot)).await;

    match outcome {
        Ok(Ok(())) => {
            debug!("Persisted orders under '{STORAGE_KEY}'");
            Ok(())
        }
        Ok(Err(e)) => {
            error!("Failed to persist orders: {e}");
            Err(e.to_string())
        }
        Err(e) => {
            error!("Order write task failed: {e}");
            Err(format!("write task failed: {e}"))
        }
    }
}

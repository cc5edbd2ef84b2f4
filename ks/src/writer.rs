//! Single-writer save queue
//!
//! A spawned actor owns the write side of a [`KeyStore`] key. Callers
//! enqueue full snapshots without blocking; the actor writes them
//! sequentially, so durable storage always converges on the newest
//! submitted snapshot regardless of how slow the backing store is.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::KeyStore;

enum WriteCommand {
    /// A full snapshot to persist
    Put(String),
    /// Reply once every snapshot submitted before this point is on disk
    Flush(oneshot::Sender<()>),
}

/// Handle to a spawned snapshot writer.
///
/// Clones share the same queue. Dropping every handle stops the writer
/// after it drains the remaining backlog.
#[derive(Debug, Clone)]
pub struct WriterHandle {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl WriterHandle {
    /// Enqueue a snapshot. Fire-and-forget: never blocks, never fails from
    /// the caller's point of view. A write error is logged by the actor and
    /// the snapshot is dropped.
    pub fn submit(&self, snapshot: String) {
        if self.tx.send(WriteCommand::Put(snapshot)).is_err() {
            warn!("Snapshot writer stopped, dropping save");
        }
    }

    /// Wait until everything submitted so far has been written (or dropped
    /// after a logged failure).
    pub async fn flush(&self) {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(reply_tx)).is_ok() {
            let _ = reply_rx.await;
        }
    }
}

/// Spawn a writer actor for one key of the given store.
pub fn spawn(store: KeyStore, key: impl Into<String>) -> WriterHandle {
    let key = key.into();
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(writer_loop(store, key, rx));
    WriterHandle { tx }
}

async fn writer_loop(store: KeyStore, key: String, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(cmd) = rx.recv().await {
        let mut latest = None;
        let mut flushes = Vec::new();
        collect(cmd, &mut latest, &mut flushes);

        // Drain the backlog before writing; every snapshot is the full
        // sequence, so only the newest needs to reach disk.
        while let Ok(cmd) = rx.try_recv() {
            collect(cmd, &mut latest, &mut flushes);
        }

        if let Some(snapshot) = latest {
            if let Err(e) = store.set(&key, &snapshot).await {
                warn!(%key, error = %e, "Failed to write snapshot");
            }
        }

        for reply in flushes {
            let _ = reply.send(());
        }
    }

    debug!(%key, "Snapshot writer stopped");
}

fn collect(cmd: WriteCommand, latest: &mut Option<String>, flushes: &mut Vec<oneshot::Sender<()>>) {
    match cmd {
        WriteCommand::Put(snapshot) => *latest = Some(snapshot),
        WriteCommand::Flush(reply) => flushes.push(reply),
    }
}

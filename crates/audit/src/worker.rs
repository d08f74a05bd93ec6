//! Background audit worker
//!
//! Producers call [`AuditWorker::publish`], which only ever does a
//! `try_send`. One tokio task drains the channel into the log.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::event::AuditEvent;
use crate::sink::AuditSink;

/// Default queue capacity
pub const DEFAULT_AUDIT_BUFFER: usize = 200;

/// Bounded, drop-on-full audit queue with a single consumer task
pub struct AuditWorker {
    tx: mpsc::Sender<AuditEvent>,
    /// Taken by the consumer task on `start`
    rx: Mutex<Option<mpsc::Receiver<AuditEvent>>>,
    stop_tx: watch::Sender<bool>,
    events: Arc<Mutex<Vec<AuditEvent>>>,
    dropped: AtomicU64,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AuditWorker {
    /// Create a stopped worker with room for `buffer` pending events
    pub fn new(buffer: usize) -> Self {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        let (stop_tx, _) = watch::channel(false);

        Self {
            tx,
            rx: Mutex::new(Some(rx)),
            stop_tx,
            events: Arc::new(Mutex::new(Vec::new())),
            dropped: AtomicU64::new(0),
            task: Mutex::new(None),
        }
    }

    /// Spawn the consumer task. Must be called from within a tokio runtime.
    ///
    /// Calling it again is a no-op.
    pub fn start(&self) {
        let Some(rx) = self.rx.lock().take() else {
            debug!("audit worker already started");
            return;
        };

        let stop_rx = self.stop_tx.subscribe();
        let events = Arc::clone(&self.events);
        let handle = tokio::spawn(consume(rx, stop_rx, events));

        *self.task.lock() = Some(handle);
        info!("audit worker started");
    }

    /// Signal the consumer to stop. Events still queued are discarded.
    pub fn stop(&self) {
        let was_stopped = self.stop_tx.send_replace(true);
        if !was_stopped {
            info!("audit worker stopping");
        }
    }

    /// Stop and wait for the consumer task to exit
    pub async fn shutdown(&self) {
        self.stop();
        let handle = self.task.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                debug!("audit worker task ended abnormally: {}", e);
            }
        }
    }

    /// Try to enqueue; drops the event when the queue is full or closed
    pub fn publish(&self, event: AuditEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) | Err(TrySendError::Closed(event)) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(
                    student_id = %event.student_id,
                    course_id = %event.course_id,
                    dropped,
                    "audit event dropped"
                );
            }
        }
    }

    /// Snapshot of consumed events, in consumption order
    pub fn list(&self) -> Vec<AuditEvent> {
        self.events.lock().clone()
    }

    /// Number of consumed events
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of events lost to a full or closed queue
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for AuditWorker {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_BUFFER)
    }
}

impl AuditSink for AuditWorker {
    fn publish(&self, event: AuditEvent) {
        AuditWorker::publish(self, event);
    }
}

/// Consumer loop; the stop signal wins over pending events
async fn consume(
    mut rx: mpsc::Receiver<AuditEvent>,
    mut stop_rx: watch::Receiver<bool>,
    events: Arc<Mutex<Vec<AuditEvent>>>,
) {
    if *stop_rx.borrow_and_update() {
        return;
    }

    loop {
        tokio::select! {
            biased;

            _ = stop_rx.changed() => break,

            event = rx.recv() => match event {
                Some(event) => events.lock().push(event),
                None => break,
            },
        }
    }

    info!("audit worker stopped");
}

use std::sync::Arc;
use std::thread::JoinHandle;

use log::{info, warn};
use parking_lot::{Condvar, Mutex};
use thiserror::Error;

/// Failure to reach the native backend. These never surface to the user; the
/// board keeps working purely client-side.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("native backend unavailable: {0}")]
    Unavailable(String),
    #[error("native backend rejected mode change: {0}")]
    Rejected(String),
}

/// Connection to the native backend process. The only call the board makes
/// is the annotation-mode toggle, which lets the backend reconfigure window
/// transparency and click-through.
pub trait NativeBridge: Send + 'static {
    fn set_annotation_mode(&mut self, active: bool) -> Result<(), BridgeError>;
}

/// Default bridge for standalone runs: logs the mode change and succeeds.
pub struct LogBridge;

impl NativeBridge for LogBridge {
    fn set_annotation_mode(&mut self, active: bool) -> Result<(), BridgeError> {
        info!("annotation mode -> {active}");
        Ok(())
    }
}

/// Requests the board makes of its host shell. Both are boolean-valued
/// requests, not queries; the host may ignore them.
pub struct HostHooks {
    /// Ask the host to show (`true`) or hide (`false`) its own chrome.
    pub chrome: Box<dyn FnMut(bool)>,
    /// Ask the host to close/unmount the board.
    pub close: Box<dyn FnMut()>,
}

impl HostHooks {
    pub fn noop() -> Self {
        Self {
            chrome: Box::new(|_| {}),
            close: Box::new(|| {}),
        }
    }
}

#[derive(Default)]
struct Pending {
    mode: Option<bool>,
    shutdown: bool,
}

struct Shared {
    pending: Mutex<Pending>,
    signal: Condvar,
}

/// Fire-and-forget wrapper around a [`NativeBridge`].
///
/// Mode changes are delivered from a dedicated worker thread; rapid toggles
/// coalesce to the latest value. Delivery failures are logged and dropped —
/// no retry, no rollback of local state.
pub struct BridgeHandle {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl BridgeHandle {
    pub fn spawn(mut bridge: Box<dyn NativeBridge>) -> Self {
        let shared = Arc::new(Shared {
            pending: Mutex::new(Pending::default()),
            signal: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = std::thread::Builder::new()
            .name("bridge-notifier".into())
            .spawn(move || loop {
                let mode = {
                    let mut pending = worker_shared.pending.lock();
                    while pending.mode.is_none() && !pending.shutdown {
                        worker_shared.signal.wait(&mut pending);
                    }
                    if pending.mode.is_none() && pending.shutdown {
                        return;
                    }
                    pending.mode.take()
                };

                if let Some(active) = mode {
                    if let Err(err) = bridge.set_annotation_mode(active) {
                        warn!("backend mode notification failed: {err}");
                    }
                }
            })
            .expect("failed to spawn bridge notifier thread");

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queue an annotation-mode change. Never blocks, never fails.
    pub fn notify(&self, active: bool) {
        let mut pending = self.shared.pending.lock();
        pending.mode = Some(active);
        self.shared.signal.notify_one();
    }
}

impl Drop for BridgeHandle {
    fn drop(&mut self) {
        {
            let mut pending = self.shared.pending.lock();
            pending.shutdown = true;
            self.shared.signal.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

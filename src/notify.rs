//! Single-slot transient notifications.
//!
//! A [`Notifier`] holds at most one visible [`Notice`]. Showing a new notice
//! replaces the current one and cancels its pending auto-dismiss. Each
//! notifier is an independent value; surfaces that must share one slot share
//! a clone.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// How long a notice stays up unless told otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub kind: NoticeKind,
    /// Zero keeps the notice up until dismissed or replaced.
    pub duration: Duration,
}

#[derive(Default)]
struct Slot {
    current: Option<Notice>,
    dismiss_task: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(task) = self.dismiss_task.take() {
            task.abort();
        }
    }
}

/// Owns the one active notice and its dismiss timer.
#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    runtime: Handle,
}

impl Notifier {
    /// Timers are spawned on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            runtime,
        }
    }

    /// Show a notice, replacing whatever is up. Returns the new notice's id.
    pub fn show(&self, message: impl Into<String>, kind: NoticeKind, duration: Duration) -> Uuid {
        let notice = Notice {
            id: Uuid::now_v7(),
            message: message.into(),
            kind,
            duration,
        };
        let id = notice.id;

        let mut slot = self.lock();
        slot.cancel_timer();
        tracing::debug!(%id, ?kind, ?duration, "showing notice");
        slot.current = Some(notice);

        if !duration.is_zero() {
            let weak = Arc::downgrade(&self.slot);
            slot.dismiss_task = Some(self.runtime.spawn(async move {
                tokio::time::sleep(duration).await;
                if let Some(shared) = weak.upgrade() {
                    let mut slot = shared.lock().unwrap_or_else(|e| e.into_inner());
                    // A newer notice may have taken the slot after this timer fired.
                    if slot.current.as_ref().is_some_and(|n| n.id == id) {
                        slot.current = None;
                        slot.dismiss_task = None;
                    }
                }
            }));
        }
        id
    }

    /// The notice currently up, if any.
    pub fn current(&self) -> Option<Notice> {
        self.lock().current.clone()
    }

    /// Clear the current notice and cancel its timer.
    pub fn dismiss(&self) {
        let mut slot = self.lock();
        slot.cancel_timer();
        slot.current = None;
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

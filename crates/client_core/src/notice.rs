use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use shared::domain::MessageKind;
use tokio::task::JoinHandle;

use crate::presenter::Presenter;

pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Single-slot transient message with replace-on-set auto clear.
///
/// Each `show` cancels the pending clear and schedules its own. The generation
/// counter keeps a timer that already woke up from clearing a newer message.
pub struct MessageSlot {
    presenter: Arc<dyn Presenter>,
    ttl: Duration,
    generation: Arc<AtomicU64>,
    pending_clear: Option<JoinHandle<()>>,
}

impl MessageSlot {
    pub fn new(presenter: Arc<dyn Presenter>, ttl: Duration) -> Self {
        Self {
            presenter,
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
            pending_clear: None,
        }
    }

    pub fn show(&mut self, kind: MessageKind, text: impl AsRef<str>) {
        self.cancel_pending();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.presenter.show_message(kind, text.as_ref());

        let presenter = self.presenter.clone();
        let current = self.generation.clone();
        let ttl = self.ttl;
        self.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if current.load(Ordering::SeqCst) == generation {
                presenter.clear_message();
            }
        }));
    }

    pub fn error(&mut self, text: impl AsRef<str>) {
        self.show(MessageKind::Error, text);
    }

    pub fn success(&mut self, text: impl AsRef<str>) {
        self.show(MessageKind::Success, text);
    }

    pub fn info(&mut self, text: impl AsRef<str>) {
        self.show(MessageKind::Info, text);
    }

    pub fn clear(&mut self) {
        self.cancel_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.presenter.clear_message();
    }

    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }
}

impl Drop for MessageSlot {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
#[path = "tests/notice_tests.rs"]
mod tests;

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

pub fn run_in_tokio<F>(f: F)
where
    F: Future + Send + 'static,
{
    let rt = Runtime::new().unwrap();
    rt.block_on(async move {
        f.await;
    });
    rt.shutdown_background();
}

/// Counts how many times a thunk handed to an `Either` operation ran.
#[derive(Default)]
pub struct Counter {
    calls: Cell<usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub target: String,
    pub level: Level,
    pub message: String,
}

/// A subscriber that records every event it sees.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }

    /// Runs `f` with this log installed as the thread's default subscriber.
    pub fn capture<T, F: FnOnce() -> T>(&self, f: F) -> T {
        tracing::subscriber::with_default(self.clone(), f)
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl Subscriber for EventLog {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            target: event.metadata().target().to_owned(),
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

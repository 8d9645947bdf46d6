//! Fallback sweep over a live form.
//!
//! Controlled inputs normalize themselves through [`crate::dispatch`]. Fields outside that
//! path opt in with a marker attribute (`data-uppercase` by default) and are upper-cased
//! in place by a [`Sweeper`], on a fixed interval and whenever the form changes shape.

use crate::policy::{CasePolicy, FieldDescriptor, FieldKind};
use cadastro_kernel::domain::config::CasingConfig;
use fxhash::FxHashMap;
use parking_lot::{Mutex, RwLock};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

const MUTATION_CAPACITY: usize = 64;
const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Caret or highlighted range, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    #[must_use]
    pub const fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[must_use]
    pub fn clamp(self, len: usize) -> Self {
        Self { start: self.start.min(len), end: self.end.min(len) }
    }
}

/// A field of a live form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputElement {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub selection: Option<Selection>,
    pub attributes: FxHashMap<String, String>,
}

impl InputElement {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            value: String::new(),
            selection: None,
            attributes: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    #[must_use]
    pub fn descriptor(&self) -> FieldDescriptor<'_> {
        FieldDescriptor::named(&self.name).with_id(Some(&self.id)).with_kind(self.kind)
    }

    fn replace_value(&mut self, value: String) {
        let len = value.chars().count();
        self.value = value;
        self.selection = self.selection.map(|selection| selection.clamp(len));
    }
}

/// Structural change notification, keyed by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMutation {
    Inserted(String),
    Removed(String),
}

/// Shared handle to the fields of one live form.
#[derive(Debug, Clone)]
pub struct FormDocument {
    elements: Arc<RwLock<Vec<InputElement>>>,
    mutations: broadcast::Sender<DocumentMutation>,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument {
    #[must_use]
    pub fn new() -> Self {
        let (mutations, _) = broadcast::channel(MUTATION_CAPACITY);
        Self { elements: Arc::new(RwLock::new(Vec::new())), mutations }
    }

    /// Adds an element, replacing any element with the same id.
    pub fn insert(&self, element: InputElement) -> Option<InputElement> {
        let id = element.id.clone();
        let replaced = {
            let mut elements = self.elements.write();
            match elements.iter_mut().find(|e| e.id == element.id) {
                Some(slot) => Some(std::mem::replace(slot, element)),
                None => {
                    elements.push(element);
                    None
                },
            }
        };
        self.notify(DocumentMutation::Inserted(id));
        replaced
    }

    pub fn remove(&self, id: &str) -> Option<InputElement> {
        let removed = {
            let mut elements = self.elements.write();
            let pos = elements.iter().position(|e| e.id == id)?;
            elements.remove(pos)
        };
        self.notify(DocumentMutation::Removed(id.to_owned()));
        Some(removed)
    }

    /// Simulates typing: replaces the value and puts the caret at the end.
    ///
    /// Value edits are not structural and publish no mutation.
    pub fn set_value(&self, id: &str, value: impl Into<String>) -> bool {
        let mut elements = self.elements.write();
        let Some(element) = elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        element.value = value.into();
        element.selection = Some(Selection::caret(element.value.chars().count()));
        true
    }

    pub fn set_selection(&self, id: &str, selection: Selection) -> bool {
        let mut elements = self.elements.write();
        let Some(element) = elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        element.selection = Some(selection.clamp(element.value.chars().count()));
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<InputElement> {
        self.elements.read().iter().find(|e| e.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DocumentMutation> {
        self.mutations.subscribe()
    }

    fn notify(&self, mutation: DocumentMutation) {
        // No subscribers is fine: nobody is sweeping this form.
        let _ = self.mutations.send(mutation);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepState {
    #[default]
    Idle,
    Scanning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Opted-in free-text fields looked at.
    pub scanned: usize,
    /// Fields whose value changed.
    pub transformed: usize,
}

/// Upper-cases opted-in fields of a [`FormDocument`] through a [`CasePolicy`].
#[derive(Debug, Clone)]
pub struct Sweeper {
    document: FormDocument,
    policy: Arc<CasePolicy>,
    marker: String,
    interval: Duration,
    state: Arc<Mutex<SweepState>>,
}

impl Sweeper {
    #[must_use]
    pub fn new(document: FormDocument, policy: Arc<CasePolicy>) -> Self {
        Self {
            document,
            policy,
            marker: cadastro_kernel::domain::constants::UPPERCASE_MARKER.to_owned(),
            interval: DEFAULT_INTERVAL,
            state: Arc::default(),
        }
    }

    /// Sweeper using the configured marker, interval and extra fragments.
    #[must_use]
    pub fn from_config(document: FormDocument, config: &CasingConfig) -> Self {
        let policy = CasePolicy::default().with_extra_fragments(&config.extra_preserve_fragments);
        Self::new(document, Arc::new(policy))
            .with_marker(config.opt_in_marker.clone())
            .with_interval(Duration::from_millis(config.sweep_interval_ms))
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the re-scan period. A zero period is raised to one millisecond.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    #[must_use]
    pub fn state(&self) -> SweepState {
        *self.state.lock()
    }

    #[must_use]
    pub const fn document(&self) -> &FormDocument {
        &self.document
    }

    /// One pass over the form.
    ///
    /// Only `text`, `search` and `textarea` fields carrying the marker are candidates;
    /// the policy still preserves denylisted names and ids among them.
    pub fn scan(&self) -> SweepReport {
        *self.state.lock() = SweepState::Scanning;

        let mut report = SweepReport::default();
        {
            let mut elements = self.document.elements.write();
            for element in elements.iter_mut() {
                if !element.kind.is_free_text() || !element.has_attribute(&self.marker) {
                    continue;
                }
                report.scanned += 1;

                let upper = match self.policy.transform(&element.descriptor(), &element.value) {
                    Cow::Owned(upper) => upper,
                    Cow::Borrowed(_) => continue,
                };
                trace!(id = %element.id, "Upper-casing field");
                element.replace_value(upper);
                report.transformed += 1;
            }
        }

        *self.state.lock() = SweepState::Idle;
        report
    }

    /// Runs [`Sweeper::scan`] on every tick and on every structural change until stopped.
    ///
    /// Must be called inside a tokio runtime. The first pass runs immediately.
    #[must_use]
    pub fn spawn(self) -> SweepHandle {
        let (stop, mut stopped) = watch::channel(false);
        let mut mutations = self.document.subscribe();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = stopped.changed() => break,
                    mutation = mutations.recv() => match mutation {
                        Ok(mutation) => trace!(?mutation, "Form changed"),
                        Err(RecvError::Lagged(skipped)) => trace!(skipped, "Form changes coalesced"),
                        Err(RecvError::Closed) => break,
                    },
                    _ = ticker.tick() => {},
                }

                let report = self.scan();
                if report.transformed > 0 {
                    debug!(scanned = report.scanned, transformed = report.transformed, "Sweep pass");
                }
            }

            debug!("Sweep stopped");
        });

        SweepHandle { stop, task }
    }
}

/// Owner of a running sweep. Dropping it stops the loop as well.
#[derive(Debug)]
pub struct SweepHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Clears the timer and waits for the loop to exit.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        if let Err(err) = self.task.await {
            warn!(error = %err, "Sweep task ended abnormally");
        }
    }
}

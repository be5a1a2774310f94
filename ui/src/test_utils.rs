//! Test doubles for the adapter, scheduler and storage seams.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::time::Duration;

use crate::core::storage::{PreferenceStore, StorageError};
use crate::core::timing::{Scheduler, Task};
use crate::i18n::{Binding, BindingAdapter, BindingError, LanguageCode, TransitionState};

/// Store whose every operation fails, as with storage disabled by the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled in test".into()))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "disabled in test".into(),
        })
    }
}

#[derive(Debug, Clone)]
struct FakeElement {
    markers: HashMap<String, String>,
    input: bool,
    attached: bool,
    content: String,
    attributes: HashMap<String, String>,
    state: TransitionState,
    history: Vec<TransitionState>,
}

impl FakeElement {
    fn new(marker: &str, key: &str) -> Self {
        Self {
            markers: HashMap::from([(marker.to_string(), key.to_string())]),
            input: false,
            attached: true,
            content: String::new(),
            attributes: HashMap::new(),
            state: TransitionState::Idle,
            history: Vec::new(),
        }
    }
}

/// In-memory document. Targets are element indices.
#[derive(Debug, Default)]
pub struct FakeAdapter {
    elements: RefCell<Vec<FakeElement>>,
    root_classes: RefCell<BTreeSet<String>>,
    language: RefCell<Option<String>>,
}

impl FakeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, element: FakeElement) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(element);
        elements.len() - 1
    }

    /// Element bound with `data-translate`, showing `initial`.
    pub fn add_content(&self, key: &str, initial: &str) -> usize {
        let mut element = FakeElement::new("data-translate", key);
        element.content = initial.to_string();
        self.push(element)
    }

    /// Input element bound with `data-translate`.
    pub fn add_input(&self, key: &str) -> usize {
        let mut element = FakeElement::new("data-translate", key);
        element.input = true;
        self.push(element)
    }

    /// Element bound only through a secondary marker.
    pub fn add_attribute(&self, marker: &str, key: &str) -> usize {
        self.push(FakeElement::new(marker, key))
    }

    pub fn detach(&self, id: usize) {
        self.elements.borrow_mut()[id].attached = false;
    }

    pub fn content(&self, id: usize) -> String {
        self.elements.borrow()[id].content.clone()
    }

    pub fn attribute(&self, id: usize, name: &str) -> Option<String> {
        self.elements.borrow()[id].attributes.get(name).cloned()
    }

    pub fn state(&self, id: usize) -> TransitionState {
        self.elements.borrow()[id].state
    }

    pub fn history(&self, id: usize) -> Vec<TransitionState> {
        self.elements.borrow()[id].history.clone()
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }

    pub fn document_language(&self) -> Option<String> {
        self.language.borrow().clone()
    }

    fn with_attached<R>(
        &self,
        id: usize,
        f: impl FnOnce(&mut FakeElement) -> R,
    ) -> Result<R, BindingError> {
        let mut elements = self.elements.borrow_mut();
        match elements.get_mut(id) {
            Some(element) if element.attached => Ok(f(element)),
            _ => Err(BindingError::Detached),
        }
    }
}

impl BindingAdapter for FakeAdapter {
    type Target = usize;

    fn query_by_marker(&self, marker: &str) -> Vec<Binding<usize>> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, element)| element.attached)
            .filter_map(|(id, element)| {
                element
                    .markers
                    .get(marker)
                    .map(|key| Binding::new(id, key.clone()))
            })
            .collect()
    }

    fn is_input(&self, target: &usize) -> bool {
        self.elements
            .borrow()
            .get(*target)
            .map(|element| element.input)
            .unwrap_or(false)
    }

    fn set_content(&self, target: &usize, text: &str) -> Result<(), BindingError> {
        self.with_attached(*target, |element| element.content = text.to_string())
    }

    fn set_attribute(&self, target: &usize, name: &str, text: &str) -> Result<(), BindingError> {
        self.with_attached(*target, |element| {
            element
                .attributes
                .insert(name.to_string(), text.to_string());
        })
    }

    fn apply_transition_state(
        &self,
        target: &usize,
        state: TransitionState,
    ) -> Result<(), BindingError> {
        self.with_attached(*target, |element| {
            element.state = state;
            element.history.push(state);
        })
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut classes = self.root_classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_document_language(&self, code: &LanguageCode) {
        *self.language.borrow_mut() = Some(code.to_string());
    }
}

/// Scheduler that queues work until a test drains it.
#[derive(Default)]
pub struct ManualScheduler {
    deferred: RefCell<VecDeque<Task>>,
    paint: RefCell<VecDeque<Task>>,
    timers: RefCell<VecDeque<(Duration, Task)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.borrow().len()
    }

    pub fn pending_paint(&self) -> usize {
        self.paint.borrow().len()
    }

    pub fn pending_timer_delays(&self) -> Vec<Duration> {
        self.timers.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run the deferred tasks queued so far.
    pub fn run_deferred(&self) {
        let batch: Vec<Task> = self.deferred.borrow_mut().drain(..).collect();
        for task in batch {
            task();
        }
    }

    /// Fire one animation frame: every paint callback queued so far.
    pub fn run_paint(&self) {
        let batch: Vec<Task> = self.paint.borrow_mut().drain(..).collect();
        for task in batch {
            task();
        }
    }

    /// Let all queued timers elapse, in the order they were scheduled.
    pub fn run_timers(&self) {
        let batch: Vec<(Duration, Task)> = self.timers.borrow_mut().drain(..).collect();
        for (_, task) in batch {
            task();
        }
    }

    /// Drain every queue until nothing is left.
    pub fn run_all(&self) {
        while self.pending_deferred() + self.pending_paint() + self.timers.borrow().len() > 0 {
            self.run_deferred();
            self.run_paint();
            self.run_timers();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer_once(&self, task: Task) {
        self.deferred.borrow_mut().push_back(task);
    }

    fn on_next_paint(&self, task: Task) {
        self.paint.borrow_mut().push_back(task);
    }

    fn after(&self, delay: Duration, task: Task) {
        self.timers.borrow_mut().push_back((delay, task));
    }
}

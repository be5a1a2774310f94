//! In-place re-rendering of translated markup.
//!
//! Elements opt in with a marker attribute whose value is a dictionary key
//! (`data-translate="home"`), or with a secondary marker that targets an
//! attribute (`data-translate-title="switch-lang"`). On every language change
//! the [`Orchestrator`] walks the live document through an adapter and stages
//! a short transition per element:
//!
//! ```text
//! Idle ─▶ Leaving ─(next turn: write text)─▶ Entering ─(next frame)─▶ Settling ─(settle)─▶ Idle
//! ```
//!
//! Passes may overlap when the language is switched quickly. Each pass takes a
//! new generation number and callbacks belonging to an older generation do
//! nothing, so only the newest pass finishes the transition.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use super::{LanguageCode, Resolver};
use crate::core::config::Markers;
use crate::core::timing::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionState {
    Idle,
    Leaving,
    Entering,
    Settling,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("element is no longer attached to the document")]
    Detached,
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// A live element together with the key read from its marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<T> {
    pub target: T,
    pub key: String,
}

impl<T> Binding<T> {
    pub fn new(target: T, key: impl Into<String>) -> Self {
        Self {
            target,
            key: key.into(),
        }
    }
}

/// UI-tree operations the orchestrator needs.
pub trait BindingAdapter {
    type Target: Clone + 'static;

    /// All currently attached elements carrying `marker`, in document order.
    fn query_by_marker(&self, marker: &str) -> Vec<Binding<Self::Target>>;
    /// Whether translations go into an attribute (placeholder) instead of content.
    fn is_input(&self, target: &Self::Target) -> bool;
    fn set_content(&self, target: &Self::Target, text: &str) -> Result<(), BindingError>;
    fn set_attribute(
        &self,
        target: &Self::Target,
        name: &str,
        text: &str,
    ) -> Result<(), BindingError>;
    fn apply_transition_state(
        &self,
        target: &Self::Target,
        state: TransitionState,
    ) -> Result<(), BindingError>;
    /// Add or remove a class on the document root.
    fn set_root_class(&self, class: &str, enabled: bool);
    /// Reflect the active language on the document root (`<html lang>`).
    fn set_document_language(&self, code: &LanguageCode);
}

/// Where a resolved string is written.
#[derive(Debug, Clone)]
enum Slot {
    Content,
    Attribute(String),
}

#[derive(Debug, Clone)]
struct Job<T> {
    binding: Binding<T>,
    slot: Slot,
}

pub struct Orchestrator<A: BindingAdapter> {
    adapter: Rc<A>,
    scheduler: Rc<dyn Scheduler>,
    markers: Markers,
    settle: Duration,
    generation: Rc<Cell<u64>>,
}

impl<A: BindingAdapter + 'static> Orchestrator<A> {
    pub fn new(
        adapter: Rc<A>,
        scheduler: Rc<dyn Scheduler>,
        markers: Markers,
        settle: Duration,
    ) -> Self {
        Self {
            adapter,
            scheduler,
            markers,
            settle,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn adapter(&self) -> &Rc<A> {
        &self.adapter
    }

    /// Generation of the most recently started pass.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Start a re-render pass for `resolver`'s language and return its generation.
    pub fn run_pass(&self, resolver: Resolver) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        debug!(
            "[i18n] pass #{generation} starting for `{}`",
            resolver.language()
        );

        self.adapter.set_root_class(&self.markers.pass_class, true);

        let mut jobs = Vec::new();
        for binding in self.adapter.query_by_marker(&self.markers.content) {
            jobs.push(Job {
                binding,
                slot: Slot::Content,
            });
        }
        for attribute in &self.markers.attributes {
            for binding in self.adapter.query_by_marker(&attribute.marker) {
                jobs.push(Job {
                    binding,
                    slot: Slot::Attribute(attribute.attribute.clone()),
                });
            }
        }

        // Flag everything as leaving now; content changes wait a turn so the
        // flag can paint first.
        jobs.retain(|job| {
            match self
                .adapter
                .apply_transition_state(&job.binding.target, TransitionState::Leaving)
            {
                Ok(()) => true,
                Err(err) => {
                    debug!("[i18n] skipping `{}`: {err}", job.binding.key);
                    false
                }
            }
        });

        let pass = Pass {
            adapter: Rc::clone(&self.adapter),
            scheduler: Rc::clone(&self.scheduler),
            input_attribute: self.markers.input_attribute.clone(),
            pass_class: self.markers.pass_class.clone(),
            settle: self.settle,
            latest: Rc::clone(&self.generation),
            generation,
            resolver,
        };
        self.scheduler
            .defer_once(Box::new(move || pass.swap_content(jobs)));

        generation
    }
}

impl<A: BindingAdapter> std::fmt::Debug for Orchestrator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("markers", &self.markers)
            .field("settle", &self.settle)
            .field("generation", &self.generation.get())
            .finish_non_exhaustive()
    }
}

/// State carried through the deferred stages of one pass.
struct Pass<A: BindingAdapter> {
    adapter: Rc<A>,
    scheduler: Rc<dyn Scheduler>,
    input_attribute: String,
    pass_class: String,
    settle: Duration,
    latest: Rc<Cell<u64>>,
    generation: u64,
    resolver: Resolver,
}

impl<A: BindingAdapter + 'static> Pass<A> {
    fn is_stale(&self) -> bool {
        self.latest.get() != self.generation
    }

    fn swap_content(self, jobs: Vec<Job<A::Target>>) {
        if self.is_stale() {
            debug!("[i18n] pass #{} superseded before writing", self.generation);
            return;
        }

        let mut entered = Vec::with_capacity(jobs.len());
        for job in jobs {
            let text = self.resolver.translate(&job.binding.key);
            let target = &job.binding.target;
            let written = match &job.slot {
                Slot::Content if self.adapter.is_input(target) => {
                    self.adapter
                        .set_attribute(target, &self.input_attribute, &text)
                }
                Slot::Content => self.adapter.set_content(target, &text),
                Slot::Attribute(name) => self.adapter.set_attribute(target, name, &text),
            };
            let staged = written.and_then(|()| {
                self.adapter
                    .apply_transition_state(target, TransitionState::Entering)
            });
            match staged {
                Ok(()) => entered.push(job.binding.target),
                Err(err) => debug!("[i18n] skipping `{}`: {err}", job.binding.key),
            }
        }

        let scheduler = Rc::clone(&self.scheduler);
        scheduler.on_next_paint(Box::new(move || self.begin_settling(entered)));
    }

    fn begin_settling(self, targets: Vec<A::Target>) {
        if self.is_stale() {
            return;
        }
        for target in &targets {
            let _ = self
                .adapter
                .apply_transition_state(target, TransitionState::Settling);
        }

        let scheduler = Rc::clone(&self.scheduler);
        let delay = self.settle;
        scheduler.after(delay, Box::new(move || self.finish(targets)));
    }

    fn finish(self, targets: Vec<A::Target>) {
        if self.is_stale() {
            return;
        }
        for target in &targets {
            let _ = self
                .adapter
                .apply_transition_state(target, TransitionState::Idle);
        }
        self.adapter.set_root_class(&self.pass_class, false);
        debug!("[i18n] pass #{} settled", self.generation);
    }
}

// controller.rs - Page visibility controller
//
// Shared single-threaded state behind Rc<RefCell<_>>. Facility callbacks
// and guards only hold Weak references, so observation never keeps the
// controller alive. Listeners run after the borrow is released.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{IntersectionEntry, IntersectionFacility, Registry, RevealedSet};
use crate::config::RevealConfig;
use crate::error::Result;

type Listener = Rc<dyn Fn(&str)>;

// Browsers report ratios a hair under the threshold that triggered them
const RATIO_SLACK: f64 = 1e-3;

struct State<F: IntersectionFacility> {
    config: RevealConfig,
    /// `None` when the host has no intersection facility.
    facility: Option<F>,
    registry: Registry<F::Handle>,
    revealed: RevealedSet,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

impl<F: IntersectionFacility> State<F> {
    /// Apply one batch; returns the ids revealed by it.
    fn apply<I>(&mut self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let mut fresh = Vec::new();
        for entry in entries {
            if !entry.is_intersecting
                || entry.intersection_ratio + RATIO_SLACK < self.config.threshold
            {
                continue;
            }
            if !self.registry.contains(&entry.id) {
                tracing::trace!(section = %entry.id, "notification for unregistered section");
                continue;
            }
            if self.revealed.reveal(&entry.id) {
                tracing::debug!(section = %entry.id, "section revealed");
                // Revealed is terminal, stop watching it
                if let (Some(facility), Some(handle)) =
                    (self.facility.as_mut(), self.registry.get(&entry.id))
                {
                    facility.unobserve(handle);
                }
                fresh.push(entry.id);
            }
        }
        fresh
    }

    fn listeners(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
    }
}

fn notify(listeners: &[Listener], ids: &[String]) {
    for id in ids {
        for listener in listeners {
            listener(id.as_str());
        }
    }
}

/// Tracks which sections have been revealed.
pub struct VisibilityController<F: IntersectionFacility> {
    state: Rc<RefCell<State<F>>>,
}

impl<F: IntersectionFacility> Clone for VisibilityController<F> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<F: IntersectionFacility> fmt::Debug for VisibilityController<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VisibilityController")
            .field("degraded", &state.facility.is_none())
            .field("registered", &state.registry.len())
            .field("revealed", &state.revealed.len())
            .finish()
    }
}

impl<F: IntersectionFacility + 'static> VisibilityController<F> {
    /// Build a controller and hand `connect` the sink its facility should
    /// push notifications into. A failed connect degrades the controller
    /// instead of failing.
    pub fn connect<C>(config: RevealConfig, connect: C) -> Self
    where
        C: FnOnce(&RevealConfig, NotificationSink<F>) -> Result<F>,
    {
        let controller = Self::degraded(config.clone());
        let sink = NotificationSink { state: Rc::downgrade(&controller.state) };
        match connect(&config, sink) {
            Ok(facility) => controller.state.borrow_mut().facility = Some(facility),
            Err(err) => {
                tracing::warn!(%err, "no intersection facility, sections reveal on registration")
            }
        }
        controller
    }

    /// Controller with no facility: every section reveals as it registers.
    pub fn degraded(config: RevealConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                config,
                facility: None,
                registry: Registry::new(),
                revealed: RevealedSet::new(),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.state.borrow().facility.is_none()
    }

    /// Start observing `handle` under `id`. A second registration for the
    /// same id replaces the first, whose region stops being observed.
    pub fn register_section(&self, id: &str, handle: F::Handle) -> SectionRegistration<F> {
        let (generation, fresh, listeners) = {
            let mut state = self.state.borrow_mut();
            let state = &mut *state;
            let (generation, prev) = state.registry.insert(id, handle);
            let already = state.revealed.contains(id);

            let fresh = match state.facility.as_mut() {
                Some(facility) => {
                    if let Some(prev) = prev {
                        tracing::debug!(section = %id, "section re-registered, replacing region");
                        facility.unobserve(&prev);
                    }
                    if !already {
                        if let Some(handle) = state.registry.get(id) {
                            facility.observe(handle);
                        }
                    }
                    false
                }
                None => state.revealed.reveal(id),
            };
            tracing::trace!(section = %id, generation, "section registered");
            (generation, fresh, state.listeners())
        };

        if fresh {
            notify(&listeners, &[id.to_string()]);
        }

        SectionRegistration {
            id: id.to_string(),
            generation,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Whether `id` has ever been seen in the viewport. Unknown ids are `false`.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.state.borrow().revealed.contains(id)
    }

    pub fn revealed_count(&self) -> usize {
        self.state.borrow().revealed.len()
    }

    pub fn revealed_ids(&self) -> Vec<String> {
        self.state.borrow().revealed.iter().map(str::to_string).collect()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.state.borrow().registry.contains(id)
    }

    pub fn registered_count(&self) -> usize {
        self.state.borrow().registry.len()
    }

    /// Call `listener` once for every section revealed from now on.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let key = {
            let mut state = self.state.borrow_mut();
            let key = state.next_listener;
            state.next_listener += 1;
            state.listeners.push((key, listener));
            key
        };

        let weak = Rc::downgrade(&self.state);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    match state.try_borrow_mut() {
                        Ok(mut state) => state.listeners.retain(|(k, _)| *k != key),
                        Err(_) => tracing::warn!("subscription dropped while controller busy"),
                    };
                }
            })),
        }
    }

    /// Feed a batch of intersection notifications.
    pub fn deliver<I>(&self, entries: I)
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        deliver(&self.state, entries);
    }

    /// Release all observation. The revealed set survives.
    pub fn teardown(&self) {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let released = state.registry.drain().count();
        if let Some(facility) = state.facility.as_mut() {
            facility.disconnect();
        }
        tracing::debug!(released, "reveal observation torn down");
    }
}

fn deliver<F, I>(state: &Rc<RefCell<State<F>>>, entries: I)
where
    F: IntersectionFacility,
    I: IntoIterator<Item = IntersectionEntry>,
{
    let Ok(mut guard) = state.try_borrow_mut() else {
        tracing::warn!("intersection batch delivered re-entrantly, dropped");
        return;
    };
    let fresh = guard.apply(entries);
    if fresh.is_empty() {
        return;
    }
    let listeners = guard.listeners();
    drop(guard);
    notify(&listeners, &fresh);
}

/// Where a facility pushes its notifications. Holds the controller weakly;
/// batches arriving after the controller is gone are discarded.
pub struct NotificationSink<F: IntersectionFacility> {
    state: Weak<RefCell<State<F>>>,
}

impl<F: IntersectionFacility> Clone for NotificationSink<F> {
    fn clone(&self) -> Self {
        Self { state: Weak::clone(&self.state) }
    }
}

impl<F: IntersectionFacility> NotificationSink<F> {
    pub fn deliver<I>(&self, entries: I)
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        if let Some(state) = self.state.upgrade() {
            deliver(&state, entries);
        }
    }
}

/// Scoped registration. Dropping it stops observing the section's region,
/// unless a later registration for the same id has replaced it.
pub struct SectionRegistration<F: IntersectionFacility> {
    id: String,
    generation: u64,
    state: Weak<RefCell<State<F>>>,
}

impl<F: IntersectionFacility> SectionRegistration<F> {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<F: IntersectionFacility> fmt::Debug for SectionRegistration<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRegistration")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<F: IntersectionFacility> Drop for SectionRegistration<F> {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else { return };
        let Ok(mut state) = state.try_borrow_mut() else {
            tracing::warn!(section = %self.id, "registration dropped while controller busy");
            return;
        };
        let state = &mut *state;
        if let Some(handle) = state.registry.remove_if_current(&self.id, self.generation) {
            if let Some(facility) = state.facility.as_mut() {
                facility.unobserve(&handle);
            }
            tracing::trace!(section = %self.id, "section unregistered");
        }
    }
}

/// Listener guard returned by [`VisibilityController::subscribe`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

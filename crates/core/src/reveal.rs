//! Scroll reveal state machine.
//!
//! Each observed element goes `Pending -> Revealed` the first time it intersects the
//! viewport at or beyond the threshold. `Revealed` is terminal: scrolling away does
//! not hide it again and further intersection events are ignored.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Something that watches elements and reveals them when they scroll into view.
pub trait RevealObserver {
    type Target;

    fn observe(&mut self, target: Self::Target);
}

/// Browsers may report the crossing ratio slightly under the configured threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Per-element reveal bookkeeping, keyed by whatever identifies an element.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    states: HashMap<K, RevealState>,
    order: Vec<K>,
}

impl<K> RevealTracker<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            states: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Start watching `key`. Keys already known keep their state.
    pub fn track(&mut self, key: K) {
        if !self.states.contains_key(&key) {
            self.states.insert(key.clone(), RevealState::Pending);
            self.order.push(key);
        }
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == RevealState::Pending)
            .count()
    }

    /// Feed one intersection event.
    ///
    /// Returns `true` only on the transition to `Revealed`; the caller applies the
    /// revealed presentation and stops observing the element.
    pub fn record_intersection(&mut self, key: &K, is_intersecting: bool, ratio: f64) -> bool {
        let Some(state) = self.states.get_mut(key) else {
            return false;
        };
        if *state == RevealState::Revealed
            || !is_intersecting
            || ratio + RATIO_TOLERANCE < self.threshold
        {
            return false;
        }
        *state = RevealState::Revealed;
        true
    }

    /// Reveal everything still pending, in observation order.
    ///
    /// Used when no intersection source exists: elements become statically visible.
    pub fn reveal_all(&mut self) -> Vec<K> {
        let mut revealed = Vec::new();
        for key in &self.order {
            if let Some(state) = self.states.get_mut(key) {
                if *state == RevealState::Pending {
                    *state = RevealState::Revealed;
                    revealed.push(key.clone());
                }
            }
        }
        revealed
    }
}

impl<K> RevealObserver for RevealTracker<K>
where
    K: Clone + Eq + Hash,
{
    type Target = K;

    fn observe(&mut self, target: K) {
        self.track(target);
    }
}

/// Observer that reveals every target as soon as it is observed.
pub struct StaticReveal<T, F> {
    reveal: F,
    _target: PhantomData<fn(T)>,
}

impl<T, F> StaticReveal<T, F>
where
    F: FnMut(T),
{
    pub fn new(reveal: F) -> Self {
        Self {
            reveal,
            _target: PhantomData,
        }
    }
}

impl<T, F> RevealObserver for StaticReveal<T, F>
where
    F: FnMut(T),
{
    type Target = T;

    fn observe(&mut self, target: T) {
        (self.reveal)(target);
    }
}

//! Generation-counted debouncing for fire-and-forget async tasks.
//!
//! DESIGN
//! ======
//! Every `arm` bumps the generation of its group and hands back a ticket.
//! After the quiet period the task runs only if its ticket still carries the
//! latest generation, so a burst of arms inside the period fires once, for
//! the last arm. Tasks already running are never cancelled.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

/// Boxed single-threaded task, ready for `spawn_local`.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// How debounce groups are formed from keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebounceScope {
    /// One quiet period per key; edits to different keys never cancel each other.
    #[default]
    PerField,
    /// One quiet period for every key; any new arm supersedes all pending ones.
    Shared,
}

impl DebounceScope {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "per-field" | "per_field" => Some(Self::PerField),
            "shared" => Some(Self::Shared),
            _ => None,
        }
    }
}

/// Source of delays for debounced tasks.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> LocalTask;
}

/// Browser timer sleeper. Off the browser it resolves immediately; nothing
/// debounced is driven during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    fn sleep(&self, duration: Duration) -> LocalTask {
        #[cfg(feature = "hydrate")]
        {
            Box::pin(gloo_timers::future::sleep(duration))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            Box::pin(std::future::ready(()))
        }
    }
}

type Generations<K> = Rc<RefCell<HashMap<Option<K>, u64>>>;

/// Debounce state shared by every task armed from one form.
#[derive(Debug)]
pub struct Debouncer<K> {
    delay: Duration,
    scope: DebounceScope,
    generations: Generations<K>,
}

impl<K> Clone for Debouncer<K> {
    fn clone(&self) -> Self {
        Self { delay: self.delay, scope: self.scope, generations: Rc::clone(&self.generations) }
    }
}

/// Proof of a single arm; stale once its group is armed again.
#[derive(Debug)]
pub struct DebounceTicket<K: Eq + Hash> {
    group: Option<K>,
    generation: u64,
    generations: Generations<K>,
}

impl<K: Eq + Hash> DebounceTicket<K> {
    pub fn is_current(&self) -> bool {
        self.generations.borrow().get(&self.group).copied() == Some(self.generation)
    }
}

impl<K: Clone + Eq + Hash + 'static> Debouncer<K> {
    pub fn new(delay: Duration, scope: DebounceScope) -> Self {
        Self { delay, scope, generations: Rc::new(RefCell::new(HashMap::new())) }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }

    /// Supersede every pending arm in `key`'s group.
    pub fn arm(&self, key: K) -> DebounceTicket<K> {
        let group = match self.scope {
            DebounceScope::PerField => Some(key),
            DebounceScope::Shared => None,
        };
        let generation = {
            let mut generations = self.generations.borrow_mut();
            let slot = generations.entry(group.clone()).or_insert(0);
            *slot += 1;
            *slot
        };
        DebounceTicket { group, generation, generations: Rc::clone(&self.generations) }
    }

    /// Arm `key` now and return a task that sleeps for the quiet period, then
    /// runs `task` only if no later arm superseded this one.
    pub fn debounce<S, F, Fut>(&self, key: K, sleeper: &S, task: F) -> LocalTask
    where
        S: Sleeper + ?Sized,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let ticket = self.arm(key);
        let quiet = sleeper.sleep(self.delay);
        Box::pin(async move {
            quiet.await;
            if ticket.is_current() {
                task().await;
            }
        })
    }
}

use super::*;

use futures::executor::block_on;

struct InstantSleeper {
    requested: RefCell<Vec<Duration>>,
}

impl InstantSleeper {
    fn new() -> Self {
        Self { requested: RefCell::new(Vec::new()) }
    }
}

impl Sleeper for InstantSleeper {
    fn sleep(&self, duration: Duration) -> LocalTask {
        self.requested.borrow_mut().push(duration);
        Box::pin(std::future::ready(()))
    }
}

fn recording_task(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> impl FnOnce() -> std::future::Ready<()> + 'static {
    let log = Rc::clone(log);
    move || {
        log.borrow_mut().push(label);
        std::future::ready(())
    }
}

// =============================================================
// DebounceScope
// =============================================================

#[test]
fn debounce_scope_default_is_per_field() {
    assert_eq!(DebounceScope::default(), DebounceScope::PerField);
}

#[test]
fn debounce_scope_parse_accepts_known_names() {
    assert_eq!(DebounceScope::parse("shared"), Some(DebounceScope::Shared));
    assert_eq!(DebounceScope::parse(" per-field "), Some(DebounceScope::PerField));
    assert_eq!(DebounceScope::parse("per_field"), Some(DebounceScope::PerField));
    assert_eq!(DebounceScope::parse("global"), None);
}

// =============================================================
// Tickets
// =============================================================

#[test]
fn ticket_is_current_until_group_rearmed() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::PerField);
    let first = debouncer.arm("name");
    assert!(first.is_current());
    let second = debouncer.arm("name");
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn per_field_tickets_are_independent() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::PerField);
    let name = debouncer.arm("name");
    let citizenship = debouncer.arm("citizenship");
    assert!(name.is_current());
    assert!(citizenship.is_current());
}

#[test]
fn shared_tickets_supersede_across_keys() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::Shared);
    let name = debouncer.arm("name");
    let citizenship = debouncer.arm("citizenship");
    assert!(!name.is_current());
    assert!(citizenship.is_current());
}

#[test]
fn clones_share_generations() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::PerField);
    let ticket = debouncer.arm("name");
    let _ = debouncer.clone().arm("name");
    assert!(!ticket.is_current());
}

// =============================================================
// debounce()
// =============================================================

#[test]
fn debounce_sleeps_for_configured_delay() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::PerField);
    let sleeper = InstantSleeper::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    block_on(debouncer.debounce("name", &sleeper, recording_task(&log, "name")));

    assert_eq!(*sleeper.requested.borrow(), vec![Duration::from_millis(500)]);
    assert_eq!(*log.borrow(), vec!["name"]);
}

#[test]
fn debounce_burst_runs_only_last_task() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::PerField);
    let sleeper = InstantSleeper::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = debouncer.debounce("name", &sleeper, recording_task(&log, "first"));
    let second = debouncer.debounce("name", &sleeper, recording_task(&log, "second"));
    block_on(first);
    block_on(second);

    assert_eq!(*log.borrow(), vec!["second"]);
}

#[test]
fn debounce_task_armed_after_previous_fired_still_runs() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::PerField);
    let sleeper = InstantSleeper::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    block_on(debouncer.debounce("name", &sleeper, recording_task(&log, "first")));
    block_on(debouncer.debounce("name", &sleeper, recording_task(&log, "second")));

    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn debounce_shared_scope_drops_other_field() {
    let debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500), DebounceScope::Shared);
    let sleeper = InstantSleeper::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let name = debouncer.debounce("name", &sleeper, recording_task(&log, "name"));
    let citizenship = debouncer.debounce("citizenship", &sleeper, recording_task(&log, "citizenship"));
    block_on(name);
    block_on(citizenship);

    assert_eq!(*log.borrow(), vec!["citizenship"]);
}

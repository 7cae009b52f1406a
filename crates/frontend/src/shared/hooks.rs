//! Reactive helpers shared by pages and components.

use leptos::prelude::*;
use std::time::Duration;

/// Bookkeeping of a debounced value: which scheduled timer, if any, may
/// still publish.
///
/// Every new value takes a fresh ticket, so a timer holding an older ticket
/// fires into nothing. Disposal closes the gate for all tickets.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DebounceGate {
    generation: u64,
    disposed: bool,
}

impl DebounceGate {
    /// Ticket for a timer started for the newest value
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn may_publish(&self, ticket: u64) -> bool {
        !self.disposed && ticket == self.generation
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

/// Follow `source` once it has been quiet for `delay`.
///
/// Every new value restarts the timer. A pending update is dropped when a
/// newer value arrives or when the owning component is disposed.
pub fn use_debounced<T>(source: Signal<T>, delay: Duration) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (debounced, set_debounced) = signal(source.get_untracked());
    let gate = StoredValue::new(DebounceGate::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let cancel_pending = move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        let value = source.get();
        cancel_pending();
        let Some(ticket) = gate.try_update_value(|g| g.schedule()) else {
            return;
        };
        let publish = move || {
            if gate.try_with_value(|g| g.may_publish(ticket)).unwrap_or(false) {
                set_debounced.set(value);
            }
        };
        match set_timeout_with_handle(publish, delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => log::warn!("Failed to schedule debounce timer: {:?}", e),
        }
    });

    on_cleanup(move || {
        gate.try_update_value(|g| g.dispose());
        cancel_pending();
    });

    debounced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_publishes() {
        let mut gate = DebounceGate::default();
        let ticket = gate.schedule();
        assert!(gate.may_publish(ticket));
    }

    #[test]
    fn test_new_value_restarts_and_drops_pending() {
        let mut gate = DebounceGate::default();
        let first = gate.schedule();
        let second = gate.schedule();
        assert!(!gate.may_publish(first));
        assert!(gate.may_publish(second));

        let third = gate.schedule();
        assert!(!gate.may_publish(second));
        assert!(gate.may_publish(third));
    }

    #[test]
    fn test_dispose_cancels_pending() {
        let mut gate = DebounceGate::default();
        let ticket = gate.schedule();
        gate.dispose();
        assert!(!gate.may_publish(ticket));

        let late = gate.schedule();
        assert!(!gate.may_publish(late));
    }
}

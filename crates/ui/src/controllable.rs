//! Controlled / uncontrolled state for hand-rolled components.
//!
//! When the owner passes a value the component is *controlled*: it renders
//! that value and only reports requested changes. Without a value the
//! component keeps its own state, seeded from a default.

use dioxus::prelude::*;

/// Outcome of a requested change.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    /// New local value to store, if any.
    pub local: Option<T>,
    /// Value to report through the change callback, if any.
    pub notify: Option<T>,
}

pub struct Controllable;

impl Controllable {
    /// The value to render this frame.
    pub fn resolve<'a, T>(prop: Option<&'a T>, local: &'a T) -> &'a T {
        prop.unwrap_or(local)
    }

    /// Decide what a request to change to `next` does.
    ///
    /// Controlled components never touch local state; the owner must feed
    /// the value back in. Requests equal to the current value are dropped.
    pub fn step<T: Clone + PartialEq>(prop: Option<&T>, local: &T, next: T) -> Step<T> {
        match prop {
            Some(current) => Step {
                local: None,
                notify: (*current != next).then_some(next),
            },
            None if *local == next => Step {
                local: None,
                notify: None,
            },
            None => Step {
                local: Some(next.clone()),
                notify: Some(next),
            },
        }
    }
}

/// Hook returning the value to render and a setter honoring the active mode.
///
/// `prop` is re-read on every render, so an owner can switch a value in or
/// out; the mode for a given render is decided by whether it is `Some`.
pub fn use_controllable<T: Clone + PartialEq + 'static>(
    prop: Option<T>,
    default: impl FnOnce() -> T,
    on_change: Option<Callback<T>>,
) -> (T, Callback<T>) {
    let mut local = use_signal(default);
    let mut latest = use_hook(|| CopyValue::new((prop.clone(), on_change)));
    latest.set((prop.clone(), on_change));

    let value = Controllable::resolve(prop.as_ref(), &*local.read()).clone();

    let setter = use_hook(move || {
        Callback::new(move |next: T| {
            let (prop, handler) = latest.read().clone();
            let current = local.peek().clone();
            let step = Controllable::step(prop.as_ref(), &current, next);
            if let Some(value) = step.local {
                local.set(value);
            }
            if let (Some(value), Some(handler)) = (step.notify, handler) {
                handler.call(value);
            }
        })
    });

    (value, setter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlled_change_only_notifies() {
        let step = Controllable::step(Some(&false), &false, true);
        assert_eq!(step.local, None);
        assert_eq!(step.notify, Some(true));
    }

    #[test]
    fn controlled_value_wins_over_local() {
        assert_eq!(*Controllable::resolve(Some(&3), &7), 3);
        assert_eq!(*Controllable::resolve(None, &7), 7);
    }

    #[test]
    fn controlled_repeat_of_current_value_is_dropped() {
        let step = Controllable::step(Some(&"a"), &"z", "a");
        assert_eq!(step, Step { local: None, notify: None });
    }

    #[test]
    fn uncontrolled_change_updates_local_and_notifies() {
        let step = Controllable::step(None, &false, true);
        assert_eq!(step.local, Some(true));
        assert_eq!(step.notify, Some(true));
    }

    #[test]
    fn uncontrolled_toggle_round_trips() {
        let mut value = false;
        for _ in 0..2 {
            let step = Controllable::step(None, &value, !value);
            value = step.local.expect("toggle changes local state");
        }
        assert!(!value);
    }

    #[test]
    fn controlled_callback_never_mutates_display() {
        // The owner ignores every request; the rendered value stays put.
        let prop = 1;
        let mut local = 1;
        for next in 2..6 {
            let step = Controllable::step(Some(&prop), &local, next);
            if let Some(v) = step.local {
                local = v;
            }
            assert_eq!(*Controllable::resolve(Some(&prop), &local), 1);
        }
    }
}

use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use student_portal::AppState;
use yew::prelude::*;

use crate::services::local_storage::LocalStorageStore;
use crate::services::logging::Logger;

/// How often pending follow-up toasts are checked
const TICK_MS: u32 = 100;

pub type PortalState = AppState<LocalStorageStore>;

/// Shared access to the portal state owned by the hosting component
#[derive(Clone)]
pub struct PortalHandle {
    state: Rc<RefCell<PortalState>>,
    force_update: UseForceUpdateHandle,
}

impl PortalHandle {
    /// Read from the current state
    pub fn with<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Mutate the state and re-render
    pub fn apply<R>(&self, f: impl FnOnce(&mut PortalState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.force_update.force_update();
        result
    }

    /// Build a callback that mutates the state with the event payload
    pub fn callback<IN, F>(&self, f: F) -> Callback<IN>
    where
        IN: 'static,
        F: Fn(&mut PortalState, IN) + 'static,
    {
        let handle = self.clone();
        Callback::from(move |input: IN| {
            handle.apply(|state| f(state, input));
        })
    }
}

/// Loads the portal state from localStorage once and drives its timers.
///
/// Pending follow-ups are cancelled when the component unmounts, so no toast
/// fires into a torn-down view.
#[hook]
pub fn use_portal() -> PortalHandle {
    let state = use_mut_ref(|| {
        Logger::info_with_component("use-portal", "Loading profile state from localStorage");
        AppState::new(LocalStorageStore)
    });
    let force_update = use_force_update();

    {
        let state = state.clone();
        let force_update = force_update.clone();

        use_effect_with((), move |_| {
            let ticking = state.clone();
            let interval = Interval::new(TICK_MS, move || {
                let fired = ticking
                    .borrow_mut()
                    .tick(Duration::from_millis(u64::from(TICK_MS)));
                if fired > 0 {
                    force_update.force_update();
                }
            });

            move || {
                drop(interval);
                let cancelled = state.borrow_mut().shutdown();
                if cancelled > 0 {
                    Logger::debug_with_component(
                        "use-portal",
                        &format!("Cancelled {} pending follow-up(s)", cancelled),
                    );
                }
            }
        });
    }

    PortalHandle {
        state,
        force_update,
    }
}

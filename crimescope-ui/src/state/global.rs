//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crimescope::Year;

/// Global application state provided to all components
///
/// The selected year is the only state the pages share: the dashboard and the
/// country detail view both refetch when it changes, so navigating between
/// them keeps the same year in focus.
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Indicator year selected in the dashboard controls
    pub year: RwSignal<Year>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        year: create_rw_signal(Year::default()),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_is_shared_through_context() {
        let runtime = create_runtime();

        provide_global_state();
        let state = use_context::<GlobalState>().expect("GlobalState not found");
        assert_eq!(state.year.get_untracked(), Year::default());

        // A write from one consumer is visible to every other
        let reader = use_context::<GlobalState>().expect("GlobalState not found");
        state.year.set(Year::new(2015).unwrap());
        assert_eq!(reader.year.get_untracked(), Year::new(2015).unwrap());

        runtime.dispose();
    }
}

//! Loading Component
//!
//! Full-page loading state shown while a fetch is in flight.

use leptos::*;

/// Full-page loading spinner with a message
#[component]
pub fn Loading(
    /// Primary message under the spinner
    message: &'static str,
    /// Smaller line describing what is being fetched
    #[prop(optional)]
    submessage: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <div class="loading-spinner w-10 h-10 mb-4" />
            <p class="text-lg font-medium text-slate-700">{message}</p>
            {submessage.map(|text| view! {
                <p class="text-sm text-slate-500 mt-1">{text}</p>
            })}
        </div>
    }
}

//! Error Panel Component
//!
//! Full-page error state with a recovery action.

use leptos::*;

/// Error panel with a title, detail message, and one action button
#[component]
pub fn ErrorPanel(
    /// Headline (e.g. "Error Loading Data")
    title: &'static str,
    /// Detail line, usually the fetch error text
    #[prop(into)]
    message: String,
    /// Label for the action button
    action_label: &'static str,
    /// Invoked when the action button is clicked
    on_action: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <div class="text-5xl mb-4">"⚠️"</div>
            <h2 class="text-2xl font-bold text-red-700 mb-2">{title}</h2>
            <p class="text-slate-600 mb-6 max-w-md">{message}</p>
            <button
                on:click=move |_| on_action()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                {action_label}
            </button>
        </div>
    }
}

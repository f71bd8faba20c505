//! Navigation Component
//!
//! Header bar with the brand linking back to the dashboard.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-slate-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌍"</span>
                        <span class="text-xl font-bold text-slate-900">"CrimeScope"</span>
                    </A>

                    <span class="text-sm text-slate-500 hidden sm:block">
                        "Global homicide rates by country"
                    </span>
                </div>
            </div>
        </nav>
    }
}

//! Rate Badge Component
//!
//! Color-coded homicide-rate badge. The background comes from the shared
//! diverging scale and the text flips to white on the dark end of the ramp.

use leptos::*;

use crimescope::color::RateScale;

/// Homicide rate rendered on the diverging green-to-red scale
#[component]
pub fn RateBadge(
    /// Rate in homicides per 100,000 people
    rate: f64,
    /// Scale shared by every badge in the current view
    scale: RateScale,
    /// Larger layout for the detail page
    #[prop(default = false)]
    large: bool,
) -> impl IntoView {
    let text_color = if scale.needs_light_text(rate) {
        "white"
    } else {
        "black"
    };
    let style = format!(
        "background-color: {}; color: {}",
        scale.color(rate),
        text_color
    );

    if large {
        view! {
            <span
                class="inline-block px-4 py-2 rounded-lg text-2xl font-bold"
                style=style
            >
                {format!("{:.2}", rate)}
                <span class="text-sm font-normal ml-2">"per 100,000 people"</span>
            </span>
        }
        .into_view()
    } else {
        view! {
            <span
                class="inline-block px-3 py-1 rounded-full text-sm font-semibold"
                style=style
            >
                {format!("{:.2}", rate)}
            </span>
        }
        .into_view()
    }
}

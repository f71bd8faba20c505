//! Country Detail Page
//!
//! Profile of one country with its homicide rate for the selected year.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crimescope::color::RateScale;
use crimescope::types::CountryDetail;

use crate::api;
use crate::components::{ErrorPanel, Loading, RateBadge};
use crate::format;
use crate::state::GlobalState;

/// Country detail page component
#[component]
pub fn Country() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let navigate = use_navigate();
    let navigate_for_error = navigate.clone();
    let navigate_for_back = navigate;

    let (detail, set_detail) = create_signal(None::<CountryDetail>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // Same stale-response guard as the dashboard
    let fetch_seq = store_value(0u64);

    // Fetch on mount and again when the route code or the year changes
    create_effect(move |_| {
        let code = params.with(|p| p.get("code").cloned()).unwrap_or_default();
        let year = state.year.get();
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_country_detail(&code, year).await;
            if fetch_seq.get_value() != seq {
                return;
            }

            match result {
                Ok(country) => set_detail.set(Some(country)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load country {}: {}", code, e).into(),
                    );
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            {move || {
                if loading.get() {
                    view! { <Loading message="Loading country details..." /> }.into_view()
                } else if let Some(message) = error.get() {
                    let navigate = navigate_for_error.clone();
                    view! {
                        <ErrorPanel
                            title="Error Loading Country"
                            message=message
                            action_label="Back to Dashboard"
                            on_action=move || navigate("/", Default::default())
                        />
                    }
                    .into_view()
                } else if let Some(country) = detail.get() {
                    let navigate = navigate_for_back.clone();
                    let year = state.year.get();
                    let capitals = if country.capitals.is_empty() {
                        None
                    } else {
                        Some(country.capitals.join(", "))
                    };

                    view! {
                        <div class="space-y-6">
                            <button
                                on:click=move |_| navigate("/", Default::default())
                                class="text-blue-600 hover:text-blue-800 font-medium"
                            >
                                "← Back to Dashboard"
                            </button>

                            // Flag and names
                            <div class="flex items-center space-x-5">
                                <img
                                    src=country.flag_url.clone()
                                    alt=format!("Flag of {}", country.name)
                                    class="w-24 rounded-lg shadow border border-slate-200"
                                />
                                <div>
                                    <h1 class="text-3xl font-bold">{country.name.clone()}</h1>
                                    <p class="text-slate-500 mt-1">{country.official_name.clone()}</p>
                                </div>
                            </div>

                            // Fact cards
                            <div class="grid sm:grid-cols-2 gap-4">
                                <DetailItem label="Region" value=country.region.clone() />
                                <DetailItem label="Subregion" value=country.subregion.clone() />
                                <DetailItem
                                    label="Population"
                                    value=format::thousands(country.population)
                                />
                                <DetailItem label="Capital" value=capitals />

                                <div class="bg-white rounded-xl p-4 border border-slate-200 sm:col-span-2">
                                    <p class="text-sm text-slate-500 mb-2">"Homicide Rate"</p>
                                    {match country.homicide_rate {
                                        Some(rate) => view! {
                                            <RateBadge
                                                rate=rate
                                                scale=RateScale::detail()
                                                large=true
                                            />
                                        }
                                        .into_view(),
                                        None => view! {
                                            <div>
                                                <p class="text-lg text-slate-400 italic">
                                                    "No homicide data available"
                                                </p>
                                                <p class="text-sm text-slate-400 mt-1">
                                                    {format!("for {}", year)}
                                                </p>
                                            </div>
                                        }
                                        .into_view(),
                                    }}
                                </div>

                                <div class="bg-white rounded-xl p-4 border border-slate-200">
                                    <p class="text-sm text-slate-500 mb-1">"ISO Code"</p>
                                    <p class="text-lg font-semibold font-mono">
                                        {country.code.clone()}
                                    </p>
                                </div>
                            </div>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// One labeled fact in the detail grid; `None` renders a muted placeholder
#[component]
fn DetailItem(
    label: &'static str,
    #[prop(into)] value: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-4 border border-slate-200">
            <p class="text-sm text-slate-500 mb-1">{label}</p>
            {match value {
                Some(text) => view! {
                    <p class="text-lg font-semibold">{text}</p>
                }
                .into_view(),
                None => view! {
                    <p class="text-lg text-slate-400 italic">"Not available"</p>
                }
                .into_view(),
            }}
        </div>
    }
}

//! Dashboard Page
//!
//! The country table: search, region filter, year selection, sortable
//! columns, and color-coded homicide-rate badges.

use leptos::*;
use leptos_router::use_navigate;

use crimescope::color::RateScale;
use crimescope::pipeline::{regions, SortField, TableQuery};
use crimescope::types::{CountryRecord, Year};

use crate::api;
use crate::components::{ErrorPanel, Loading, RateBadge};
use crate::format;
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (data, set_data) = create_signal(Vec::<CountryRecord>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (query, set_query) = create_signal(TableQuery::default());
    let (updated_at, set_updated_at) = create_signal(None::<String>);

    // Fetch sequence counter. A response only applies while its sequence is
    // still current, so a fast year switch cannot surface stale data.
    let fetch_seq = store_value(0u64);

    // Fetch on mount and again whenever the selected year changes
    create_effect(move |_| {
        let year = state.year.get();
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_dashboard(year).await;
            if fetch_seq.get_value() != seq {
                return;
            }

            match result {
                Ok(records) => {
                    set_data.set(records);
                    set_updated_at.set(Some(format::clock_time()));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load dashboard data: {}", e).into(),
                    );
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    // Rows after search, region filter, and sort
    let filtered = create_memo(move |_| query.get().apply(&data.get()));

    // One scale per dataset so every badge in the table shares a domain
    let scale = create_memo(move |_| RateScale::from_rates(data.get().iter().map(|r| r.homicide_rate)));

    let region_options = create_memo(move |_| regions(&data.get()));

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Global Homicide Rates"</h1>
                <p class="text-slate-500 mt-1">
                    "Intentional homicides per 100,000 people, by country"
                </p>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <Loading
                            message="Loading homicide data..."
                            submessage="Fetching from the REST Countries and World Bank APIs"
                        />
                    }
                    .into_view()
                } else if let Some(message) = error.get() {
                    view! {
                        <ErrorPanel
                            title="Error Loading Data"
                            message=message
                            action_label="Try Again"
                            on_action=|| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            // Filter controls
                            <div class="flex flex-col sm:flex-row gap-3">
                                <input
                                    type="text"
                                    placeholder="Search countries..."
                                    prop:value=move || query.get().search
                                    on:input=move |ev| {
                                        set_query.update(|q| q.search = event_target_value(&ev))
                                    }
                                    class="flex-1 bg-white rounded-lg px-4 py-2
                                           border border-slate-300 focus:border-blue-500 focus:outline-none"
                                />

                                <select
                                    on:change=move |ev| {
                                        set_query.update(|q| q.region = event_target_value(&ev))
                                    }
                                    class="bg-white rounded-lg px-3 py-2
                                           border border-slate-300 focus:border-blue-500 focus:outline-none"
                                >
                                    {move || {
                                        let current = query.get().region;
                                        region_options
                                            .get()
                                            .into_iter()
                                            .map(|region| {
                                                let selected = region == current;
                                                view! {
                                                    <option value=region.clone() selected=selected>
                                                        {region}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>

                                <select
                                    on:change=move |ev| {
                                        if let Some(year) = Year::parse(&event_target_value(&ev)) {
                                            state.year.set(year);
                                        }
                                    }
                                    class="bg-white rounded-lg px-3 py-2
                                           border border-slate-300 focus:border-blue-500 focus:outline-none"
                                >
                                    {move || {
                                        let current = state.year.get();
                                        Year::all()
                                            .map(|year| {
                                                let selected = year == current;
                                                view! {
                                                    <option
                                                        value=year.to_string()
                                                        selected=selected
                                                    >
                                                        {year.to_string()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>

                            // Result count and refresh time
                            <div class="flex items-center justify-between text-sm text-slate-500">
                                <span>
                                    {move || {
                                        format!(
                                            "Showing {} of {} countries",
                                            filtered.get().len(),
                                            data.get().len()
                                        )
                                    }}
                                </span>
                                {move || {
                                    updated_at.get().map(|time| {
                                        view! { <span>{format!("Updated at {}", time)}</span> }
                                    })
                                }}
                            </div>

                            // Country table
                            <div class="bg-white rounded-xl border border-slate-200 shadow-sm overflow-x-auto">
                                <table class="w-full">
                                    <thead class="bg-slate-50 border-b border-slate-200">
                                        <tr>
                                            <th class="px-4 py-3 text-left text-xs font-semibold text-slate-500 uppercase tracking-wider">
                                                "Rank"
                                            </th>
                                            <SortHeader label="Country" field=SortField::Name set_query=set_query />
                                            <SortHeader label="Region" field=SortField::Region set_query=set_query />
                                            <SortHeader label="Population" field=SortField::Population set_query=set_query />
                                            <SortHeader label="Homicide Rate" field=SortField::HomicideRate set_query=set_query />
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-slate-100">
                                        {move || {
                                            let rows = filtered.get();
                                            if rows.is_empty() {
                                                view! {
                                                    <tr>
                                                        <td
                                                            colspan="5"
                                                            class="px-4 py-12 text-center text-slate-400"
                                                        >
                                                            "No countries found matching your criteria"
                                                        </td>
                                                    </tr>
                                                }
                                                .into_view()
                                            } else {
                                                let scale = scale.get();
                                                rows.into_iter()
                                                    .enumerate()
                                                    .map(|(i, record)| {
                                                        view! {
                                                            <CountryRow
                                                                record=record
                                                                rank={i + 1}
                                                                scale=scale
                                                            />
                                                        }
                                                    })
                                                    .collect_view()
                                            }
                                        }}
                                    </tbody>
                                </table>
                            </div>

                            // Source note
                            <p class="text-xs text-slate-400">
                                "Data: REST Countries and the World Bank intentional homicides indicator (VC.IHR.PSRC.P5). Countries without data for the selected year are not listed."
                            </p>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Clickable column header that drives the table sort
#[component]
fn SortHeader(
    label: &'static str,
    field: SortField,
    set_query: WriteSignal<TableQuery>,
) -> impl IntoView {
    view! {
        <th
            on:click=move |_| set_query.update(|q| q.toggle_sort(field))
            class="px-4 py-3 text-left text-xs font-semibold text-slate-500 uppercase tracking-wider
                   cursor-pointer select-none hover:bg-slate-100 transition-colors"
        >
            <span class="inline-flex items-center space-x-1">
                <span>{label}</span>
                <span class="text-slate-400">"↕"</span>
            </span>
        </th>
    }
}

/// One country row; clicking it opens the detail page
#[component]
fn CountryRow(record: CountryRecord, rank: usize, scale: RateScale) -> impl IntoView {
    let CountryRecord {
        name,
        code,
        region,
        population,
        flag_url,
        homicide_rate,
    } = record;

    let navigate = use_navigate();
    let target = format!("/country/{}", code);
    let alt = format!("Flag of {}", name);

    view! {
        <tr
            on:click=move |_| navigate(&target, Default::default())
            class="hover:bg-slate-50 cursor-pointer transition-colors"
        >
            <td class="px-4 py-3 text-slate-400">{rank}</td>
            <td class="px-4 py-3">
                <div class="flex items-center space-x-3">
                    <img
                        src=flag_url
                        alt=alt
                        class="w-8 h-5 object-cover rounded-sm border border-slate-200"
                    />
                    <span class="font-medium">{name}</span>
                </div>
            </td>
            <td class="px-4 py-3 text-slate-600">{region}</td>
            <td class="px-4 py-3 text-slate-600">{format::thousands(population)}</td>
            <td class="px-4 py-3">
                <RateBadge rate=homicide_rate scale=scale />
            </td>
        </tr>
    }
}

//! Search Page
//!
//! Text search over recipes with page size and prev/next paging. The
//! empty search runs as soon as the page mounts.

use leptos::ev::{Event, KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::controller::{SearchController, SearchRequest};
use recipe_core::domain::RecipeSummary;
use recipe_core::Route;

use crate::components::ErrorBanner;
use crate::context::{use_app_context, AppContext};

const PAGE_SIZES: [u32; 5] = [10, 20, 25, 50, 100];

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_app_context();
    let mut initial = SearchController::new(&ctx.config());
    let first = initial.mount();
    let search = RwSignal::new(initial);
    dispatch(ctx, search, Some(first));

    let on_keyup = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            dispatch(ctx, search, search.try_update(|s| s.submit()));
        }
    };
    let on_page_size = move |ev: Event| {
        let Ok(size) = event_target_value(&ev).parse::<u32>() else {
            return;
        };
        dispatch(ctx, search, search.try_update(|s| s.set_page_size(size)));
    };
    let on_prev = move |_: MouseEvent| dispatch(ctx, search, search.try_update(|s| s.prev_page()).flatten());
    let on_next = move |_: MouseEvent| dispatch(ctx, search, search.try_update(|s| s.next_page()).flatten());

    let error = Signal::derive(move || search.with(|s| s.last_error().map(|e| e.to_string())));
    let range = move || {
        search.with(|s| match s.range() {
            Some((first, last)) => format!("{}-{} of {}", first, last, s.total()),
            None => "No recipes found".to_string(),
        })
    };

    view! {
        <section class="search">
            <div class="search-bar">
                <input
                    id="search"
                    type="search"
                    placeholder="Search recipes, press Enter"
                    prop:value=move || search.with(|s| s.query().text.clone())
                    on:input=move |ev| search.update(|s| s.set_text(event_target_value(&ev)))
                    on:keyup=on_keyup
                />
                <label for="page-size">"Per page"</label>
                <select id="page-size" on:change=on_page_size>
                    {PAGE_SIZES
                        .into_iter()
                        .map(|size| {
                            let selected = move || search.with(|s| s.query().page_size == size);
                            view! { <option value=size.to_string() prop:selected=selected>{size.to_string()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <ErrorBanner message=error />

            <table class="search-results" class:loading=move || search.with(SearchController::is_loading)>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Prep"</th>
                        <th>"Cook"</th>
                        <th>"Serves"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || search.with(|s| s.results().to_vec())
                        key=|row| row.id
                        children=|row: RecipeSummary| view! {
                            <tr>
                                <td><a href=Route::ViewRecipe(row.id).hash()>{row.name}</a></td>
                                <td>{row.prep_time}</td>
                                <td>{row.cook_time}</td>
                                <td>{row.servings.map(|n| n.to_string()).unwrap_or_default()}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <div class="pager">
                <button
                    type="button"
                    disabled=move || !search.with(SearchController::can_prev)
                    on:click=on_prev
                >
                    "Prev"
                </button>
                <span class="pager-range">{range}</span>
                <button
                    type="button"
                    disabled=move || !search.with(SearchController::can_next)
                    on:click=on_next
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}

fn dispatch(ctx: AppContext, search: RwSignal<SearchController>, request: Option<SearchRequest>) {
    let Some(request) = request else { return };
    log::debug!("search #{}: {:?}", request.seq, request.query);
    let api = ctx.api();
    spawn_local(async move {
        let result = request.send(&api).await;
        if let Err(err) = &result {
            ctx.report(err);
        }
        search.try_update(|s| s.apply(request.seq, result));
    });
}

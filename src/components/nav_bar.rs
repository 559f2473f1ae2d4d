//! Navigation Bar Component
//!
//! Tab bar for switching between booking categories.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Category;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav">
            {Category::ALL.into_iter().map(|category| {
                let is_active = move || ctx.selected() == category;
                view! {
                    <a
                        href="#"
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        data-target=category.slug()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.select(category);
                        }
                    >
                        {category.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}

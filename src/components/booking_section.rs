//! Booking Section Component
//!
//! One category page: create button, own bookings and the full roster.

use chrono::Local;
use leptos::prelude::*;

use crate::components::BookingCardView;
use crate::context::AppContext;
use crate::models::Category;
use crate::render::{render, ListView};
use crate::store::store_bookings;

#[component]
pub fn BookingSection(category: Category) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let view_model = Memo::new(move |_| {
        let data = store_bookings(&store, category);
        render(category, &data.mine, &data.all, &Local)
    });
    let section_class = move || {
        if ctx.selected() == category { "booking-section" } else { "booking-section hidden" }
    };

    view! {
        <section id=format!("{}-section", category.slug()) class=section_class>
            <div class="section-header">
                <h2>{category.label()}</h2>
                <button
                    id=format!("create-{}-btn", category.slug())
                    class="btn-primary"
                    on:click=move |_| ctx.open_form(category)
                >
                    "+ Создать бронирование"
                </button>
            </div>

            <h3>"Мои бронирования"</h3>
            <div id=format!("my-{}-bookings", category.slug()) class="booking-list">
                {move || list(view_model.get().mine)}
            </div>

            <h3>"Все бронирования (" {move || view_model.with(|v| v.all.cards().len())} ")"</h3>
            <div id=format!("all-{}-bookings", category.slug()) class="booking-list">
                {move || list(view_model.get().all)}
            </div>
        </section>
    }
}

fn list(list: ListView) -> AnyView {
    match list {
        ListView::Empty(text) => view! { <div class="empty-message">{text}</div> }.into_any(),
        ListView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <BookingCardView card=card /> })
            .collect_view()
            .into_any(),
    }
}

//! Booking App
//!
//! Root component: loading screen until authenticated, then the main page
//! with navigation, one section per category and the booking modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BookingModal, BookingSection, LoadingScreen, NavBar, ToastContainer};
use crate::context::AppContext;
use crate::models::Category;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Config, authentication and the first load happen once on mount
    Effect::new(move |_| ctx.start());

    let username = move || {
        store
            .session()
            .get()
            .map(|session| session.display_name())
            .unwrap_or_default()
    };

    view! {
        <ToastContainer />
        <Show
            when=move || store.session().with(|session| session.is_some())
            fallback=|| view! { <LoadingScreen /> }
        >
            <div id="main-page" class="main-page">
                <header class="header">
                    <h1>"Бронирование"</h1>
                    <span id="username-display" class="username">{username}</span>
                </header>

                <NavBar />

                <main class="main-content">
                    {Category::ALL.into_iter().map(|category| view! {
                        <BookingSection category=category />
                    }).collect_view()}
                </main>

                <BookingModal />
            </div>
        </Show>
    }
}

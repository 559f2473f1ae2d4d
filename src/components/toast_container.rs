//! Toast Container Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Stack of transient notifications, removed by their timers in `AppContext::notify`
#[component]
pub fn ToastContainer() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="toast-container" class="toast-container">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.kind.class()>
                            <div class="toast-icon">{toast.kind.icon()}</div>
                            <div class="toast-message">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

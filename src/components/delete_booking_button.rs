//! Delete Booking Button Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::DeleteAction;

/// Delete control on an own booking card. The first click asks
/// "Удалить бронирование #id?" inline; ✓ sends the delete, ✗ backs out.
#[component]
pub fn DeleteBookingButton(action: DeleteAction) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (asking, set_asking) = signal(false);

    let confirm = move |_| {
        set_asking.set(false);
        ctx.delete_booking(action.category, action.booking_id);
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="btn-danger"
                    title=format!("Удалить бронирование #{}", action.booking_id)
                    on:click=move |_| set_asking.set(true)
                >
                    "🗑️ Удалить"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {format!("Удалить бронирование #{}?", action.booking_id)}
                </span>
                <button class="confirm-btn" on:click=confirm>"✓"</button>
                <button class="cancel-btn" on:click=move |_| set_asking.set(false)>"✗"</button>
            </span>
        </Show>
    }
}

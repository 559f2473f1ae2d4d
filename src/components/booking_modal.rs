//! Booking Modal Component
//!
//! Form for creating a booking in the category it was opened for.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn BookingModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = ctx.form;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form();
    };

    view! {
        <Show when=move || form.with(|f| f.is_open())>
            <div id="booking-modal" class="modal">
                <div class="modal-content">
                    <h2 id="modal-title">
                        {move || form.with(|f| f.category().map(|c| c.form_title()).unwrap_or_default())}
                    </h2>
                    <form id="booking-form" on:submit=submit>
                        <label for="start-time">"Начало"</label>
                        <input
                            id="start-time"
                            type="datetime-local"
                            required
                            prop:value=move || form.with(|f| f.start().to_string())
                            on:input=move |ev| form.update(|f| f.set_start(event_target_value(&ev)))
                        />
                        <label for="end-time">"Конец"</label>
                        <input
                            id="end-time"
                            type="datetime-local"
                            required
                            prop:value=move || form.with(|f| f.end().to_string())
                            on:input=move |ev| form.update(|f| f.set_end(event_target_value(&ev)))
                        />
                        <div class="modal-actions">
                            <button
                                type="submit"
                                class="btn-primary"
                                disabled=move || form.with(|f| f.is_submitting())
                            >
                                "Создать"
                            </button>
                            <button
                                type="button"
                                id="cancel-booking-btn"
                                class="btn-secondary"
                                on:click=move |_| ctx.cancel_form()
                            >
                                "Отмена"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

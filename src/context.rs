//! Application Context
//!
//! Shared state provided via Leptos Context API. All mutations of session,
//! selected category, form and booking lists go through these methods.

use std::rc::Rc;

use chrono::Local;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::{ApiClient, FetchTransport};
use crate::client::BookingClient;
use crate::config::load_config;
use crate::error::ClientError;
use crate::flow::{self, Outcome};
use crate::form::BookingForm;
use crate::models::{Category, CategoryBookings, Toast, ToastKind};
use crate::refresh::RefreshGuard;
use crate::storage::LocalTokenStore;
use crate::store::{
    store_apply_bookings, store_push_toast, store_remove_toast, store_select, store_set_session, AppStateStoreFields,
    AppStore,
};

/// Client wired to the browser's fetch and localStorage
pub type WebClient = BookingClient<FetchTransport, LocalTokenStore>;

/// How long a notification stays on screen
const TOAST_DURATION_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Create-booking modal state
    pub form: RwSignal<BookingForm>,
    client: StoredValue<Option<Rc<WebClient>>, LocalStorage>,
    refresh_guard: StoredValue<RefreshGuard>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            form: RwSignal::new(BookingForm::Closed),
            client: StoredValue::new_local(None),
            refresh_guard: StoredValue::new(RefreshGuard::default()),
            next_toast_id: StoredValue::new(0),
        }
    }

    fn client(&self) -> Option<Rc<WebClient>> {
        self.client.get_value()
    }

    /// Category whose section is visible (tracked)
    pub fn selected(&self) -> Category {
        self.store.selected().get()
    }

    /// Startup: config, then authentication, then the first load
    pub fn start(&self) {
        if is_file_protocol() {
            log::warn!("[APP] Running from file://, config.json and the backend may be unreachable.");
            log::warn!("[APP] Serve the directory over HTTP instead, e.g. `trunk serve` or `python -m http.server 8000`.");
            self.notify(ToastKind::Warning, "Страница открыта из file://, запустите локальный HTTP-сервер");
        }

        let ctx = *self;
        spawn_local(async move {
            let config = load_config(&FetchTransport).await;
            let client = Rc::new(BookingClient::new(
                ApiClient::new(config.base_url(), FetchTransport),
                LocalTokenStore,
            ));
            ctx.client.set_value(Some(client.clone()));

            let visible = ctx.store.selected().get_untracked();
            ctx.settle(flow::sign_in(&client, visible).await);
        });
    }

    /// Applies what a finished operation asks for
    fn settle(&self, outcome: Outcome) {
        if let Some(update) = outcome.form {
            self.form.update(|form| update.apply(form));
        }
        if let Some(session) = outcome.session {
            store_set_session(&self.store, session);
        }
        if let Some((kind, message)) = outcome.toast {
            self.notify(kind, message);
        }
        if let Some(category) = outcome.refresh {
            self.refresh(category);
        }
    }

    /// Shows a notification that disappears on its own
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let mut id = 0;
        self.next_toast_id.update_value(|next| {
            *next += 1;
            id = *next;
        });
        store_push_toast(
            &self.store,
            Toast {
                id,
                kind,
                message: message.into(),
            },
        );

        let store = self.store;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            store_remove_toast(&store, id);
        });
    }

    /// Switches the visible section. The previous category's lists are
    /// dropped and the new one is loaded fresh.
    pub fn select(&self, category: Category) {
        store_select(&self.store, category);
        self.refresh(category);
    }

    /// Reloads both lists of `category`. Calls made while a load for the same
    /// category is running result in exactly one more load afterwards.
    pub fn refresh(&self, category: Category) {
        let Some(client) = self.client() else {
            log::warn!("[APP] Refresh of {} before the client is ready", category);
            return;
        };

        let mut start = false;
        self.refresh_guard.update_value(|guard| start = guard.begin(category));
        if !start {
            log::debug!("[APP] {} refresh already running, queued one more", category);
            return;
        }

        let ctx = *self;
        spawn_local(async move {
            loop {
                match client.load(category).await {
                    Ok(data) => ctx.apply_bookings(category, data),
                    Err(e) => {
                        log::error!("[APP] Load failed: {:?}", e);
                        ctx.notify(ToastKind::Error, e.to_string());
                    }
                }

                let mut again = false;
                ctx.refresh_guard.update_value(|guard| again = guard.finish(category));
                if !again {
                    break;
                }
            }
        });
    }

    fn apply_bookings(&self, category: Category, data: CategoryBookings) {
        if !store_apply_bookings(&self.store, category, data) {
            log::debug!("[APP] Dropping {} bookings, section no longer visible", category);
        }
    }

    pub fn open_form(&self, category: Category) {
        self.form.set(BookingForm::open(category, Local::now().naive_local()));
    }

    pub fn cancel_form(&self) {
        self.form.update(BookingForm::cancel);
    }

    /// Validates and submits the open form. On failure the form stays open
    /// with its values. Ignored while a previous submit is still running.
    pub fn submit_form(&self) {
        let Some(client) = self.client() else {
            self.notify(ToastKind::Error, ClientError::NotAuthenticated.to_string());
            return;
        };

        let mut started = false;
        self.form.update(|form| started = form.begin_submit());
        if !started {
            log::debug!("[APP] Submit ignored, one is already running");
            return;
        }
        let form = self.form.get_untracked();

        let ctx = *self;
        spawn_local(async move {
            ctx.settle(flow::submit(&client, &form, &Local).await);
        });
    }

    /// Deletes an own booking; the list is only reloaded when it succeeded
    pub fn delete_booking(&self, category: Category, booking_id: i64) {
        let Some(client) = self.client() else {
            self.notify(ToastKind::Error, ClientError::NotAuthenticated.to_string());
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            ctx.settle(flow::delete(&client, category, booking_id).await);
        });
    }
}

fn is_file_protocol() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|protocol| protocol == "file:")
}

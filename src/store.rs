//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, CategoryBookings, Session, Toast};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Set once authentication succeeded; `None` keeps the loading screen up
    pub session: Option<Session>,
    /// Category whose section is visible
    pub selected: Category,
    /// Laundry lists, empty unless laundry is the selected category
    pub laundry: CategoryBookings,
    /// Kitchen lists, empty unless kitchen is the selected category
    pub kitchen: CategoryBookings,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the authenticated session, leaving the loading screen
pub fn store_set_session(store: &AppStore, session: Session) {
    *store.session().write() = Some(session);
}

/// Replace both lists of a category
pub fn store_set_bookings(store: &AppStore, category: Category, data: CategoryBookings) {
    match category {
        Category::Laundry => *store.laundry().write() = data,
        Category::Kitchen => *store.kitchen().write() = data,
    }
}

/// Switch the visible section, dropping the lists of the one left behind.
/// Returns `false` when `category` is already visible.
pub fn store_select(store: &AppStore, category: Category) -> bool {
    let previous = store.selected().get_untracked();
    if previous == category {
        return false;
    }
    store_set_bookings(store, previous, CategoryBookings::default());
    *store.selected().write() = category;
    true
}

/// Apply a finished load. Lists for a category that is no longer visible
/// are discarded and `false` is returned.
pub fn store_apply_bookings(store: &AppStore, category: Category, data: CategoryBookings) -> bool {
    if store.selected().get_untracked() != category {
        return false;
    }
    store_set_bookings(store, category, data);
    true
}

/// Current lists of a category (tracked)
pub fn store_bookings(store: &AppStore, category: Category) -> CategoryBookings {
    match category {
        Category::Laundry => store.laundry().get(),
        Category::Kitchen => store.kitchen().get(),
    }
}

/// Add a notification to the end of the stack
pub fn store_push_toast(store: &AppStore, toast: Toast) {
    store.toasts().write().push(toast);
}

/// Remove a notification by ID
pub fn store_remove_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Booking;

    fn bookings(ids: &[i64]) -> CategoryBookings {
        let list: Vec<Booking> = ids
            .iter()
            .map(|&id| Booking {
                id,
                owner_user_id: Some(7),
                start_time: None,
                end_time: None,
            })
            .collect();
        CategoryBookings {
            mine: list.clone(),
            all: list,
        }
    }

    #[test]
    fn test_session_leaves_loading_screen() {
        Owner::new().with(|| {
            let store = AppStore::new(AppState::default());
            assert!(store.session().get_untracked().is_none());

            store_set_session(
                &store,
                Session {
                    token: "T1".to_string(),
                    user_id: 7,
                    username: "alice".to_string(),
                },
            );

            assert_eq!(store.session().get_untracked().map(|s| s.user_id), Some(7));
        });
    }

    #[test]
    fn test_switch_drops_previous_category() {
        Owner::new().with(|| {
            let store = AppStore::new(AppState::default());
            assert!(store_apply_bookings(&store, Category::Laundry, bookings(&[1, 2])));

            assert!(store_select(&store, Category::Kitchen));

            assert_eq!(store.selected().get_untracked(), Category::Kitchen);
            assert_eq!(store.laundry().get_untracked(), CategoryBookings::default());
            // Selecting the visible category again changes nothing
            assert!(!store_select(&store, Category::Kitchen));
        });
    }

    #[test]
    fn test_late_load_for_hidden_category_is_discarded() {
        Owner::new().with(|| {
            let store = AppStore::new(AppState::default());
            store_select(&store, Category::Kitchen);

            // A laundry load started before the switch finishes afterwards
            assert!(!store_apply_bookings(&store, Category::Laundry, bookings(&[1])));
            assert_eq!(store.laundry().get_untracked(), CategoryBookings::default());

            assert!(store_apply_bookings(&store, Category::Kitchen, bookings(&[5])));
            assert_eq!(store.kitchen().get_untracked().mine[0].id, 5);
        });
    }
}

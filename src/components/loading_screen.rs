//! Loading Screen Component
//!
//! Shown until authentication succeeds, and left up when it fails.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div id="loading-page" class="loading-page">
            <div class="spinner"></div>
            <p>"Загрузка..."</p>
        </div>
    }
}

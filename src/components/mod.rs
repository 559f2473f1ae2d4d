//! UI Components
//!
//! Reusable Leptos components.

mod booking_card;
mod booking_modal;
mod booking_section;
mod delete_booking_button;
mod loading_screen;
mod nav_bar;
mod toast_container;

pub use booking_card::BookingCardView;
pub use booking_modal::BookingModal;
pub use booking_section::BookingSection;
pub use delete_booking_button::DeleteBookingButton;
pub use loading_screen::LoadingScreen;
pub use nav_bar::NavBar;
pub use toast_container::ToastContainer;

//! Booking Card Component

use leptos::prelude::*;

use crate::components::DeleteBookingButton;
use crate::render::BookingCard;

/// One booking; own bookings carry a delete action
#[component]
pub fn BookingCardView(card: BookingCard) -> impl IntoView {
    let class = if card.mine { "booking-card my-booking" } else { "booking-card" };

    view! {
        <div class=class>
            <div class="booking-info"><strong>"ID: "</strong>{card.id}</div>
            <div class="booking-info"><strong>"Пользователь: "</strong>{card.owner}</div>
            <div class="booking-time"><strong>"Начало: "</strong>{card.start}</div>
            <div class="booking-time"><strong>"Конец: "</strong>{card.end}</div>
            {card.delete.map(|action| view! {
                <div class="booking-actions">
                    <DeleteBookingButton action=action />
                </div>
            })}
        </div>
    }
}

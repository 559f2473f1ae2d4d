//! Booking View Model
//!
//! Pure mapping from booking records to what the booking section displays.
//! Components only lay this out, so rendering the same lists twice always
//! yields the same view.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Booking, Category};

pub const EMPTY_MINE: &str = "У вас нет бронирований";
pub const EMPTY_ALL: &str = "Нет бронирований";
pub const INVALID_DATE: &str = "Invalid Date";
pub const NO_OWNER: &str = "N/A";

/// `DD.MM.YYYY, HH:MM`
const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category: Category,
    pub mine: ListView,
    pub all: ListView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Placeholder text shown instead of an empty container
    Empty(&'static str),
    Cards(Vec<BookingCard>),
}

impl ListView {
    pub fn cards(&self) -> &[BookingCard] {
        match self {
            ListView::Cards(cards) => cards,
            ListView::Empty(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCard {
    pub id: i64,
    pub owner: String,
    pub start: String,
    pub end: String,
    pub mine: bool,
    /// Only set for the user's own bookings
    pub delete: Option<DeleteAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAction {
    pub booking_id: i64,
    pub category: Category,
}

/// Builds both lists of a category section, formatting times in `tz`
pub fn render<Tz>(category: Category, mine: &[Booking], all: &[Booking], tz: &Tz) -> CategoryView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    CategoryView {
        category,
        mine: list_view(category, mine, true, EMPTY_MINE, tz),
        all: list_view(category, all, false, EMPTY_ALL, tz),
    }
}

fn list_view<Tz>(category: Category, bookings: &[Booking], mine: bool, placeholder: &'static str, tz: &Tz) -> ListView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if bookings.is_empty() {
        return ListView::Empty(placeholder);
    }
    ListView::Cards(
        bookings
            .iter()
            .map(|booking| booking_card(category, booking, mine, tz))
            .collect(),
    )
}

pub fn booking_card<Tz>(category: Category, booking: &Booking, mine: bool, tz: &Tz) -> BookingCard
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    BookingCard {
        id: booking.id,
        owner: booking
            .owner_user_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| NO_OWNER.to_string()),
        start: format_time(booking.start_time, tz),
        end: format_time(booking.end_time, tz),
        mine,
        delete: mine.then_some(DeleteAction {
            booking_id: booking.id,
            category,
        }),
    }
}

pub fn format_time<Tz>(value: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match value {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn booking(id: i64, owner: Option<i64>) -> Booking {
        Booking {
            id,
            owner_user_id: owner,
            start_time: Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).single(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).single(),
        }
    }

    #[test]
    fn test_empty_lists_render_placeholders() {
        let view = render(Category::Laundry, &[], &[], &Utc);

        assert_eq!(view.mine, ListView::Empty(EMPTY_MINE));
        assert_eq!(view.all, ListView::Empty(EMPTY_ALL));
    }

    #[test]
    fn test_lists_render_independently() {
        let view = render(Category::Kitchen, &[], &[booking(1, Some(2))], &Utc);

        assert_eq!(view.mine, ListView::Empty(EMPTY_MINE));
        assert_eq!(view.all.cards().len(), 1);
    }

    #[test]
    fn test_card_fields() {
        let view = render(Category::Kitchen, &[booking(4, Some(7))], &[booking(4, Some(7)), booking(9, None)], &Utc);

        let own = &view.mine.cards()[0];
        assert_eq!(own.start, "05.03.2024, 08:00");
        assert_eq!(own.end, "05.03.2024, 09:30");
        assert_eq!(own.owner, "7");
        assert_eq!(
            own.delete,
            Some(DeleteAction {
                booking_id: 4,
                category: Category::Kitchen
            })
        );

        let others = view.all.cards();
        assert!(others.iter().all(|card| card.delete.is_none() && !card.mine));
        assert_eq!(others[1].owner, NO_OWNER);
    }

    #[test]
    fn test_time_zone_applied() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let card = booking_card(Category::Laundry, &booking(1, None), false, &tz);

        assert_eq!(card.start, "05.03.2024, 11:00");
    }

    #[test]
    fn test_invalid_timestamp_marker() {
        let mut broken = booking(1, Some(1));
        broken.end_time = None;

        let card = booking_card(Category::Laundry, &broken, true, &Utc);
        assert_eq!(card.end, INVALID_DATE);
        assert_ne!(card.start, INVALID_DATE);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mine = vec![booking(1, Some(7))];
        let all = vec![booking(1, Some(7)), booking(2, Some(8))];

        assert_eq!(
            render(Category::Laundry, &mine, &all, &Utc),
            render(Category::Laundry, &mine, &all, &Utc)
        );
    }
}

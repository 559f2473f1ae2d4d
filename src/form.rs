//! Booking Form State
//!
//! The create-booking modal is either closed or open for one category. Input
//! values are kept as the raw `datetime-local` strings the inputs produce.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::error::ValidationError;
use crate::models::Category;

/// `datetime-local` input value format
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingForm {
    #[default]
    Closed,
    Open {
        category: Category,
        start: String,
        end: String,
        /// A create request for these values is in flight
        submitting: bool,
    },
}

impl BookingForm {
    /// Opens the form with the default window starting at the next full hour
    pub fn open(category: Category, now: NaiveDateTime) -> Self {
        let (start, end) = default_window(now);
        BookingForm::Open {
            category,
            start: start.format(INPUT_FORMAT).to_string(),
            end: end.format(INPUT_FORMAT).to_string(),
            submitting: false,
        }
    }

    /// Closes the form, dropping whatever was entered
    pub fn cancel(&mut self) {
        *self = BookingForm::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, BookingForm::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, BookingForm::Open { submitting: true, .. })
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            BookingForm::Open { category, .. } => Some(*category),
            BookingForm::Closed => None,
        }
    }

    pub fn start(&self) -> &str {
        match self {
            BookingForm::Open { start, .. } => start,
            BookingForm::Closed => "",
        }
    }

    pub fn end(&self) -> &str {
        match self {
            BookingForm::Open { end, .. } => end,
            BookingForm::Closed => "",
        }
    }

    pub fn set_start(&mut self, value: String) {
        if let BookingForm::Open { start, .. } = self {
            *start = value;
        }
    }

    pub fn set_end(&mut self, value: String) {
        if let BookingForm::Open { end, .. } = self {
            *end = value;
        }
    }

    /// Marks the form as submitted. Returns `false` when it is closed or a
    /// submit is already running, in which case nothing should be sent.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            BookingForm::Open { submitting, .. } if !*submitting => {
                *submitting = true;
                true
            }
            _ => false,
        }
    }

    /// Re-enables submitting, keeping the entered values
    pub fn finish_submit(&mut self) {
        if let BookingForm::Open { submitting, .. } = self {
            *submitting = false;
        }
    }

    /// Checks the entered window, read as wall-clock time in `tz`, against
    /// the category limits
    pub fn validate<Tz: TimeZone>(&self, tz: &Tz) -> Result<BookingDraft, ValidationError> {
        match self {
            BookingForm::Open { category, start, end, .. } => validate(*category, start, end, tz),
            BookingForm::Closed => Err(ValidationError::InvalidInput("форма закрыта".to_string())),
        }
    }
}

/// How a settled create request changes the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormUpdate {
    /// Created: close and reset
    Close,
    /// Rejected: stay open with the entered values
    KeepOpen,
}

impl FormUpdate {
    pub fn apply(self, form: &mut BookingForm) {
        match self {
            FormUpdate::Close => form.cancel(),
            FormUpdate::KeepOpen => form.finish_submit(),
        }
    }
}

/// Validated booking window as absolute instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDraft {
    pub category: Category,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookingDraft {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Start strictly before end, duration at most the category maximum.
/// Both bounds are compared as instants, so a clock change inside the
/// window counts with its real length.
pub fn validate<Tz: TimeZone>(
    category: Category,
    start: &str,
    end: &str,
    tz: &Tz,
) -> Result<BookingDraft, ValidationError> {
    let start = resolve(tz, parse_input(start)?);
    let end = resolve(tz, parse_input(end)?);

    if start >= end {
        return Err(ValidationError::StartNotBeforeEnd);
    }
    if end - start > category.max_duration() {
        return Err(ValidationError::TooLong {
            max_hours: category.max_hours(),
        });
    }

    Ok(BookingDraft { category, start, end })
}

/// Default window: the next full hour, lasting two hours
pub fn default_window(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let hour_start = now.date().and_hms_opt(now.hour(), 0, 0).unwrap_or(now);
    let start = hour_start + Duration::hours(1);
    (start, start + Duration::hours(2))
}

fn parse_input(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, INPUT_FORMAT_SECONDS))
        .map_err(|_| ValidationError::InvalidInput(value.to_string()))
}

/// Wall-clock time in `tz` to an instant. A repeated hour resolves to its
/// first occurrence. A skipped hour is read with the offset in effect before
/// the jump, which moves it forward by the gap like a browser `Date` does.
fn resolve<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            let before = tz.offset_from_utc_datetime(&(local - Duration::days(1))).fix();
            let utc = local - Duration::seconds(i64::from(before.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}

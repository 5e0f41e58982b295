//! Error types for calendar and date operations.

/// Error returned by the fallible date helpers.
///
/// Grid and position builders never fail: out-of-range months roll over
/// into neighbouring years. Parsing user-supplied date values and runs of
/// days that leave the representable range produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The value is neither a number, a string nor a date.
    #[error("unsupported date input: {kind}")]
    UnsupportedInput {
        /// Kind of value that was supplied (e.g. "boolean", "array").
        kind: String,
    },

    /// The text could not be read as a date or date-time.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// The text as received, before normalization.
        input: String,
    },

    /// The timestamp does not fit the representable date range.
    #[error("timestamp out of range: {millis} ms")]
    TimestampOutOfRange {
        /// Milliseconds since the Unix epoch.
        millis: i64,
    },

    /// The month could not be normalized into a representable date.
    #[error("invalid month: {month} for year {year}")]
    InvalidMonth {
        /// Year the month belongs to.
        year: i32,
        /// The month number that was provided.
        month: i64,
    },

    /// A run of days would extend past the representable date range.
    #[error("{count} days from {from} leave the supported date range")]
    DayCountOutOfRange {
        /// Requested number of days.
        count: usize,
        /// Reference day, `YYYY-MM-DD`.
        from: String,
    },
}

impl CalendarError {
    pub(crate) fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate { input: input.into() }
    }
}

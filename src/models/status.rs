use serde::Serialize;

/// Lifecycle of a persisted booking.
/// Created as Pending on submission; moved to Confirmed/Cancelled/Completed
/// by an explicit admin action, never by the availability resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Only pending and confirmed bookings occupy slots; cancelled and
    /// completed records are inert for availability purposes.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any casing)
    pub fn from_code(code: &str) -> Option<Self> {
        BookingStatus::from_db_str(&code.to_lowercase())
    }
}

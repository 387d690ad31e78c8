//! Workday convention: how to roll a date that falls on a holiday.

/// How to adjust a date that falls on a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkdayConvention {
    /// Do not adjust (keep the original date).
    Unadjusted,
    /// Choose the first workday after the given holiday.
    Following,
    /// Choose the first workday after the given holiday unless it belongs to
    /// a different month; in that case choose the first workday before the
    /// holiday.
    ModifiedFollowing,
    /// Choose the first workday before the given holiday.
    Preceding,
    /// Choose the first workday before the given holiday unless it belongs to
    /// a different month; in that case choose the first workday after the
    /// holiday.
    ModifiedPreceding,
    /// Choose the nearest workday.  In case of a tie, use the following
    /// convention.
    Nearest,
}

impl std::fmt::Display for WorkdayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkdayConvention::Unadjusted => "Unadjusted",
            WorkdayConvention::Following => "Following",
            WorkdayConvention::ModifiedFollowing => "Modified Following",
            WorkdayConvention::Preceding => "Preceding",
            WorkdayConvention::ModifiedPreceding => "Modified Preceding",
            WorkdayConvention::Nearest => "Nearest",
        };
        write!(f, "{s}")
    }
}

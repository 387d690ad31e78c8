//! Concrete, table-driven calendars.

/// China (mainland) public holidays and make-up workdays.
pub mod china;

pub use china::China;

//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the day the library treats as
//! "today".  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`; when no evaluation date is set, callers fall back to
//! the local system date.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Tests that change it should do so through
//! [`ScopedEvaluationDate`], which restores the previous value on drop.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the workday-rs library.
pub struct Settings {
    /// The current evaluation date (serial day number, 1 = 1900-01-01).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the current evaluation date serial number.
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        tracing::debug!(serial, "evaluation date set");
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        tracing::debug!("evaluation date reset to system date");
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    fn replace_evaluation_date_serial(&self, serial: Option<i32>) -> Option<i32> {
        std::mem::replace(
            &mut *self
                .evaluation_date
                .lock()
                .expect("Settings mutex poisoned"),
            serial,
        )
    }
}

/// RAII guard that overrides the evaluation date for its lifetime.
///
/// ```
/// use wd_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(43_831);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(43_831));
/// }
/// assert_eq!(Settings::instance().evaluation_date_serial(), None);
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        tracing::debug!(serial, "scoped evaluation date");
        let previous = Settings::instance().replace_evaluation_date_serial(Some(serial));
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        Settings::instance().replace_evaluation_date_serial(self.previous);
    }
}

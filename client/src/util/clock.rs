//! Header clock formatting.
//!
//! The clock shows a 12-hour `h:mm` time with a localized meridiem marker.
//! Reading the wall clock needs the browser, so non-hydrate builds render a
//! placeholder until the first tick after hydration.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::time::Duration;

use catalog::Language;

/// Repeat interval of the header clock.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Shown before the first wall-clock reading.
pub const CLOCK_PLACEHOLDER: &str = "--:--";

/// Local time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallTime {
    #[must_use]
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour: hour % 24, minute: minute % 60, second: second % 60 }
    }
}

/// `9:05 AM` / `9:05 पूर्वाह्न`. Midnight and noon display as 12.
#[must_use]
pub fn format_clock(time: WallTime, language: Language) -> String {
    let hour = match time.hour % 12 {
        0 => 12,
        h => h,
    };
    let morning = time.hour < 12;
    let marker = match (language, morning) {
        (Language::En, true) => "AM",
        (Language::En, false) => "PM",
        (Language::Hi, true) => "पूर्वाह्न",
        (Language::Hi, false) => "अपराह्न",
    };
    format!("{hour}:{:02} {marker}", time.minute)
}

/// Current local time from the browser.
#[must_use]
pub fn now_local() -> Option<WallTime> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let part = |v: u32| u8::try_from(v).ok();
        Some(WallTime::new(part(now.get_hours())?, part(now.get_minutes())?, part(now.get_seconds())?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Display text for an optional reading.
#[must_use]
pub fn clock_text(time: Option<WallTime>, language: Language) -> String {
    time.map_or_else(|| CLOCK_PLACEHOLDER.to_owned(), |t| format_clock(t, language))
}

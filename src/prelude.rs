//! Derive macros shared by the calendar value types (`Date`, `JulianDay`,
//! `LongCount`, `Haab`, `Tzolkin`, `Calendar`, `Selection`).

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};

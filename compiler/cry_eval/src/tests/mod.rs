//! Test modules relocated from implementation files.
//!
//! Suites that outgrow an inline `tests` module live here.

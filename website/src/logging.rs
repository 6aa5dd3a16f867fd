//! Browser console logging
//!
//! The workspace crates log through `tracing`; with its `log` feature and no
//! subscriber installed, those events become `log` records, which
//! `console_log` writes to the browser console.

pub fn init() -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(log::Level::Debug)
}

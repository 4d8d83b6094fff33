//! Core routing types shared by the config loader and the resolver.

pub mod locale;
pub mod url;

pub use locale::{LocaleId, LocaleSlot, LocaleTable};

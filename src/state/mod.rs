//! Client-side UI state.

pub mod login;

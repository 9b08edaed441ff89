//! Credential login: data types, token persistence, and the submission
//! workflow.
//!
//! ARCHITECTURE
//! ============
//! `workflow` owns the only real logic. It depends on the `AuthTransport`,
//! `TokenStore`, `Navigator` and `Notifier` traits rather than on browser
//! globals, so pages wire in browser implementations and tests wire in fakes.

pub mod credentials;
pub mod error;
pub mod token_store;
pub mod workflow;

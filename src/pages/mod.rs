//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; the login workflow itself
//! lives in `auth` and is only wired to browser collaborators here.

pub mod home;
pub mod login;

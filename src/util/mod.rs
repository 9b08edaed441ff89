//! Browser-facing helpers shared by pages and the auth workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (routing, blocking
//! alerts) behind small traits so page logic stays testable.

pub mod navigate;
pub mod notify;

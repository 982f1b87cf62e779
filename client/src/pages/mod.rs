//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page composes state signals with components and owns its own
//! storage reads. Pages read browser storage only inside effects so the
//! server render stays storage-free.

pub mod dashboard;
pub mod home;
pub mod login;

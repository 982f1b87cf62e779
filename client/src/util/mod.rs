//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Every browser call is gated on the
//! `hydrate` feature and degrades to a no-op during SSR and native tests.

pub mod auth;
pub mod clock;
pub mod dialog;
pub mod image;
pub mod storage;

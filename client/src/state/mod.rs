//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`auth`, `admin`, `site`) so each route depends on a
//! small focused model. The models wrap `content` types and add only what the
//! view needs: load status and the notice to show.

pub mod admin;
pub mod auth;
pub mod site;

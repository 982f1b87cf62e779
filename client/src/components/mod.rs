//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, record cards and admin form inputs. Public
//! cards take plain records; admin inputs read and write the dashboard draft
//! through the `AdminState` signal they are given.

pub mod floor_plan_card;
pub mod floor_plan_inputs;
pub mod image_input;
pub mod nav_menu;
pub mod project_card;
pub mod project_inputs;
pub mod record_row;

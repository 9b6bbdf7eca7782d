//! Directional application switching: hold a modifier, drag toward one of
//! eight compass directions, release, and the application pinned there comes
//! to the front.

pub mod actor;
pub mod common;
pub mod model;
pub mod replay;
pub mod sys;
pub mod ui;

pub mod event;
pub mod geometry;
pub mod launcher;
pub mod screen;

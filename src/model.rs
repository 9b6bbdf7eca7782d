pub mod direction;
pub mod gesture;
pub mod mapping;
pub use direction::{Direction, classify};
pub use gesture::{GestureEvent, GestureState, GestureTracker, transition};
pub use mapping::{AppMapping, DirectionMap, MappingStore};

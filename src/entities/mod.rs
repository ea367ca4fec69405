//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//!
//! An [EntitySet] keeps track of the registered entities matching an [Aspect](crate::aspects::Aspect),
//! updating itself every time an entity is registered, changes its components, or is unregistered.

mod entity;
mod entity_set;

pub use entity::*;
pub use entity_set::*;

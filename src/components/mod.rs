//! [Components](Component) are the pieces of data attached to entities.
//!
//! Every component type is identified by a dense [ComponentId], which doubles as its bit index
//! inside the per-entity component [BitField](crate::data_structures::BitField).

mod component;
mod component_id;
mod component_set;

pub use component::*;
pub use component_id::*;
pub use component_set::*;
pub use aspect_ecs_derive::Component;

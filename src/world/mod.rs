//! The [World] owns entities, their [components](crate::components::Component) and the
//! component [bitfields](crate::data_structures::BitField) every
//! [EntitySet](crate::entities::EntitySet) built against it is kept consistent with.

mod registry;
mod entity_builder;

pub use registry::*;
pub use entity_builder::*;

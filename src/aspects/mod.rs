//! [Aspects](Aspect) are declarative filters over the set of [components](crate::components::Component)
//! attached to an entity.
//!
//! An [Aspect] is made of three clauses: components the entity must *all* have,
//! components it must have *none* of, and components it must have at least *one* of.

mod aspect;
mod aspect_builder;

pub use aspect::*;
pub use aspect_builder::*;

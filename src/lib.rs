//! The query core of an entity-component-system.
//!
//! An [Aspect](aspects::Aspect) describes which [components](components::Component) an entity must,
//! must not, or may have. An [EntitySet](entities::EntitySet) built from an aspect tracks the
//! entities of a [World](world::World) currently satisfying it, updating itself incrementally
//! as entities are registered, change their components, or are unregistered.

extern crate self as aspect_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod aspects;
pub mod config;
pub mod error;
pub mod world;

pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::components::*;
	pub use crate::config::WorldConfig;
	pub use crate::error::{EcsError, UsageError};
	pub use crate::world::{EntityBuilder, World, WorldId};
	pub use crate::aspects::{Aspect, AspectBuilder};
	pub use crate::data_structures::BitField;
	pub use crate::entities::{
		ChangeKind, Entity, EntityId, EntitySet, EntitySetEventHandler, EntityState, MembershipChange,
		Subscription,
	};
}

#[cfg(test)]
mod tests;

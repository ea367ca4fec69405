use crate::entities::EntityId;
use crate::world::WorldId;
use thiserror::Error;

/// Errors reported by [World](crate::world::World) and [Entity](crate::entities::Entity) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EcsError {
	#[error(transparent)]
	Usage(#[from] UsageError),

	/// The registry was asked to notify about an entity it holds no component bits for.
	#[error("entity {entity} has no component bitset in the registry")]
	Consistency { entity: EntityId },
}

/// An operation was attempted on an [Entity](crate::entities::Entity) handle in the wrong state.
///
/// Only returned by worlds configured as [strict](crate::config::WorldConfig::strict);
/// otherwise the operation is a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
	#[error("entity {entity} is not registered")]
	NotRegistered { entity: EntityId },

	#[error("entity {entity} is already registered")]
	AlreadyRegistered { entity: EntityId },

	#[error("entity {entity} was unregistered and cannot be registered again")]
	Retired { entity: EntityId },

	#[error("entity {entity} belongs to world {owner}, not world {world}")]
	ForeignWorld {
		entity: EntityId,
		owner: WorldId,
		world: WorldId,
	},
}

use crate::components::Component;
use crate::world::{World, WorldId};
use std::hash::{Hash, Hasher};
use crate::error::EcsError;
use std::fmt;

/// The identifier of an [Entity], unique within the [World] that allocated it.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct EntityId(u64);

impl EntityId {
	#[inline(always)]
	pub(crate) const fn new(value: u64) -> Self {
		Self(value)
	}

	#[inline(always)]
	pub const fn value(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// The registration state of an [Entity] handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntityState {
	/// Created, but not yet admitted into its [World].
	Unbound,
	/// Registered in its [World].
	Bound,
	/// Unregistered from its [World]. A retired handle can't be registered again.
	Retired,
}

/// A handle to an entity.
///
/// Handles compare and hash by [id](EntityId) only, so a handle can be used as a key
/// no matter which state it is in. Every operation takes the [World] it acts upon explicitly.
#[derive(Clone, Debug)]
pub struct Entity {
	pub(crate) id: EntityId,
	pub(crate) world: WorldId,
	pub(crate) state: EntityState,
}

impl Entity {
	pub(crate) fn new(id: EntityId, world: WorldId) -> Self {
		Self {
			id,
			world,
			state: EntityState::Unbound,
		}
	}

	#[inline(always)]
	pub fn id(&self) -> EntityId {
		self.id
	}

	/// The [World] this handle was created by.
	#[inline(always)]
	pub fn world_id(&self) -> WorldId {
		self.world
	}

	#[inline(always)]
	pub fn state(&self) -> EntityState {
		self.state
	}

	#[inline(always)]
	pub fn is_registered(&self) -> bool {
		self.state == EntityState::Bound
	}

	/// Admits the entity into `world`, notifying every [EntitySet](crate::entities::EntitySet) built against it.
	/// Returns *false* if the handle is not [unbound](EntityState::Unbound).
	pub fn register(&mut self, world: &mut World) -> Result<bool, EcsError> {
		world.register_entity(self)
	}

	/// Removes the entity and all of its components from `world`.
	/// Returns *false* if the handle is not [bound](EntityState::Bound).
	pub fn unregister(&mut self, world: &mut World) -> Result<bool, EcsError> {
		world.unregister_entity(self)
	}

	/// Attaches `component` to the entity, replacing any previous component of the same type.
	pub fn add_component<C: Component>(&self, world: &mut World, component: C) -> Result<bool, EcsError> {
		world.add_component(self, component)
	}

	/// Detaches the component of type `C` from the entity.
	/// Returns *false* if no such component was attached.
	pub fn remove_component<C: Component>(&self, world: &mut World) -> Result<bool, EcsError> {
		world.remove_component::<C>(self)
	}
}

impl Eq for Entity {}

impl PartialEq<Self> for Entity {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for Entity {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Entity({}@{})", self.id, self.world)
	}
}

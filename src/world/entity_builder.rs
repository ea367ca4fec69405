use crate::components::{Component, ComponentId};
use crate::world::registry::ComponentStorage;
use crate::world::World;
use crate::entities::Entity;

/// Stages [components](Component) for a new [Entity], then registers it with all of them at once.
///
/// [EntitySets](crate::entities::EntitySet) observe a single registration with the final set
/// of components, rather than one change per component.
pub struct EntityBuilder<'l> {
	world: &'l mut World,
	components: ComponentStorage,
}

impl<'l> EntityBuilder<'l> {
	pub(crate) fn new(world: &'l mut World) -> Self {
		Self {
			world,
			components: ComponentStorage::default(),
		}
	}

	/// Add a component by value, replacing a previously staged component of the same type.
	pub fn with<C: Component>(mut self, component: C) -> Self {
		self.components.insert(ComponentId::of::<C>(), Box::new(component));
		self
	}

	/// Create and register the [Entity].
	pub fn spawn(self) -> Entity {
		let mut entity = self.world.create_entity();
		self.world.admit(&mut entity, self.components);
		entity
	}
}

use crate::tests::{Dead, Position, Velocity};
use crate::components::ComponentId;
use crate::entities::EntityState;
use crate::config::WorldConfig;
use crate::error::{EcsError, UsageError};
use crate::aspects::Aspect;
use crate::world::World;

#[test]
pub fn component_storage() {
	let mut world = World::new();
	let entity = world.build_entity().with(Position(1.0, 2.0)).spawn();

	assert_eq!(entity.state(), EntityState::Bound);
	assert_eq!(world.get_component::<Position>(&entity), Some(&Position(1.0, 2.0)));
	assert_eq!(world.get_component::<Velocity>(&entity), None);

	entity.add_component(&mut world, Position(3.0, 4.0)).unwrap();
	assert_eq!(
		world.get_component::<Position>(&entity),
		Some(&Position(3.0, 4.0)),
		"Adding a component twice should replace it"
	);

	if let Some(position) = world.get_component_mut::<Position>(&entity) {
		position.0 = 10.0;
	}
	assert_eq!(world.get_component::<Position>(&entity), Some(&Position(10.0, 4.0)));

	assert_eq!(entity.remove_component::<Position>(&mut world), Ok(true));
	assert_eq!(entity.remove_component::<Position>(&mut world), Ok(false));
	assert!(!world.has_component::<Position>(&entity));
	assert_eq!(world.get_component::<Position>(&entity), None);
}

#[test]
pub fn bitsets_track_components() {
	let mut world = World::new();
	let entity = world.build_entity().with(Position(0.0, 0.0)).with(Dead).spawn();

	let bitset = world.bitset_of(entity.id()).cloned().unwrap_or_default();
	assert!(bitset.get(ComponentId::of::<Position>().index()));
	assert!(bitset.get(ComponentId::of::<Dead>().index()));
	assert_eq!(bitset.count_ones(), 2);

	entity.remove_component::<Dead>(&mut world).unwrap();
	entity.add_component(&mut world, Velocity(0.0, 0.0)).unwrap();

	let bitset = world.bitset_of(entity.id()).cloned().unwrap_or_default();
	assert!(!bitset.get(ComponentId::of::<Dead>().index()));
	assert!(bitset.get(ComponentId::of::<Velocity>().index()));
	assert!(world.has_component::<Velocity>(&entity));
}

#[test]
pub fn touching_requires_a_bound_entity() {
	let mut world = World::new();
	let anything = world.entity_set(Aspect::any());

	let mut entity = world.build_entity().with(Position(0.0, 0.0)).spawn();
	let copy = entity.clone();
	assert_eq!(world.touch(&entity), Ok(true));
	entity.unregister(&mut world).unwrap();

	assert_eq!(world.touch(&copy), Ok(false));
	assert_eq!(world.touch(&entity), Ok(false));
	let unbound = world.create_entity();
	assert_eq!(world.touch(&unbound), Ok(false));
	assert!(!anything.contains(&copy));
	assert!(anything.is_empty());

	let mut strict = World::with_config(WorldConfig::new().strict(true));
	let unbound = strict.create_entity();
	assert_eq!(
		strict.touch(&unbound),
		Err(EcsError::Usage(UsageError::NotRegistered { entity: unbound.id() }))
	);
	assert_eq!(
		strict.touch(&copy),
		Err(EcsError::Usage(UsageError::ForeignWorld {
			entity: copy.id(),
			owner: world.id(),
			world: strict.id(),
		}))
	);
}

#[test]
pub fn touching_an_unknown_entity_is_a_consistency_error() {
	let mut world = World::new();
	let anything = world.entity_set(Aspect::any());
	let member = world.build_entity().spawn();

	// A handle claiming to be bound without any record in the world.
	let mut stray = world.create_entity();
	stray.state = EntityState::Bound;

	assert_eq!(world.touch(&stray), Err(EcsError::Consistency { entity: stray.id() }));
	assert!(!anything.contains(&stray), "An entity without a record is never a member");
	assert!(anything.contains(&member));
	assert_eq!(anything.len(), 1);
}

#[test]
pub fn configuration() {
	let config = WorldConfig::new().strict(true).with_entity_capacity(1024);
	let world = World::with_config(config);

	assert!(world.config().strict);
	assert_eq!(world.config().entity_capacity, 1024);
	assert_ne!(world.id(), World::new().id(), "Every world has its own id");
}

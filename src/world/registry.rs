use crate::entities::{ChangeKind, Entity, EntityId, EntitySet, EntityState};
use std::sync::atomic::{AtomicU32, Ordering};
use crate::components::{Component, ComponentId};
use crate::error::{EcsError, UsageError};
use crate::data_structures::BitField;
use crate::world::EntityBuilder;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::config::WorldConfig;
use std::collections::{HashMap, HashSet};
use crate::aspects::Aspect;
use std::sync::Arc;
use std::any::Any;
use std::fmt;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

pub(crate) type ComponentStorage = HashMap<ComponentId, Box<dyn Any + Send + Sync>, Hasher>;

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Identifies a [World]. Unique for the lifetime of the process.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct WorldId(u32);

impl fmt::Display for WorldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

struct EntityRecord {
	entity: Entity,
	bitfield: BitField,
	components: ComponentStorage,
}

/// A container for [entities](Entity) and their associated [components](Component).
///
/// Every change to an entity is reported to the [EntitySets](EntitySet) built with
/// [`entity_set`](World::entity_set) before the call that caused it returns.
pub struct World {
	id: WorldId,
	config: WorldConfig,
	next_entity: u64,
	records: HashMap<EntityId, EntityRecord, Hasher>,
	retired: HashSet<EntityId, Hasher>,
	entity_sets: Vec<Arc<EntitySet>>,
	aspect_to_set: HashMap<Aspect, usize>,
}

impl World {
	pub fn new() -> Self {
		Self::with_config(WorldConfig::default())
	}

	pub fn with_config(config: WorldConfig) -> Self {
		Self {
			id: WorldId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
			records: HashMap::with_capacity_and_hasher(config.entity_capacity, Hasher::default()),
			retired: HashSet::default(),
			next_entity: 0,
			entity_sets: Vec::new(),
			aspect_to_set: HashMap::new(),
			config,
		}
	}

	pub fn id(&self) -> WorldId {
		self.id
	}

	pub fn config(&self) -> &WorldConfig {
		&self.config
	}

	/// Creates an unregistered [entity](Entity) with a fresh id.
	/// The entity becomes visible to [EntitySets](EntitySet) once [registered](Entity::register).
	pub fn create_entity(&mut self) -> Entity {
		let id = EntityId::new(self.next_entity);
		self.next_entity += 1;
		Entity::new(id, self.id)
	}

	/// Creates an [entity](Entity) whose components are added before it gets registered.
	pub fn build_entity(&mut self) -> EntityBuilder<'_> {
		EntityBuilder::new(self)
	}

	/// Returns the [EntitySet] of the entities matching `aspect`.
	///
	/// The set is built on first request, already containing all matching registered entities.
	/// Later requests with an equal [Aspect] return the same set.
	pub fn entity_set(&mut self, aspect: Aspect) -> Arc<EntitySet> {
		if let Some(index) = self.aspect_to_set.get(&aspect) {
			return self.entity_sets[*index].clone();
		}

		let records = self.records.values().map(|r| (&r.entity, &r.bitfield));
		let set = Arc::new(EntitySet::new(aspect.clone(), records));
		tracing::debug!(world = %self.id, ?aspect, members = set.len(), "created entity set");

		self.aspect_to_set.insert(aspect, self.entity_sets.len());
		self.entity_sets.push(set.clone());
		set
	}

	/// The component presence bits of a registered entity.
	pub fn bitset_of(&self, id: EntityId) -> Option<&BitField> {
		self.records.get(&id).map(|r| &r.bitfield)
	}

	pub fn is_registered(&self, id: EntityId) -> bool {
		self.records.contains_key(&id)
	}

	/// Number of registered entities.
	pub fn entity_count(&self) -> usize {
		self.records.len()
	}

	/// Gets a reference to a [component](Component) bound to a specific [entity](Entity).
	pub fn get_component<T: Component>(&self, entity: &Entity) -> Option<&T> {
		let record = self.records.get(&entity.id)?;
		record.components.get(&ComponentId::of::<T>())?.downcast_ref::<T>()
	}

	/// Gets a mutable reference to a [component](Component) bound to a specific [entity](Entity).
	///
	/// Changing a component's value doesn't affect any [EntitySet], so no notification is sent.
	pub fn get_component_mut<T: Component>(&mut self, entity: &Entity) -> Option<&mut T> {
		let record = self.records.get_mut(&entity.id)?;
		record.components.get_mut(&ComponentId::of::<T>())?.downcast_mut::<T>()
	}

	pub fn has_component<T: Component>(&self, entity: &Entity) -> bool {
		self.bitset_of(entity.id)
			.map_or(false, |bitfield| bitfield.get(ComponentId::of::<T>().index()))
	}

	/// Registers an [unbound](EntityState::Unbound) entity.
	pub fn register_entity(&mut self, entity: &mut Entity) -> Result<bool, EcsError> {
		if let Some(error) = self.ownership_error(entity) {
			return self.usage(error);
		}

		match entity.state {
			EntityState::Unbound if self.retired.contains(&entity.id) => {
				entity.state = EntityState::Retired;
				self.usage(UsageError::Retired { entity: entity.id })
			},
			EntityState::Unbound if self.records.contains_key(&entity.id) => {
				// Another copy of the handle was registered first.
				self.usage(UsageError::AlreadyRegistered { entity: entity.id })
			},
			EntityState::Unbound => {
				self.admit(entity, ComponentStorage::default());
				Ok(true)
			},
			EntityState::Bound => self.usage(UsageError::AlreadyRegistered { entity: entity.id }),
			EntityState::Retired => self.usage(UsageError::Retired { entity: entity.id }),
		}
	}

	/// Unregisters a [bound](EntityState::Bound) entity, dropping all of its components.
	/// The handle is retired and can't be registered again.
	pub fn unregister_entity(&mut self, entity: &mut Entity) -> Result<bool, EcsError> {
		if entity.world == self.id && self.retired.contains(&entity.id) {
			// Another copy of the handle was unregistered first.
			entity.state = EntityState::Retired;
		}

		if let Some(error) = self.bound_error(entity) {
			return self.usage(error);
		}

		if !self.records.contains_key(&entity.id) {
			return self.usage(UsageError::NotRegistered { entity: entity.id });
		}

		entity.state = EntityState::Retired;
		self.notify(entity, ChangeKind::Removed)?;
		self.records.remove(&entity.id);
		self.retired.insert(entity.id);
		Ok(true)
	}

	/// Add a new [component](Component) to the specified [entity](Entity).
	/// A [component](Component) of the same type already attached is replaced.
	pub fn add_component<T: Component>(&mut self, entity: &Entity, component: T) -> Result<bool, EcsError> {
		if let Some(error) = self.bound_error(entity) {
			return self.usage(error);
		}

		let id = ComponentId::of::<T>();
		match self.records.get_mut(&entity.id) {
			Some(record) => {
				record.bitfield.set(id.index(), true);
				record.components.insert(id, Box::new(component));
			},
			None => return self.usage(UsageError::NotRegistered { entity: entity.id }),
		}

		self.notify(entity, ChangeKind::Changed)?;
		Ok(true)
	}

	/// Remove a [component](Component) from the specified [entity](Entity).
	/// The function will return *false* if the [component](Component) is not present.
	pub fn remove_component<T: Component>(&mut self, entity: &Entity) -> Result<bool, EcsError> {
		if let Some(error) = self.bound_error(entity) {
			return self.usage(error);
		}

		let id = ComponentId::of::<T>();
		let removed = match self.records.get_mut(&entity.id) {
			Some(record) => match record.components.remove(&id) {
				Some(_) => {
					record.bitfield.set(id.index(), false);
					true
				},
				None => false,
			},
			None => return self.usage(UsageError::NotRegistered { entity: entity.id }),
		};

		if removed {
			self.notify(entity, ChangeKind::Changed)?;
		}
		Ok(removed)
	}

	/// Makes every [EntitySet] re-evaluate a [bound](EntityState::Bound) `entity` against its current components.
	///
	/// Fails with [EcsError::Consistency] if the entity has no components on record, in which
	/// case the sets have dropped it.
	pub fn touch(&self, entity: &Entity) -> Result<bool, EcsError> {
		if let Some(error) = self.bound_error(entity) {
			return self.usage(error);
		}

		self.notify(entity, ChangeKind::Changed)?;
		Ok(true)
	}

	pub(crate) fn admit(&mut self, entity: &mut Entity, components: ComponentStorage) {
		entity.state = EntityState::Bound;

		let bitfield = components.keys().map(ComponentId::index).collect();
		let record = EntityRecord {
			entity: entity.clone(),
			bitfield,
			components,
		};

		self.records.insert(entity.id, record);
		if let Some(record) = self.records.get(&entity.id) {
			self.fan_out(&record.entity, ChangeKind::Added, Some(&record.bitfield));
		}
	}

	fn notify(&self, entity: &Entity, kind: ChangeKind) -> Result<(), EcsError> {
		match self.records.get(&entity.id) {
			Some(record) => {
				self.fan_out(entity, kind, Some(&record.bitfield));
				Ok(())
			},
			None => {
				tracing::error!(world = %self.id, entity = %entity.id, ?kind, "entity has no component bitset");
				self.fan_out(entity, ChangeKind::Removed, None);
				Err(EcsError::Consistency { entity: entity.id })
			},
		}
	}

	fn fan_out(&self, entity: &Entity, kind: ChangeKind, bitfield: Option<&BitField>) {
		for set in &self.entity_sets {
			set.on_change(entity, kind, bitfield);
		}
	}

	fn usage(&self, error: UsageError) -> Result<bool, EcsError> {
		if self.config.strict {
			return Err(error.into());
		}

		tracing::debug!(world = %self.id, %error, "ignored entity operation");
		Ok(false)
	}

	fn ownership_error(&self, entity: &Entity) -> Option<UsageError> {
		(entity.world != self.id).then(|| UsageError::ForeignWorld {
			entity: entity.id,
			owner: entity.world,
			world: self.id,
		})
	}

	fn bound_error(&self, entity: &Entity) -> Option<UsageError> {
		self.ownership_error(entity).or_else(|| match entity.state {
			EntityState::Bound if self.retired.contains(&entity.id) => Some(UsageError::Retired { entity: entity.id }),
			EntityState::Bound => None,
			EntityState::Unbound => Some(UsageError::NotRegistered { entity: entity.id }),
			EntityState::Retired => Some(UsageError::Retired { entity: entity.id }),
		})
	}
}

impl Default for World {
	fn default() -> Self {
		Self::new()
	}
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::panic::{catch_unwind, AssertUnwindSafe};
use crate::entities::{Entity, EntityId};
use crate::data_structures::BitField;
use std::hash::BuildHasherDefault;
use parking_lot::{Mutex, RwLock};
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::aspects::Aspect;
use std::sync::{Arc, Weak};
use rayon::prelude::*;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

static EMPTY_BITFIELD: BitField = BitField::new();

/// The kind of lifecycle event a registry reports to an [EntitySet].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChangeKind {
	/// The entity was registered.
	Added,
	/// The entity's components changed.
	Changed,
	/// The entity was unregistered.
	Removed,
}

/// A change in the membership of an [EntitySet].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MembershipChange {
	Added,
	Removed,
}

/// Receives membership events from the [EntitySets](EntitySet) it subscribed to.
///
/// Sets only keep a weak reference to their handlers: once the last [Arc] to a handler is
/// dropped, it stops receiving events and is forgotten by the set.
pub trait EntitySetEventHandler: Send + Sync {
	fn on_entity_added(&self, entity: &Entity);
	fn on_entity_removed(&self, entity: &Entity);
}

/// A token identifying a subscription, used to [unsubscribe](EntitySet::unsubscribe).
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Subscription {
	id: u64,
}

struct Subscriber {
	subscription: Subscription,
	handler: Weak<dyn EntitySetEventHandler>,
}

/// The set of registered entities currently matching an [Aspect].
///
/// The set is kept up to date by the [World](crate::world::World) it was built from:
/// every registration, component change and unregistration is reported to the set,
/// which re-runs its [Aspect] against the entity's components and updates its membership.
pub struct EntitySet {
	aspect: Aspect,
	members: RwLock<HashMap<EntityId, Entity, Hasher>>,
	subscribers: Mutex<Vec<Subscriber>>,
	next_subscription: AtomicU64,
}

impl EntitySet {
	/// Creates a set already containing every matching entity among `entities`.
	pub(crate) fn new<'l>(aspect: Aspect, entities: impl IntoIterator<Item = (&'l Entity, &'l BitField)>) -> Self {
		let members: HashMap<EntityId, Entity, Hasher> = entities
			.into_iter()
			.filter(|(_, components)| aspect.matches(components))
			.map(|(entity, _)| (entity.id, entity.clone()))
			.collect();

		Self {
			aspect,
			members: RwLock::new(members),
			subscribers: Mutex::new(Vec::new()),
			next_subscription: AtomicU64::new(0),
		}
	}

	pub fn aspect(&self) -> &Aspect {
		&self.aspect
	}

	/// Returns true if `entity` currently matches the set's [Aspect].
	pub fn contains(&self, entity: &Entity) -> bool {
		self.contains_id(entity.id)
	}

	pub fn contains_id(&self, id: EntityId) -> bool {
		self.members.read_recursive().contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.members.read_recursive().len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.read_recursive().is_empty()
	}

	/// A snapshot of the current members.
	pub fn entities(&self) -> Vec<Entity> {
		self.members.read_recursive().values().cloned().collect()
	}

	/// Visit every member, in no particular order.
	///
	/// The visitor may read the set, but must not change the [World](crate::world::World) it belongs to:
	/// iterate over [`entities`](Self::entities) instead when members need to be modified.
	pub fn for_each(&self, mut visitor: impl FnMut(&Entity)) {
		for entity in self.members.read_recursive().values() {
			visitor(entity);
		}
	}

	/// Visit every member in parallel.
	pub fn par_for_each(&self, visitor: impl Fn(&Entity) + Send + Sync) {
		self.entities().par_iter().for_each(visitor);
	}

	/// Starts sending membership events to `handler`.
	///
	/// Only a weak reference to `handler` is kept.
	pub fn subscribe<H: EntitySetEventHandler + 'static>(&self, handler: &Arc<H>) -> Subscription {
		let subscription = Subscription {
			id: self.next_subscription.fetch_add(1, Ordering::Relaxed),
		};

		let handler: Weak<H> = Arc::downgrade(handler);
		let handler: Weak<dyn EntitySetEventHandler> = handler;
		self.subscribers.lock().push(Subscriber { subscription, handler });
		subscription
	}

	/// Stops sending events to the handler registered with `subscription`.
	/// Returns *false* if the subscription was not found.
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		let mut subscribers = self.subscribers.lock();
		match subscribers.iter().position(|s| s.subscription == subscription) {
			Some(index) => {
				subscribers.remove(index);
				true
			},
			None => false,
		}
	}

	/// Number of subscriptions, including the ones whose handler was dropped
	/// since the last event was sent.
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.lock().len()
	}

	/// Re-evaluates the membership of `entity` after the registry reported a change.
	///
	/// Missing `components` are treated as an empty bitfield; reporting the inconsistency
	/// is up to the registry.
	pub(crate) fn on_change(
		&self, entity: &Entity, kind: ChangeKind, components: Option<&BitField>,
	) -> Option<MembershipChange> {
		let components = components.unwrap_or(&EMPTY_BITFIELD);

		let change = {
			let mut members = match self.members.try_write() {
				Some(members) => members,
				None => panic!("An entity set cannot be modified while it is being iterated"),
			};

			let contains = members.contains_key(&entity.id);
			match kind {
				ChangeKind::Added | ChangeKind::Changed => match (self.aspect.matches(components), contains) {
					(true, false) => {
						members.insert(entity.id, entity.clone());
						Some(MembershipChange::Added)
					},
					(false, true) => {
						members.remove(&entity.id);
						Some(MembershipChange::Removed)
					},
					_ => None,
				},
				ChangeKind::Removed => members.remove(&entity.id).map(|_| MembershipChange::Removed),
			}
		};

		if let Some(change) = change {
			tracing::trace!(entity = %entity.id, ?kind, ?change, "entity set membership changed");
			self.notify(entity, change);
		}

		change
	}

	fn notify(&self, entity: &Entity, change: MembershipChange) {
		let handlers = {
			let mut subscribers = self.subscribers.lock();
			let mut handlers = Vec::with_capacity(subscribers.len());
			subscribers.retain(|subscriber| match subscriber.handler.upgrade() {
				Some(handler) => {
					handlers.push(handler);
					true
				},
				None => false,
			});
			handlers
		};

		// Handlers run without any lock held, so they can use the set freely.
		for handler in handlers {
			let result = catch_unwind(AssertUnwindSafe(|| match change {
				MembershipChange::Added => handler.on_entity_added(entity),
				MembershipChange::Removed => handler.on_entity_removed(entity),
			}));

			if let Err(panic) = result {
				tracing::error!(
					entity = %entity.id,
					?change,
					reason = panic_message(panic.as_ref()),
					"entity set subscriber failed"
				);
			}
		}
	}
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
	if let Some(message) = panic.downcast_ref::<&str>() {
		message
	} else if let Some(message) = panic.downcast_ref::<String>() {
		message
	} else {
		"unknown"
	}
}

use crate::entities::{Entity, EntityId, EntitySetEventHandler, MembershipChange};
use crate::components::Component;
use parking_lot::Mutex;

mod aspect_tests;
mod world_tests;

#[derive(Component, Debug, PartialEq)]
pub(crate) struct Position(pub f32, pub f32);

#[derive(Component, Debug, PartialEq)]
pub(crate) struct Velocity(pub f32, pub f32);

#[derive(Component)]
pub(crate) struct Dead;

#[derive(Component)]
pub(crate) struct Sprite;

#[derive(Component)]
pub(crate) struct Mesh;

#[derive(Component)]
pub(crate) struct Physics;

/// Records every event it receives.
#[derive(Default)]
pub(crate) struct Recorder {
	events: Mutex<Vec<(MembershipChange, EntityId)>>,
}

impl Recorder {
	pub fn events(&self) -> Vec<(MembershipChange, EntityId)> {
		self.events.lock().clone()
	}

	pub fn count(&self) -> usize {
		self.events.lock().len()
	}
}

impl EntitySetEventHandler for Recorder {
	fn on_entity_added(&self, entity: &Entity) {
		self.events.lock().push((MembershipChange::Added, entity.id()));
	}

	fn on_entity_removed(&self, entity: &Entity) {
		self.events.lock().push((MembershipChange::Removed, entity.id()));
	}
}

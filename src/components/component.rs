use crate::components::ComponentId;
use std::any::Any;

/// A piece of data that can be attached to an [Entity](crate::entities::Entity).
///
/// Implemented through #\[derive([`Component`](aspect_ecs_derive::Component))], which assigns
/// the type its [ComponentId] the first time it is requested.
pub trait Component: Any + Send + Sync {
	fn component_id() -> ComponentId;
}

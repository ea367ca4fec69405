//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.
//! [Component ids](ComponentId) are dense indices used for populating the
//! [bitfields](crate::data_structures::BitField) consumed by [aspects](crate::aspects::Aspect).
//! Once handed out, an id is never reused, so bitfields built at any point of the program
//! remain comparable with each other.

use std::sync::atomic::Ordering::Relaxed;
use crate::data_structures::BitField;
use std::sync::atomic::AtomicUsize;
use crate::components::Component;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::fmt;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
	static ref ID_TO_NAME: RwLock<Vec<&'static str>> = RwLock::new(Vec::new());
}

/// A globally unique identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`.
	#[inline(always)]
	pub fn of<T: Component>() -> ComponentId {
		T::component_id()
	}

	/// The bit index this component occupies in a component [BitField].
	#[inline(always)]
	pub const fn index(&self) -> usize {
		self.value
	}

	/// The name of the type the id was allocated for.
	pub fn name(&self) -> &'static str {
		ID_TO_NAME.read().get(self.value).copied().unwrap_or("<unknown>")
	}

	/// Allocates the next [ComponentId]. **Should not be called from user code.**
	///
	/// Called once per type by the code generated from #[derive([Component])].
	#[doc(hidden)]
	pub fn allocate(name: &'static str) -> ComponentId {
		let mut names = ID_TO_NAME.write();
		let value = NEXT_ID.fetch_add(1, Relaxed);
		debug_assert!(
			value <= u32::MAX as usize,
			"This is an insane number of components. Please seek help."
		);

		if names.len() <= value {
			names.resize(value + 1, "<unknown>");
		}
		names[value] = name;

		tracing::trace!(component = name, id = value, "allocated component id");
		ComponentId { value }
	}
}

impl fmt::Debug for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ComponentId({}: {})", self.value, self.name())
	}
}

impl fmt::Display for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl From<&[ComponentId]> for BitField {
	fn from(ids: &[ComponentId]) -> Self {
		ids.iter().map(ComponentId::index).collect()
	}
}

use crate::components::{ComponentId, ComponentSet};
use crate::data_structures::BitField;
use crate::aspects::Aspect;

/// A utility structure to build [Aspects](Aspect).
///
/// Every call adds to the relevant clause, so
/// `.all_of::<(A,)>().all_of::<(B,)>()` is equivalent to `.all_of::<(A, B)>()`.
#[derive(Default, Clone)]
pub struct AspectBuilder {
	all: BitField,
	exclude: BitField,
	one: BitField,
}

impl AspectBuilder {
	/// Specify components that must all be present.
	pub fn all(mut self, ids: impl IntoIterator<Item = ComponentId>) -> Self {
		extend(&mut self.all, ids);
		self
	}

	/// Specify components none of which may be present.
	pub fn exclude(mut self, ids: impl IntoIterator<Item = ComponentId>) -> Self {
		extend(&mut self.exclude, ids);
		self
	}

	/// Specify components at least one of which must be present.
	pub fn one(mut self, ids: impl IntoIterator<Item = ComponentId>) -> Self {
		extend(&mut self.one, ids);
		self
	}

	/// Typed version of [`all`](Self::all).
	pub fn all_of<S: ComponentSet>(mut self) -> Self {
		union(&mut self.all, &S::get_bitfield());
		self
	}

	/// Typed version of [`exclude`](Self::exclude).
	pub fn exclude_of<S: ComponentSet>(mut self) -> Self {
		union(&mut self.exclude, &S::get_bitfield());
		self
	}

	/// Typed version of [`one`](Self::one).
	pub fn one_of<S: ComponentSet>(mut self) -> Self {
		union(&mut self.one, &S::get_bitfield());
		self
	}

	/// Construct an [Aspect] from the previously specified components.
	pub fn create(self) -> Aspect {
		Aspect::new(&self.all, &self.exclude, &self.one)
	}
}

fn extend(bitfield: &mut BitField, ids: impl IntoIterator<Item = ComponentId>) {
	for id in ids {
		bitfield.set(id.index(), true);
	}
}

fn union(bitfield: &mut BitField, other: &BitField) {
	for index in other.iter_ones() {
		bitfield.set(index, true);
	}
}

use crate::data_structures::BitField;
use crate::aspects::AspectBuilder;

/// An immutable predicate over a component [BitField].
///
/// Equality and hashing are structural: two aspects built from the same clause sets are
/// interchangeable, which lets a [World](crate::world::World) share a single
/// [EntitySet](crate::entities::EntitySet) between logically identical filters.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
pub struct Aspect {
	all: BitField,
	exclude: BitField,
	one: BitField,
}

impl Aspect {
	pub fn build() -> AspectBuilder {
		AspectBuilder::default()
	}

	/// An [Aspect] with no clauses, matching every entity.
	pub fn any() -> Self {
		Self::default()
	}

	/// Creates an [Aspect] from its three clause sets.
	/// The sets are copied, so later changes to the arguments don't affect the [Aspect].
	pub fn new(all: &BitField, exclude: &BitField, one: &BitField) -> Self {
		Self {
			all: all.clone(),
			exclude: exclude.clone(),
			one: one.clone(),
		}
	}

	/// Returns true if an entity with the specified components satisfies every clause.
	///
	/// # Arguments
	/// * `components` - The component presence bits of the entity
	pub fn matches(&self, components: &BitField) -> bool {
		if !self.all.is_empty() && !self.all.is_subset_of(components) {
			return false;
		}

		if !self.exclude.is_empty() && self.exclude.intersects(components) {
			return false;
		}

		self.one.is_empty() || self.one.intersects(components)
	}

	/// Components that must all be present.
	pub fn all_set(&self) -> &BitField {
		&self.all
	}

	/// Components none of which may be present.
	pub fn exclude_set(&self) -> &BitField {
		&self.exclude
	}

	/// Components at least one of which must be present.
	pub fn one_set(&self) -> &BitField {
		&self.one
	}
}

/// Settings for a [World](crate::world::World).
#[derive(Debug, Clone, Default)]
pub struct WorldConfig {
	/// Return [usage errors](crate::error::UsageError) instead of silently ignoring the call.
	pub strict: bool,
	/// Number of entities to reserve space for up front.
	pub entity_capacity: usize,
}

impl WorldConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
		self.entity_capacity = capacity;
		self
	}
}

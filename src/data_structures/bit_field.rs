use std::hash::{Hash, Hasher};
use std::cmp::Ordering;
use std::iter::repeat;
use std::fmt;

const BITS: usize = 32;
const FIRST_BIT: u32 = 1 << (BITS - 1);

/// A dynamically sized bit-field.
///
/// Used both as the per-entity component presence vector and as the clause sets of an
/// [Aspect](crate::aspects::Aspect). Two bit-fields compare (and hash) equal when the same
/// bits are set, regardless of how much capacity either one has grown.
#[derive(Default, Clone)]
pub struct BitField {
	values: Vec<u32>,
}

impl BitField {
	/// Create a new [BitField].
	pub const fn new() -> Self {
		Self { values: Vec::new() }
	}

	/// Create a new [BitField] with the specified capacity.
	///
	/// # Arguments
	/// * `capacity` - A usize representing the container's target capacity in bits
	pub fn with_capacity(capacity: usize) -> Self {
		let mut instance = Self { values: Vec::new() };
		instance.ensure_capacity(capacity);
		instance
	}

	/// Get the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the element to retrieve
	#[inline(always)]
	pub fn get(&self, i: usize) -> bool {
		let (position, shift) = Self::pos_shift(i);
		match self.values.get(position) {
			Some(value) => (value & (FIRST_BIT >> shift)) != 0,
			None => false,
		}
	}

	/// Set the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the element to modify
	#[inline(always)]
	pub fn set(&mut self, i: usize, value: bool) {
		let (position, shift) = Self::pos_shift(i);
		let bit = FIRST_BIT >> shift;

		match value {
			true => {
				if self.values.len() <= position {
					self.extend_to_position(position);
				}
				self.values[position] |= bit;
			},

			false => {
				if let Some(bit_value) = self.values.get_mut(position) {
					*bit_value &= !bit;
				}
			},
		}
	}

	/// Returns true if no bit is set.
	pub fn is_empty(&self) -> bool {
		self.values.iter().all(|v| *v == 0)
	}

	/// Number of set bits.
	pub fn count_ones(&self) -> usize {
		self.values.iter().map(|v| v.count_ones() as usize).sum()
	}

	/// Returns true if at least one bit is set in both bit-fields.
	pub fn intersects(&self, other: &BitField) -> bool {
		self.values.iter().zip(other.values.iter()).any(|(a, b)| (*a & *b) != 0)
	}

	/// Check if every set bit of the [BitField] is also set in `other`.
	/// Stops at the first word containing a bit missing from `other`.
	///
	/// # Arguments
	/// * `other` - The bitfield to check against
	pub fn is_subset_of(&self, other: &BitField) -> bool {
		self.values.iter().enumerate().all(|(i, mask)| {
			let bits = other.values.get(i).copied().unwrap_or(0);
			(bits & *mask) == *mask
		})
	}

	/// Iterate over the indices of the set bits in ascending order.
	pub fn iter_ones(&self) -> BitFieldOnesIterator<'_> {
		BitFieldOnesIterator {
			index: 0,
			current: self.values.first().copied().unwrap_or(0),
			values: &self.values,
		}
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.values.fill(0);
	}

	/// Set the minimum capacity of the [BitField].
	/// # Arguments
	/// * `capacity` - A usize representing the container's minimum capacity in bits
	pub fn ensure_capacity(&mut self, capacity: usize) {
		if self.values.len() * BITS < capacity {
			let count = (capacity + BITS - 1) / BITS - self.values.len();
			self.values.extend(repeat(0).take(count));
		}
	}

	/// Get the [BitField]'s capacity in bits.
	pub fn capacity(&self) -> usize {
		self.values.len() * BITS
	}

	#[inline(never)]
	fn extend_to_position(&mut self, position: usize) {
		self.values.resize(position + 1, 0);
	}

	#[inline(always)]
	fn pos_shift(a: usize) -> (usize, usize) {
		(a / BITS, a % BITS)
	}

	fn significant_len(&self) -> usize {
		self.values.iter().rposition(|v| *v != 0).map_or(0, |i| i + 1)
	}
}

impl FromIterator<usize> for BitField {
	fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
		let mut bitfield = BitField::new();
		for i in iter {
			bitfield.set(i, true);
		}
		bitfield
	}
}

impl Eq for BitField {}

impl PartialEq<Self> for BitField {
	fn eq(&self, other: &Self) -> bool {
		match self.values.len().cmp(&other.values.len()) {
			Ordering::Equal => self.values.eq(&other.values),
			Ordering::Less => {
				self.values.eq(&other.values[0..self.values.len()])
					&& other.values[self.values.len()..].iter().all(|i| *i == 0)
			},
			Ordering::Greater => {
				self.values[0..other.values.len()].eq(&other.values)
					&& self.values[other.values.len()..].iter().all(|i| *i == 0)
			},
		}
	}
}

impl Hash for BitField {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Trailing zero words are capacity, not content.
		self.values[..self.significant_len()].hash(state);
	}
}

impl fmt::Debug for BitField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter_ones()).finish()
	}
}

/// Iterates over the indices of the set bits of a [BitField].
pub struct BitFieldOnesIterator<'l> {
	index: usize,
	current: u32,
	values: &'l [u32],
}

impl Iterator for BitFieldOnesIterator<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		while self.current == 0 {
			self.index += 1;
			self.current = *self.values.get(self.index)?;
		}

		let shift = self.current.leading_zeros() as usize;
		self.current &= !(FIRST_BIT >> shift);
		Some(self.index * BITS + shift)
	}
}

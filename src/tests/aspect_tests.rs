use crate::tests::{Dead, Mesh, Physics, Position, Sprite, Velocity};
use crate::components::{ComponentId, ComponentSet};
use std::collections::hash_map::DefaultHasher;
use crate::data_structures::BitField;
use std::hash::{Hash, Hasher};
use crate::aspects::Aspect;
use rand::Rng;

fn hash_of(aspect: &Aspect) -> u64 {
	let mut hasher = DefaultHasher::new();
	aspect.hash(&mut hasher);
	hasher.finish()
}

fn random_bitfield(rng: &mut impl Rng, bits: usize) -> BitField {
	(0..bits).filter(|_| rng.gen_bool(0.5)).collect()
}

#[test]
pub fn empty_aspect_matches_everything() {
	let aspect = Aspect::any();
	let mut rng = rand::thread_rng();

	assert!(aspect.matches(&BitField::new()));
	for _ in 0..256 {
		let bitfield = random_bitfield(&mut rng, 96);
		assert!(aspect.matches(&bitfield), "{:?} should match an empty aspect", bitfield);
	}
}

#[test]
pub fn clauses() {
	let position = ComponentId::of::<Position>().index();
	let dead = ComponentId::of::<Dead>().index();
	let sprite = ComponentId::of::<Sprite>().index();
	let mesh = ComponentId::of::<Mesh>().index();

	let aspect = Aspect::build()
		.all_of::<(Position,)>()
		.exclude_of::<(Dead,)>()
		.one_of::<(Sprite, Mesh)>()
		.create();

	let with = |bits: &[usize]| bits.iter().copied().collect::<BitField>();

	assert!(aspect.matches(&with(&[position, sprite])));
	assert!(aspect.matches(&with(&[position, sprite, mesh])));
	assert!(!aspect.matches(&with(&[position])), "The one clause should require Sprite or Mesh");
	assert!(!aspect.matches(&with(&[sprite])), "The all clause should require Position");
	assert!(!aspect.matches(&with(&[position, mesh, dead])), "The exclude clause should reject Dead");
}

#[test]
pub fn matching_depends_only_on_referenced_bits() {
	let bits = |bits: &[usize]| bits.iter().copied().collect::<BitField>();
	let aspect = Aspect::new(&bits(&[3, 40]), &bits(&[7]), &bits(&[12, 70]));

	let referenced = [3, 7, 12, 40, 70];
	let mut rng = rand::thread_rng();

	for _ in 0..512 {
		let first = random_bitfield(&mut rng, 128);
		let mut second = random_bitfield(&mut rng, 160);
		for i in referenced {
			second.set(i, first.get(i));
		}

		assert_eq!(
			aspect.matches(&first),
			aspect.matches(&second),
			"{:?} and {:?} agree on every referenced bit",
			first,
			second
		);
	}
}

#[test]
pub fn structural_equality() {
	let built = Aspect::build()
		.all_of::<(Position, Velocity)>()
		.exclude_of::<(Dead,)>()
		.create();

	let by_id = Aspect::build()
		.all([ComponentId::of::<Velocity>()])
		.all([ComponentId::of::<Position>()])
		.exclude([ComponentId::of::<Dead>()])
		.create();

	let all = <(Velocity, Position)>::get_bitfield();
	let exclude = <(Dead,)>::get_bitfield();
	let mut one = BitField::with_capacity(512);
	let from_sets = Aspect::new(&all, &exclude, &one);

	assert_eq!(built, by_id);
	assert_eq!(built, from_sets);
	assert_eq!(hash_of(&built), hash_of(&by_id));
	assert_eq!(hash_of(&built), hash_of(&from_sets));

	// The aspect keeps its own copy of the sets it was built from.
	one.set(ComponentId::of::<Physics>().index(), true);
	assert!(from_sets.one_set().is_empty());
	assert_ne!(from_sets, Aspect::new(&all, &exclude, &one));
}

#[test]
pub fn component_sets_are_shared() {
	let first = <(Position, Velocity)>::get_bitfield();
	let second = <(Velocity, Position)>::get_bitfield();
	assert!(std::sync::Arc::ptr_eq(&first, &second), "Equal component sets should share a bitfield");
	assert_eq!(<(Position, Position)>::component_ids(), vec![ComponentId::of::<Position>()]);

	// Builders read the shared bitfields without altering them.
	let aspect = Aspect::build().all_of::<(Position, Velocity)>().all_of::<(Dead,)>().create();
	assert_eq!(aspect.all_set().count_ones(), 3);
	assert_eq!(*<(Velocity, Position)>::get_bitfield(), *first);
	assert_eq!(first.count_ones(), 2);
}

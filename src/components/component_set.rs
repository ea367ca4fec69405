use crate::data_structures::BitField;
use crate::components::{Component, ComponentId};
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::any::TypeId;
use std::sync::Arc;

lazy_static! {
	static ref EMPTY_BITFIELD: Arc<BitField> = Arc::new(BitField::new());
	static ref TYPE_TO_BITFIELD: Mutex<HashMap<TypeId, Arc<BitField>>> = Mutex::new(HashMap::default());
	static ref VEC_TO_BITFIELD: Mutex<HashMap<Vec<ComponentId>, Arc<BitField>>> =
		Mutex::new(HashMap::default());
}

/// A statically known set of [Component] types, expressed as a tuple.
///
/// It provides a unified way to create a [BitField] from a set of [Component] types,
/// e.g. when building an [Aspect](crate::aspects::Aspect) with
/// [`all_of::<(Position, Velocity)>()`](crate::aspects::AspectBuilder::all_of).
pub trait ComponentSet: 'static {
	/// The [ComponentIds](ComponentId) of the set, sorted and deduplicated.
	fn component_ids() -> Vec<ComponentId>;

	/// Extract a shared bitfield from the set of [ComponentIds](ComponentId).
	/// Sets containing the same components share the same allocation.
	fn get_bitfield() -> Arc<BitField>;
}

impl ComponentSet for () {
	fn component_ids() -> Vec<ComponentId> {
		Vec::new()
	}

	fn get_bitfield() -> Arc<BitField> {
		EMPTY_BITFIELD.clone()
	}
}

fn cached_bitfield(key: TypeId, components: Vec<ComponentId>) -> Arc<BitField> {
	let mut ttb = TYPE_TO_BITFIELD.lock();
	if let Some(bitfield) = ttb.get(&key) {
		return bitfield.clone();
	}

	let mut vtb = VEC_TO_BITFIELD.lock();
	if let Some(bitfield) = vtb.get(&components) {
		ttb.insert(key, bitfield.clone());
		return bitfield.clone();
	}

	let bitfield = Arc::new(BitField::from(components.as_slice()));
	vtb.insert(components, bitfield.clone());
	ttb.insert(key, bitfield.clone());
	bitfield
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        impl <$($t: Component),*> ComponentSet for ($($t,)*) {
            fn component_ids() -> Vec<ComponentId> {
                let mut components = vec![$(<$t>::component_id()),*];
                components.sort();
                components.dedup();
                components
            }

            fn get_bitfield() -> Arc<BitField> {
                cached_bitfield(TypeId::of::<Self>(), Self::component_ids())
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

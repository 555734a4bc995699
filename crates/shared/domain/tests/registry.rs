use lectio_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::{Any, TypeId};

#[derive(Debug)]
struct Plain;

impl FeatureSlice for Plain {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Named(u8);

impl FeatureSlice for Named {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        "named"
    }
}

#[test]
fn slices_default_to_their_type_name() {
    let slice = InitializedSlice::new(Plain);
    assert!(slice.name.ends_with("Plain"), "{}", slice.name);
    assert_eq!(slice.id, TypeId::of::<Plain>());
}

#[test]
fn slices_report_their_own_name() {
    let slice = InitializedSlice::new(Named(7));
    assert_eq!(slice.name, "named");
    assert_eq!(slice.downcast_ref::<Named>().map(|named| named.0), Some(7));
    assert!(slice.downcast_ref::<Plain>().is_none());
}

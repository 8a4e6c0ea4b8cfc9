//! Type-erased registry entries for initialized feature slices.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// Shared, read-only state owned by a feature crate.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A slice after `init`, keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>(), state: Box::new(state) }
    }

    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Catalog(u8);

    impl FeatureSlice for Catalog {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn downcasts_to_the_registered_type_only() {
        let slice = InitializedSlice::new(Catalog(3));
        assert_eq!(slice.id, TypeId::of::<Catalog>());
        assert!(slice.name.ends_with("Catalog"));
        assert_eq!(slice.downcast_ref::<Catalog>().map(|c| c.0), Some(3));
    }
}

//! Sources of view configuration
//!
//! Every part of an application that owns screens implements
//! [`ViewProvider`] and contributes its builders to the shared collection.
//! The registry drives all providers once, in the order they are passed in,
//! before the view set is frozen.

use crate::collection::ViewCollection;

/// A contributor of view builders.
pub trait ViewProvider {
    fn configure_views(&self, collection: &mut ViewCollection);
}

/// Closures over a collection act as providers, which keeps small setups
/// and tests free of one-off provider structs.
impl<F> ViewProvider for F
where
    F: Fn(&mut ViewCollection),
{
    fn configure_views(&self, collection: &mut ViewCollection) {
        self(collection)
    }
}

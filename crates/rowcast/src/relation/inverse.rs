use std::sync::Arc;

/// Back-assigns a parent onto a freshly loaded child.
pub type Inverse<C> = Arc<dyn Fn(&mut C) + Send + Sync>;

/// Builds an [`Inverse`] that hands each child its own copy of `parent`.
pub fn inverse<C, P>(parent: P, assign: fn(&mut C, P)) -> Inverse<C>
where
    C: 'static,
    P: Clone + Send + Sync + 'static,
{
    Arc::new(move |child| assign(child, parent.clone()))
}

/// A child member able to hold a reference back to its parent.
///
/// Rows own their data, so the parent is held as a snapshot taken when the
/// relationship was resolved.
pub trait InverseRef<P> {
    fn assign(&mut self, parent: P);
}

impl<P> InverseRef<P> for Option<P> {
    fn assign(&mut self, parent: P) {
        *self = Some(parent);
    }
}

impl<P> InverseRef<P> for Option<Box<P>> {
    fn assign(&mut self, parent: P) {
        *self = Some(Box::new(parent));
    }
}

impl<P> InverseRef<P> for Option<Arc<P>> {
    fn assign(&mut self, parent: P) {
        *self = Some(Arc::new(parent));
    }
}

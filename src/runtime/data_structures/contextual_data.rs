/// Data that can be rolled back in layers.
///
/// Marking pushes a fresh layer, releasing pops the newest one together with everything added to
/// it.  Lookups see all layers at once, newest first.
pub trait ContextualData {
    /// Start a new layer.
    fn mark_context(&mut self);

    /// Forget the newest layer and its contents.
    fn release_context(&mut self);
}

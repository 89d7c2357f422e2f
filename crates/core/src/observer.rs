/// Observes solver events and optionally steers the solver.
///
/// Solvers call [`Observer::observe`] once per iteration. Returning `Some(action)`
/// asks the solver to act on it; returning `None` lets the solver continue.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// The unit observer watches nothing and never intervenes.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Receives solver events and decides how the iteration should proceed.
///
/// Solvers call `observe` once per recorded iteration. Returning `Some(action)`
/// asks the solver for a solver-specific action (typically stopping early),
/// while `None` lets it continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the no-op observer used by the `solve_unobserved` entry points.
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

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<O: Observer<usize, &'static str>>(mut observer: O) -> Option<&'static str> {
        (1..=5).find_map(|i| observer.observe(&i))
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(run(()), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let action = run(|i: &usize| {
            seen.push(*i);
            (*i == 3).then_some("stop")
        });

        assert_eq!(action, Some("stop"));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}

//! Collaborator traits for turning a declaration into a metric.
//!
//! `mtailc-sem` only defines these; the concrete store lives in the CLI,
//! which owns the one place in the program that actually tracks metrics by
//! name, the way mtail's own metric store is a singleton per process.

/// The two metric shapes a mtail program can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
}

/// Produces a metric handle for a `counter`/`gauge` declaration.
///
/// What a "handle" is is up to the implementation; `mtailc-sem` only needs
/// it cheap to clone, since it is stored directly in a symbol's
/// [`crate::symbol::Binding`].
pub trait MetricFactory {
    type Metric: Clone;

    fn new_metric(
        &mut self,
        name: &str,
        program_name: &str,
        kind: MetricKind,
        keys: &[String],
        hidden: bool,
    ) -> Self::Metric;
}

/// Registers a metric handle so it becomes visible outside the program that
/// declared it.
pub trait MetricStore<M> {
    fn add(&mut self, metric: M);
}

/// User name injected into runner/wheel calls so reactor-originated jobs are
/// distinguishable from operator-submitted ones (and reaction loops avoidable)
pub const REACTOR_USER: &str = "Reactor";
/// Ordering key assigned to declarations that do not specify one
pub const DEFAULT_ORDER: i64 = 1;
/// Fallback bound for concurrent async dispatches
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

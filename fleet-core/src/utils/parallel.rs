#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

/// Runs two operations, potentially in parallel, and returns both results.
pub fn parallel_join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(oper_a, oper_b)
}

/// Runs two operations either with [`parallel_join`] or one after another.
pub fn maybe_parallel_join<A, B, RA, RB>(is_parallel: bool, oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if is_parallel { parallel_join(oper_a, oper_b) } else { (oper_a(), oper_b()) }
}

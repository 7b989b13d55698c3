/// Search budgets - the only control over how long a solve may run.
///
/// `max_levels` bounds the breadth-first stage (its seen set and frontier
/// grow with up to 4x branching per level), `extra_depth` bounds the
/// depth-first fallback that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_levels: usize,
    pub extra_depth: usize,
}

impl SolverConfig {
    pub fn new(max_levels: usize, extra_depth: usize) -> SolverConfig {
        SolverConfig {
            max_levels,
            extra_depth,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            max_levels: 15,
            extra_depth: 5,
        }
    }
}

//! Engine entry point holding the cost assumptions

use crate::assumptions::CostAssumptions;

/// Pure return engine. Holds only configuration, so one instance can be shared
/// across threads and called repeatedly with identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnEngine {
    costs: CostAssumptions,
}

impl ReturnEngine {
    pub fn new(costs: CostAssumptions) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &CostAssumptions {
        &self.costs
    }
}

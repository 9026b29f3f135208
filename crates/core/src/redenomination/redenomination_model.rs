//! Re-denomination models.

use serde::{Deserialize, Serialize};

/// How many records of each kind a re-denomination rewrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedenominationSummary {
    pub earnings: usize,
    pub expenses: usize,
    pub budgets: usize,
    pub goals: usize,
}

impl RedenominationSummary {
    pub fn total(&self) -> usize {
        self.earnings + self.expenses + self.budgets + self.goals
    }
}

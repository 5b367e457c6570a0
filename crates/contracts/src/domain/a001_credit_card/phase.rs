use super::aggregate::FieldId;
use serde::{Deserialize, Serialize};

/// Fields in the left column of every input tab
const LEFT_COLUMN_LEN: usize = 6;

/// Tab of the entry form. The order is fixed:
/// `phase1 -> phase2 -> phase3 -> summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Phase1,
    Phase2,
    Phase3,
    Summary,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Phase1, Phase::Phase2, Phase::Phase3, Phase::Summary];

    pub fn id(self) -> &'static str {
        match self {
            Phase::Phase1 => "phase1",
            Phase::Phase2 => "phase2",
            Phase::Phase3 => "phase3",
            Phase::Summary => "summary",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Phase::Phase1 => "Phase1",
            Phase::Phase2 => "Phase2",
            Phase::Phase3 => "Phase3",
            Phase::Summary => "Summary",
        }
    }

    fn position(self) -> usize {
        self as usize
    }

    /// Next tab; stays on `Summary`
    pub fn next(self) -> Phase {
        Phase::ALL
            .get(self.position() + 1)
            .copied()
            .unwrap_or(self)
    }

    /// Previous tab; stays on `Phase1`
    pub fn prev(self) -> Phase {
        self.position()
            .checked_sub(1)
            .map(|i| Phase::ALL[i])
            .unwrap_or(self)
    }

    /// The Next button is hidden when this is false
    pub fn has_next(self) -> bool {
        self.next() != self
    }

    /// The Prev button is hidden when this is false
    pub fn has_prev(self) -> bool {
        self.prev() != self
    }

    /// Input fields rendered on this tab. Empty for `Summary`.
    pub fn fields(self) -> impl Iterator<Item = FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .filter(move |f| f.phase() == self)
    }

    /// Fields split into the left and right column of the tab
    pub fn columns(self) -> (Vec<FieldId>, Vec<FieldId>) {
        let mut left: Vec<FieldId> = self.fields().collect();
        let right = left.split_off(LEFT_COLUMN_LEN.min(left.len()));
        (left, right)
    }
}

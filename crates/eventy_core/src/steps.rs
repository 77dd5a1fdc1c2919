//! Wizard step ordering and titles.

use serde::{Deserialize, Serialize};

/// The four wizard steps, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    BasicInfo,
    Details,
    Location,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Details,
        WizardStep::Location,
        WizardStep::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::Details => "Event Details",
            WizardStep::Location => "Location",
            WizardStep::Review => "Review",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::Details => 1,
            WizardStep::Location => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(WizardStep::BasicInfo),
            1 => Some(WizardStep::Details),
            2 => Some(WizardStep::Location),
            3 => Some(WizardStep::Review),
            _ => None,
        }
    }

    /// Next step in order, or `None` at the final step.
    pub fn next(&self) -> Option<Self> {
        WizardStep::from_index(self.index() + 1)
    }

    /// Previous step in order, or `None` at the first step.
    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(WizardStep::from_index)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_round_trips() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(4), None);
    }

    #[test]
    fn test_navigation_stops_at_ends() {
        assert_eq!(WizardStep::BasicInfo.prev(), None);
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Details));
        assert_eq!(WizardStep::Review.prev(), Some(WizardStep::Location));
    }
}

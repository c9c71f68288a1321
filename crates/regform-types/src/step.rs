//! The ordered step sequence of the form

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the registration form, in fill-in order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Identity,
    Address,
    Contact,
    Attachments,
    Review,
}

impl Step {
    pub const COUNT: u8 = 5;

    pub const ALL: [Step; 5] = [
        Step::Identity,
        Step::Address,
        Step::Contact,
        Step::Attachments,
        Step::Review,
    ];

    /// 1-based position in the sequence.
    pub fn ordinal(self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Address => 2,
            Step::Contact => 3,
            Step::Attachments => 4,
            Step::Review => 5,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Step> {
        match ordinal {
            1 => Some(Step::Identity),
            2 => Some(Step::Address),
            3 => Some(Step::Contact),
            4 => Some(Step::Attachments),
            5 => Some(Step::Review),
            _ => None,
        }
    }

    /// The following step, or `None` at the end of the sequence.
    pub fn next(self) -> Option<Step> {
        Step::from_ordinal(self.ordinal() + 1)
    }

    /// The preceding step, or `None` at the start of the sequence.
    pub fn prev(self) -> Option<Step> {
        self.ordinal().checked_sub(1).and_then(Step::from_ordinal)
    }

    pub fn is_last(self) -> bool {
        self.ordinal() == Step::COUNT
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Identity => "identity",
            Step::Address => "address",
            Step::Contact => "contact",
            Step::Attachments => "attachments",
            Step::Review => "review",
        };
        f.write_str(name)
    }
}

/// UI copy for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub step: Step,
    pub title: &'static str,
    pub description: &'static str,
}

const DESCRIPTORS: [StepDescriptor; 5] = [
    StepDescriptor {
        step: Step::Identity,
        title: "Identity",
        description: "Name and organization of the person registering",
    },
    StepDescriptor {
        step: Step::Address,
        title: "Address",
        description: "Registered address, resolved against the reference table or entered manually",
    },
    StepDescriptor {
        step: Step::Contact,
        title: "Contact",
        description: "Phone number and number of signers",
    },
    StepDescriptor {
        step: Step::Attachments,
        title: "Attachments",
        description: "Supporting documents",
    },
    StepDescriptor {
        step: Step::Review,
        title: "Review",
        description: "Confirm the entered data and submit",
    },
];

impl StepDescriptor {
    pub fn for_step(step: Step) -> &'static StepDescriptor {
        &DESCRIPTORS[(step.ordinal() - 1) as usize]
    }

    pub fn all() -> &'static [StepDescriptor] {
        &DESCRIPTORS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_ordinal(step.ordinal()), Some(step));
        }
        assert_eq!(Step::from_ordinal(0), None);
        assert_eq!(Step::from_ordinal(6), None);
    }

    #[test]
    fn sequence_is_bounded() {
        assert_eq!(Step::Identity.prev(), None);
        assert_eq!(Step::Review.next(), None);
        assert_eq!(Step::Identity.next(), Some(Step::Address));
        assert_eq!(Step::Review.prev(), Some(Step::Attachments));
        assert!(Step::Review.is_last());
        assert!(!Step::Attachments.is_last());
    }

    #[test]
    fn descriptors_cover_every_step() {
        for step in Step::ALL {
            assert_eq!(StepDescriptor::for_step(step).step, step);
        }
        assert_eq!(StepDescriptor::all().len(), Step::COUNT as usize);
    }
}

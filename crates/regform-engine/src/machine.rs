//! Step navigation with transition guards

use crate::validator;
use regform_types::{FormError, FormResult, PartialSubmission, Step, ValidationPolicy};
use tracing::debug;

/// The step cursor of one form session.
///
/// Forward movement is permitted only while the current step validates
/// empty; backward movement never re-validates and never blocks. The
/// machine itself performs no I/O — the submit gate here only decides
/// whether handing the submission to the persistence collaborator is
/// allowed.
#[derive(Debug, Clone)]
pub struct FormStepMachine {
    current: Step,
}

impl Default for FormStepMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStepMachine {
    pub fn new() -> Self {
        Self {
            current: Step::Identity,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Advance one step if the current step validates empty.
    ///
    /// On failure the cursor stays put and the aggregate incomplete signal
    /// is returned; per-field detail comes from [`validator::validate`].
    /// At the final step a passing `next()` is a no-op on the cursor.
    pub fn next(
        &mut self,
        partial: &PartialSubmission,
        policy: &ValidationPolicy,
    ) -> FormResult<Step> {
        let errors = validator::validate(self.current, partial, policy);
        if !errors.is_empty() {
            debug!(step = %self.current, failed_fields = errors.len(), "step advance blocked");
            return Err(FormError::StepIncomplete(self.current));
        }
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        debug!(step = %self.current, "step advanced");
        Ok(self.current)
    }

    /// Step backward, flooring at the first step. Never validates.
    pub fn prev(&mut self) -> Step {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
        self.current
    }

    /// Check that submission is allowed: cursor at the final step, every
    /// step validating empty.
    pub fn ready_to_submit(
        &self,
        partial: &PartialSubmission,
        policy: &ValidationPolicy,
    ) -> FormResult<()> {
        if !self.current.is_last() {
            return Err(FormError::NotAtFinalStep);
        }
        if let Some(step) = validator::first_incomplete_step(partial, policy) {
            return Err(FormError::StepIncomplete(step));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_types::{AttachmentRef, Organization};

    fn complete_submission() -> PartialSubmission {
        PartialSubmission {
            first_name: "สมชาย".to_string(),
            last_name: "ใจดี".to_string(),
            organization: Some(Organization::Listed("สมาคมผู้บริโภค".to_string())),
            address_line1: "99/1 ถนนสีลม".to_string(),
            district: "สีลม".to_string(),
            amphoe: "บางรัก".to_string(),
            province: "กรุงเทพมหานคร".to_string(),
            zipcode: "10500".to_string(),
            region_type: "แขวง".to_string(),
            phone_number: "0812345678".to_string(),
            number_of_signers: Some(2),
            attachments: vec![AttachmentRef {
                file_name: "id-card.pdf".to_string(),
                blob_ref: "blob-1".to_string(),
            }],
            ..PartialSubmission::new()
        }
    }

    #[test]
    fn next_is_blocked_while_the_current_step_is_invalid() {
        let mut machine = FormStepMachine::new();
        let empty = PartialSubmission::new();
        let policy = ValidationPolicy::for_create();

        let result = machine.next(&empty, &policy);
        assert_eq!(result, Err(FormError::StepIncomplete(Step::Identity)));
        assert_eq!(machine.current(), Step::Identity);
    }

    #[test]
    fn next_walks_the_whole_sequence_when_data_is_complete() {
        let mut machine = FormStepMachine::new();
        let partial = complete_submission();
        let policy = ValidationPolicy::for_create();

        assert_eq!(machine.next(&partial, &policy), Ok(Step::Address));
        assert_eq!(machine.next(&partial, &policy), Ok(Step::Contact));
        assert_eq!(machine.next(&partial, &policy), Ok(Step::Attachments));
        assert_eq!(machine.next(&partial, &policy), Ok(Step::Review));

        // Capped at the final step.
        assert_eq!(machine.next(&partial, &policy), Ok(Step::Review));
    }

    #[test]
    fn prev_never_blocks_even_on_invalid_data() {
        let mut machine = FormStepMachine::new();
        let partial = complete_submission();
        let policy = ValidationPolicy::for_create();
        machine.next(&partial, &policy).unwrap();
        machine.next(&partial, &policy).unwrap();
        assert_eq!(machine.current(), Step::Contact);

        // prev consults no data at all; it cannot block.
        assert_eq!(machine.prev(), Step::Address);
        assert_eq!(machine.prev(), Step::Identity);
        // Floored at the first step.
        assert_eq!(machine.prev(), Step::Identity);
    }

    #[test]
    fn submit_requires_the_final_step() {
        let machine = FormStepMachine::new();
        let partial = complete_submission();
        let policy = ValidationPolicy::for_create();

        assert_eq!(
            machine.ready_to_submit(&partial, &policy),
            Err(FormError::NotAtFinalStep)
        );
    }

    #[test]
    fn submit_requires_every_step_to_validate_empty() {
        let mut machine = FormStepMachine::new();
        let mut partial = complete_submission();
        let policy = ValidationPolicy::for_create();
        for _ in 0..4 {
            machine.next(&partial, &policy).unwrap();
        }

        assert_eq!(machine.ready_to_submit(&partial, &policy), Ok(()));

        // Invalidate an earlier step after reaching review.
        partial.zipcode = "12".to_string();
        assert_eq!(
            machine.ready_to_submit(&partial, &policy),
            Err(FormError::StepIncomplete(Step::Address))
        );
    }
}

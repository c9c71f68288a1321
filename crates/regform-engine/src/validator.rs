//! Per-step validation of the in-progress submission
//!
//! Validation is a pure function of the submission and the policy; it does
//! not produce side effects or consult external services. The duplicate-
//! phone check in particular is NOT performed here — it is an asynchronous
//! advisory call behind [`crate::PhoneDirectory`], consulted for live
//! feedback only.

use regform_types::{
    FieldErrorSet, FieldId, Organization, PartialSubmission, Step, ValidationPolicy,
};

/// Validate one step, rebuilding the error set from scratch.
///
/// An empty result means the step passes.
pub fn validate(step: Step, partial: &PartialSubmission, policy: &ValidationPolicy) -> FieldErrorSet {
    let mut errors = FieldErrorSet::new();
    match step {
        Step::Identity => validate_identity(partial, &mut errors),
        Step::Address => validate_address(partial, &mut errors),
        Step::Contact => validate_contact(partial, policy, &mut errors),
        Step::Attachments => validate_attachments(partial, policy, &mut errors),
        Step::Review => {}
    }
    errors
}

/// The lowest-ordinal step that currently fails validation, if any.
///
/// Used by the submit gate: submission requires every step to validate
/// empty, and the first failing step is the one reported back.
pub fn first_incomplete_step(
    partial: &PartialSubmission,
    policy: &ValidationPolicy,
) -> Option<Step> {
    Step::ALL
        .into_iter()
        .find(|step| !validate(*step, partial, policy).is_empty())
}

fn validate_identity(partial: &PartialSubmission, errors: &mut FieldErrorSet) {
    if partial.first_name.trim().is_empty() {
        errors.insert(FieldId::FirstName, "first name is required");
    }
    if partial.last_name.trim().is_empty() {
        errors.insert(FieldId::LastName, "last name is required");
    }
    match &partial.organization {
        None => errors.insert(FieldId::Organization, "organization is required"),
        Some(Organization::Listed(name)) if name.trim().is_empty() => {
            errors.insert(FieldId::Organization, "organization is required");
        }
        Some(Organization::Other(text)) if text.trim().is_empty() => {
            errors.insert(FieldId::Organization, "organization name is required");
        }
        Some(_) => {}
    }
}

fn validate_address(partial: &PartialSubmission, errors: &mut FieldErrorSet) {
    if partial.address_line1.trim().is_empty() {
        errors.insert(FieldId::AddressLine1, "address is required");
    }
    if partial.district.trim().is_empty() {
        errors.insert(FieldId::District, "district is required");
    }
    if partial.amphoe.trim().is_empty() {
        errors.insert(FieldId::Amphoe, "amphoe is required");
    }
    if partial.province.trim().is_empty() {
        errors.insert(FieldId::Province, "province is required");
    }
    if partial.zipcode.is_empty() {
        errors.insert(FieldId::Zipcode, "zipcode is required");
    } else if !is_exact_digits(&partial.zipcode, 5) {
        errors.insert(FieldId::Zipcode, "zipcode must be exactly 5 digits");
    }
}

fn validate_contact(
    partial: &PartialSubmission,
    policy: &ValidationPolicy,
    errors: &mut FieldErrorSet,
) {
    if policy.require_phone {
        if partial.phone_number.is_empty() {
            errors.insert(FieldId::PhoneNumber, "phone number is required");
        } else if !is_exact_digits(&partial.phone_number, 10) {
            errors.insert(FieldId::PhoneNumber, "phone number must be exactly 10 digits");
        }
    }
    if policy.require_signers {
        match partial.number_of_signers {
            None => errors.insert(FieldId::NumberOfSigners, "number of signers is required"),
            Some(0) => {
                errors.insert(FieldId::NumberOfSigners, "number of signers must be a positive number");
            }
            Some(_) => {}
        }
    }
}

fn validate_attachments(
    partial: &PartialSubmission,
    policy: &ValidationPolicy,
    errors: &mut FieldErrorSet,
) {
    if policy.require_attachments && partial.attachments.is_empty() {
        errors.insert(FieldId::Attachments, "at least one attachment is required");
    }
}

fn is_exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform_types::AttachmentRef;

    fn filled_address() -> PartialSubmission {
        PartialSubmission {
            address_line1: "x".to_string(),
            district: "x".to_string(),
            amphoe: "x".to_string(),
            province: "x".to_string(),
            zipcode: "1234".to_string(),
            ..PartialSubmission::new()
        }
    }

    #[test]
    fn identity_requires_trimmed_names_and_an_organization() {
        let mut partial = PartialSubmission::new();
        partial.first_name = "   ".to_string();

        let errors = validate(Step::Identity, &partial, &ValidationPolicy::for_create());
        assert!(errors.contains(FieldId::FirstName));
        assert!(errors.contains(FieldId::LastName));
        assert!(errors.contains(FieldId::Organization));

        partial.first_name = "สมชาย".to_string();
        partial.last_name = "ใจดี".to_string();
        partial.organization = Some(Organization::Listed("สมาคมผู้บริโภค".to_string()));
        let errors = validate(Step::Identity, &partial, &ValidationPolicy::for_create());
        assert!(errors.is_empty());
    }

    #[test]
    fn other_organization_needs_non_empty_text() {
        let mut partial = PartialSubmission::new();
        partial.first_name = "a".to_string();
        partial.last_name = "b".to_string();
        partial.organization = Some(Organization::Other("  ".to_string()));

        let errors = validate(Step::Identity, &partial, &ValidationPolicy::for_create());
        assert_eq!(
            errors.message(FieldId::Organization),
            Some("organization name is required")
        );

        partial.organization = Some(Organization::Other("ชมรมอิสระ".to_string()));
        let errors = validate(Step::Identity, &partial, &ValidationPolicy::for_create());
        assert!(errors.is_empty());
    }

    #[test]
    fn four_digit_zipcode_is_a_format_error() {
        let errors = validate(
            Step::Address,
            &filled_address(),
            &ValidationPolicy::for_create(),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FieldId::Zipcode),
            Some("zipcode must be exactly 5 digits")
        );
    }

    #[test]
    fn five_digit_zipcode_passes() {
        let mut partial = filled_address();
        partial.zipcode = "10110".to_string();
        let errors = validate(Step::Address, &partial, &ValidationPolicy::for_create());
        assert!(errors.is_empty());
    }

    #[test]
    fn non_digit_zipcode_is_a_format_error() {
        let mut partial = filled_address();
        partial.zipcode = "1011x".to_string();
        let errors = validate(Step::Address, &partial, &ValidationPolicy::for_create());
        assert!(errors.contains(FieldId::Zipcode));
    }

    #[test]
    fn ten_digit_phone_passes_nine_digits_fail() {
        let mut partial = PartialSubmission::new();
        partial.number_of_signers = Some(1);

        partial.phone_number = "0812345678".to_string();
        let errors = validate(Step::Contact, &partial, &ValidationPolicy::for_create());
        assert!(errors.is_empty());

        partial.phone_number = "081234567".to_string();
        let errors = validate(Step::Contact, &partial, &ValidationPolicy::for_create());
        assert_eq!(
            errors.message(FieldId::PhoneNumber),
            Some("phone number must be exactly 10 digits")
        );
    }

    #[test]
    fn phone_rules_are_policy_gated() {
        let mut policy = ValidationPolicy::for_create();
        policy.require_phone = false;
        policy.require_signers = false;

        let errors = validate(Step::Contact, &PartialSubmission::new(), &policy);
        assert!(errors.is_empty());
    }

    #[test]
    fn signers_must_be_positive_when_required() {
        let mut partial = PartialSubmission::new();
        partial.phone_number = "0812345678".to_string();

        partial.number_of_signers = Some(0);
        let errors = validate(Step::Contact, &partial, &ValidationPolicy::for_create());
        assert!(errors.contains(FieldId::NumberOfSigners));

        partial.number_of_signers = Some(12);
        let errors = validate(Step::Contact, &partial, &ValidationPolicy::for_create());
        assert!(errors.is_empty());
    }

    #[test]
    fn attachments_follow_the_policy_flag() {
        let partial = PartialSubmission::new();

        let errors = validate(Step::Attachments, &partial, &ValidationPolicy::for_create());
        assert!(errors.contains(FieldId::Attachments));

        let errors = validate(Step::Attachments, &partial, &ValidationPolicy::for_edit());
        assert!(errors.is_empty());

        let mut with_file = PartialSubmission::new();
        with_file.attachments.push(AttachmentRef {
            file_name: "id-card.pdf".to_string(),
            blob_ref: "blob-1".to_string(),
        });
        let errors = validate(Step::Attachments, &with_file, &ValidationPolicy::for_create());
        assert!(errors.is_empty());
    }

    #[test]
    fn review_always_validates_empty() {
        let errors = validate(
            Step::Review,
            &PartialSubmission::new(),
            &ValidationPolicy::for_create(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn first_incomplete_step_scans_in_order() {
        let mut partial = PartialSubmission::new();
        let policy = ValidationPolicy::for_create();
        assert_eq!(first_incomplete_step(&partial, &policy), Some(Step::Identity));

        partial.first_name = "a".to_string();
        partial.last_name = "b".to_string();
        partial.organization = Some(Organization::Listed("c".to_string()));
        assert_eq!(first_incomplete_step(&partial, &policy), Some(Step::Address));
    }
}

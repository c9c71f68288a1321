//! Caller-supplied validation policy

use serde::{Deserialize, Serialize};

/// Flags that vary validation requirements between form variants.
///
/// The step validators consult these instead of hard-coding one variant's
/// rules: e.g. attachments are mandatory when creating a record but optional
/// when editing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub require_phone: bool,
    pub require_signers: bool,
    pub require_attachments: bool,
}

impl ValidationPolicy {
    pub fn for_create() -> Self {
        Self {
            require_phone: true,
            require_signers: true,
            require_attachments: true,
        }
    }

    pub fn for_edit() -> Self {
        Self {
            require_phone: true,
            require_signers: true,
            require_attachments: false,
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::for_create()
    }
}

//! [`tracing::Span`] constructors used at the validation boundary.

use tracing::{info_span, Span};

/// Span covering decode and validation of one submitted proposal.
pub fn validate_proposal_span(type_tag: &str) -> Span {
    info_span!("validate_proposal", type_tag = %type_tag)
}

/// Span covering validation of one member of a batch submission.
pub fn batch_member_span(index: usize, type_tag: &str) -> Span {
    info_span!("batch_member", index = %index, type_tag = %type_tag)
}

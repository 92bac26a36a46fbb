use thiserror::Error;

/// Taxonomy of validation failures, independent of the field involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AllFieldsAbsent,
    MissingField,
    InvalidFormat,
    OutOfRange,
    RelationViolation,
    DuplicateEntry,
    SequenceViolation,
    InvalidEnumeration,
    UnknownProposalType,
    MalformedPayload,
}

/// The first invariant a proposal payload violates.
///
/// Messages are surfaced to the submitter verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{proposal}: at least one field should be set")]
    AllFieldsAbsent { proposal: &'static str },

    #[error("{field} must be provided")]
    MissingField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    #[error("{relation}: {detail}")]
    RelationViolation {
        relation: &'static str,
        detail: String,
    },

    #[error("duplicate {field}: {value}")]
    DuplicateEntry { field: &'static str, value: String },

    #[error("{field} out of sequence: {reason}")]
    SequenceViolation { field: &'static str, reason: String },

    #[error("invalid {field}: {value}")]
    InvalidEnumeration { field: &'static str, value: String },

    #[error("unknown proposal type {0}")]
    UnknownProposalType(String),

    #[error("malformed {type_tag} payload: {reason}")]
    MalformedPayload { type_tag: String, reason: String },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllFieldsAbsent { .. } => ErrorKind::AllFieldsAbsent,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::RelationViolation { .. } => ErrorKind::RelationViolation,
            Self::DuplicateEntry { .. } => ErrorKind::DuplicateEntry,
            Self::SequenceViolation { .. } => ErrorKind::SequenceViolation,
            Self::InvalidEnumeration { .. } => ErrorKind::InvalidEnumeration,
            Self::UnknownProposalType(_) => ErrorKind::UnknownProposalType,
            Self::MalformedPayload { .. } => ErrorKind::MalformedPayload,
        }
    }

    pub(crate) fn format(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn relation(relation: &'static str, detail: impl Into<String>) -> Self {
        Self::RelationViolation {
            relation,
            detail: detail.into(),
        }
    }

    pub(crate) fn sequence(field: &'static str, reason: impl Into<String>) -> Self {
        Self::SequenceViolation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn duplicate(field: &'static str, value: impl ToString) -> Self {
        Self::DuplicateEntry {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn enumeration(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidEnumeration {
            field,
            value: value.to_string(),
        }
    }
}

/// Failure to load [`crate::ValidationParams`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::range("maker_fee_rate", "1.5 exceeds 1");
        assert_eq!(err.to_string(), "maker_fee_rate out of range: 1.5 exceeds 1");
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn all_fields_absent_message() {
        let err = ValidationError::AllFieldsAbsent {
            proposal: "SpotMarketParamUpdateProposal",
        };
        assert_eq!(
            err.to_string(),
            "SpotMarketParamUpdateProposal: at least one field should be set"
        );
    }
}

//! Community-pool spends bundled into one proposal.

use crate::checks::{find_duplicate_denom, validate_abstract, validate_account_address};
use crate::error::ValidationError;
use crate::params::ValidationParams;
use dexgov_types::{is_valid_denom, safe_is_positive, Coin};
use serde::{Deserialize, Serialize};

/// Pay `amount` from the community pool to `recipient`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPoolSpendProposal {
    pub title: String,
    pub description: String,
    pub recipient: String,
    #[serde(default)]
    pub amount: Vec<Coin>,
}

impl CommunityPoolSpendProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        validate_abstract(&self.title, &self.description, params)?;
        if self.recipient.is_empty() {
            return Err(ValidationError::MissingField { field: "recipient" });
        }
        validate_account_address("recipient", &self.recipient, params)?;
        validate_coins("amount", &self.amount)
    }
}

/// Coins with valid denoms, positive amounts, sorted by denom without repeats.
fn validate_coins(field: &'static str, coins: &[Coin]) -> Result<(), ValidationError> {
    for coin in coins {
        if !is_valid_denom(&coin.denom) {
            return Err(ValidationError::format(field, format!("invalid denom in {coin}")));
        }
        if !safe_is_positive(coin.amount.as_ref()) {
            return Err(ValidationError::range(field, format!("{coin} must be positive")));
        }
    }
    if let Some(denom) = find_duplicate_denom(coins) {
        return Err(ValidationError::duplicate(field, denom));
    }
    if let Some(pair) = coins.windows(2).find(|w| w[0].denom > w[1].denom) {
        return Err(ValidationError::sequence(
            field,
            format!("{} must sort before {}", pair[1].denom, pair[0].denom),
        ));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCommunityPoolSpendProposal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub proposals: Vec<CommunityPoolSpendProposal>,
}

impl BatchCommunityPoolSpendProposal {
    pub fn validate(&self, params: &ValidationParams) -> Result<(), ValidationError> {
        for spend in &self.proposals {
            spend.validate(params)?;
        }
        validate_abstract(&self.title, &self.description, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use dexgov_types::encode_bech32;

    fn spend(amount: Vec<Coin>) -> CommunityPoolSpendProposal {
        CommunityPoolSpendProposal {
            title: "Grant".into(),
            description: "Fund the indexer".into(),
            recipient: encode_bech32("gtb", &[7; 20]),
            amount,
        }
    }

    fn kind(p: &CommunityPoolSpendProposal) -> ErrorKind {
        p.validate(&ValidationParams::default()).unwrap_err().kind()
    }

    #[test]
    fn valid_spend() {
        let p = spend(vec![Coin::new("peggy0xusdt", 5), Coin::native(10)]);
        assert!(p.validate(&ValidationParams::default()).is_ok());
    }

    #[test]
    fn coin_rules() {
        assert_eq!(kind(&spend(vec![Coin::native(0)])), ErrorKind::OutOfRange);
        assert_eq!(kind(&spend(vec![Coin::new("x", 1)])), ErrorKind::InvalidFormat);
        assert_eq!(
            kind(&spend(vec![Coin::native(1), Coin::native(2)])),
            ErrorKind::DuplicateEntry
        );
        assert_eq!(
            kind(&spend(vec![Coin::native(1), Coin::new("peggy0xusdt", 2)])),
            ErrorKind::SequenceViolation
        );
    }

    #[test]
    fn recipient_rules() {
        let mut p = spend(vec![Coin::native(1)]);
        p.recipient.clear();
        assert_eq!(kind(&p), ErrorKind::MissingField);
        p.recipient = encode_bech32("cosmos", &[7; 20]);
        assert_eq!(kind(&p), ErrorKind::InvalidFormat);
    }

    #[test]
    fn batch_fails_on_first_bad_member() {
        let params = ValidationParams::default();
        let mut bad = spend(vec![Coin::native(1)]);
        bad.title = " ".into();
        let batch = BatchCommunityPoolSpendProposal {
            title: "Grants".into(),
            description: "Q3 grants".into(),
            proposals: vec![spend(vec![Coin::native(1)]), bad],
        };
        let err = batch.validate(&params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("title"));
    }
}

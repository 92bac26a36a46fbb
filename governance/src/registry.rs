//! Maps proposal type tags to payload decoders and runs validation.

use crate::error::ValidationError;
use crate::params::ValidationParams;
use crate::proposal::*;
use crate::spans;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Turns a JSON payload into typed proposal content.
pub type Decoder = fn(&Value) -> Result<ProposalContent, ValidationError>;

/// Decodes `value` as `T`, reporting serde failures as [`ValidationError::MalformedPayload`].
pub fn decode_payload<T: DeserializeOwned>(
    type_tag: &str,
    value: &Value,
) -> Result<T, ValidationError> {
    T::deserialize(value).map_err(|e| ValidationError::MalformedPayload {
        type_tag: type_tag.to_string(),
        reason: e.to_string(),
    })
}

/// Immutable once built; share it by reference.
#[derive(Clone, Debug)]
pub struct ProposalRegistry {
    params: ValidationParams,
    decoders: HashMap<String, Decoder>,
}

impl ProposalRegistry {
    /// A registry with no proposal kinds.
    pub fn new(params: ValidationParams) -> Self {
        Self {
            params,
            decoders: HashMap::new(),
        }
    }

    /// A registry with every exchange proposal kind.
    pub fn with_exchange_proposals(params: ValidationParams) -> Self {
        let mut registry = Self::new(params);
        for (tag, decoder) in exchange_decoders() {
            registry.decoders.insert(tag.to_string(), decoder);
        }
        registry
    }

    /// Adds a proposal kind. Fails if `type_tag` is already registered.
    pub fn register(
        &mut self,
        type_tag: impl Into<String>,
        decoder: Decoder,
    ) -> Result<(), ValidationError> {
        let type_tag = type_tag.into();
        if self.decoders.contains_key(&type_tag) {
            return Err(ValidationError::duplicate("type_tag", type_tag));
        }
        self.decoders.insert(type_tag, decoder);
        Ok(())
    }

    pub fn params(&self) -> &ValidationParams {
        &self.params
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.decoders.contains_key(type_tag)
    }

    /// Registered tags, sorted.
    pub fn type_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Decodes a payload without validating it.
    pub fn decode(&self, type_tag: &str, payload: &Value) -> Result<ProposalContent, ValidationError> {
        let decoder = self
            .decoders
            .get(type_tag)
            .ok_or_else(|| ValidationError::UnknownProposalType(type_tag.to_string()))?;
        decoder(payload)
    }

    /// Decodes and validates a payload, returning the accepted content.
    pub fn validate(
        &self,
        type_tag: &str,
        payload: &Value,
    ) -> Result<ProposalContent, ValidationError> {
        let span = spans::validate_proposal_span(type_tag);
        let _enter = span.enter();
        tracing::debug!("dispatching proposal");

        let result = self
            .decode(type_tag, payload)
            .and_then(|content| content.validate(&self.params).map(|()| content));
        if let Err(e) = &result {
            tracing::warn!(type_tag, error = %e, "proposal rejected");
        }
        result
    }

    /// Validates already-decoded content.
    pub fn validate_content(&self, content: &ProposalContent) -> Result<(), ValidationError> {
        let type_tag = content.type_tag();
        let span = spans::validate_proposal_span(type_tag);
        let _enter = span.enter();
        tracing::debug!("dispatching proposal");

        if !self.is_registered(type_tag) {
            let e = ValidationError::UnknownProposalType(type_tag.to_string());
            tracing::warn!(type_tag, error = %e, "proposal rejected");
            return Err(e);
        }
        content.validate(&self.params).inspect_err(|e| {
            tracing::warn!(type_tag, error = %e, "proposal rejected");
        })
    }

    /// Validates `(type_tag, payload)` submissions in order, stopping at the
    /// first rejection. The error carries the index of the failing entry.
    pub fn validate_all<'a>(
        &self,
        submissions: impl IntoIterator<Item = (&'a str, &'a Value)>,
    ) -> Result<Vec<ProposalContent>, (usize, ValidationError)> {
        submissions
            .into_iter()
            .enumerate()
            .map(|(index, (type_tag, payload))| {
                let span = spans::batch_member_span(index, type_tag);
                let _enter = span.enter();
                self.validate(type_tag, payload).map_err(|e| (index, e))
            })
            .collect()
    }
}

fn exchange_decoders() -> [(&'static str, Decoder); 16] {
    [
        (PROPOSAL_TYPE_EXCHANGE_ENABLE, |v| {
            decode_payload(PROPOSAL_TYPE_EXCHANGE_ENABLE, v).map(ProposalContent::ExchangeEnable)
        }),
        (PROPOSAL_TYPE_BATCH_EXCHANGE_MODIFICATION, |v| {
            decode_payload(PROPOSAL_TYPE_BATCH_EXCHANGE_MODIFICATION, v)
                .map(ProposalContent::BatchExchangeModification)
        }),
        (PROPOSAL_TYPE_SPOT_MARKET_PARAM_UPDATE, |v| {
            decode_payload(PROPOSAL_TYPE_SPOT_MARKET_PARAM_UPDATE, v)
                .map(ProposalContent::SpotMarketParamUpdate)
        }),
        (PROPOSAL_TYPE_SPOT_MARKET_LAUNCH, |v| {
            decode_payload(PROPOSAL_TYPE_SPOT_MARKET_LAUNCH, v)
                .map(ProposalContent::SpotMarketLaunch)
        }),
        (PROPOSAL_TYPE_PERPETUAL_MARKET_LAUNCH, |v| {
            decode_payload(PROPOSAL_TYPE_PERPETUAL_MARKET_LAUNCH, v)
                .map(ProposalContent::PerpetualMarketLaunch)
        }),
        (PROPOSAL_TYPE_EXPIRY_FUTURES_MARKET_LAUNCH, |v| {
            decode_payload(PROPOSAL_TYPE_EXPIRY_FUTURES_MARKET_LAUNCH, v)
                .map(ProposalContent::ExpiryFuturesMarketLaunch)
        }),
        (PROPOSAL_TYPE_DERIVATIVE_MARKET_PARAM_UPDATE, |v| {
            decode_payload(PROPOSAL_TYPE_DERIVATIVE_MARKET_PARAM_UPDATE, v)
                .map(ProposalContent::DerivativeMarketParamUpdate)
        }),
        (PROPOSAL_TYPE_MARKET_FORCED_SETTLEMENT, |v| {
            decode_payload(PROPOSAL_TYPE_MARKET_FORCED_SETTLEMENT, v)
                .map(ProposalContent::MarketForcedSettlement)
        }),
        (PROPOSAL_TYPE_UPDATE_DENOM_DECIMALS, |v| {
            decode_payload(PROPOSAL_TYPE_UPDATE_DENOM_DECIMALS, v)
                .map(ProposalContent::UpdateDenomDecimals)
        }),
        (PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN, |v| {
            decode_payload(PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN, v)
                .map(ProposalContent::TradingRewardCampaignLaunch)
        }),
        (PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN_UPDATE, |v| {
            decode_payload(PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN_UPDATE, v)
                .map(ProposalContent::TradingRewardCampaignUpdate)
        }),
        (PROPOSAL_TYPE_TRADING_REWARD_POINTS_UPDATE, |v| {
            decode_payload(PROPOSAL_TYPE_TRADING_REWARD_POINTS_UPDATE, v)
                .map(ProposalContent::TradingRewardPendingPointsUpdate)
        }),
        (PROPOSAL_TYPE_FEE_DISCOUNT, |v| {
            decode_payload(PROPOSAL_TYPE_FEE_DISCOUNT, v).map(ProposalContent::FeeDiscount)
        }),
        (PROPOSAL_TYPE_BATCH_COMMUNITY_POOL_SPEND, |v| {
            decode_payload(PROPOSAL_TYPE_BATCH_COMMUNITY_POOL_SPEND, v)
                .map(ProposalContent::BatchCommunityPoolSpend)
        }),
        (PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_LAUNCH, |v| {
            decode_payload(PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_LAUNCH, v)
                .map(ProposalContent::BinaryOptionsMarketLaunch)
        }),
        (PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_PARAM_UPDATE, |v| {
            decode_payload(PROPOSAL_TYPE_BINARY_OPTIONS_MARKET_PARAM_UPDATE, v)
                .map(ProposalContent::BinaryOptionsMarketParamUpdate)
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn registry() -> ProposalRegistry {
        ProposalRegistry::with_exchange_proposals(ValidationParams::default())
    }

    #[test]
    fn registers_every_exchange_kind() {
        let r = registry();
        assert_eq!(r.type_tags().len(), 16);
        assert!(r.is_registered(PROPOSAL_TYPE_SPOT_MARKET_LAUNCH));
        assert!(r.is_registered(PROPOSAL_TYPE_TRADING_REWARD_CAMPAIGN_UPDATE));
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let r = ProposalRegistry::new(ValidationParams::default());
        let err = r
            .validate(PROPOSAL_TYPE_SPOT_MARKET_LAUNCH, &json!({}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownProposalType);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut r = ProposalRegistry::new(ValidationParams::default());
        let decoder: Decoder = |v| {
            decode_payload(PROPOSAL_TYPE_FEE_DISCOUNT, v).map(ProposalContent::FeeDiscount)
        };
        assert!(r.register("Custom", decoder).is_ok());
        let err = r.register("Custom", decoder).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateEntry);
    }

    #[test]
    fn unknown_tag_rejected() {
        let err = registry().validate("ProposalTypeNope", &json!({})).unwrap_err();
        assert_eq!(err, ValidationError::UnknownProposalType("ProposalTypeNope".into()));
    }

    #[test]
    fn malformed_payload_rejected() {
        let err = registry()
            .validate(PROPOSAL_TYPE_MARKET_FORCED_SETTLEMENT, &json!({"title": 5}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPayload);
    }

    #[test]
    fn accepted_payload_returns_content() {
        let payload = json!({
            "title": "Enable spot",
            "description": "Open spot trading",
            "exchange_type": 1,
        });
        let content = registry()
            .validate(PROPOSAL_TYPE_EXCHANGE_ENABLE, &payload)
            .unwrap();
        assert_eq!(content.type_tag(), PROPOSAL_TYPE_EXCHANGE_ENABLE);
        assert!(registry().validate_content(&content).is_ok());
        assert_eq!(
            ProposalRegistry::new(ValidationParams::default())
                .validate_content(&content)
                .unwrap_err()
                .kind(),
            ErrorKind::UnknownProposalType
        );
    }

    #[test]
    fn validate_all_reports_failing_index() {
        let good = json!({"title": "a", "description": "b", "exchange_type": 2});
        let bad = json!({"title": "a", "description": "b", "exchange_type": 0});
        let r = registry();
        let err = r
            .validate_all([
                (PROPOSAL_TYPE_EXCHANGE_ENABLE, &good),
                (PROPOSAL_TYPE_EXCHANGE_ENABLE, &bad),
            ])
            .unwrap_err();
        assert_eq!(err.0, 1);
        assert_eq!(err.1.kind(), ErrorKind::InvalidEnumeration);
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProposalRegistry>();
    }
}

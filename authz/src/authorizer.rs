use crate::{Attributes, InvalidRule, Rule, RuleConfig};
use anyhow::Result;
use tracing::debug;

/// Reason attached to every allow rendered by the static engine.
pub const STATIC_ALLOW_REASON: &str = "found corresponding static auth config";

/// The outcome of an authorization evaluation.
///
/// `NoOpinion` defers to the rest of the caller's authorizer chain; it is
/// not a denial.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Deny,
    NoOpinion,
}

/// A decision together with its human-readable justification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authorization {
    pub decision: Decision,
    pub reason: String,
}

/// Renders authorization decisions for inbound requests.
///
/// The `Result` carries failures of the authorizer itself (e.g. a remote
/// backend), never a denial; denials are decisions.
#[async_trait::async_trait]
pub trait Authorizer {
    async fn authorize(&self, attrs: &dyn Attributes) -> Result<Authorization>;
}

/// Authorizes requests against a fixed, ordered rule list.
///
/// Rules are evaluated in configuration order and the first match wins.
/// Evaluation is read-only, so one authorizer may serve any number of
/// concurrent requests.
#[derive(Clone, Debug)]
pub struct StaticAuthorizer {
    rules: Vec<Rule>,
}

// === impl Authorization ===

impl Authorization {
    pub fn allow(reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Allow,
            reason: reason.into(),
        }
    }

    pub fn no_opinion() -> Self {
        Self {
            decision: Decision::NoOpinion,
            reason: String::new(),
        }
    }
}

// === impl StaticAuthorizer ===

impl StaticAuthorizer {
    /// Validates the given configuration and builds an authorizer over it.
    ///
    /// Fails on the first invalid rule, so an authorizer holding an
    /// inconsistent rule can never be evaluated.
    pub fn new(rules: impl IntoIterator<Item = RuleConfig>) -> Result<Self, InvalidRule> {
        let rules = rules
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>, InvalidRule>>()?;
        Ok(Self { rules })
    }
}

#[async_trait::async_trait]
impl Authorizer for StaticAuthorizer {
    async fn authorize(&self, attrs: &dyn Attributes) -> Result<Authorization> {
        for rule in &self.rules {
            if rule.matches(attrs) {
                debug!(
                    verb = attrs.verb(),
                    resource = attrs.resource(),
                    path = attrs.path(),
                    "request allowed by static rule"
                );
                return Ok(Authorization::allow(STATIC_ALLOW_REASON));
            }
        }

        Ok(Authorization::no_opinion())
    }
}

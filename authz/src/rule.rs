use crate::{Attributes, ValueMatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One static authorization entry, as supplied by configuration.
///
/// Omitted fields read as empty; an empty field matches any request value.
/// `resourceRequest` is never wildcarded: `true` targets API resource
/// requests (which carry no `path`), `false` targets a non-resource URL
/// `path`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleConfig {
    pub user: UserConfig,
    pub verb: String,
    pub namespace: String,
    pub api_group: String,
    pub resource: String,
    pub subresource: String,
    pub name: String,
    pub resource_request: bool,
    pub path: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserConfig {
    pub name: String,

    /// Accepted for schema compatibility; group membership is not consulted
    /// when matching.
    pub groups: Vec<String>,
}

/// A validated rule. Only `TryFrom<RuleConfig>` constructs one, so every
/// `Rule` satisfies the resource/path invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub user: ValueMatch,
    pub verb: ValueMatch,
    pub namespace: ValueMatch,
    pub api_group: ValueMatch,
    pub resource: ValueMatch,
    pub subresource: ValueMatch,
    pub name: ValueMatch,
    pub target: TargetMatch,
}

/// Restricts a rule to one of the two request styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetMatch {
    /// Matches API resource requests. Resource rules carry no path.
    Resource,

    /// Matches non-resource requests against an exact URL path.
    NonResource(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidRule {
    #[error("resource rules must not include a path: {0:?}")]
    ResourceWithPath(String),

    #[error("non-resource rules must include a path")]
    NonResourceWithoutPath,
}

// === impl Rule ===

impl Rule {
    /// Returns true when every configured attribute accepts the request.
    ///
    /// A request without a principal is matched as if its user name were
    /// empty, so only rules that leave the user unconstrained accept it.
    pub fn matches(&self, attrs: &dyn Attributes) -> bool {
        let user = attrs.user().map_or("", |user| user.name());

        self.user.matches(user)
            && self.verb.matches(attrs.verb())
            && self.namespace.matches(attrs.namespace())
            && self.api_group.matches(attrs.api_group())
            && self.resource.matches(attrs.resource())
            && self.subresource.matches(attrs.subresource())
            && self.name.matches(attrs.name())
            && self.target.matches(attrs)
    }
}

impl TryFrom<RuleConfig> for Rule {
    type Error = InvalidRule;

    fn try_from(config: RuleConfig) -> Result<Self, InvalidRule> {
        let RuleConfig {
            user,
            verb,
            namespace,
            api_group,
            resource,
            subresource,
            name,
            resource_request,
            path,
        } = config;

        let target = match (resource_request, path.is_empty()) {
            (true, true) => TargetMatch::Resource,
            (false, false) => TargetMatch::NonResource(path),
            (true, false) => return Err(InvalidRule::ResourceWithPath(path)),
            (false, true) => return Err(InvalidRule::NonResourceWithoutPath),
        };

        Ok(Self {
            user: user.name.into(),
            verb: verb.into(),
            namespace: namespace.into(),
            api_group: api_group.into(),
            resource: resource.into(),
            subresource: subresource.into(),
            name: name.into(),
            target,
        })
    }
}

// === impl TargetMatch ===

impl TargetMatch {
    pub fn matches(&self, attrs: &dyn Attributes) -> bool {
        match self {
            Self::Resource => attrs.is_resource_request(),
            Self::NonResource(path) => {
                !attrs.is_resource_request() && path.as_str() == attrs.path()
            }
        }
    }
}

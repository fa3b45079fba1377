#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod attributes;
mod authorizer;
mod rule;
mod value_match;


pub use self::{
    attributes::{Attributes, User},
    authorizer::{Authorization, Authorizer, Decision, StaticAuthorizer, STATIC_ALLOW_REASON},
    rule::{InvalidRule, Rule, RuleConfig, TargetMatch, UserConfig},
    value_match::ValueMatch,
};

// File: src/rules.rs
// Purpose: Parser for the comma-separated rule strings attached to fields

use std::collections::BTreeMap;

pub const REQUIRED: &str = "required";
pub const ALLOW_EMPTY: &str = "allowempty";
pub const GREATER_THAN: &str = "greaterthan";
pub const LESS_THAN: &str = "lessthan";
/// Accepted but not enforced
pub const FORMAT: &str = "format";

/// Requirements that take the following token as their parameter
const BINARY: &[&str] = &[GREATER_THAN, LESS_THAN];

/// Error produced while parsing a rule string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("requirement `{requirement}` expects a parameter but the rule ends")]
    MissingParameter { requirement: String },
}

/// Parsed requirements of a single field
///
/// Maps a requirement name to its optional parameter. Built fresh for every
/// field on every validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    requirements: BTreeMap<String, Option<String>>,
}

impl RequirementSet {
    /// Parse a rule such as `"required,greaterthan,0"`
    ///
    /// Tokens are trimmed and empty tokens are ignored. `greaterthan` and
    /// `lessthan` consume the next token as their parameter; a trailing binary
    /// token is a [`RuleError::MissingParameter`].
    pub fn parse(rule: &str) -> Result<Self, RuleError> {
        let mut set = Self::default();
        match set.fill(rule) {
            Some(requirement) => Err(RuleError::MissingParameter { requirement }),
            None => Ok(set),
        }
    }

    /// Parse a rule, dropping a dangling binary requirement instead of failing
    ///
    /// Everything parsed before the dangling token is kept.
    pub fn parse_lenient(rule: &str) -> Self {
        let mut set = Self::default();
        if let Some(requirement) = set.fill(rule) {
            tracing::warn!(
                rule,
                requirement = %requirement,
                "rule ends without a parameter; requirement ignored"
            );
        }
        set
    }

    /// Returns the name of a dangling binary requirement, if any
    fn fill(&mut self, rule: &str) -> Option<String> {
        let mut tokens = rule.split(',').map(str::trim).filter(|t| !t.is_empty());

        while let Some(token) = tokens.next() {
            if BINARY.contains(&token) {
                match tokens.next() {
                    Some(param) => self.insert(token, Some(param)),
                    None => return Some(token.to_string()),
                }
            } else {
                self.insert(token, None);
            }
        }
        None
    }

    fn insert(&mut self, name: &str, param: Option<&str>) {
        self.requirements
            .insert(name.to_string(), param.map(str::to_string));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.requirements.contains_key(name)
    }

    /// Parameter of a binary requirement
    pub fn param(&self, name: &str) -> Option<&str> {
        self.requirements.get(name).and_then(|p| p.as_deref())
    }

    /// Parameter of a binary requirement read as an integer
    ///
    /// `None` when absent or not an integer.
    pub fn int_param(&self, name: &str) -> Option<i128> {
        self.param(name).and_then(|p| p.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.requirements
            .iter()
            .map(|(name, param)| (name.as_str(), param.as_deref()))
    }

    /// Names of flags whose name starts with `prefix`, e.g. `format(ddddd)`
    pub fn flags_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.requirements
            .keys()
            .map(String::as_str)
            .filter(move |name| name.starts_with(prefix))
    }
}

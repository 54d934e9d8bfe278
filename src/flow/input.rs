use regex::Regex;
use std::fmt;

/// The widget kind of a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Select,
    Number,
    Email,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => write!(f, "text"),
            InputKind::Select => write!(f, "select"),
            InputKind::Number => write!(f, "number"),
            InputKind::Email => write!(f, "email"),
        }
    }
}

/// A form input attached to an action node. Its value is stored as a variable named after `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSpec {
    pub id: String,
    pub kind: InputKind,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub default: Option<String>,
    /// Choices offered by a `Select` input.
    pub options: Vec<String>,
    /// Regular expression the whole value should match.
    pub validation: Option<ValidationPattern>,
}

/// A validation regex, compiled once and anchored to the whole value.
///
/// A pattern that fails to compile is kept so it can be reported on every check.
#[derive(Debug, Clone)]
pub struct ValidationPattern {
    source: String,
    compiled: Option<Regex>,
}

impl ValidationPattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = Regex::new(&format!("^(?:{})$", source)).ok();
        Self { source, compiled }
    }

    /// The pattern as written in the flow file.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }
}

impl PartialEq for ValidationPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ValidationPattern {}

/// An advisory finding about an input value. Issues never block navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    Required,
    NotANumber,
    InvalidEmail,
    UnknownOption,
    PatternMismatch { pattern: String },
    InvalidPattern { pattern: String },
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputIssue::Required => write!(f, "a value is required"),
            InputIssue::NotANumber => write!(f, "expected a number"),
            InputIssue::InvalidEmail => write!(f, "expected an email address"),
            InputIssue::UnknownOption => write!(f, "not one of the offered options"),
            InputIssue::PatternMismatch { pattern } => {
                write!(f, "does not match the pattern '{}'", pattern)
            }
            InputIssue::InvalidPattern { pattern } => {
                write!(f, "the pattern '{}' is not a valid regular expression", pattern)
            }
        }
    }
}

impl InputSpec {
    /// Checks a candidate value against this input's constraints.
    ///
    /// An absent or empty value only yields `Required` (when the input is required);
    /// the remaining checks apply to non-empty values.
    pub fn check(&self, value: Option<&str>) -> Vec<InputIssue> {
        let value = match value.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None if self.required => return vec![InputIssue::Required],
            None => return Vec::new(),
        };

        let mut issues = Vec::new();
        match self.kind {
            InputKind::Number if !value.trim().parse::<f64>().is_ok_and(f64::is_finite) => {
                issues.push(InputIssue::NotANumber)
            }
            InputKind::Email if !looks_like_email(value) => issues.push(InputIssue::InvalidEmail),
            InputKind::Select if !self.options.iter().any(|o| o == value) => {
                issues.push(InputIssue::UnknownOption)
            }
            _ => {}
        }

        if let Some(pattern) = &self.validation {
            match &pattern.compiled {
                Some(re) if !re.is_match(value) => issues.push(InputIssue::PatternMismatch {
                    pattern: pattern.source.clone(),
                }),
                Some(_) => {}
                None => issues.push(InputIssue::InvalidPattern {
                    pattern: pattern.source.clone(),
                }),
            }
        }
        issues
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar types a module attribute can carry.
///
/// This is the closed set of types the rule language understands. Value and
/// iterable attributes accept every variant; function parameters only accept
/// the subset listed in [`ScalarType::parse_parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Undefined,
    Bool,
    Int,
    Float,
    String,
    Regexp,
    Object,
}

impl ScalarType {
    /// Parses a type name used by `value`, `array` and `dictionary` nodes.
    #[must_use]
    pub fn parse_value(name: &str) -> Option<Self> {
        match name {
            "undefined" => Some(Self::Undefined),
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "string" => Some(Self::String),
            "regexp" => Some(Self::Regexp),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    /// Parses a type name used in a function's `arguments` matrix.
    #[must_use]
    pub fn parse_parameter(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "string" => Some(Self::String),
            "regexp" => Some(Self::Regexp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Regexp => "regexp",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_names() {
        for name in ["undefined", "bool", "int", "float", "string", "regexp", "object"] {
            let parsed = ScalarType::parse_value(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
        assert_eq!(ScalarType::parse_value("integer"), None);
        assert_eq!(ScalarType::parse_value("Int"), None);
    }

    #[test]
    fn test_parameter_names_are_narrower() {
        assert_eq!(ScalarType::parse_parameter("int"), Some(ScalarType::Int));
        assert_eq!(ScalarType::parse_parameter("string"), Some(ScalarType::String));
        assert_eq!(ScalarType::parse_parameter("regexp"), Some(ScalarType::Regexp));
        assert_eq!(ScalarType::parse_parameter("float"), None);
        assert_eq!(ScalarType::parse_parameter("object"), None);
    }
}

//! Model value object representing a hosted Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted models the assistant can be bound to (Value Object)
///
/// A conversation handle is created against exactly one of these
/// identifiers and keeps it for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Pro,
    Gemini15Flash,
    Gemini20Flash,
    Gemini25Pro,
    Gemini25Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// Models known to serve `generateContent`
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini15Pro,
            Model::Gemini15Flash,
            Model::Gemini20Flash,
            Model::Gemini25Pro,
            Model::Gemini25Flash,
        ]
    }

    /// Check if this is a built-in model identifier
    pub fn is_known(&self) -> bool {
        !matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 1.5 Pro)
    fn default() -> Self {
        Model::Gemini15Pro
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models_parse_back() {
        for model in Model::known_models() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
            assert!(parsed.is_known());
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-exp-1206".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
        assert!(!model.is_known());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gemini-1.5-pro");
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gemini25Flash).unwrap();
        assert_eq!(json, "\"gemini-2.5-flash\"");
        let model: Model = serde_json::from_str("\"gemini-1.5-pro\"").unwrap();
        assert_eq!(model, Model::Gemini15Pro);
    }
}

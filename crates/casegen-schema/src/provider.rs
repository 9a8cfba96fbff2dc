use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External LLM service queried for test-case text.
///
/// Provider identity never reaches the parsing rules; it only keys the
/// columns of a [`crate::run::Run`]. Declaration order is display order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Gemini,
    Claude,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Gemini, Provider::Claude];

    pub fn label(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Gemini",
            Provider::Claude => "Claude",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "gpt" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            "claude" => Ok(Provider::Claude),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trips_through_str() {
        for p in Provider::ALL {
            let parsed: Provider = p.label().parse().unwrap();
            assert_eq!(parsed, p);
        }
    }

    #[test]
    fn provider_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Provider::OpenAi).unwrap(), "\"openai\"");
        assert_eq!(serde_json::to_string(&Provider::Claude).unwrap(), "\"claude\"");
    }

    #[test]
    fn provider_order_is_declaration_order() {
        let mut v = vec![Provider::Claude, Provider::OpenAi, Provider::Gemini];
        v.sort();
        assert_eq!(v, Provider::ALL.to_vec());
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

/// Usage category a model can be offered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Chat,
    Feedback,
    SinglePrompt,
    Translate,
    /// Image to text
    Itt,
    QuestionGeneration,
    Agent,
}

impl Purpose {
    pub const ALL: [Purpose; 7] = [
        Purpose::Chat,
        Purpose::Feedback,
        Purpose::SinglePrompt,
        Purpose::Translate,
        Purpose::Itt,
        Purpose::QuestionGeneration,
        Purpose::Agent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Chat => "chat",
            Purpose::Feedback => "feedback",
            Purpose::SinglePrompt => "singleprompt",
            Purpose::Translate => "translate",
            Purpose::Itt => "itt",
            Purpose::QuestionGeneration => "questiongeneration",
            Purpose::Agent => "agent",
        }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Purpose {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Purpose::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == s)
            .ok_or_else(|| ConnectorError::not_found("Purpose", s))
    }
}

//! Preview collaborator boundary
//!
//! Human-readable descriptions and next-run times come from an external
//! humanizer service. The editor only hands it the current expression; a
//! failing or missing humanizer never changes editor state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the humanizer reports about an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Whether the downstream scheduler accepts the expression
    pub is_valid: bool,

    /// Human-readable summary (e.g. "At 06:00 every day")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Next occurrence in the requested timezone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
}

impl Preview {
    /// A preview for an expression the humanizer rejected or could not check
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            description: None,
            next_run: None,
        }
    }

    /// A valid preview with a description
    pub fn valid(description: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            description: Some(description.into()),
            next_run: None,
        }
    }

    pub fn with_next_run(mut self, next_run: DateTime<Utc>) -> Self {
        self.next_run = Some(next_run);
        self
    }
}

/// External service that describes cron expressions
#[async_trait]
pub trait ExpressionHumanizer: Send + Sync {
    /// Describe `expression` for the given locale and timezone labels
    async fn describe(&self, expression: &str, locale: &str, timezone: &str) -> Result<Preview>;
}

// Provider module.
// Defines the capability trait each job-board client implements.

pub mod headhunter;
pub mod superjob;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{SearchQuery, Vacancy};

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

/// Capability contract for a job-board client: fetch raw results for one
/// query, and translate a single raw result into the canonical record.
/// Providers share no state, only this interface.
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Short name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Issue exactly one HTTP request for the query and return the raw
    /// result entries in the provider's native schema. No pagination, no
    /// retries. Whether a transport failure propagates or degrades to an
    /// empty result is a per-provider policy documented on each impl.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Value>, AppError>;

    /// Translate one raw entry into a [`Vacancy`]. Missing required fields
    /// are a parse error; missing optional fields map to `None`.
    fn parse(&self, raw: &Value) -> Result<Vacancy, AppError>;
}

/// Split the skill text on whitespace and strip trailing commas, so
/// "python, sql," yields ["python", "sql"].
pub(crate) fn skill_tokens(skills: &str) -> Vec<String> {
    skills
        .split_whitespace()
        .map(|t| t.trim_end_matches(',').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_on_whitespace_and_strips_trailing_commas() {
        assert_eq!(
            skill_tokens("python, sql  django,"),
            vec!["python", "sql", "django"]
        );
    }

    #[test]
    fn drops_tokens_that_were_only_commas() {
        assert_eq!(skill_tokens("rust ,, tokio"), vec!["rust", "tokio"]);
        assert!(skill_tokens("   ").is_empty());
    }
}

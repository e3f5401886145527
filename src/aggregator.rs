use crate::error::AppError;
use crate::models::{SearchQuery, Vacancy};
use crate::providers::JobProvider;

/// What one aggregation produced: every vacancy collected from the providers
/// that succeeded, in provider-call order, plus the failures from those that
/// did not. A failed provider never hides the others' results.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub vacancies: Vec<Vacancy>,
    pub failures: Vec<(String, AppError)>,
}

/// Run one logical search across the given providers, strictly sequentially
/// and in supply order. Each provider's raw results are parsed into canonical
/// records and concatenated; there is no interleaving and no re-sorting.
pub async fn aggregate(providers: &[Box<dyn JobProvider>], query: &SearchQuery) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();

    for provider in providers {
        let name = provider.name().to_string();
        match search_one(provider.as_ref(), query).await {
            Ok(mut vacancies) => {
                tracing::info!("{name}: {} vacancies", vacancies.len());
                outcome.vacancies.append(&mut vacancies);
            }
            Err(e) => {
                tracing::error!("{name} failed: {e}");
                outcome.failures.push((name, e));
            }
        }
    }

    outcome
}

async fn search_one(
    provider: &dyn JobProvider,
    query: &SearchQuery,
) -> Result<Vec<Vacancy>, AppError> {
    let raw = provider.search(query).await?;
    raw.iter().map(|entry| provider.parse(entry)).collect()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;

    /// In-memory provider: canned raw entries, or a canned failure.
    struct StubBoard {
        name: &'static str,
        result: Result<Vec<Value>, &'static str>,
    }

    impl StubBoard {
        fn with_titles(name: &'static str, titles: &[&str]) -> Self {
            let entries = titles
                .iter()
                .map(|t| json!({ "title": t, "url": format!("https://{name}/{t}") }))
                .collect();
            StubBoard {
                name,
                result: Ok(entries),
            }
        }

        fn failing(name: &'static str, message: &'static str) -> Self {
            StubBoard {
                name,
                result: Err(message),
            }
        }
    }

    #[async_trait]
    impl JobProvider for StubBoard {
        fn name(&self) -> &str {
            self.name
        }

        async fn search(&self, _query: &SearchQuery) -> Result<Vec<Value>, AppError> {
            match &self.result {
                Ok(entries) => Ok(entries.clone()),
                Err(message) => Err(AppError::Network(message.to_string())),
            }
        }

        fn parse(&self, raw: &Value) -> Result<Vacancy, AppError> {
            Ok(Vacancy {
                title: raw["title"].as_str().unwrap_or_default().to_string(),
                url: raw["url"].as_str().unwrap_or_default().to_string(),
                requirement: None,
                responsibility: None,
                salary_from: None,
            })
        }
    }

    #[tokio::test]
    async fn concatenates_results_in_provider_call_order() {
        let providers: Vec<Box<dyn JobProvider>> = vec![
            Box::new(StubBoard::with_titles("alpha", &["a1", "a2"])),
            Box::new(StubBoard::with_titles("beta", &["b1", "b2", "b3"])),
        ];

        let outcome = aggregate(&providers, &SearchQuery::new("rust")).await;

        assert!(outcome.failures.is_empty());
        let titles: Vec<&str> = outcome.vacancies.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["a1", "a2", "b1", "b2", "b3"]);
    }

    #[tokio::test]
    async fn one_failing_provider_does_not_abort_the_rest() {
        let providers: Vec<Box<dyn JobProvider>> = vec![
            Box::new(StubBoard::failing("alpha", "connection refused")),
            Box::new(StubBoard::with_titles("beta", &["b1"])),
        ];

        let outcome = aggregate(&providers, &SearchQuery::new("rust")).await;

        assert_eq!(outcome.vacancies.len(), 1);
        assert_eq!(outcome.vacancies[0].title, "b1");
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "alpha");
        assert!(outcome.failures[0].1.is_network());
    }

    #[tokio::test]
    async fn no_providers_yields_an_empty_outcome() {
        let providers: Vec<Box<dyn JobProvider>> = Vec::new();
        let outcome = aggregate(&providers, &SearchQuery::new("rust")).await;
        assert!(outcome.vacancies.is_empty());
        assert!(outcome.failures.is_empty());
    }
}

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{SearchQuery, Vacancy};
use crate::providers::{JobProvider, skill_tokens};

const BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// Ordinal experience codes keyed by the years threshold they start at.
const EXPERIENCE_THRESHOLDS: [(u32, u32); 4] = [(0, 1), (1, 2), (3, 3), (6, 4)];

/// SuperJob client. Requests are authenticated with an application id sent
/// in the `X-Api-App-Id` header.
///
/// Failure policy: transport-class failures are recovered locally — the
/// search logs a warning and yields an empty result set instead of failing
/// the whole aggregation. Parse failures still propagate.
pub struct SuperJob {
    client: reqwest::Client,
    app_id: String,
}

impl SuperJob {
    pub fn new(app_id: impl Into<String>) -> Self {
        SuperJob {
            client: reqwest::Client::new(),
            app_id: app_id.into(),
        }
    }

    async fn fetch(&self, params: &[(String, String)]) -> Result<Vec<Value>, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .header("X-Api-App-Id", &self.app_id)
            .query(params)
            .send()
            .await
            .map_err(AppError::from_http)?;

        if !resp.status().is_success() {
            return Err(AppError::Network(format!(
                "SuperJob returned {}",
                resp.status()
            )));
        }

        let data: Value = resp.json().await.map_err(AppError::from_http)?;
        extract_objects(&data)
    }
}

#[async_trait]
impl JobProvider for SuperJob {
    fn name(&self) -> &str {
        "superjob"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Value>, AppError> {
        let params = build_params(query);

        match self.fetch(&params).await {
            Ok(objects) => Ok(objects),
            Err(e) if e.is_network() => {
                tracing::warn!("SuperJob unreachable, returning no results: {e}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn parse(&self, raw: &Value) -> Result<Vacancy, AppError> {
        let title = required_str(raw, "profession")?;
        let url = required_str(raw, "link")?;

        let requirement = raw
            .get("candidat")
            .and_then(|v| v.as_str())
            .map(String::from);
        let responsibility = raw
            .get("vacancyRichText")
            .and_then(|v| v.as_str())
            .map(String::from);

        // The API reports 0 for postings with no figure; normalize that to
        // None so salary comparisons stay meaningful.
        let salary_from = raw
            .get("payment_from")
            .and_then(|v| v.as_i64())
            .filter(|&s| s != 0);

        Ok(Vacancy {
            title,
            url,
            requirement,
            responsibility,
            salary_from,
        })
    }
}

fn required_str(raw: &Value, key: &str) -> Result<String, AppError> {
    raw.get(key)
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| AppError::Parse(format!("missing '{key}' in vacancy entry")))
}

/// Map years of experience to SuperJob's ordinal code: the code of the
/// largest threshold not exceeding the years, 0 when nothing qualifies.
pub fn experience_code(years: u32) -> u32 {
    EXPERIENCE_THRESHOLDS
        .iter()
        .filter(|(threshold, _)| *threshold <= years)
        .map(|(_, code)| *code)
        .next_back()
        .unwrap_or(0)
}

/// Build the query parameters: indexed bracketed keyword pairs, the ordinal
/// experience code, and a server-side `count` cap (unlike HeadHunter, which
/// slices client-side).
fn build_params(query: &SearchQuery) -> Vec<(String, String)> {
    let mut params = Vec::new();

    for (i, token) in skill_tokens(&query.skills).iter().enumerate() {
        params.push((format!("keywords[{i}][{token}]"), token.clone()));
    }

    if let Some(years) = query.experience_years {
        params.push(("experience".to_string(), experience_code(years).to_string()));
    }

    if let Some(count) = query.count {
        params.push(("count".to_string(), count.to_string()));
    }

    params
}

fn extract_objects(data: &Value) -> Result<Vec<Value>, AppError> {
    data.get("objects")
        .and_then(|v| v.as_array())
        .map(|objects| objects.to_vec())
        .ok_or_else(|| AppError::Parse("missing 'objects' in response".to_string()))
}

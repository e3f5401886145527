use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{SearchQuery, Vacancy};
use crate::providers::{JobProvider, skill_tokens};

const BASE_URL: &str = "https://api.hh.ru/vacancies";

/// HeadHunter client.
///
/// Failure policy: no local recovery. A transport or parse failure is fatal
/// for this provider's search call and surfaces to the aggregator.
pub struct HeadHunter {
    client: reqwest::Client,
    /// Platform name placed in the `NAME:(...)` clause of the query text.
    platform: String,
}

impl HeadHunter {
    pub fn new(platform: impl Into<String>) -> Self {
        HeadHunter {
            client: reqwest::Client::new(),
            platform: platform.into(),
        }
    }

    /// Ask the board how many vacancies exist for a bare keyword. One
    /// request, no filtering beyond the keyword itself.
    pub async fn total_found(&self, keyword: &str) -> Result<u64, AppError> {
        let params = [
            ("text", keyword.to_string()),
            ("page", "1".to_string()),
            ("area", "1".to_string()),
        ];
        let data: Value = self
            .client
            .get(BASE_URL)
            .query(&params)
            .send()
            .await
            .map_err(AppError::from_http)?
            .json()
            .await
            .map_err(AppError::from_http)?;

        data.get("found")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| AppError::Parse("missing 'found' in response".to_string()))
    }
}

#[async_trait]
impl JobProvider for HeadHunter {
    fn name(&self) -> &str {
        "headhunter"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Value>, AppError> {
        let params = build_params(&self.platform, query);

        let resp = self
            .client
            .get(BASE_URL)
            .query(&params)
            .send()
            .await
            .map_err(AppError::from_http)?;

        if !resp.status().is_success() {
            return Err(AppError::Network(format!(
                "HeadHunter returned {}",
                resp.status()
            )));
        }

        let data: Value = resp.json().await.map_err(AppError::from_http)?;
        extract_items(&data, query.count)
    }

    fn parse(&self, raw: &Value) -> Result<Vacancy, AppError> {
        let title = required_str(raw, "name")?;
        let url = required_str(raw, "alternate_url")?;

        let snippet = raw.get("snippet");
        let requirement = snippet
            .and_then(|s| s.get("requirement"))
            .and_then(|v| v.as_str())
            .map(String::from);
        let responsibility = snippet
            .and_then(|s| s.get("responsibility"))
            .and_then(|v| v.as_str())
            .map(String::from);

        // Postings without a salary object stay None, never a default zero.
        let salary_from = raw
            .get("salary")
            .filter(|s| !s.is_null())
            .and_then(|s| s.get("from"))
            .and_then(|v| v.as_i64());

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

/// Map years of experience to HeadHunter's bucket token. Years exactly 1, 3
/// or 6 fall between the buckets and map to nothing; callers then omit the
/// experience parameter entirely.
pub fn experience_bucket(years: u32) -> Option<&'static str> {
    if years < 1 {
        Some("noExperience")
    } else if years > 1 && years < 3 {
        Some("between1And3")
    } else if years > 3 && years < 6 {
        Some("between3And6")
    } else if years > 6 {
        Some("moreThan6")
    } else {
        None
    }
}

/// Build the query parameters: a `NAME:(...) AND DESCRIPTION:(...)` text
/// clause, plus `experience` when the years map to a bucket.
fn build_params(platform: &str, query: &SearchQuery) -> Vec<(String, String)> {
    let tokens = skill_tokens(&query.skills);
    let mut params = vec![(
        "text".to_string(),
        format!("NAME:({platform}) AND DESCRIPTION:({})", tokens.join(" ")),
    )];

    if let Some(bucket) = query.experience_years.and_then(experience_bucket) {
        params.push(("experience".to_string(), bucket.to_string()));
    }

    params
}

/// Pull the result entries out of the payload and apply the client-side
/// count cap. The cap is a slice of whatever the single request returned,
/// not a server-side top-N.
fn extract_items(data: &Value, count: Option<u32>) -> Result<Vec<Value>, AppError> {
    let items = data
        .get("items")
        .and_then(|v| v.as_array())
        .ok_or_else(|| AppError::Parse("missing 'items' in response".to_string()))?;

    let cap = count.map(|n| n as usize).unwrap_or(items.len());
    Ok(items.iter().take(cap).cloned().collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn experience_buckets_map_between_boundaries() {
        assert_eq!(experience_bucket(0), Some("noExperience"));
        assert_eq!(experience_bucket(2), Some("between1And3"));
        assert_eq!(experience_bucket(4), Some("between3And6"));
        assert_eq!(experience_bucket(7), Some("moreThan6"));
    }

    #[test]
    fn boundary_years_map_to_no_bucket() {
        // 1, 3 and 6 fall in the gaps between buckets.
        assert_eq!(experience_bucket(1), None);
        assert_eq!(experience_bucket(3), None);
        assert_eq!(experience_bucket(6), None);
    }

    #[test]
    fn builds_text_clause_from_platform_and_tokens() {
        let query = SearchQuery::new("python, sql django");
        let params = build_params("Python", &query);
        assert_eq!(
            params,
            vec![(
                "text".to_string(),
                "NAME:(Python) AND DESCRIPTION:(python sql django)".to_string()
            )]
        );
    }

    #[test]
    fn mapped_experience_is_sent_as_a_parameter() {
        let query = SearchQuery::new("rust").with_experience(4);
        let params = build_params("Rust", &query);
        assert!(
            params
                .iter()
                .any(|(k, v)| k == "experience" && v == "between3And6")
        );
    }

    #[test]
    fn unmapped_experience_omits_the_parameter() {
        let query = SearchQuery::new("rust").with_experience(3);
        let params = build_params("Rust", &query);
        assert!(params.iter().all(|(k, _)| k != "experience"));
    }

    #[test]
    fn count_truncates_client_side() {
        let data = json!({ "items": [1, 2, 3, 4, 5] });
        let items = extract_items(&data, Some(2)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items, vec![json!(1), json!(2)]);
    }

    #[test]
    fn missing_items_key_is_a_parse_error() {
        let data = json!({ "results": [] });
        assert!(matches!(
            extract_items(&data, None),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn parses_a_full_entry() {
        let hh = HeadHunter::new("Python");
        let raw = json!({
            "name": "Python Developer",
            "alternate_url": "https://hh.ru/vacancy/1",
            "snippet": {
                "requirement": "3+ years of Python",
                "responsibility": "Build services"
            },
            "salary": { "from": 150_000, "to": 200_000, "currency": "RUR" }
        });
        let v = hh.parse(&raw).unwrap();
        assert_eq!(v.title, "Python Developer");
        assert_eq!(v.url, "https://hh.ru/vacancy/1");
        assert_eq!(v.requirement.as_deref(), Some("3+ years of Python"));
        assert_eq!(v.responsibility.as_deref(), Some("Build services"));
        assert_eq!(v.salary_from, Some(150_000));
    }

    #[test]
    fn missing_salary_object_yields_none() {
        let hh = HeadHunter::new("Python");
        let raw = json!({
            "name": "Intern",
            "alternate_url": "https://hh.ru/vacancy/2",
            "snippet": { "requirement": null, "responsibility": null },
            "salary": null
        });
        let v = hh.parse(&raw).unwrap();
        assert_eq!(v.salary_from, None);
        assert_eq!(v.requirement, None);
    }

    #[test]
    fn missing_title_is_a_parse_error() {
        let hh = HeadHunter::new("Python");
        let raw = json!({ "alternate_url": "https://hh.ru/vacancy/3" });
        assert!(matches!(hh.parse(&raw), Err(AppError::Parse(_))));
    }
}

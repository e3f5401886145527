use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Canonical vacancy record, provider-agnostic. Built once by a provider's
/// `parse` and immutable afterwards.
///
/// Serialized field names match the persisted schema: `Title`, `Link`,
/// `Salary`, `Description`, `Requirements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Link")]
    pub url: String,

    /// What the employer asks for, when the board supplies it.
    #[serde(rename = "Requirements")]
    pub requirement: Option<String>,

    /// What the role involves, when the board supplies it.
    #[serde(rename = "Description")]
    pub responsibility: Option<String>,

    /// Lower bound of the advertised salary, in the board's own currency.
    /// `None` when the posting carries no figure.
    #[serde(rename = "Salary")]
    pub salary_from: Option<i64>,
}

impl Vacancy {
    /// Checked salary comparison. Equality and ordering are defined over
    /// `salary_from` only; a vacancy without a figure cannot be ranked, and
    /// asking for it is a typed error rather than a sentinel rank.
    pub fn try_cmp(&self, other: &Vacancy) -> Result<Ordering, AppError> {
        match (self.salary_from, other.salary_from) {
            (Some(a), Some(b)) => Ok(a.cmp(&b)),
            _ => Err(AppError::Comparison(
                "vacancy has no salary figure".to_string(),
            )),
        }
    }
}

/// Equality over `salary_from` only; two vacancies without figures are not
/// equal to anything, themselves included.
impl PartialEq for Vacancy {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.salary_from, other.salary_from), (Some(a), Some(b)) if a == b)
    }
}

/// Partial order over `salary_from`; `None` when either side lacks a figure.
impl PartialOrd for Vacancy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        let salary = self
            .salary_from
            .map(|s| s.to_string())
            .unwrap_or_else(|| "not specified".to_string());
        write!(
            f,
            "Title: {}\nLink: {}\nSalary: {}\nDescription: {}\nRequirements: {}\n",
            self.title,
            self.url,
            salary,
            opt(&self.responsibility),
            opt(&self.requirement),
        )
    }
}

/// One logical search as supplied by the caller, before any provider-specific
/// encoding is applied.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Free-text skill keywords, whitespace-separated; trailing commas per
    /// token are stripped during encoding.
    pub skills: String,

    /// Cap on returned vacancies. HeadHunter truncates client-side to the
    /// first N entries of whatever the single request returned; SuperJob
    /// forwards this as a server-side `count` parameter. The two semantics
    /// are genuinely different and are not unified.
    pub count: Option<u32>,

    /// Years of experience; each provider discretizes this into its own
    /// bucket token.
    pub experience_years: Option<u32>,
}

impl SearchQuery {
    pub fn new(skills: impl Into<String>) -> Self {
        SearchQuery {
            skills: skills.into(),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = Some(years);
        self
    }
}

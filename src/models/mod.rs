pub mod query;
pub mod vacancy;

pub use query::SearchQuery;
pub use vacancy::Vacancy;

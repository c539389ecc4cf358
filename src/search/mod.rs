//! Query translation: facets in, normalized result pages out

pub mod criteria;
pub mod detail;
pub mod mood;
pub mod results;

pub use criteria::{FilterCriteria, RawFacets, SortDirection, SortKey};
pub use detail::RecipeDetail;
pub use mood::Mood;
pub use results::{SearchResultItem, SearchResultPage};

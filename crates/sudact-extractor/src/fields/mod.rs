//! Field extractors composed by the metadata extractor
//!
//! Every extractor except the date is a soft matcher: when nothing matches
//! it yields an absent value instead of an error.

pub mod accused;
pub mod article;
pub mod court;
pub mod date;
pub mod judge;
pub mod number;
pub mod region;

pub use accused::{consolidate_names, extract_accused};
pub use article::extract_articles;
pub use court::extract_court;
pub use date::extract_date;
pub use judge::extract_judge;
pub use number::extract_number;
pub use region::{extract_region, region_candidate, resolve_region};

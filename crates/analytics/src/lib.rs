pub mod genres;
pub mod sample;

pub use genres::{summarize_genres, GenreAnalytics};
pub use sample::SampleCatalog;

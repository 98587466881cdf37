pub mod assembler;
pub mod dates;
pub mod style;
pub mod tags;

pub use assembler::{assemble_articles, MAX_ARTICLES};
pub use dates::format_date;
pub use style::{resolve_style, DEFAULT_STYLE_KEY};
pub use tags::normalize_tags;

// Adapters layer: concrete implementations of the domain ports (http, parsers, fallback data).

pub mod fallback;
pub mod http;
pub mod parser;

pub use fallback::StaticFallback;
pub use http::HttpFeedSource;
pub use parser::{build_parser, ParserKind, PatternFeedParser, XmlFeedParser};

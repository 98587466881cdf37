pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::TomlConfig;
    use crate::adapters::http::DEFAULT_FEED_URL;
    use crate::adapters::parser::ParserKind;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "weiz-feed")]
    #[command(about = "Fetch the blog RSS feed and print the homepage article list as JSON")]
    pub struct CliConfig {
        #[arg(long, help = "Feed URL [default: https://note.weizwz.com/feed.xml]")]
        pub feed_url: Option<String>,

        #[arg(long, help = "Parser strategy: xml or pattern [default: xml]")]
        pub parser: Option<ParserKind>,

        #[arg(long, help = "JSON file with fallback articles")]
        pub fallback: Option<String>,

        #[arg(short, long, help = "TOML configuration file; flags override its values")]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Merges the optional TOML file with the flags given on the command line.
        pub fn resolve(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };

            if let Some(url) = &self.feed_url {
                config.feed.url = url.clone();
            }
            if let Some(parser) = self.parser {
                config.feed.parser = parser;
            }
            if let Some(path) = &self.fallback {
                config.fallback.path = Some(path.clone());
            }
            config.logging.verbose |= self.verbose;

            Ok(config)
        }
    }

    impl ConfigProvider for CliConfig {
        fn feed_url(&self) -> &str {
            self.feed_url.as_deref().unwrap_or(DEFAULT_FEED_URL)
        }

        fn parser_kind(&self) -> ParserKind {
            self.parser.unwrap_or_default()
        }

        fn fallback_path(&self) -> Option<&str> {
            self.fallback.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_url("feed_url", self.feed_url())?;
            if let Some(path) = self.fallback_path() {
                validation::validate_file_extension("fallback", path, &["json"])?;
            }
            if let Some(path) = &self.config {
                validation::validate_file_extension("config", path, &["toml"])?;
            }
            Ok(())
        }
    }

}

use crate::config::Config;
use crate::core::cli::CliArgs;
use crate::dictionary::TokenDictionary;
use crate::errors::Result;
use crate::extract::{ExtractionReport, Extractor};
use crate::logging::Logger;

/// Everything one run needs, resolved from the command line.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub dictionary: TokenDictionary,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let dictionary = TokenDictionary::with_overrides(config.token_overrides().iter());
        let mut logger = Logger::new();
        logger.set_file_logging_enabled(config.file_logging_enabled());
        Self {
            config,
            dictionary,
            logger,
        }
    }

    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::defaults(),
        };
        config.set_many(
            args.overrides
                .iter()
                .map(|(key, value)| (key.to_string(), value.as_str())),
        )?;

        let mut ctx = Self::new(config);
        ctx.logger.set_log_dir(&args.logs_dir);
        Ok(ctx)
    }

    pub fn extractor(&self) -> Extractor<'_> {
        Extractor::new(
            &self.dictionary,
            self.config.level_prefix(),
            self.config.dimension_policy(),
        )
    }

    pub fn run(&self) -> Result<ExtractionReport> {
        self.extractor().export(
            self.config.input_path(),
            self.config.output_dir(),
            &self.logger,
        )
    }
}

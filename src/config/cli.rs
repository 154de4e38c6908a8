use crate::domain::model::ReadingType;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tarot-reader")]
#[command(about = "Draw a tarot reading from a remote card deck")]
pub struct CliConfig {
    #[arg(long, default_value = "https://tarotapi.dev/api/v1/cards/")]
    pub api_endpoint: String,

    #[arg(long, default_value = "yesno", help = "Reading type: yesno, three or seven")]
    pub reading: ReadingType,

    #[arg(long, help = "Seed the shuffle for a reproducible reading")]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn reading_type(&self) -> ReadingType {
        self.reading
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}

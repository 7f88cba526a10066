use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "fries-stand")]
#[command(about = "Order fries at the French King Fries counter")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the finished order as JSON after the transcript")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["fries-stand"]);
        assert!(!config.verbose);
        assert!(!config.json);
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from(["fries-stand", "-v", "--json"]);
        assert!(config.verbose);
        assert!(config.json);
    }
}

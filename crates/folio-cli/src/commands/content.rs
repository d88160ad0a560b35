use anyhow::{Context, Result};
use clap::ValueEnum;
use folio_core::content::{PortfolioContent, builtin_content};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentFormat {
    Json,
    Toml,
}

pub fn render(content: &PortfolioContent, format: ContentFormat) -> Result<String> {
    match format {
        ContentFormat::Json => {
            serde_json::to_string_pretty(content).context("Failed to serialize content as JSON")
        }
        ContentFormat::Toml => {
            toml::to_string_pretty(content).context("Failed to serialize content as TOML")
        }
    }
}

pub fn print(format: ContentFormat) -> Result<()> {
    println!("{}", render(builtin_content(), format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_contains_projects() {
        let json = render(builtin_content(), ContentFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["projects"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["profile"]["name"], "Alex Johnson");
    }

    #[test]
    fn test_toml_export_parses_back() {
        let text = render(builtin_content(), ContentFormat::Toml).unwrap();
        let parsed: PortfolioContent = toml::from_str(&text).unwrap();
        assert_eq!(&parsed, builtin_content());
    }
}

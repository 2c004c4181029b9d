use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::form::{FormFields, ProductType};

/// Create products from the terminal.
#[derive(Parser, Debug)]
#[command(name = "product-form")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL (e.g. http://127.0.0.1:3000)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit one product without opening the form
    Submit(SubmitArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    /// Product name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Product size
    #[arg(long, default_value = "")]
    pub size: String,

    /// Product type (electronic, furniture, clothing)
    #[arg(long = "type", default_value = "", value_parser = parse_product_type)]
    pub product_type: String,
}

/// Accepts a known product type, or empty for "none selected".
fn parse_product_type(value: &str) -> Result<String, String> {
    if value.is_empty() || ProductType::parse(value).is_some() {
        Ok(value.to_string())
    } else {
        Err(format!(
            "expected one of: {}",
            ProductType::ALL.map(ProductType::as_str).join(", ")
        ))
    }
}

impl SubmitArgs {
    pub fn fields(&self) -> FormFields {
        FormFields::new(&*self.name, &*self.size, &*self.product_type)
    }
}

impl Cli {
    /// Loads the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["product-form"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn submit_parses_type_flag() {
        let cli = Cli::parse_from([
            "product-form",
            "submit",
            "--name",
            "nombre",
            "--size",
            "50",
            "--type",
            "electronic",
        ]);
        let Some(Command::Submit(args)) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.fields(), FormFields::new("nombre", "50", "electronic"));
    }

    #[test]
    fn missing_submit_flags_default_to_empty() {
        let cli = Cli::parse_from(["product-form", "submit", "--name", "x"]);
        let Some(Command::Submit(args)) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.size, "");
        assert_eq!(args.product_type, "");
    }

    #[test]
    fn submit_rejects_unknown_type() {
        let err = Cli::try_parse_from(["product-form", "submit", "--type", "gadget"])
            .expect_err("unknown type must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("electronic, furniture, clothing"));
    }

    #[test]
    fn submit_accepts_each_known_type_and_empty() {
        for value in ["electronic", "furniture", "clothing", ""] {
            let cli = Cli::try_parse_from(["product-form", "submit", "--type", value])
                .expect("known type should parse");
            let Some(Command::Submit(args)) = cli.command else {
                panic!("expected submit");
            };
            assert_eq!(args.product_type, value);
        }
    }

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::parse_from([
            "product-form",
            "--base-url",
            "http://backend:9000",
            "--log-file",
            "/tmp/pf.log",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.service.base_url, "http://backend:9000");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/pf.log")));
    }
}

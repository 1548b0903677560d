use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the configuration file location
    Path,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Schema => {
                let schema = crate::shared::config::generate_schema();
                let json = serde_json::to_string_pretty(&schema)?;
                println!("{json}");
            }
            Self::Path => match crate::shared::config::config_dir() {
                Some(dir) => println!("{}", dir.join("config.yaml").display()),
                None => anyhow::bail!("Could not determine the config directory"),
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn schema_contains_config_properties() {
        let schema = crate::shared::config::generate_schema();
        let value: serde_json::Value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["type"], "object");
        let props = value["properties"].as_object().unwrap();
        assert!(props.contains_key("api"));
        assert!(props.contains_key("export"));

        let defs = value["$defs"].as_object().unwrap();
        let api_props = defs["ApiConfig"]["properties"].as_object().unwrap();
        assert!(api_props.contains_key("key"));
        assert!(api_props.contains_key("base_url"));
    }
}

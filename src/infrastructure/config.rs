use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RpcConfig {
    pub rpc: RpcSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RpcSettings {
    pub host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

pub fn load_rpc_config() -> anyhow::Result<RpcConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/rpc"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_config_from_toml() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[rpc]\nhost = \"http://gateway.local/\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: RpcConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.rpc.host, "http://gateway.local/");
        assert_eq!(config.rpc.timeout_secs, 30);
    }

    #[test]
    fn test_rpc_config_timeout_override() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[rpc]\nhost = \"http://gateway.local\"\ntimeout_secs = 5\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: RpcConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.rpc.timeout_secs, 5);
    }
}

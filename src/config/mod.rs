mod manager;

pub use manager::{
    BASE_URL_ENV, ConfigFile, ConfigManager, FuntlConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};

use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults on a parse error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}; using defaults");
        AppConfig::default()
    })
}

/// Apply `COUNTRIES_LATENCY_MS` and `COUNTRIES_FAIL` on top of the file
/// values. Unparseable values are reported and ignored.
pub fn apply_env_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(raw) = var("COUNTRIES_LATENCY_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.countries.latency_ms = ms,
            Err(e) => eprintln!("[config] Ignoring COUNTRIES_LATENCY_MS={raw:?}: {e}"),
        }
    }
    if let Some(raw) = var("COUNTRIES_FAIL") {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => config.countries.fail = true,
            "0" | "false" | "no" | "off" | "" => config.countries.fail = false,
            _ => eprintln!("[config] Ignoring COUNTRIES_FAIL={raw:?}: expected a boolean"),
        }
    }
}

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file yields the defaults.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}); using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        eprintln!("[config] {config:?}");
        config
    });
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't been
/// called yet.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

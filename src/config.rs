use std::env;
use std::io;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_employees: bool,
    /// Artificial latency applied by every handler.
    pub response_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            seed_employees: true,
            response_delay: Duration::ZERO,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> io::Result<T> {
    raw.trim().parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has an invalid value: {:?}", name, raw),
        )
    })
}

fn parse_flag(name: &str, raw: &str) -> io::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has an invalid value: {:?}", name, raw),
        )),
    }
}

impl AppConfig {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", &port)?;
        }
        if let Some(seed) = lookup("SEED_EMPLOYEES") {
            config.seed_employees = parse_flag("SEED_EMPLOYEES", &seed)?;
        }
        if let Some(delay) = lookup("RESPONSE_DELAY_MS") {
            config.response_delay = Duration::from_millis(parse_var("RESPONSE_DELAY_MS", &delay)?);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

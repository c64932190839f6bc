use std::fmt;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432";
pub const DEFAULT_DATABASE_NAME: &str = "agendadigitalpy";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Ministry transparency portal query for requests mentioning MITIC.
pub const DEFAULT_PUBLIC_INFO_URL: &str = "https://informacionpublica.paraguay.gov.py/portal-core/rest/solicitudes?limit=20&offset=0&search=%7B%22type%22:%22or%22,%22filters%22:%5B%7B%22path%22:%22descripcion%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22titulo%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22fecha%22,%22sortDesc%22:%22true%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22conteoSuscripciones%22,%22sortDesc%22:%22true%22,%22like%22:%22%22%7D,%7B%22path%22:%22fechaLimite%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22institucion.nombre%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22institucion.ministerio%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22flujosSolicitud.comentario%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22flujosSolicitud.titulo%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22estado.nombre%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22usuario.nombre%22,%22like%22:%22MITIC%22%7D,%7B%22path%22:%22usuario.apellido%22,%22like%22:%22MITIC%22%7D%5D%7D";

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(12 * 60 * 60);

/// Which proposal store the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub url: String,
    pub fetch_timeout: Duration,
    pub refresh_every: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PUBLIC_INFO_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            refresh_every: REFRESH_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub store: StoreBackend,
    pub bind_addr: String,
    pub public_info: TrackerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value for {}: {:?}", self.key, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load `.env` if present, then resolve from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`; unset or empty keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let store = match get("PROPOSAL_STORE", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError {
                    key: "PROPOSAL_STORE",
                    value: other.to_string(),
                });
            }
        };

        let timeout_raw = get(
            "PUBLIC_INFO_TIMEOUT_SECS",
            &DEFAULT_FETCH_TIMEOUT.as_secs().to_string(),
        );
        let fetch_timeout = match timeout_raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                return Err(ConfigError {
                    key: "PUBLIC_INFO_TIMEOUT_SECS",
                    value: timeout_raw,
                });
            }
        };

        Ok(Self {
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            database_name: get("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            store,
            bind_addr: get("BIND_ADDR", DEFAULT_BIND_ADDR),
            public_info: TrackerConfig {
                url: get("PUBLIC_INFO_URL", DEFAULT_PUBLIC_INFO_URL),
                fetch_timeout,
                refresh_every: REFRESH_INTERVAL,
            },
        })
    }
}

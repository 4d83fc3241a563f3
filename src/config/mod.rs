use anyhow::{anyhow, Result};
use staybook_core::spot_query::PageLimits;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "staybook.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_IDENTITY_HEADER: &str = "X-User-Id";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub spots: Spots,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    /// Request header with the id of the authenticated user
    pub identity_header: String,
}

pub struct Spots {
    pub page_limits: PageLimits,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            spots,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be greater than 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            identity_header,
        } = webserver.unwrap_or_default();

        let identity_header = identity_header
            .map(|name| name.trim().to_owned())
            .unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_owned());
        if identity_header.is_empty() {
            return Err(anyhow!("Empty identity header name"));
        }
        let webserver = WebServer {
            enable_cors: cors,
            identity_header,
        };

        let raw::Spots {
            default_page_size,
            max_page_size,
        } = spots.unwrap_or_default();

        if default_page_size == 0 {
            return Err(anyhow!("The default page size must be greater than 0"));
        }
        if max_page_size < default_page_size {
            return Err(anyhow!(
                "The max. page size ({max_page_size}) must not be less than the default page size ({default_page_size})"
            ));
        }
        let spots = Spots {
            page_limits: PageLimits {
                default_size: default_page_size,
                max_size: max_page_size,
            },
        };

        Ok(Self {
            db,
            webserver,
            spots,
        })
    }
}

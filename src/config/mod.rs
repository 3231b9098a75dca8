use anyhow::{anyhow, Result};
use ocdb_entities::geo::MapPoint;
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "opencivicdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub issues: Issues,
    pub map: Map,
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
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
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
    pub conn_pool_size: u8,
}

pub struct Issues {
    /// Page size of issue listings when the caller does not pass one.
    pub page_size: u64,
    /// Marker cap for map (bounding box) queries.
    pub geo_limit: u64,
    /// Repeated views of the same session within this window do not
    /// count as another unique view.
    pub unique_view_epsilon: time::Duration,
}

pub struct Map {
    /// Country-wide viewport for users without a home city.
    pub center: MapPoint,
    pub zoom: u8,
    /// Default zoom for newly created cities.
    pub city_zoom: u8,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, issues, map } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Issues {
            page_size,
            geo_limit,
            unique_view_epsilon,
        } = issues.unwrap_or_default();

        let issues = Issues {
            page_size,
            geo_limit,
            unique_view_epsilon: time::Duration::try_from(unique_view_epsilon)?,
        };

        let raw::Map {
            center_lat,
            center_lng,
            zoom,
            city_zoom,
        } = map.unwrap_or_default();

        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng).ok_or_else(|| {
            anyhow!("Invalid map center ({center_lat}, {center_lng})")
        })?;
        let map = Map {
            center,
            zoom,
            city_zoom,
        };

        Ok(Self { db, issues, map })
    }
}

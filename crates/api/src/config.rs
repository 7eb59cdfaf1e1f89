use std::path::PathBuf;
use std::str::FromStr;

use estate_blob::S3Settings;

/// Where uploaded image bytes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageBackend {
    /// External blob store, keys under `images/`.
    #[default]
    Object,
    /// `image_storage` table, keys with a `propimg_` / `unitimg_` / `dbimg_` prefix.
    Database,
}

impl FromStr for ImageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "object" => Ok(Self::Object),
            "database" => Ok(Self::Database),
            other => Err(format!(
                "Invalid image backend '{other}'. Must be one of: object, database"
            )),
        }
    }
}

impl ImageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Database => "database",
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Without
/// `DATABASE_URL` the server runs on an in-memory store seeded with demo
/// data; without `OBJECT_STORAGE_BUCKET` uploads go to an in-memory blob store.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database_url: Option<String>,
    /// Directory served under `/uploads/` (default: `uploads`).
    pub uploads_dir: PathBuf,
    pub image_backend: ImageBackend,
    /// Largest accepted upload in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Seed demo data into an empty Postgres database at startup.
    pub seed_demo_data: bool,
    pub object_storage: Option<S3Settings>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `DATABASE_URL`            | unset (in-memory store)    |
    /// | `UPLOADS_DIR`             | `uploads`                  |
    /// | `IMAGE_BACKEND`           | `object`                   |
    /// | `MAX_UPLOAD_BYTES`        | `10485760`                 |
    /// | `SEED_DEMO_DATA`          | `false`                    |
    /// | `OBJECT_STORAGE_BUCKET`   | unset (in-memory blobs)    |
    /// | `OBJECT_STORAGE_ENDPOINT` | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = non_empty_var("DATABASE_URL");

        let uploads_dir = PathBuf::from(
            std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let image_backend: ImageBackend = std::env::var("IMAGE_BACKEND")
            .unwrap_or_else(|_| "object".into())
            .parse()
            .unwrap_or_else(|e| panic!("IMAGE_BACKEND: {e}"));

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "10485760".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let object_storage = non_empty_var("OBJECT_STORAGE_BUCKET").map(|bucket| S3Settings {
            bucket,
            endpoint: non_empty_var("OBJECT_STORAGE_ENDPOINT"),
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            uploads_dir,
            image_backend,
            max_upload_bytes,
            seed_demo_data,
            object_storage,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub places_api_key: String,
    pub places_base_url: String,
}

const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            jwt_secret: std::env::var("JWT_SECRET")
                .context("Cannot load JWT_SECRET env variable")?,
            places_api_key: std::env::var("GOOGLE_MAPS_API_KEY")
                .context("Cannot load GOOGLE_MAPS_API_KEY env variable")?,
            // Overridable so tests can point at a substitute places service.
            places_base_url: std::env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACES_BASE_URL.to_string()),
        })
    }
}

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub products_file: PathBuf,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let products_file = std::env::var("PRODUCTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/products.json"));

        Ok(Self {
            port,
            products_file,
        })
    }
}

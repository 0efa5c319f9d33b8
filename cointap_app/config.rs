use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub port: u16,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = match env::var("COINTAP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(5000),
            Err(_) => 5000,
        };

        let public_dir = match env::var("COINTAP_PUBLIC_DIR") {
            Ok(val) => val,
            Err(_) => "cointap_web/public".to_string(),
        };

        Self { port, public_dir }
    }
}

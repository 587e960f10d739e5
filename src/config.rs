use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration, resolved once at startup.
///
/// Every field can be overridden through the environment with a `VENTAS_`
/// prefix (e.g. `VENTAS_DATABASE_URL`, `VENTAS_JWT_SECRET`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub loglevel: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub admin_correo: String,
    pub admin_clave: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://datos.sqlite".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            jwt_secret: "mi_clave_secreta".to_string(),
            token_ttl_hours: 24,
            admin_correo: "correo@gmail.com".to_string(),
            admin_clave: "1234".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("VENTAS_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::load() {
    Ok(cfg) => cfg,
    Err(e) => panic!("invalid configuration: {e}"),
});

use crate::config::Config;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Credential verification seam. The default implementation checks one
/// static pair; tests substitute a fake.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, correo: &str, clave: &str) -> bool;
}

/// Single configured (correo, clave) pair.
pub struct StaticCredentials {
    correo: String,
    clave: String,
}

impl StaticCredentials {
    pub fn new(correo: impl Into<String>, clave: impl Into<String>) -> Self {
        Self {
            correo: correo.into(),
            clave: clave.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Arc<dyn CredentialVerifier> {
        Arc::new(Self::new(cfg.admin_correo.clone(), cfg.admin_clave.clone()))
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, correo: &str, clave: &str) -> bool {
        let correo_ok: bool = correo.as_bytes().ct_eq(self.correo.as_bytes()).into();
        let clave_ok: bool = clave.as_bytes().ct_eq(self.clave.as_bytes()).into();
        correo_ok && clave_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pair_matches() {
        let creds = StaticCredentials::new("correo@gmail.com", "1234");
        assert!(creds.verify("correo@gmail.com", "1234"));
    }

    #[test]
    fn any_other_pair_fails() {
        let creds = StaticCredentials::new("correo@gmail.com", "1234");
        assert!(!creds.verify("correo@gmail.com", "12345"));
        assert!(!creds.verify("x@x.com", "1234"));
        assert!(!creds.verify("", ""));
    }
}

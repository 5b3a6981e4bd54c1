use serde::{Deserialize, Serialize};

/// `modules.api_ingress` section of the server config.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ApiIngressConfig {
    pub bind_addr: String,
    pub enable_docs: bool,
    pub cors_enabled: bool,
    pub body_limit_bytes: usize,
}

pub const DEFAULT_BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_string(),
            enable_docs: false,
            cors_enabled: false,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_section_keeps_defaults() {
        let cfg: ApiIngressConfig =
            serde_json::from_value(serde_json::json!({"bind_addr": "0.0.0.0:9000"})).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
        assert!(!cfg.enable_docs);
        assert_eq!(cfg.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = serde_json::from_value::<ApiIngressConfig>(serde_json::json!({"bind": "x"}));
        assert!(res.is_err());
    }
}

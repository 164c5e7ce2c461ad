//! 配置基础设施

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::product::service::DuplicateIds;
use crate::core::error::NotFoundStatus;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "PRODUCT_API_CONFIG";

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 跨域配置
    pub cors: CorsConfig,
    /// 接口行为配置
    pub api: ApiConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// 允许的来源，携带凭证
    pub allowed_origins: Vec<String>,
    /// 允许任意来源、方法和请求头（不携带凭证）
    pub allow_any: bool,
}

/// 接口行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 找不到产品时的状态码: "ok" 或 "not_found"
    pub not_found_status: NotFoundStatus,
    /// 重复 id 的处理: "allow" 或 "reject"
    pub duplicate_ids: DuplicateIds,
    /// 是否写入三条初始产品
    pub seed: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allow_any: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl CorsConfig {
    pub fn origin_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                if origin == "*" {
                    return Err(ConfigError::Validation(
                        "携带凭证时不能使用通配来源 \"*\"，请改用 allow_any = true".to_string(),
                    ));
                }
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::Validation(format!("无效的跨域来源: {}", origin)))
            })
            .collect()
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        if !self.cors.allow_any {
            if self.cors.allowed_origins.is_empty() {
                return Err(ConfigError::Validation(
                    "未开启 allow_any 时必须配置至少一个跨域来源".to_string(),
                ));
            }
            self.cors.origin_values()?;
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            not_found_status: NotFoundStatus::default(),
            duplicate_ids: DuplicateIds::default(),
            seed: true,
        }
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，返回配置及其来源路径
pub fn load_config() -> Result<(Config, Option<PathBuf>), ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        let config = Config::load_from_file(&path)?;
        return Ok((config, Some(path)));
    }

    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            let config = Config::load_from_file(path)?;
            return Ok((config, Some(PathBuf::from(path))));
        }
    }

    Ok((Config::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.cors.allow_any);
        assert_eq!(config.api.not_found_status, NotFoundStatus::Ok);
        assert_eq!(config.api.duplicate_ids, DuplicateIds::Allow);
        assert!(config.api.seed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.bind_address = "".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.cors.allowed_origins = vec!["http://bad\norigin".to_string()];
        assert!(config.validate().is_err());

        config.cors.allow_any = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            not_found_status = "not_found"
            duplicate_ids = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.not_found_status, NotFoundStatus::NotFound);
        assert_eq!(config.api.duplicate_ids, DuplicateIds::Reject);
        assert!(config.api.seed);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("test_config.toml");
        std::fs::write(
            &config_path,
            r#"
            [server]
            port = 9100

            [cors]
            allow_any = true
            "#,
        )
        .unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.server.port, 9100);
        assert_eq!(loaded.server.bind_address, "127.0.0.1");
        assert!(loaded.cors.allow_any);
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_wildcard_origin_rejected() {
        let mut config = Config::default();
        config.cors.allowed_origins = vec!["*".to_string()];
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        assert!(config.cors.origin_values().is_err());

        config.cors.allow_any = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("broken.toml");
        std::fs::write(&config_path, "[server
port = ").unwrap();
        let err = Config::load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}

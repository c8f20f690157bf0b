use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 由 dotenv 预先加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DB_NAMESPACE | restaurant | SurrealDB namespace |
/// | DB_NAME | restaurant_management | SurrealDB database |
/// | JWT_SECRET | - | 签名密钥 (≥ 32 字符) |
/// | ACCESS_TOKEN_HOURS | 24 | 访问令牌有效期 |
/// | REFRESH_TOKEN_HOURS | 168 | 刷新令牌有效期 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | WORK_DIR/logs | 日志目录 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/restaurant HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    pub db_namespace: String,
    pub db_name: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；JWT 密钥缺失或过短时返回错误
    pub fn from_env() -> Result<Self> {
        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            work_dir: env_or("WORK_DIR", "./data"),
            http_port: env_parse("HTTP_PORT", 8000),
            db_namespace: env_or("DB_NAMESPACE", "restaurant"),
            db_name: env_or("DB_NAME", "restaurant_management"),
            jwt,
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok(),
        })
    }

    /// 使用自定义工作目录 (测试场景)
    pub fn with_work_dir(work_dir: impl Into<String>, jwt: JwtConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port: 0,
            db_namespace: "restaurant".into(),
            db_name: "restaurant_management".into(),
            jwt,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// 数据库目录: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录: LOG_DIR 或 work_dir/logs
    pub fn logs_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(&self.work_dir).join("logs"),
        }
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_work_dir() {
        let config = Config::with_work_dir("/tmp/rm", JwtConfig::for_tests());
        assert_eq!(config.database_dir(), PathBuf::from("/tmp/rm/database"));
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/rm/logs"));
        assert!(!config.is_production());
    }

    #[test]
    fn test_explicit_log_dir_wins() {
        let mut config = Config::with_work_dir("/tmp/rm", JwtConfig::for_tests());
        config.log_dir = Some("/var/log/rm".into());
        assert_eq!(config.logs_dir(), PathBuf::from("/var/log/rm"));
    }
}

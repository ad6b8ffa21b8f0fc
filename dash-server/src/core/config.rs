use crate::core::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时会先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | 生产环境为 true | JSON 格式日志 |
/// | LOG_DIR | (无) | 按天滚动的日志目录 |
/// | SHOP_BATCH_SIZE | 200 | 每批生成的店铺数量 |
/// | SHOP_MAX_BATCH | 10000 | 单批店铺数量上限 |
/// | SHOP_SEED | (无) | 随机种子，设置后批次可复现 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SHOP_SEED=7 cargo run -p dash-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 (EnvFilter 语法)
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub log_json: bool,
    /// 日志目录 (为空时只输出到控制台)
    pub log_dir: Option<String>,
    /// 默认批次大小
    pub shop_batch_size: usize,
    /// 批次大小上限
    pub shop_max_batch: usize,
    /// 随机种子
    pub shop_seed: Option<u64>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let log_json = env_parse("LOG_JSON").unwrap_or(environment == "production");

        Self {
            http_port: env_parse("HTTP_PORT").unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json,
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shop_batch_size: env_parse("SHOP_BATCH_SIZE").unwrap_or(200),
            shop_max_batch: env_parse("SHOP_MAX_BATCH").unwrap_or(10_000),
            shop_seed: env_parse("SHOP_SEED"),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS").unwrap_or(10_000),
            environment,
        }
    }

    /// 测试用配置：不读取环境变量，使用固定种子
    pub fn for_tests(seed: u64) -> Self {
        Self {
            http_port: 0,
            environment: "development".into(),
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            shop_batch_size: 200,
            shop_max_batch: 10_000,
            shop_seed: Some(seed),
            shutdown_timeout_ms: 1_000,
        }
    }

    /// 校验配置
    ///
    /// 默认批次不能超过上限，否则启动时生成的批次无法再次请求
    pub fn validate(&self) -> Result<()> {
        if self.shop_batch_size > self.shop_max_batch {
            return Err(ServerError::Config(format!(
                "SHOP_BATCH_SIZE ({}) exceeds SHOP_MAX_BATCH ({})",
                self.shop_batch_size, self.shop_max_batch
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tests_config() {
        let config = Config::for_tests(9);
        assert_eq!(config.shop_seed, Some(9));
        assert_eq!(config.shop_batch_size, 200);
        assert_eq!(config.environment, "development");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_default_batch() {
        let mut config = Config::for_tests(1);
        config.shop_batch_size = 500;
        config.shop_max_batch = 100;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }
}

use std::fmt::Display;
use std::str::FromStr;

use pricing_engine::{
    CancellationPolicy, FREE_CANCELLATION_DAYS, PARTIAL_CHARGE_MIN_DAYS, PARTIAL_CHARGE_PERCENT,
};

use super::error::{Result, ServerError};

/// 服务器配置 - 预订定价服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖。数值型变量已设置但无法解析时，
/// 启动失败并返回 [`ServerError::Config`]，不会静默回退到默认值：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，存在时按天滚动写文件 |
/// | LOG_JSON | false | 以 JSON 行格式输出日志 |
/// | SPACES_FILE | (无) | 空间定价配置 JSON 文件 |
/// | CANCELLATION_FREE_DAYS | 7 | 免费取消的最少提前天数 |
/// | CANCELLATION_PARTIAL_DAYS | 1 | 部分收费的最少提前天数 |
/// | CANCELLATION_PARTIAL_PERCENT | 50 | 部分收费百分比 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// SPACES_FILE=./spaces.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 (trace | debug | info | warn | error)
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// JSON 日志格式
    pub log_json: bool,
    /// 空间定价配置文件 (SpacePricingConfig 数组)
    pub spaces_file: Option<String>,
    /// 取消政策
    pub cancellation_policy: CancellationPolicy,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

/// 读取并解析环境变量，未设置时使用默认值
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("{key}={raw:?} 无法解析: {e}")))
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值，格式错误的变量返回错误
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_port: env_or("HTTP_PORT", 3000)?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            log_json: env_or("LOG_JSON", false)?,
            spaces_file: std::env::var("SPACES_FILE").ok(),
            cancellation_policy: CancellationPolicy {
                free_cancellation_days: env_or("CANCELLATION_FREE_DAYS", FREE_CANCELLATION_DAYS)?,
                partial_charge_min_days: env_or(
                    "CANCELLATION_PARTIAL_DAYS",
                    PARTIAL_CHARGE_MIN_DAYS,
                )?,
                partial_charge_percent: env_or(
                    "CANCELLATION_PARTIAL_PERCENT",
                    PARTIAL_CHARGE_PERCENT,
                )?,
            },
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30000)?,
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, spaces_file: Option<String>) -> Result<Self> {
        let mut config = Self::from_env()?;
        config.http_port = http_port;
        config.spaces_file = spaces_file;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_when_unset() {
        assert_eq!(
            env_or("BOOKING_SERVER_TEST_UNSET_PORT", 3000u16).unwrap(),
            3000
        );
    }

    #[test]
    fn test_parse_or_reads_set_value() {
        let days: i64 = parse_or("CANCELLATION_FREE_DAYS", Some(" 14 ".into()), 7).unwrap();
        assert_eq!(days, 14);
    }

    #[test]
    fn test_malformed_cancellation_values_are_rejected() {
        let err = parse_or("CANCELLATION_PARTIAL_PERCENT", Some("5O".into()), 50u8).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().contains("CANCELLATION_PARTIAL_PERCENT"));

        let err = parse_or("CANCELLATION_FREE_DAYS", Some("seven".into()), 7i64).unwrap_err();
        assert!(err.to_string().contains("seven"));

        // Out of u8 range
        assert!(parse_or("CANCELLATION_PARTIAL_PERCENT", Some("300".into()), 50u8).is_err());
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(0, None).unwrap();
        assert_eq!(config.http_port, 0);
        assert!(config.spaces_file.is_none());
    }
}

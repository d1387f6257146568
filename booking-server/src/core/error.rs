use pricing_engine::PricingError;
use shared::error::AppError;
use thiserror::Error;

/// 服务器启动与运行错误
///
/// 请求处理阶段的错误统一使用 [`AppError`]，这里只覆盖启动、加载和监听。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("空间配置加载失败 {path}: {source}")]
    CatalogLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("空间配置解析失败 {path}: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("空间配置无效: {0}")]
    InvalidSpace(#[from] PricingError),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

impl From<ServerError> for AppError {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidSpace(e) => e.into(),
            ServerError::Config(msg) => AppError::config(msg),
            other => AppError::internal(other.to_string()),
        }
    }
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;

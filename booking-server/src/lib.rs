//! Booking Server - 共享办公空间预订定价服务
//!
//! # 架构概述
//!
//! 在 `pricing-engine` 之上提供一层轻量 HTTP 接口：
//!
//! - **价格计算** (`api/pricing`): 预览与提交校验
//! - **取消费用** (`api/cancellation`): 押金扣款比例与退款
//! - **空间配置** (`api/spaces`, `services/catalog`): 内存缓存的定价配置
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── services/      # 空间配置缓存、路由构建
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、错误类型
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use services::{SpaceCatalog, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，初始化日志
pub fn setup_environment() -> Result<(), ServerError> {
    // .env 文件可选
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(ServerError::Config(format!("Failed to load .env: {e}")));
    }

    let config = Config::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}

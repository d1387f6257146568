use std::time::Instant;

use pricing_engine::CancellationCalculator;

use crate::core::{Config, Result, ServerError};
use crate::services::SpaceCatalog;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | SpaceCatalog | 空间定价配置缓存 |
/// | cancellation | CancellationCalculator | 取消费用计算器 (按配置的政策) |
/// | started_at | Instant | 启动时间，用于健康检查 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub catalog: SpaceCatalog,
    pub cancellation: CancellationCalculator,
    pub started_at: Instant,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 加载空间定价配置 (SPACES_FILE 未设置时为空)
    /// 2. 校验取消政策
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = match &config.spaces_file {
            Some(path) => SpaceCatalog::load_from_file(path)?,
            None => {
                tracing::warn!("SPACES_FILE not set, starting with an empty space catalog");
                SpaceCatalog::new()
            }
        };

        Self::with_catalog(config.clone(), catalog)
    }

    /// 使用已有的空间配置创建状态 (测试常用)
    ///
    /// 取消政策无效时返回 [`ServerError::Config`]
    pub fn with_catalog(config: Config, catalog: SpaceCatalog) -> Result<Self> {
        let cancellation = CancellationCalculator::new(config.cancellation_policy)
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(Self {
            config,
            catalog,
            cancellation,
            started_at: Instant::now(),
        })
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

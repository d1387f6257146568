//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`pricing`] - 价格预览与提交校验
//! - [`cancellation`] - 取消费用计算
//! - [`spaces`] - 空间定价配置管理

pub mod cancellation;
pub mod health;
pub mod pricing;
pub mod spaces;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

//! 服务模块
//!
//! - [`SpaceCatalog`] - 空间定价配置缓存
//! - [`build_router`] - HTTP 路由与中间件

pub mod catalog;
pub mod router;

pub use catalog::SpaceCatalog;
pub use router::{build_app, build_router};

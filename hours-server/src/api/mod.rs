//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`regular_hours`] - 每周常规营业时间接口
//! - [`holiday_hours`] - 节假日覆盖接口
//! - [`special_hours`] - 特殊日期覆盖接口
//! - [`settings`] - 营业时间策略接口
//! - [`holidays`] - 节假日日历接口 (全局)
//! - [`effective_hours`] - 生效营业时间查询接口

pub mod convert;

pub mod health;

// Data models API
pub mod effective_hours;
pub mod holiday_hours;
pub mod holidays;
pub mod regular_hours;
pub mod settings;
pub mod special_hours;

// Re-export common types for handlers
pub use shared::{AppError, AppResult};

//! Greenline Hours Server - 门店营业时间解析服务
//!
//! # 架构概述
//!
//! 本模块是 Hours Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (每周常规/节假日/特殊日期/策略)
//! - **解析器** (`hours`): 营业时间优先级解析 (特殊 > 节假日 > 常规)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! hours-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── hours/         # 营业时间解析器
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod hours;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______                     ___
  / ____/_______  ___  ____  / (_)___  ___
 / / __/ ___/ _ \/ _ \/ __ \/ / / __ \/ _ \
/ /_/ / /  /  __/  __/ / / / / / / / /  __/
\____/_/   \___/\___/_/ /_/_/_/_/ /_/\___/
    __  __
   / / / /___  __  ____________
  / /_/ / __ \/ / / / ___/ ___/
 / __  / /_/ / /_/ / /  (__  )
/_/ /_/\____/\__,_/_/  /____/
    "#
    );
}

/// 设置运行环境 (dotenv, 工作目录, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present; absence is not an error
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    Ok(())
}

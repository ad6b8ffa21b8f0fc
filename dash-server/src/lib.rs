//! Dash Server - 电商运营看板后端
//!
//! # 架构概述
//!
//! - **店铺生成** (`fixtures`): 在达卡地理范围内随机生成店铺批次
//! - **搜索筛选** (`search`): 按名称/地址搜索与区域筛选
//! - **看板指标** (`dashboard`): 供应商、库存、销售的汇总数据
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! dash-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── fixtures/      # 店铺生成器与静态看板数据
//! ├── search/        # 筛选与区域选项
//! ├── dashboard/     # 看板指标计算
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由装配与中间件
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志初始化、错误类型
//! ```

pub mod api;
pub mod core;
pub mod dashboard;
pub mod fixtures;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, ShopBatch, ShopStore};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____ ______/ /_
  / / / / __ `/ ___/ __ \
 / /_/ / /_/ (__  ) / / /
/_____/\__,_/____/_/ /_/
    "#
    );
}

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 从环境变量读取配置
/// 3. 初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    Ok(config)
}

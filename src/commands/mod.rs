//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `catalog/`, `parsers/`, `sorting/`, `utils/`
//! - 子模块: calculate, catalog

pub mod calculate;
pub mod catalog;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calculate(args) => calculate::execute(args),
        Commands::Catalog(args) => catalog::execute(args),
    }
}

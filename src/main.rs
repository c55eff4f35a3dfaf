//! # minsort - 碎屑矿物水力分选计算工具
//!
//! 根据沉积物整体平均粒径、分选、搬运流体与物源组成，计算每种矿物的
//! 水力等效（沉降等效）粒度分布。
//!
//! ## 子命令
//! - `calculate` - 计算等效参数与分箱分布，导出 CSV，绘制图表
//! - `catalog`   - 浏览流体、矿物与物源预设
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/  (组成与密度文件)
//!   │     ├── sorting/  (计算引擎、导出、绘图)
//!   │     ├── catalog/  (物性目录)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod catalog;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod sorting;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

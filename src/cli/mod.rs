//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calculate`: 计算各矿物的水力等效粒度分布
//! - `catalog`: 浏览内置物性目录（嵌套子命令）
//!   - `fluids` / `minerals` / `provenances` / `show`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calculate, catalog

pub mod calculate;
pub mod catalog;

use clap::{Parser, Subcommand};

/// minsort - 碎屑矿物水力分选计算工具
#[derive(Parser)]
#[command(name = "minsort")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Settling-equivalence grain-size distributions of detrital minerals",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate per-mineral hydraulic-equivalent size distributions
    Calculate(calculate::CalculateArgs),

    /// Browse built-in fluids, minerals and provenance presets
    Catalog(catalog::CatalogArgs),
}

//! # catalog 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/catalog.rs`

use clap::{Args, Subcommand};

/// catalog 主命令参数
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// catalog 子命令
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List transport fluids
    Fluids,

    /// List minerals with their densities (g/cm³)
    Minerals,

    /// List provenance presets
    Provenances,

    /// Show the composition of one provenance preset
    Show {
        /// Preset name (case-insensitive)
        name: String,
    },
}

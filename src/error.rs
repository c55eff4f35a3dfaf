//! # 统一错误处理模块
//!
//! 定义 minsort 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// minsort 统一错误类型
#[derive(Error, Debug)]
pub enum MinsortError {
    // ─────────────────────────────────────────────────────────────
    // 目录（catalog）查找错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown fluid: '{0}'")]
    UnknownFluid(String),

    #[error("Unknown provenance: '{0}'")]
    UnknownProvenance(String),

    #[error("Unknown mineral: '{0}'")]
    UnknownMineral(String),

    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Fine-tuning mode requires a density override for mineral '{mineral}'")]
    MissingOverride { mineral: String },

    #[error("No calculation density resolved for mineral '{mineral}'")]
    MissingKey { mineral: String },

    #[error(
        "Invalid distribution parameters for mineral '{mineral}': mean = {mean_phi}, sorting = {sorting_phi}"
    )]
    InvalidDistributionParameters {
        mineral: String,
        mean_phi: f64,
        sorting_phi: f64,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render plot: {0}")]
    PlotError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MinsortError>;

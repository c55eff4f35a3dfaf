//! # 解析器模块
//!
//! 读取用户提供的物源组成与密度覆盖文件。
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 和 `cli/calculate.rs` 使用
//! - 使用 `catalog/` 的 CompositionPreset
//! - 子模块: composition, densities

pub mod composition;
pub mod densities;

pub use composition::parse_composition_file;
pub use densities::{parse_density_file, parse_density_override};

use crate::error::{MinsortError, Result};
use std::fs;
use std::path::Path;

/// 读取整个文本文件
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| MinsortError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

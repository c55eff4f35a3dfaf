//! # 密度覆盖解析器
//!
//! 精调模式下的用户密度：命令行 `ID=VALUE` 形式，或 CSV 文件：
//! ```text
//! mineral,density
//! mica,2.9
//! Sil,3.3
//! ```
//!
//! ## 依赖关系
//! - `parse_density_override` 被 `cli/calculate.rs` 作为 value_parser 使用
//! - `parse_density_file` 被 `commands/calculate.rs` 使用

use super::read_file;
use crate::error::{MinsortError, Result};

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DensityRecord {
    mineral: String,
    density: f64,
}

/// 解析 `ID=VALUE` 形式的密度覆盖（如 `mica=2.9`）
pub fn parse_density_override(input: &str) -> std::result::Result<(String, f64), String> {
    let (id, value) = input
        .split_once('=')
        .ok_or_else(|| format!("Invalid density override '{}'. Expected ID=VALUE (e.g., mica=2.9)", input))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("Missing mineral id in density override '{}'", input));
    }

    let density: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid density value '{}' for mineral '{}'", value.trim(), id))?;
    check_density(id, density)?;

    Ok((id.to_string(), density))
}

/// 解析密度覆盖文件
pub fn parse_density_file(path: &Path) -> Result<HashMap<String, f64>> {
    let content = read_file(path)?;
    parse_density_content(&content)
}

/// 从字符串内容解析密度覆盖
pub fn parse_density_content(content: &str) -> Result<HashMap<String, f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut overrides = HashMap::new();
    for record in rdr.deserialize() {
        let record: DensityRecord = record?;
        check_density(&record.mineral, record.density).map_err(MinsortError::InvalidArgument)?;
        overrides.insert(record.mineral, record.density);
    }

    Ok(overrides)
}

fn check_density(id: &str, density: f64) -> std::result::Result<(), String> {
    if density.is_finite() && density > 0.0 {
        Ok(())
    } else {
        Err(format!(
            "Density for '{}' must be a positive number, got {}",
            id, density
        ))
    }
}

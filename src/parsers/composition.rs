//! # 物源组成 CSV 解析器
//!
//! ## 格式
//! ```text
//! mineral,percent
//! Q,62.5
//! F,12.0
//! Zrn,0.4
//! ```
//!
//! 预设名取文件名（不含扩展名）。矿物缩写的合法性由
//! `PropertyCatalog::with_provenance` 校验。
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 使用
//! - 使用 `catalog::CompositionPreset`

use super::read_file;
use crate::catalog::CompositionPreset;
use crate::error::{MinsortError, Result};

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CompositionRecord {
    mineral: String,
    percent: f64,
}

/// 解析组成文件
pub fn parse_composition_file(path: &Path) -> Result<CompositionPreset> {
    let content = read_file(path)?;
    parse_composition_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom"),
    )
}

/// 从字符串内容解析组成
pub fn parse_composition_content(content: &str, name: &str) -> Result<CompositionPreset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for record in rdr.deserialize() {
        let record: CompositionRecord = record?;

        if !record.percent.is_finite() || record.percent < 0.0 {
            return Err(MinsortError::InvalidArgument(format!(
                "percentage for '{}' must be a non-negative number, got {}",
                record.mineral, record.percent
            )));
        }
        if !seen.insert(record.mineral.clone()) {
            return Err(MinsortError::InvalidArgument(format!(
                "mineral '{}' listed more than once in composition '{}'",
                record.mineral, name
            )));
        }

        entries.push((record.mineral, record.percent));
    }

    if entries.is_empty() {
        return Err(MinsortError::InvalidArgument(format!(
            "composition '{}' has no entries",
            name
        )));
    }

    Ok(CompositionPreset::new(name, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PropertyCatalog;

    const SAMPLE: &str = "mineral,percent\n# heavy-mineral poor\nQ, 70\nF,20\nZrn,10\n";

    #[test]
    fn test_parse_composition() {
        let preset = parse_composition_content(SAMPLE, "my_sand").unwrap();
        assert_eq!(preset.name, "my_sand");
        assert_eq!(preset.entries().len(), 3);
        assert_eq!(preset.percentage("Q"), Some(70.0));
        assert!((preset.total() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_register_parsed_composition() {
        let preset = parse_composition_content(SAMPLE, "my_sand").unwrap();
        let catalog = PropertyCatalog::builtin().with_provenance(preset).unwrap();
        let registered = catalog.provenance("my_sand").unwrap();
        assert_eq!(registered.percentage("Zrn"), Some(10.0));
    }

    #[test]
    fn test_unknown_mineral_rejected_on_register() {
        let preset = parse_composition_content("mineral,percent\nUnobtainium,5\n", "bad").unwrap();
        assert!(matches!(
            PropertyCatalog::builtin().with_provenance(preset),
            Err(MinsortError::UnknownMineral(_))
        ));
    }

    #[test]
    fn test_invalid_rows() {
        assert!(matches!(
            parse_composition_content("mineral,percent\nQ,-3\n", "neg"),
            Err(MinsortError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_composition_content("mineral,percent\nQ,50\nQ,50\n", "dup"),
            Err(MinsortError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_composition_content("mineral,percent\nQ,lots\n", "text"),
            Err(MinsortError::CsvError(_))
        ));
        assert!(matches!(
            parse_composition_content("mineral,percent\n", "empty"),
            Err(MinsortError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("minsort_no_such_composition.csv");
        assert!(matches!(
            parse_composition_file(&path),
            Err(MinsortError::FileReadError { .. })
        ));
    }
}

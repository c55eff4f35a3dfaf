//! # 分布表数据导出
//!
//! 导出分布表为 CSV 格式。
//!
//! ## 格式
//! - 表头：phi, mm, 各矿物缩写（标准顺序）, total
//! - 分箱行按 φ 升序，最后一行为合计行（phi 列为 "total"，mm 列留空）
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `models/distribution.rs` 的 DistributionTable
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{MinsortError, Result};
use crate::models::{DistributionRow, DistributionTable};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出分布表为 CSV 文件
pub fn to_csv(table: &DistributionTable, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| MinsortError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    to_csv_writer(table, file)
}

/// 导出分布表到任意写入端
pub fn to_csv_writer<W: Write>(table: &DistributionTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    write_records(&mut wtr, table)?;
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn write_records<W: Write>(wtr: &mut csv::Writer<W>, table: &DistributionTable) -> Result<()> {
    let mut header = vec!["phi".to_string(), "mm".to_string()];
    header.extend(table.minerals.iter().cloned());
    header.push("total".to_string());
    wtr.write_record(&header)?;

    for row in &table.rows {
        wtr.write_record(record(
            format!("{:.2}", row.phi),
            format!("{:.6}", row.mm),
            row,
        ))?;
    }
    wtr.write_record(record("total".to_string(), String::new(), &table.total))?;

    Ok(())
}

fn record(phi: String, mm: String, row: &DistributionRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(row.values.len() + 3);
    fields.push(phi);
    fields.push(mm);
    fields.extend(row.values.iter().map(|v| format!("{:.6}", v)));
    fields.push(format!("{:.6}", row.total));
    fields
}

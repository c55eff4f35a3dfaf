//! # 分箱粒度分布
//!
//! 在固定的 φ 分箱上计算每种矿物的百分比分布与整体合计。
//!
//! ## 算法
//! - 分箱中心：−2.0, −1.75, …, 4.25（26 个，步长 0.25）
//! - 每个分箱：P = (Φ(φ + 0.125) − Φ(φ − 0.125)) × 含量百分比
//! - 行合计 = 各矿物之和；最后追加合计行 = 各列在所有分箱上的和
//!
//! 分箱范围之外的尾部不计入，因此合计行略小于输入组成。
//!
//! ## 依赖关系
//! - 被 `sorting/calculator.rs` 调用
//! - 使用 `sorting/normal.rs`

use crate::error::{MinsortError, Result};
use crate::models::{DistributionRow, DistributionTable, MineralDistributionParams};
use crate::sorting::normal::normal_cdf;
use crate::sorting::settling::phi_to_mm;

/// 第一个分箱中心 (φ)
pub const PHI_START: f64 = -2.0;

/// 分箱中心上限（不含）(φ)
pub const PHI_END: f64 = 4.5;

/// 分箱宽度 (φ)
pub const PHI_STEP: f64 = 0.25;

/// 分箱数：[PHI_START, PHI_END) 内的中心个数
pub const BIN_COUNT: usize = ((PHI_END - PHI_START) / PHI_STEP) as usize;

/// 分箱中心序列
pub fn bin_centers() -> impl Iterator<Item = f64> {
    (0..BIN_COUNT).map(|i| PHI_START + i as f64 * PHI_STEP)
}

/// 生成分布表
pub fn generate_distribution(params: &[MineralDistributionParams]) -> Result<DistributionTable> {
    for p in params {
        let valid = p.sorting_phi.is_finite() && p.sorting_phi > 0.0 && p.mean_phi.is_finite();
        if !valid {
            return Err(MinsortError::InvalidDistributionParameters {
                mineral: p.mineral.clone(),
                mean_phi: p.mean_phi,
                sorting_phi: p.sorting_phi,
            });
        }
    }

    let half_width = PHI_STEP / 2.0;
    let rows: Vec<DistributionRow> = bin_centers()
        .map(|phi| {
            let values: Vec<f64> = params
                .iter()
                .map(|p| {
                    let proportion = normal_cdf(phi + half_width, p.mean_phi, p.sorting_phi)
                        - normal_cdf(phi - half_width, p.mean_phi, p.sorting_phi);
                    proportion * p.weight_percent
                })
                .collect();
            let total = values.iter().sum();
            DistributionRow {
                phi,
                mm: phi_to_mm(phi),
                values,
                total,
            }
        })
        .collect();

    let mut column_sums = vec![0.0; params.len()];
    let mut grand_total = 0.0;
    for row in &rows {
        for (sum, value) in column_sums.iter_mut().zip(&row.values) {
            *sum += value;
        }
        grand_total += row.total;
    }

    Ok(DistributionTable {
        minerals: params.iter().map(|p| p.mineral.clone()).collect(),
        rows,
        total: DistributionRow {
            phi: f64::NAN,
            mm: f64::NAN,
            values: column_sums,
            total: grand_total,
        },
    })
}

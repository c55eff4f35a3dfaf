//! # 粒度分布结果数据模型
//!
//! 每种矿物的等效分布参数，以及引擎输出的分箱百分比表。
//!
//! ## 依赖关系
//! - 被 `sorting/` 各子模块使用
//! - 无外部模块依赖

/// 单个矿物的水力等效分布参数
#[derive(Debug, Clone, PartialEq)]
pub struct MineralDistributionParams {
    /// 矿物缩写
    pub mineral: String,
    /// 等效平均粒径 (φ)
    pub mean_phi: f64,
    /// 等效分选 (φ)
    pub sorting_phi: f64,
    /// 在物源组成中的百分比
    pub weight_percent: f64,
}

/// 分布表的一行
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRow {
    /// 分箱中心 (φ)
    pub phi: f64,
    /// 分箱中心对应的粒径 (mm)
    pub mm: f64,
    /// 各矿物的百分比，顺序与 `DistributionTable::minerals` 一致
    pub values: Vec<f64>,
    /// 本行合计
    pub total: f64,
}

/// 分箱百分比分布表
#[derive(Debug, Clone)]
pub struct DistributionTable {
    /// 列顺序（标准矿物顺序）
    pub minerals: Vec<String>,
    /// 分箱行（φ 升序）
    pub rows: Vec<DistributionRow>,
    /// 合计行：各列在所有分箱上的总和
    ///
    /// 合计行不对应任何分箱，其 `phi` 与 `mm` 为 NaN，不可当作数据读取。
    pub total: DistributionRow,
}

impl DistributionTable {
    /// 行数（含合计行）
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// 矿物列索引
    pub fn column(&self, mineral: &str) -> Option<usize> {
        self.minerals.iter().position(|m| m == mineral)
    }

    /// 某矿物在各分箱的百分比
    pub fn column_values(&self, mineral: &str) -> Option<Vec<f64>> {
        let idx = self.column(mineral)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    /// 合计行中某矿物的百分比
    pub fn total_for(&self, mineral: &str) -> Option<f64> {
        self.column(mineral).map(|idx| self.total.values[idx])
    }

    /// 按输出顺序遍历：分箱行，然后是合计行
    pub fn iter_with_total(&self) -> impl Iterator<Item = &DistributionRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }
}

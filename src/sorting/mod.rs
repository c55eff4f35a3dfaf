//! # 矿物水力分选计算模块
//!
//! 根据整体粒度参数、流体与物源组成，计算各矿物的水力等效粒度分布。
//!
//! ## 子模块
//! - `settling`: 沉降定律选择与 size-shift
//! - `density`: 计算密度解析与整体密度
//! - `params`: 矿物等效平均粒径与分选推导
//! - `normal`: 误差函数与正态累积分布
//! - `distribution`: 分箱百分比分布
//! - `calculator`: 完整计算入口
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 使用
//! - 使用 `catalog/` 和 `models/`

pub mod calculator;
pub mod density;
pub mod distribution;
pub mod export;
pub mod normal;
pub mod params;
pub mod plot;
pub mod settling;

pub use calculator::SortingCalculator;

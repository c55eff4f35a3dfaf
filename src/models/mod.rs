//! # 数据模型模块
//!
//! 定义计算请求与分布结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `sorting/` 和 `commands/` 使用
//! - 子模块: request, distribution

pub mod distribution;
pub mod request;

pub use distribution::{DistributionRow, DistributionTable, MineralDistributionParams};
pub use request::{CalculationRequest, DensityMode};

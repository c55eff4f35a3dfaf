//! # 矿物分选计算器
//!
//! 组合参数推导与分箱分布，给出一次完整计算的结果。
//!
//! ## 参考
//! - Resentini et al. (2013), Computers & Geosciences 59, 90–97
//! - Garzanti et al. (2008), Settling equivalence of detrital minerals and grain-size
//!   dependence of sediment composition. EPSL 273, 138–151
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `sorting/params.rs`, `sorting/distribution.rs`
//! - 使用 `catalog/` 的 PropertyCatalog

use crate::catalog::PropertyCatalog;
use crate::error::Result;
use crate::models::{CalculationRequest, DistributionTable};
use crate::sorting::distribution::generate_distribution;
use crate::sorting::params::{self, Derivation};

/// 分选计算器：绑定只读目录的计算入口
pub struct SortingCalculator<'a> {
    catalog: &'a PropertyCatalog,
}

impl<'a> SortingCalculator<'a> {
    /// 创建计算器（目录在整个进程中只读共享）
    pub fn new(catalog: &'a PropertyCatalog) -> Self {
        Self { catalog }
    }

    /// 推导各矿物参数，并保留沉降定律、整体密度与计算密度
    pub fn derive(&self, request: &CalculationRequest) -> Result<Derivation> {
        params::derive(request, self.catalog)
    }

    /// 计算分布表，失败时不返回部分结果
    pub fn calculate(&self, request: &CalculationRequest) -> Result<DistributionTable> {
        calculate(request, self.catalog)
    }
}

/// 计算分布表：参数推导，然后分箱
pub fn calculate(request: &CalculationRequest, catalog: &PropertyCatalog) -> Result<DistributionTable> {
    let params = params::derive_params(request, catalog)?;
    generate_distribution(&params)
}

//! # 矿物水力等效参数推导
//!
//! 对物源组成中含量 > 0 的每种矿物，计算其水力等效平均粒径与分选。
//!
//! ## 算法概述
//! 1. 查找流体与物源预设
//! 2. 解析计算密度，求整体密度
//! 3. 按流体类别与粒径区间选择沉降定律
//! 4. 平均粒径：Dm_i = Dm − SS(ρ_i)
//! 5. 分选：把 Dm ± σ 换算为 mm，以整体密度求两端沉降速度，
//!    再换回 φ 尺度，σ_i = (φ(v_max) − φ(v_min)) / 2
//!
//! ## 依赖关系
//! - 被 `sorting/calculator.rs` 调用
//! - 使用 `sorting/density.rs`, `sorting/settling.rs`

use crate::catalog::PropertyCatalog;
use crate::error::{MinsortError, Result};
use crate::models::{CalculationRequest, MineralDistributionParams};
use crate::sorting::density;
use crate::sorting::settling::{self, SettlingLaw};

use std::collections::HashMap;

/// 参数推导的完整中间结果
#[derive(Debug, Clone)]
pub struct Derivation {
    /// 使用的沉降定律
    pub law: SettlingLaw,
    /// 整体密度 (g/cm³)
    pub bulk_density: f64,
    /// 组成中每种矿物的计算密度
    pub calc_densities: HashMap<String, f64>,
    /// 含量 > 0 的矿物参数（标准顺序）
    pub params: Vec<MineralDistributionParams>,
}

/// 推导每种矿物的分布参数
pub fn derive_params(
    request: &CalculationRequest,
    catalog: &PropertyCatalog,
) -> Result<Vec<MineralDistributionParams>> {
    derive(request, catalog).map(|d| d.params)
}

/// 推导参数并保留中间量（整体密度、沉降定律、计算密度）
pub fn derive(request: &CalculationRequest, catalog: &PropertyCatalog) -> Result<Derivation> {
    let fluid = catalog.fluid(&request.fluid)?;
    let composition = catalog.provenance(&request.provenance)?;

    let calc_densities = density::resolve_calc_densities(request, composition, catalog)?;
    let bulk_density = density::bulk_density(composition, &calc_densities)?;

    let laws = settling::select_laws(fluid.category, request.mean_size_phi);

    // 分选换算只依赖整体参数，对所有矿物相同
    let dm = request.mean_size_phi;
    let sigma = request.sorting_phi;
    let d_min = settling::phi_to_mm(dm - sigma);
    let d_max = settling::phi_to_mm(dm + sigma);
    let v_min = laws.settling_velocity(d_min, bulk_density, fluid.density, fluid.viscosity);
    let v_max = laws.settling_velocity(d_max, bulk_density, fluid.density, fluid.viscosity);
    let mineral_sorting = (settling::mm_to_phi(v_max) - settling::mm_to_phi(v_min)) / 2.0;

    let mut params = Vec::new();
    for (mineral, pct) in composition.present() {
        let rho = *calc_densities
            .get(mineral)
            .ok_or_else(|| MinsortError::MissingKey {
                mineral: mineral.to_string(),
            })?;
        let shift = laws.size_shift(rho);

        params.push(MineralDistributionParams {
            mineral: mineral.to_string(),
            mean_phi: dm - shift,
            sorting_phi: mineral_sorting,
            weight_percent: pct,
        });
    }

    Ok(Derivation {
        law: laws.law,
        bulk_density,
        calc_densities,
        params,
    })
}

//! # 计算请求数据模型
//!
//! 外部调用方（CLI）传入引擎的已解析输入。
//!
//! ## 依赖关系
//! - 被 `sorting/params.rs` 使用
//! - 由 `commands/calculate.rs` 构建

use std::collections::HashMap;

/// 密度取值方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DensityMode {
    /// 使用目录中的计算密度
    #[default]
    Standard,
    /// 使用调用方提供的密度（mica、Sil 会自动下调）
    FineTuning,
}

impl std::fmt::Display for DensityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityMode::Standard => write!(f, "standard"),
            DensityMode::FineTuning => write!(f, "fine-tuning"),
        }
    }
}

/// 一次计算的输入
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    /// 整体平均粒径 (φ)
    pub mean_size_phi: f64,
    /// 整体分选 (φ)
    pub sorting_phi: f64,
    /// 流体名称
    pub fluid: String,
    /// 物源预设名称
    pub provenance: String,
    pub density_mode: DensityMode,
    /// 矿物缩写 → 密度 (g/cm³)，仅在 FineTuning 模式下使用
    pub overrides: HashMap<String, f64>,
}

impl CalculationRequest {
    /// 创建标准密度模式的请求
    pub fn new(
        mean_size_phi: f64,
        sorting_phi: f64,
        fluid: impl Into<String>,
        provenance: impl Into<String>,
    ) -> Self {
        Self {
            mean_size_phi,
            sorting_phi,
            fluid: fluid.into(),
            provenance: provenance.into(),
            density_mode: DensityMode::Standard,
            overrides: HashMap::new(),
        }
    }

    /// 切换到 FineTuning 模式并设置覆盖密度
    pub fn with_fine_tuning(mut self, overrides: HashMap<String, f64>) -> Self {
        self.density_mode = DensityMode::FineTuning;
        self.overrides = overrides;
        self
    }
}

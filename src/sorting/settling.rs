//! # 沉降定律选择
//!
//! 根据流体类别和粒径区间选择沉降速度公式，并提供密度引起的粒径偏移 (size-shift)。
//!
//! ## 公式
//! - Stokes: v = g·(ρp − ρf)·d² / (18·μ)
//! - Cheng:  v = g·(ρp − ρf)·d² / (18·μ·(1 + 0.15·d))
//! - size-shift: SS = log₂(√(ρp / ρref))，ρref = 2.65（石英）
//!
//! | 流体类别 | 平均粒径 φ > 3.5 | 平均粒径 φ ≤ 3.5 |
//! |---------|-----------------|-----------------|
//! | Aqueous | Stokes          | Cheng           |
//! | Aerial  | Stokes          | Stokes          |
//!
//! 粒径 d 以 mm 为单位（d = 2^−φ）；常数项在分选换算时相互抵消。
//!
//! ## 依赖关系
//! - 被 `sorting/params.rs` 调用
//! - 使用 `catalog::FluidCategory`

use crate::catalog::FluidCategory;

/// 重力加速度 (m/s²)
pub const GRAVITY: f64 = 9.81;

/// 参考密度：石英 (g/cm³)
pub const QUARTZ_DENSITY: f64 = 2.65;

/// Stokes / Cheng 分界（φ）
pub const STOKES_PHI_THRESHOLD: f64 = 3.5;

/// Cheng 公式的湍流修正系数
const CHENG_TURBULENCE_FACTOR: f64 = 0.15;

/// 粒径区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRegime {
    /// 平均粒径 φ > 3.5（细粒）
    Fine,
    /// 平均粒径 φ ≤ 3.5
    Coarse,
}

impl SizeRegime {
    pub fn from_mean_phi(mean_size_phi: f64) -> Self {
        if mean_size_phi > STOKES_PHI_THRESHOLD {
            SizeRegime::Fine
        } else {
            SizeRegime::Coarse
        }
    }
}

/// 沉降速度公式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlingLaw {
    Stokes,
    Cheng,
}

impl std::fmt::Display for SettlingLaw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettlingLaw::Stokes => write!(f, "Stokes"),
            SettlingLaw::Cheng => write!(f, "Cheng"),
        }
    }
}

impl SettlingLaw {
    /// 按 (流体类别, 粒径区间) 选择公式
    pub fn select(category: FluidCategory, regime: SizeRegime) -> Self {
        match (category, regime) {
            (FluidCategory::Aqueous, SizeRegime::Fine) => SettlingLaw::Stokes,
            (FluidCategory::Aqueous, SizeRegime::Coarse) => SettlingLaw::Cheng,
            (FluidCategory::Aerial, _) => SettlingLaw::Stokes,
        }
    }

    /// 计算沉降速度
    ///
    /// `d` 粒径 (mm)，`rho_p` 颗粒密度，`rho_f` 流体密度，`mu` 黏度
    pub fn velocity(&self, d: f64, rho_p: f64, rho_f: f64, mu: f64) -> f64 {
        let stokes = GRAVITY * (rho_p - rho_f) * d * d / (18.0 * mu);
        match self {
            SettlingLaw::Stokes => stokes,
            SettlingLaw::Cheng => stokes / (1.0 + CHENG_TURBULENCE_FACTOR * d),
        }
    }
}

/// 一次计算选定的沉降速度公式与 size-shift 公式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlingLaws {
    pub law: SettlingLaw,
}

impl SettlingLaws {
    pub fn settling_velocity(&self, d: f64, rho_p: f64, rho_f: f64, mu: f64) -> f64 {
        self.law.velocity(d, rho_p, rho_f, mu)
    }

    /// 相对石英的 size-shift (φ)
    pub fn size_shift(&self, rho_p: f64) -> f64 {
        size_shift(rho_p)
    }
}

/// 选择沉降定律
pub fn select_laws(category: FluidCategory, mean_size_phi: f64) -> SettlingLaws {
    SettlingLaws {
        law: SettlingLaw::select(category, SizeRegime::from_mean_phi(mean_size_phi)),
    }
}

/// 相对石英的 size-shift (φ)
pub fn size_shift(rho_p: f64) -> f64 {
    size_shift_with_reference(rho_p, QUARTZ_DENSITY)
}

/// 相对任意参考密度的 size-shift (φ)
pub fn size_shift_with_reference(rho_p: f64, rho_ref: f64) -> f64 {
    (rho_p / rho_ref).sqrt().log2()
}

/// φ → mm
pub fn phi_to_mm(phi: f64) -> f64 {
    2.0_f64.powf(-phi)
}

/// mm → φ（也用于把沉降速度换算回 φ 尺度）
pub fn mm_to_phi(mm: f64) -> f64 {
    -mm.log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartz_has_no_size_shift() {
        assert_eq!(size_shift(QUARTZ_DENSITY), 0.0);
    }

    #[test]
    fn test_laws_shift_matches_free_function() {
        let laws = select_laws(FluidCategory::Aqueous, 2.0);
        assert_eq!(laws.size_shift(4.65), size_shift(4.65));
        assert_eq!(laws.size_shift(QUARTZ_DENSITY), 0.0);
    }

    #[test]
    fn test_denser_minerals_shift_positive() {
        // 锆石 4.65: log2(sqrt(4.65/2.65)) ≈ 0.4055
        let ss = size_shift(4.65);
        assert!((ss - 0.405_5).abs() < 1e-3, "got {}", ss);
        assert!(size_shift(2.40) < 0.0);
    }

    #[test]
    fn test_law_dispatch_table() {
        use FluidCategory::*;
        assert_eq!(select_laws(Aqueous, 2.0).law, SettlingLaw::Cheng);
        assert_eq!(select_laws(Aqueous, 3.5).law, SettlingLaw::Cheng);
        assert_eq!(select_laws(Aqueous, 3.75).law, SettlingLaw::Stokes);
        assert_eq!(select_laws(Aerial, 2.0).law, SettlingLaw::Stokes);
        assert_eq!(select_laws(Aerial, 5.0).law, SettlingLaw::Stokes);
    }

    #[test]
    fn test_stokes_velocity() {
        // g·(2.65 − 1)·1² / (18·0.01)
        let v = SettlingLaw::Stokes.velocity(1.0, 2.65, 1.0, 0.01);
        assert!((v - 9.81 * 1.65 / 0.18).abs() < 1e-9);
    }

    #[test]
    fn test_cheng_slower_than_stokes() {
        let d = 0.5;
        let stokes = SettlingLaw::Stokes.velocity(d, 2.65, 1.0, 0.01);
        let cheng = SettlingLaw::Cheng.velocity(d, 2.65, 1.0, 0.01);
        assert!((stokes / cheng - 1.075).abs() < 1e-12);
    }

    #[test]
    fn test_phi_mm_conversion() {
        assert!((phi_to_mm(0.0) - 1.0).abs() < 1e-12);
        assert!((phi_to_mm(2.0) - 0.25).abs() < 1e-12);
        assert!((phi_to_mm(-1.0) - 2.0).abs() < 1e-12);
        assert!((mm_to_phi(0.125) - 3.0).abs() < 1e-12);
    }
}

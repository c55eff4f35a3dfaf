//! # 正态分布函数
//!
//! 互补误差函数与正态累积分布函数，供分箱分布计算使用。
//!
//! ## 公式
//! erfc(x) 使用 Chebyshev 拟合的有理近似，全域相对误差 < 1.2e-7
//! Φ(x; μ, σ) = ½·erfc(−(x − μ) / (σ√2))
//!
//! ## 参考
//! Press et al., Numerical Recipes, §6.2 (erfcc)
//!
//! ## 依赖关系
//! - 被 `sorting/distribution.rs` 调用
//! - 纯函数，无外部依赖

use std::f64::consts::SQRT_2;

/// 互补误差函数
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);

    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));

    let ans = t * poly.exp();
    if x >= 0.0 {
        ans
    } else {
        2.0 - ans
    }
}

/// 正态分布累积分布函数 Φ(x; mean, sd)
///
/// 调用方需保证 `sd > 0`。
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> f64 {
    0.5 * erfc(-(x - mean) / (sd * SQRT_2))
}

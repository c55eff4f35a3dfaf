//! # 计算密度与整体密度
//!
//! 解析每种矿物的计算密度，并按物源组成加权得到沉积物整体密度。
//!
//! ## 密度取值
//! - Standard: 目录中的 `calc_density`
//! - FineTuning: 调用方提供的密度，mica 再减 0.5，Sil 再减 0.45（蚀变修正）
//!
//! ## 依赖关系
//! - 被 `sorting/params.rs` 调用
//! - 使用 `catalog/` 和 `models/request.rs`

use crate::catalog::{CompositionPreset, PropertyCatalog};
use crate::error::{MinsortError, Result};
use crate::models::{CalculationRequest, DensityMode};

use std::collections::HashMap;

/// FineTuning 模式下对覆盖密度的蚀变修正量 (g/cm³)
///
/// 只要该矿物出现在覆盖集合中就会扣减，与覆盖值大小无关。
pub fn alteration_offset(mineral: &str) -> f64 {
    match mineral {
        "mica" => 0.5,
        "Sil" => 0.45,
        _ => 0.0,
    }
}

/// 对覆盖密度应用蚀变修正
pub fn effective_override_density(mineral: &str, density: f64) -> f64 {
    density - alteration_offset(mineral)
}

/// 解析组成中每种矿物的计算密度
///
/// FineTuning 模式下：含量 > 0 的矿物必须有覆盖值，否则返回 `MissingOverride`；
/// 含量为 0 的矿物缺省时回退到目录密度。覆盖集合中多余的键被忽略。
pub fn resolve_calc_densities(
    request: &CalculationRequest,
    composition: &CompositionPreset,
    catalog: &PropertyCatalog,
) -> Result<HashMap<String, f64>> {
    let mut densities = HashMap::with_capacity(composition.entries().len());

    for (mineral, pct) in composition.entries() {
        let density = match request.density_mode {
            DensityMode::Standard => catalog.mineral(mineral)?.calc_density,
            DensityMode::FineTuning => match request.overrides.get(mineral) {
                Some(&value) => effective_override_density(mineral, value),
                None if *pct > 0.0 => {
                    return Err(MinsortError::MissingOverride {
                        mineral: mineral.clone(),
                    })
                }
                None => catalog.mineral(mineral)?.calc_density,
            },
        };
        densities.insert(mineral.clone(), density);
    }

    Ok(densities)
}

/// 整体密度 = Σ(百分比 × 计算密度) / 100
pub fn bulk_density(
    composition: &CompositionPreset,
    calc_densities: &HashMap<String, f64>,
) -> Result<f64> {
    let mut weighted = 0.0;
    for (mineral, pct) in composition.entries() {
        let density = calc_densities
            .get(mineral)
            .ok_or_else(|| MinsortError::MissingKey {
                mineral: mineral.clone(),
            })?;
        weighted += pct * density;
    }
    Ok(weighted / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_mineral_composition() -> CompositionPreset {
        CompositionPreset::new(
            "test",
            vec![("Q".to_string(), 50.0), ("Zrn".to_string(), 50.0)],
        )
    }

    #[test]
    fn test_alteration_policy() {
        assert_eq!(alteration_offset("mica"), 0.5);
        assert_eq!(alteration_offset("Sil"), 0.45);
        assert_eq!(alteration_offset("Q"), 0.0);
        assert!((effective_override_density("mica", 2.9) - 2.4).abs() < 1e-12);
        assert!((effective_override_density("Sil", 3.0) - 2.55).abs() < 1e-12);
    }

    #[test]
    fn test_bulk_density_weighted_average() {
        let comp = two_mineral_composition();
        let densities = HashMap::from([("Q".to_string(), 2.65), ("Zrn".to_string(), 4.65)]);
        let bulk = bulk_density(&comp, &densities).unwrap();
        assert!((bulk - 3.65).abs() < 1e-12);
    }

    #[test]
    fn test_bulk_density_missing_key() {
        let comp = two_mineral_composition();
        let densities = HashMap::from([("Q".to_string(), 2.65)]);
        let err = bulk_density(&comp, &densities).unwrap_err();
        assert!(matches!(err, MinsortError::MissingKey { ref mineral } if mineral == "Zrn"));
    }

    #[test]
    fn test_standard_mode_uses_catalog() {
        let catalog = PropertyCatalog::builtin();
        let comp = catalog.provenance("Recycled Clastic").unwrap();
        let request = CalculationRequest::new(2.0, 1.0, "Freshwater", "Recycled Clastic");

        let densities = resolve_calc_densities(&request, comp, &catalog).unwrap();
        assert_eq!(densities.len(), comp.entries().len());
        assert_eq!(densities["mica"], 2.40);
        assert_eq!(densities["Sil"], 2.55);
    }

    #[test]
    fn test_fine_tuning_adjusts_mica_and_sillimanite() {
        let catalog = PropertyCatalog::builtin();
        let comp = CompositionPreset::new(
            "test",
            vec![
                ("Q".to_string(), 90.0),
                ("mica".to_string(), 5.0),
                ("Sil".to_string(), 5.0),
            ],
        );
        let overrides = HashMap::from([
            ("Q".to_string(), 2.65),
            ("mica".to_string(), 2.9),
            ("Sil".to_string(), 3.1),
            ("Zrn".to_string(), 4.7),
        ]);
        let request = CalculationRequest::new(2.0, 1.0, "Freshwater", "test")
            .with_fine_tuning(overrides);

        let densities = resolve_calc_densities(&request, &comp, &catalog).unwrap();
        assert!((densities["mica"] - 2.4).abs() < 1e-12);
        assert!((densities["Sil"] - 2.65).abs() < 1e-12);
        assert_eq!(densities["Q"], 2.65);
        // 多余的覆盖键被忽略
        assert!(!densities.contains_key("Zrn"));
    }

    #[test]
    fn test_fine_tuning_missing_override() {
        let catalog = PropertyCatalog::builtin();
        let comp = two_mineral_composition();
        let overrides = HashMap::from([("Q".to_string(), 2.65)]);
        let request = CalculationRequest::new(2.0, 1.0, "Freshwater", "test")
            .with_fine_tuning(overrides);

        let err = resolve_calc_densities(&request, &comp, &catalog).unwrap_err();
        assert!(matches!(err, MinsortError::MissingOverride { ref mineral } if mineral == "Zrn"));
    }

    #[test]
    fn test_fine_tuning_zero_weight_falls_back() {
        let catalog = PropertyCatalog::builtin();
        let comp = CompositionPreset::new(
            "test",
            vec![("Q".to_string(), 100.0), ("mica".to_string(), 0.0)],
        );
        let overrides = HashMap::from([("Q".to_string(), 2.7)]);
        let request = CalculationRequest::new(2.0, 1.0, "Freshwater", "test")
            .with_fine_tuning(overrides);

        let densities = resolve_calc_densities(&request, &comp, &catalog).unwrap();
        assert_eq!(densities["Q"], 2.7);
        assert_eq!(densities["mica"], 2.40);
    }
}

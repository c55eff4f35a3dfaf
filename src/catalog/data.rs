//! # 内置物性数据表
//!
//! 流体物性、矿物密度与物源组成预设。
//!
//! ## 数据来源
//! Resentini, A., Malusà, M.G., Garzanti, E. (2013).
//! MinSORTING: An Excel® worksheet for modelling mineral grain-size distribution
//! in sediments, with application to detrital geochronology and provenance studies.
//! Computers & Geosciences 59, 90–97. (Table 1, Table 2, Fig. 4b)
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 用于构建 `PropertyCatalog`
//! - 纯静态数据，无外部依赖

use super::FluidCategory;

/// 流体物性：(名称, 密度 g/cm³, 黏度, 类别)
pub const FLUIDS: &[(&str, f64, f64, FluidCategory)] = &[
    ("Freshwater", 1.0, 0.01, FluidCategory::Aqueous),
    ("Seawater", 1.025, 0.0105, FluidCategory::Aqueous),
    ("Air", 0.001, 0.00018, FluidCategory::Aerial),
];

/// 矿物物性，按 Table 2 / Fig. 7 的标准顺序排列
///
/// (缩写, 名称, 标准密度, 最小密度, 最大密度, 计算密度)
pub const MINERALS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("Q", "Quartz", 2.65, 2.65, 2.65, 2.65),
    ("F", "Feldspar", 2.61, 2.58, 2.67, 2.61),
    ("Lv", "Volcanic Lithics", 2.60, 2.40, 2.80, 2.60),
    ("Lc", "Carbonate Lithics", 2.75, 2.71, 2.80, 2.75),
    ("Ls", "Sedimentary Lithics", 2.65, 2.50, 2.75, 2.65),
    ("Lm", "Metamorphic Lithics", 2.75, 2.70, 2.80, 2.75),
    ("Lu", "Ultramafic Lithics", 2.85, 2.60, 3.00, 2.85),
    ("mica", "Mica", 2.90, 2.80, 3.00, 2.40),
    ("Op", "Opaques", 4.95, 4.90, 5.00, 4.95),
    ("Zrn", "Zircon", 4.65, 4.65, 4.65, 4.65),
    ("Tur", "Tourmaline", 3.15, 3.10, 3.20, 3.15),
    ("Rt", "Rutile", 4.25, 4.25, 4.25, 4.25),
    ("Ttn", "Titanite", 3.50, 3.50, 3.50, 3.50),
    ("Ap", "Apatite", 3.20, 3.20, 3.20, 3.20),
    ("Mnz", "Monazite", 5.15, 5.15, 5.15, 5.15),
    ("Amp", "Amphibole", 3.20, 3.20, 3.20, 3.20),
    ("Ep", "Epidote", 3.45, 3.45, 3.45, 3.45),
    ("Grt", "Garnet", 4.00, 3.90, 4.10, 4.00),
    ("Px", "Pyroxene", 3.30, 3.30, 3.30, 3.30),
    ("Ol", "Olivine", 3.35, 3.35, 3.35, 3.35),
    ("Spl", "Spinel", 4.45, 4.45, 4.45, 4.45),
    ("Cld", "Chloritoid", 3.65, 3.65, 3.65, 3.65),
    ("St", "Staurolite", 3.75, 3.75, 3.75, 3.75),
    ("Ky", "Kyanite", 3.60, 3.60, 3.60, 3.60),
    ("And", "Andalusite", 3.15, 3.15, 3.15, 3.15),
    ("Sil", "Sillimanite", 3.00, 2.80, 3.25, 2.55),
    ("&HM", "Other Heavy Minerals", 3.20, 3.00, 3.50, 3.20),
];

/// 矿物种数
pub const MINERAL_COUNT: usize = 27;

/// 物源组成预设 (Table 2)，百分比与 `MINERALS` 顺序一一对应
pub const PROVENANCES: &[(&str, [f64; MINERAL_COUNT])] = &[
    (
        "Undissected Magmatic Arc",
        [
            3.23, 27.90, 47.00, 0.40, 0.40, 0.40, 0.00, 0.80, 2.02, 0.00, 0.00, 0.00, 0.02, 0.02,
            0.00, 0.40, 0.10, 0.00, 15.40, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 1.91,
        ],
    ),
    (
        "Dissected Magmatic Arc",
        [
            34.89, 39.70, 1.10, 0.60, 0.80, 3.00, 0.00, 4.50, 1.52, 0.06, 0.06, 0.00, 0.20, 0.20,
            0.05, 9.30, 1.90, 0.00, 0.40, 0.10, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 1.62,
        ],
    ),
    (
        "Ophiolite",
        [
            4.98, 7.40, 8.10, 9.40, 0.80, 3.70, 47.50, 0.10, 0.71, 0.00, 0.00, 0.00, 0.00, 0.01,
            0.00, 1.90, 1.20, 0.00, 11.30, 0.60, 1.40, 0.00, 0.00, 0.00, 0.00, 0.00, 0.90,
        ],
    ),
    (
        "Recycled Clastic",
        [
            75.96, 14.00, 0.00, 1.50, 5.00, 2.00, 0.00, 1.00, 0.02, 0.10, 0.10, 0.10, 0.01, 0.01,
            0.00, 0.00, 0.00, 0.10, 0.00, 0.00, 0.00, 0.00, 0.10, 0.00, 0.00, 0.00, 0.00,
        ],
    ),
    (
        "Undissected Continental Block",
        [
            2.43, 0.40, 2.00, 65.40, 24.90, 4.80, 0.00, 0.00, 0.02, 0.01, 0.01, 0.01, 0.00, 0.01,
            0.00, 0.00, 0.00, 0.01, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00,
        ],
    ),
    (
        "Transitional Continental Block",
        [
            36.69, 12.80, 1.70, 1.10, 1.50, 33.10, 0.00, 8.30, 0.24, 0.01, 0.02, 0.11, 0.01, 0.01,
            0.01, 1.00, 1.20, 0.70, 0.20, 0.00, 0.00, 0.10, 0.10, 0.10, 0.10, 0.00, 0.90,
        ],
    ),
    (
        "Dissected Continental Block",
        [
            42.81, 32.80, 1.20, 2.20, 0.50, 7.40, 0.00, 4.50, 0.95, 0.06, 0.04, 0.11, 0.04, 0.17,
            0.02, 4.50, 1.20, 1.20, 0.00, 0.00, 0.00, 0.00, 0.10, 0.10, 0.10, 0.00, 0.00,
        ],
    ),
    (
        "Subcreted Axial Belt",
        [
            25.39, 3.60, 1.70, 15.30, 12.90, 38.00, 0.00, 0.50, 1.20, 0.02, 0.02, 0.01, 0.02, 0.10,
            0.01, 0.20, 0.40, 0.00, 0.00, 0.00, 0.00, 0.13, 0.00, 0.00, 0.00, 0.00, 0.50,
        ],
    ),
    (
        "Subducted Axial Belt",
        [
            48.76, 15.30, 0.30, 0.10, 0.00, 15.10, 0.00, 0.50, 13.40, 0.03, 0.04, 0.10, 0.09, 0.17,
            0.02, 0.40, 2.50, 2.10, 0.00, 0.00, 0.00, 0.00, 0.00, 0.20, 0.00, 0.10, 0.69,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mineral_table_size() {
        assert_eq!(MINERALS.len(), MINERAL_COUNT);
    }

    #[test]
    fn test_mineral_ids_unique() {
        for (i, a) in MINERALS.iter().enumerate() {
            for b in &MINERALS[i + 1..] {
                assert_ne!(a.0, b.0, "duplicate mineral id {}", a.0);
            }
        }
    }

    #[test]
    fn test_density_ranges_are_ordered() {
        for (id, _, standard, min, max, _) in MINERALS {
            assert!(
                min <= standard && standard <= max,
                "{} standard density {} outside [{}, {}]",
                id,
                standard,
                min,
                max
            );
        }
    }
}

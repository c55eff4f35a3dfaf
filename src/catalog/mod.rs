//! # 物性目录模块
//!
//! 只读的流体物性、矿物物性与物源组成预设注册表。
//!
//! 目录在进程启动时构建一次（`PropertyCatalog::builtin()`），之后以引用方式
//! 传入每次计算，不再修改。自定义物源预设只能在共享之前通过
//! `with_provenance` 追加。
//!
//! ## 子模块
//! - `data`: 内置数据表
//!
//! ## 依赖关系
//! - 被 `sorting/params.rs` 和 `commands/` 使用
//! - 使用 `error.rs`

pub mod data;

use crate::error::{MinsortError, Result};

/// 流体类别，决定沉降定律的选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidCategory {
    /// 水介质（淡水、海水）
    Aqueous,
    /// 空气
    Aerial,
}

impl std::fmt::Display for FluidCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FluidCategory::Aqueous => write!(f, "aqueous"),
            FluidCategory::Aerial => write!(f, "aerial"),
        }
    }
}

/// 流体物性
#[derive(Debug, Clone)]
pub struct FluidProperties {
    pub name: String,
    /// 密度 (g/cm³)
    pub density: f64,
    /// 黏度
    pub viscosity: f64,
    pub category: FluidCategory,
}

/// 矿物物性
#[derive(Debug, Clone)]
pub struct MineralSpec {
    /// 缩写（如 "Q", "mica", "&HM"）
    pub id: String,
    pub display_name: String,
    pub standard_density: f64,
    pub min_density: f64,
    pub max_density: f64,
    /// 沉降计算使用的密度
    pub calc_density: f64,
}

/// 物源组成预设：矿物 → 百分比
#[derive(Debug, Clone)]
pub struct CompositionPreset {
    pub name: String,
    /// 按标准矿物顺序排列的 (缩写, 百分比)
    entries: Vec<(String, f64)>,
}

impl CompositionPreset {
    /// 创建组成预设（不做排序和校验，见 `PropertyCatalog::with_provenance`）
    pub fn new(name: impl Into<String>, entries: Vec<(String, f64)>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// 所有条目（包括 0%）
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// 百分比大于 0 的矿物
    pub fn present(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .filter(|(_, pct)| *pct > 0.0)
            .map(|(id, pct)| (id.as_str(), *pct))
    }

    /// 查询某矿物的百分比
    pub fn percentage(&self, mineral: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(id, _)| id == mineral)
            .map(|(_, pct)| *pct)
    }

    /// 百分比总和
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, pct)| pct).sum()
    }
}

/// 物性目录
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    fluids: Vec<FluidProperties>,
    minerals: Vec<MineralSpec>,
    provenances: Vec<CompositionPreset>,
}

impl PropertyCatalog {
    /// 从内置数据表构建目录
    pub fn builtin() -> Self {
        let fluids = data::FLUIDS
            .iter()
            .map(|&(name, density, viscosity, category)| FluidProperties {
                name: name.to_string(),
                density,
                viscosity,
                category,
            })
            .collect();

        let minerals = data::MINERALS
            .iter()
            .map(
                |&(id, name, standard, min, max, calc)| MineralSpec {
                    id: id.to_string(),
                    display_name: name.to_string(),
                    standard_density: standard,
                    min_density: min,
                    max_density: max,
                    calc_density: calc,
                },
            )
            .collect();

        let provenances = data::PROVENANCES
            .iter()
            .map(|(name, percentages)| {
                let entries = data::MINERALS
                    .iter()
                    .zip(percentages.iter())
                    .map(|(mineral, pct)| (mineral.0.to_string(), *pct))
                    .collect();
                CompositionPreset::new(*name, entries)
            })
            .collect();

        Self {
            fluids,
            minerals,
            provenances,
        }
    }

    /// 注册自定义物源预设（同名预设会被替换）
    ///
    /// 条目按标准矿物顺序重排，未列出的矿物记为 0%。
    pub fn with_provenance(mut self, preset: CompositionPreset) -> Result<Self> {
        for (id, _) in &preset.entries {
            self.mineral(id)?;
        }

        let entries = self
            .minerals
            .iter()
            .map(|m| {
                let pct = preset.percentage(&m.id).unwrap_or(0.0);
                (m.id.clone(), pct)
            })
            .collect();
        let preset = CompositionPreset::new(preset.name, entries);

        self.provenances
            .retain(|p| !p.name.eq_ignore_ascii_case(&preset.name));
        self.provenances.push(preset);
        Ok(self)
    }

    /// 按名称查找流体（不区分大小写）
    pub fn fluid(&self, name: &str) -> Result<&FluidProperties> {
        self.fluids
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MinsortError::UnknownFluid(name.to_string()))
    }

    /// 按缩写查找矿物（区分大小写："mica" 与 "Q" 并存）
    pub fn mineral(&self, id: &str) -> Result<&MineralSpec> {
        self.minerals
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| MinsortError::UnknownMineral(id.to_string()))
    }

    /// 按名称查找物源预设（不区分大小写）
    pub fn provenance(&self, name: &str) -> Result<&CompositionPreset> {
        self.provenances
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MinsortError::UnknownProvenance(name.to_string()))
    }

    pub fn fluids(&self) -> &[FluidProperties] {
        &self.fluids
    }

    /// 所有矿物（标准顺序）
    pub fn minerals(&self) -> &[MineralSpec] {
        &self.minerals
    }

    pub fn provenances(&self) -> &[CompositionPreset] {
        &self.provenances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = PropertyCatalog::builtin();

        let water = catalog.fluid("Freshwater").unwrap();
        assert_eq!(water.density, 1.0);
        assert_eq!(water.category, FluidCategory::Aqueous);
        assert_eq!(catalog.fluid("air").unwrap().category, FluidCategory::Aerial);

        let mica = catalog.mineral("mica").unwrap();
        assert_eq!(mica.display_name, "Mica");
        assert_eq!(mica.calc_density, 2.40);

        let clastic = catalog.provenance("Recycled Clastic").unwrap();
        assert_eq!(clastic.percentage("Q"), Some(75.96));
        assert_eq!(clastic.entries().len(), data::MINERAL_COUNT);
    }

    #[test]
    fn test_unknown_names() {
        let catalog = PropertyCatalog::builtin();
        assert!(matches!(
            catalog.fluid("Lava"),
            Err(MinsortError::UnknownFluid(_))
        ));
        assert!(matches!(
            catalog.provenance("Atlantis"),
            Err(MinsortError::UnknownProvenance(_))
        ));
        assert!(matches!(
            catalog.mineral("Qz"),
            Err(MinsortError::UnknownMineral(_))
        ));
    }

    #[test]
    fn test_presets_sum_to_hundred() {
        let catalog = PropertyCatalog::builtin();
        assert_eq!(catalog.provenances().len(), 9);
        for preset in catalog.provenances() {
            let total = preset.total();
            assert!(
                (total - 100.0).abs() < 0.2,
                "{} sums to {}",
                preset.name,
                total
            );
        }
    }

    #[test]
    fn test_present_skips_zero_weights() {
        let catalog = PropertyCatalog::builtin();
        let clastic = catalog.provenance("Recycled Clastic").unwrap();
        let present: Vec<&str> = clastic.present().map(|(id, _)| id).collect();
        assert_eq!(present.len(), 14);
        assert_eq!(present[0], "Q");
        assert!(!present.contains(&"Lv"));
    }

    #[test]
    fn test_with_provenance_reorders_and_fills() {
        let preset = CompositionPreset::new(
            "Placer",
            vec![("Zrn".to_string(), 40.0), ("Q".to_string(), 60.0)],
        );
        let catalog = PropertyCatalog::builtin().with_provenance(preset).unwrap();

        let placer = catalog.provenance("placer").unwrap();
        assert_eq!(placer.entries().len(), data::MINERAL_COUNT);
        assert_eq!(placer.entries()[0], ("Q".to_string(), 60.0));
        assert_eq!(placer.percentage("Zrn"), Some(40.0));
        assert_eq!(placer.percentage("F"), Some(0.0));
        assert_eq!(catalog.provenances().len(), 10);
    }

    #[test]
    fn test_with_provenance_rejects_unknown_mineral() {
        let preset = CompositionPreset::new("Bad", vec![("Qz".to_string(), 100.0)]);
        let result = PropertyCatalog::builtin().with_provenance(preset);
        assert!(matches!(result, Err(MinsortError::UnknownMineral(_))));
    }
}

//! # calculate 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calculate.rs`
//! - 使用 `parsers::parse_density_override` 解析 `--density`

use crate::models::DensityMode;
use crate::parsers::parse_density_override;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 未指定 `--provenance` 且未提供组成文件时使用的物源预设
pub const DEFAULT_PROVENANCE: &str = "Recycled Clastic";

/// 密度取值方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum DensityModeArg {
    /// Catalog calculation densities
    #[default]
    Standard,
    /// User-supplied densities for every mineral present (mica -0.5, Sil -0.45)
    FineTuning,
}

impl std::fmt::Display for DensityModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityModeArg::Standard => write!(f, "standard"),
            DensityModeArg::FineTuning => write!(f, "fine-tuning"),
        }
    }
}

impl From<DensityModeArg> for DensityMode {
    fn from(arg: DensityModeArg) -> Self {
        match arg {
            DensityModeArg::Standard => DensityMode::Standard,
            DensityModeArg::FineTuning => DensityMode::FineTuning,
        }
    }
}

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

/// 终端分布表显示范围
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum RowsDisplay {
    /// Every bin row followed by the total row
    #[default]
    All,
    /// Only the total row
    Total,
}

/// calculate 子命令参数
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Bulk mean grain size in φ units
    #[arg(long, allow_negative_numbers = true)]
    pub mean: f64,

    /// Bulk sorting (standard deviation) in φ units
    #[arg(long, allow_negative_numbers = true)]
    pub sorting: f64,

    /// Transport fluid (Freshwater, Seawater, Air)
    #[arg(long, env = "MINSORT_FLUID", default_value = "Freshwater")]
    pub fluid: String,

    /// Provenance preset name [default: Recycled Clastic]
    #[arg(long, env = "MINSORT_PROVENANCE")]
    pub provenance: Option<String>,

    /// Density mode
    #[arg(long, value_enum, default_value = "standard")]
    pub density_mode: DensityModeArg,

    /// Density override for fine-tuning mode, e.g. mica=2.9 (repeatable)
    #[arg(long = "density", value_name = "ID=VALUE", value_parser = parse_density_override)]
    pub densities: Vec<(String, f64)>,

    /// CSV file with density overrides (columns: mineral,density)
    #[arg(long)]
    pub density_file: Option<PathBuf>,

    /// CSV file with a custom composition (columns: mineral,percent)
    #[arg(long)]
    pub provenance_file: Option<PathBuf>,

    /// Write the distribution table to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plot path prefix; writes <stem>_cumulative and <stem>_comparison images
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Plot format (auto-detected from the --plot extension if not specified)
    #[arg(long, value_enum)]
    pub plot_format: Option<PlotFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plots (default: provenance and fluid)
    #[arg(long)]
    pub title: Option<String>,

    /// Rows of the distribution table to print
    #[arg(long, value_enum, default_value = "all")]
    pub rows: RowsDisplay,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> CalculateArgs {
        let mut argv = vec!["minsort", "calculate"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Calculate(args) => args,
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--mean", "2.0", "--sorting", "1.0", "--fluid", "Seawater"]);
        assert_eq!(args.mean, 2.0);
        assert_eq!(args.fluid, "Seawater");
        assert_eq!(args.density_mode, DensityModeArg::Standard);
        assert_eq!(args.rows, RowsDisplay::All);
        assert!(args.densities.is_empty());
        assert_eq!(args.width, 1200);
    }

    #[test]
    fn test_negative_mean_and_overrides() {
        let args = parse(&[
            "--mean",
            "-1.5",
            "--sorting",
            "0.5",
            "--density-mode",
            "fine-tuning",
            "--density",
            "mica=2.9",
            "--density",
            "Q=2.65",
        ]);
        assert_eq!(args.mean, -1.5);
        assert_eq!(DensityMode::from(args.density_mode), DensityMode::FineTuning);
        assert_eq!(
            args.densities,
            vec![("mica".to_string(), 2.9), ("Q".to_string(), 2.65)]
        );
    }

    #[test]
    fn test_bad_override_rejected() {
        let argv = ["minsort", "calculate", "--mean", "2", "--sorting", "1", "--density", "mica"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}

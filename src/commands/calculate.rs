//! # calculate 子命令实现
//!
//! 计算各矿物的水力等效粒度分布并输出。
//!
//! ## 功能
//! - 可选加载自定义组成文件并注册为物源预设
//! - 精调模式下合并文件与命令行的密度覆盖
//! - 打印输入参数、矿物参数与分布表
//! - 导出 CSV，生成累积分布图与组成对比图 (PNG/SVG)
//!
//! ## 依赖关系
//! - 使用 `cli/calculate.rs` 定义的 CalculateArgs
//! - 使用 `sorting/` 模块进行计算、导出与绘图
//! - 使用 `parsers/` 读取组成与密度文件

use crate::catalog::PropertyCatalog;
use crate::cli::calculate::{CalculateArgs, PlotFormat, RowsDisplay, DEFAULT_PROVENANCE};
use crate::error::Result;
use crate::models::{CalculationRequest, DensityMode, DistributionRow, DistributionTable};
use crate::parsers;
use crate::sorting::params::Derivation;
use crate::sorting::{export, plot, SortingCalculator};
use crate::utils::output;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::{Table, Tabled};

/// 执行 calculate 子命令
pub fn execute(args: CalculateArgs) -> Result<()> {
    output::print_header("Hydraulic Sorting Calculation");

    let (catalog, provenance) = build_catalog(&args)?;
    let request = build_request(&args, &catalog, provenance)?;
    print_input_table(&request);

    let calculator = SortingCalculator::new(&catalog);
    let derivation = calculator.derive(&request)?;
    let table = calculator.calculate(&request)?;

    output::print_success(&format!(
        "Settling law: {}, bulk density: {:.4} g/cm³",
        derivation.law, derivation.bulk_density
    ));

    print_params_table(&catalog, &derivation)?;
    print_distribution_table(&table, args.rows);

    if let Some(ref path) = args.output {
        export::to_csv(&table, path)?;
        output::print_success(&format!("Distribution saved to '{}'", path.display()));
    }

    if let Some(ref prefix) = args.plot {
        let title = args
            .title
            .clone()
            .unwrap_or_else(|| format!("{} in {}", request.provenance, request.fluid));
        write_plots(&table, &catalog, prefix, &title, &args)?;
    }

    Ok(())
}

/// 构建目录并确定物源预设名称
fn build_catalog(args: &CalculateArgs) -> Result<(PropertyCatalog, String)> {
    let mut catalog = PropertyCatalog::builtin();
    let mut provenance = args.provenance.clone();

    if let Some(ref path) = args.provenance_file {
        let preset = parsers::parse_composition_file(path)?;
        output::print_info(&format!(
            "Loaded composition '{}' ({} minerals, sum = {:.2}%)",
            preset.name,
            preset.present().count(),
            preset.total()
        ));
        if (preset.total() - 100.0).abs() > 1.0 {
            output::print_warning("Composition does not sum to 100%");
        }

        if provenance.is_none() {
            provenance = Some(preset.name.clone());
        }
        catalog = catalog.with_provenance(preset)?;
    }

    let provenance = provenance.unwrap_or_else(|| DEFAULT_PROVENANCE.to_string());
    Ok((catalog, provenance))
}

/// 构建计算请求（合并密度覆盖）
fn build_request(
    args: &CalculateArgs,
    catalog: &PropertyCatalog,
    provenance: String,
) -> Result<CalculationRequest> {
    let request = CalculationRequest::new(args.mean, args.sorting, args.fluid.clone(), provenance);

    let mut overrides = HashMap::new();
    if let Some(ref path) = args.density_file {
        overrides.extend(parsers::parse_density_file(path)?);
    }
    overrides.extend(args.densities.iter().cloned());

    match DensityMode::from(args.density_mode) {
        DensityMode::Standard => {
            if !overrides.is_empty() {
                output::print_warning(
                    "Density overrides are ignored in standard mode (use --density-mode fine-tuning)",
                );
            }
            Ok(request)
        }
        DensityMode::FineTuning => {
            let mut unknown: Vec<&str> = overrides
                .keys()
                .map(|id| id.as_str())
                .filter(|id| catalog.mineral(id).is_err())
                .collect();
            if !unknown.is_empty() {
                unknown.sort_unstable();
                output::print_warning(&format!(
                    "Ignoring overrides for unknown minerals: {}",
                    unknown.join(", ")
                ));
            }
            Ok(request.with_fine_tuning(overrides))
        }
    }
}

/// 打印输入参数
fn print_input_table(request: &CalculationRequest) {
    #[derive(Tabled)]
    struct InputRow {
        #[tabled(rename = "Parameter")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        InputRow {
            name: "Mean size (φ)",
            value: format!("{}", request.mean_size_phi),
        },
        InputRow {
            name: "Sorting (φ)",
            value: format!("{}", request.sorting_phi),
        },
        InputRow {
            name: "Fluid",
            value: request.fluid.clone(),
        },
        InputRow {
            name: "Provenance",
            value: request.provenance.clone(),
        },
        InputRow {
            name: "Density mode",
            value: request.density_mode.to_string(),
        },
    ];

    println!("{}", Table::new(&rows));
}

/// 打印每种矿物的等效分布参数
fn print_params_table(catalog: &PropertyCatalog, derivation: &Derivation) -> Result<()> {
    #[derive(Tabled)]
    struct ParamsRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Mineral")]
        name: String,
        #[tabled(rename = "Density (g/cm³)")]
        density: String,
        #[tabled(rename = "Weight (%)")]
        weight: String,
        #[tabled(rename = "Mean (φ)")]
        mean: String,
        #[tabled(rename = "Sorting (φ)")]
        sorting: String,
    }

    let mut rows = Vec::with_capacity(derivation.params.len());
    for p in &derivation.params {
        let mineral = catalog.mineral(&p.mineral)?;
        rows.push(ParamsRow {
            id: p.mineral.clone(),
            name: mineral.display_name.clone(),
            density: derivation
                .calc_densities
                .get(&p.mineral)
                .map(|d| format!("{:.3}", d))
                .unwrap_or_else(|| "-".to_string()),
            weight: format!("{:.2}", p.weight_percent),
            mean: format!("{:.4}", p.mean_phi),
            sorting: format!("{:.4}", p.sorting_phi),
        });
    }

    output::print_header(&format!("Equivalent Parameters ({} minerals)", rows.len()));
    println!("{}", Table::new(&rows));
    Ok(())
}

/// 打印分布表（列数随组成变化，使用 Builder）
fn print_distribution_table(table: &DistributionTable, rows: RowsDisplay) {
    let mut builder = Builder::default();

    let mut header = vec!["φ".to_string(), "mm".to_string()];
    header.extend(table.minerals.iter().cloned());
    header.push("Total".to_string());
    builder.push_record(header);

    let bin_count = table.rows.len();
    for (i, row) in table.iter_with_total().enumerate() {
        if i < bin_count {
            if rows == RowsDisplay::All {
                builder.push_record(format_row(
                    format!("{:.2}", row.phi),
                    format!("{:.4}", row.mm),
                    row,
                ));
            }
        } else {
            builder.push_record(format_row("Total".to_string(), String::new(), row));
        }
    }

    output::print_header(&format!(
        "Distribution (%), {} bins + total = {} rows",
        bin_count,
        table.row_count()
    ));
    println!("{}", builder.build());
}

fn format_row(phi: String, mm: String, row: &DistributionRow) -> Vec<String> {
    let mut cells = vec![phi, mm];
    cells.extend(row.values.iter().map(|v| format!("{:.3}", v)));
    cells.push(format!("{:.3}", row.total));
    cells
}

/// 生成累积分布图与组成对比图
fn write_plots(
    table: &DistributionTable,
    catalog: &PropertyCatalog,
    prefix: &Path,
    title: &str,
    args: &CalculateArgs,
) -> Result<()> {
    let format = args
        .plot_format
        .unwrap_or_else(|| guess_format_from_extension(prefix));
    let use_svg = format == PlotFormat::Svg;

    let cumulative_path = plot_path(prefix, "cumulative", format);
    plot::generate_cumulative_plot(
        table,
        catalog,
        &cumulative_path,
        &format!("{}: Cumulative Distribution", title),
        args.width,
        args.height,
        use_svg,
    )?;
    output::print_success(&format!(
        "Cumulative plot saved to '{}'",
        cumulative_path.display()
    ));

    let comparison_path = plot_path(prefix, "comparison", format);
    plot::generate_comparison_plot(
        table,
        &comparison_path,
        &format!("{}: Composition", title),
        args.width,
        args.height,
        use_svg,
    )?;
    output::print_success(&format!(
        "Comparison plot saved to '{}'",
        comparison_path.display()
    ));

    Ok(())
}

/// 从文件扩展名推断图像格式
fn guess_format_from_extension(path: &Path) -> PlotFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotFormat::Svg,
        _ => PlotFormat::Png,
    }
}

/// `out.png` → `out_<suffix>.png`
fn plot_path(prefix: &Path, suffix: &str, format: PlotFormat) -> PathBuf {
    let stem = prefix
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("minsort");
    let ext = match format {
        PlotFormat::Png => "png",
        PlotFormat::Svg => "svg",
    };
    prefix.with_file_name(format!("{}_{}.{}", stem, suffix, ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> CalculateArgs {
        let mut argv = vec!["minsort", "calculate", "--mean", "2.0", "--sorting", "1.0"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Calculate(args) => args,
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_plot_paths() {
        assert_eq!(
            plot_path(Path::new("out/run.png"), "cumulative", PlotFormat::Png),
            PathBuf::from("out/run_cumulative.png")
        );
        assert_eq!(
            plot_path(Path::new("run"), "comparison", PlotFormat::Svg),
            PathBuf::from("run_comparison.svg")
        );
        assert_eq!(guess_format_from_extension(Path::new("a.SVG")), PlotFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a")), PlotFormat::Png);
    }

    #[test]
    fn test_standard_mode_ignores_overrides() {
        let args = parse(&["--provenance", "Recycled Clastic", "--density", "mica=2.9"]);
        let (catalog, provenance) = build_catalog(&args).unwrap();
        let request = build_request(&args, &catalog, provenance).unwrap();

        assert_eq!(request.provenance, "Recycled Clastic");
        assert_eq!(request.density_mode, DensityMode::Standard);
        assert!(request.overrides.is_empty());
    }

    #[test]
    fn test_fine_tuning_merges_file_and_flags() {
        let path = std::env::temp_dir().join("minsort_cmd_densities.csv");
        std::fs::write(&path, "mineral,density\nmica,3.0\nQ,2.65\n").unwrap();
        let file = path.to_string_lossy().to_string();

        let args = parse(&[
            "--density-mode",
            "fine-tuning",
            "--density-file",
            &file,
            "--density",
            "mica=2.9",
        ]);
        let (catalog, provenance) = build_catalog(&args).unwrap();
        let request = build_request(&args, &catalog, provenance).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(request.density_mode, DensityMode::FineTuning);
        assert_eq!(request.overrides["mica"], 2.9);
        assert_eq!(request.overrides["Q"], 2.65);
    }

    #[test]
    fn test_provenance_file_is_selected() {
        let path = std::env::temp_dir().join("minsort_cmd_sand.csv");
        std::fs::write(&path, "mineral,percent\nQ,90\nGrt,10\n").unwrap();
        let file = path.to_string_lossy().to_string();

        let args = parse(&["--provenance-file", &file]);
        let (catalog, provenance) = build_catalog(&args).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(provenance, "minsort_cmd_sand");
        let request = build_request(&args, &catalog, provenance).unwrap();
        let table = SortingCalculator::new(&catalog).calculate(&request).unwrap();
        assert_eq!(table.minerals, vec!["Q".to_string(), "Grt".to_string()]);
    }
}

//! # 分布图表生成
//!
//! 使用 `plotters` 库生成矿物粒度分布图表。
//!
//! ## 功能
//! - 累积分布图：主要矿物（Q, F, Zrn, Grt）与整体沉积物（虚线）
//! - 组成对比图：输入组成（合计行）与输出组成（各分箱平均）
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `models/distribution.rs` 的 DistributionTable
//! - 使用 `plotters` 渲染图表

use crate::catalog::PropertyCatalog;
use crate::error::{MinsortError, Result};
use crate::models::DistributionTable;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// 累积图中单独绘制的矿物
const MAIN_MINERALS: &[&str] = &["Q", "F", "Zrn", "Grt"];

const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(0, 102, 204),
    RGBColor(230, 126, 34),
    RGBColor(192, 57, 43),
    RGBColor(39, 174, 96),
];

/// 累积求和
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// 输出组成：各矿物在所有分箱上的平均百分比
pub fn output_composition(table: &DistributionTable) -> Vec<(String, f64)> {
    let n_bins = table.rows.len().max(1) as f64;
    table
        .minerals
        .iter()
        .zip(&table.total.values)
        .map(|(mineral, total)| (mineral.clone(), total / n_bins))
        .collect()
}

/// 输入组成：合计行中的各矿物百分比
pub fn input_composition(table: &DistributionTable) -> Vec<(String, f64)> {
    table
        .minerals
        .iter()
        .filter_map(|m| table.total_for(m).map(|total| (m.clone(), total)))
        .collect()
}

/// 组成中存在的主要矿物：(显示名称, 颜色, 各分箱百分比)
fn main_mineral_series(
    table: &DistributionTable,
    catalog: &PropertyCatalog,
) -> Result<Vec<(String, RGBColor, Vec<f64>)>> {
    let mut series = Vec::new();
    for (id, color) in MAIN_MINERALS.iter().zip(SERIES_COLORS.iter()) {
        if let Some(values) = table.column_values(id) {
            let name = catalog.mineral(id)?.display_name.clone();
            series.push((name, *color, values));
        }
    }
    Ok(series)
}

/// 生成累积分布图
pub fn generate_cumulative_plot(
    table: &DistributionTable,
    catalog: &PropertyCatalog,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_cumulative_chart(&root, table, catalog, title)?;
        root.present()
            .map_err(|e| MinsortError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_cumulative_chart(&root, table, catalog, title)?;
        root.present()
            .map_err(|e| MinsortError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 生成组成对比图
pub fn generate_comparison_plot(
    table: &DistributionTable,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_comparison_chart(&root, table, title)?;
        root.present()
            .map_err(|e| MinsortError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_comparison_chart(&root, table, title)?;
        root.present()
            .map_err(|e| MinsortError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制累积分布图
fn draw_cumulative_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    table: &DistributionTable,
    catalog: &PropertyCatalog,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    let phis: Vec<f64> = table.rows.iter().map(|r| r.phi).collect();
    let x_min = phis.first().copied().unwrap_or(-2.0) - 0.25;
    let x_max = phis.last().copied().unwrap_or(4.25) + 0.25;
    let y_max = table.total.total.max(100.0) * 1.05;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Phi (φ)")
        .y_desc("Cumulative Percentage (%)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    for (name, color, values) in main_mineral_series(table, catalog)? {
        let points: Vec<(f64, f64)> = phis.iter().copied().zip(cumulative(&values)).collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    // 整体沉积物（虚线）
    let totals: Vec<f64> = table.rows.iter().map(|r| r.total).collect();
    let bulk_points: Vec<(f64, f64)> = phis.iter().copied().zip(cumulative(&totals)).collect();
    chart
        .draw_series(DashedLineSeries::new(
            bulk_points,
            8,
            5,
            BLACK.stroke_width(2),
        ))
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?
        .label("Bulk Sediment")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 绘制组成对比图（左：输入组成，右：输出组成）
fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    table: &DistributionTable,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    let root = root
        .titled(title, ("sans-serif", 28).into_font())
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;
    let panels = root.split_evenly((1, 2));

    draw_bar_panel(
        &panels[0],
        "Input Composition",
        &input_composition(table),
        RGBColor(0, 102, 204),
    )?;
    draw_bar_panel(
        &panels[1],
        "Output Composition",
        &output_composition(table),
        RGBColor(192, 57, 43),
    )?;

    Ok(())
}

/// 绘制单个柱状图面板
fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    caption: &str,
    data: &[(String, f64)],
    color: RGBColor,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let n = data.len().max(1);
    let y_max = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0) * 1.1;
    let labels: Vec<String> = data.iter().map(|(id, _)| id.clone()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0..n).into_segmented(), 0.0..y_max)
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc("Percentage (%)")
        .x_label_style(("sans-serif", 12))
        .y_label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(4)
                .data(data.iter().enumerate().map(|(i, (_, v))| (i, *v))),
        )
        .map_err(|e| MinsortError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MineralDistributionParams;
    use crate::sorting::distribution::generate_distribution;

    #[test]
    fn test_cumulative() {
        assert_eq!(cumulative(&[1.0, 2.0, 3.5]), vec![1.0, 3.0, 6.5]);
        assert!(cumulative(&[]).is_empty());
    }

    #[test]
    fn test_compositions() {
        let table = generate_distribution(&[MineralDistributionParams {
            mineral: "Q".to_string(),
            mean_phi: 1.0,
            sorting_phi: 0.4,
            weight_percent: 100.0,
        }])
        .unwrap();

        let input = input_composition(&table);
        assert_eq!(input.len(), 1);
        assert!((input[0].1 - 100.0).abs() < 1e-4);

        let output = output_composition(&table);
        assert!((output[0].1 - input[0].1 / 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_series_use_display_names() {
        let catalog = PropertyCatalog::builtin();
        let table = generate_distribution(&[
            MineralDistributionParams {
                mineral: "Q".to_string(),
                mean_phi: 1.0,
                sorting_phi: 0.4,
                weight_percent: 90.0,
            },
            MineralDistributionParams {
                mineral: "Zrn".to_string(),
                mean_phi: 0.6,
                sorting_phi: 0.4,
                weight_percent: 10.0,
            },
        ])
        .unwrap();

        let series = main_mineral_series(&table, &catalog).unwrap();
        let names: Vec<&str> = series.iter().map(|(name, _, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Quartz", "Zircon"]);
        let zircon_color = series[1].1;
        assert_eq!((zircon_color.0, zircon_color.1, zircon_color.2), (192, 57, 43));
        assert_eq!(series[0].2.len(), 26);
    }
}

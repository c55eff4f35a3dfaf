//! # catalog 子命令实现
//!
//! 以表格形式列出内置流体、矿物与物源预设。
//!
//! ## 依赖关系
//! - 使用 `cli/catalog.rs` 定义的 CatalogArgs
//! - 使用 `catalog/` 的 PropertyCatalog

use crate::catalog::PropertyCatalog;
use crate::cli::catalog::{CatalogArgs, CatalogCommands};
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FluidRow {
    #[tabled(rename = "Fluid")]
    name: String,
    #[tabled(rename = "Density (g/cm³)")]
    density: String,
    #[tabled(rename = "Viscosity")]
    viscosity: String,
    #[tabled(rename = "Category")]
    category: String,
}

#[derive(Tabled)]
struct MineralRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Mineral")]
    name: String,
    #[tabled(rename = "Standard")]
    standard: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Calc")]
    calc: String,
}

#[derive(Tabled)]
struct ProvenanceRow {
    #[tabled(rename = "Provenance")]
    name: String,
    #[tabled(rename = "Minerals")]
    present: usize,
    #[tabled(rename = "Sum (%)")]
    total: String,
}

#[derive(Tabled)]
struct CompositionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Mineral")]
    name: String,
    #[tabled(rename = "Percent (%)")]
    percent: String,
}

/// 执行 catalog 子命令
pub fn execute(args: CatalogArgs) -> Result<()> {
    let catalog = PropertyCatalog::builtin();

    match args.command {
        CatalogCommands::Fluids => list_fluids(&catalog),
        CatalogCommands::Minerals => list_minerals(&catalog),
        CatalogCommands::Provenances => list_provenances(&catalog),
        CatalogCommands::Show { name } => show_provenance(&catalog, &name)?,
    }

    Ok(())
}

fn list_fluids(catalog: &PropertyCatalog) {
    output::print_header("Transport Fluids");

    let rows: Vec<FluidRow> = catalog
        .fluids()
        .iter()
        .map(|f| FluidRow {
            name: f.name.clone(),
            density: format!("{}", f.density),
            viscosity: format!("{}", f.viscosity),
            category: f.category.to_string(),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

fn list_minerals(catalog: &PropertyCatalog) {
    output::print_header("Minerals (densities in g/cm³)");

    let rows: Vec<MineralRow> = catalog
        .minerals()
        .iter()
        .map(|m| MineralRow {
            id: m.id.clone(),
            name: m.display_name.clone(),
            standard: format!("{:.2}", m.standard_density),
            min: format!("{:.2}", m.min_density),
            max: format!("{:.2}", m.max_density),
            calc: format!("{:.2}", m.calc_density),
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info("Calc densities of mica and Sil are reduced for alteration");
}

fn list_provenances(catalog: &PropertyCatalog) {
    output::print_header("Provenance Presets");

    let rows: Vec<ProvenanceRow> = catalog
        .provenances()
        .iter()
        .map(|p| ProvenanceRow {
            name: p.name.clone(),
            present: p.present().count(),
            total: format!("{:.2}", p.total()),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

fn show_provenance(catalog: &PropertyCatalog, name: &str) -> Result<()> {
    let preset = catalog.provenance(name)?;
    output::print_header(&format!("Provenance: {}", preset.name));

    let mut rows = Vec::new();
    for (id, pct) in preset.present() {
        let mineral = catalog.mineral(id)?;
        rows.push(CompositionRow {
            id: id.to_string(),
            name: mineral.display_name.clone(),
            percent: format!("{:.2}", pct),
        });
    }

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "{} minerals, sum = {:.2}%",
        rows.len(),
        preset.total()
    ));

    Ok(())
}

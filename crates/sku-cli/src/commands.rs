use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use sku_cli::config::{Overrides, load_options};
use sku_core::{AxisProjection, generate_table};
use sku_ingest::load_product;
use sku_model::{GeneratorOptions, Product, SkuTable};
use sku_report::{export_csv, write_csv, write_json};

use crate::cli::{ExportArgs, GenerateArgs, OutputFormatArg, ProductArgs};
use crate::summary::{print_axes, print_export, print_guidance, print_sku_table};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    if args.format == OutputFormatArg::Table && args.output.is_some() {
        bail!("--output needs --format csv or --format json");
    }
    let (product, options) = prepare(&args.product)?;
    let table = generate_table(&product, &options)
        .with_context(|| format!("generate skus for {}", product.name))?;

    match &args.output {
        _ if args.format == OutputFormatArg::Table => print_sku_table(&table),
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_table(&table, args.format, BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), rows = table.len(), "wrote sku table");
            if table.is_empty() {
                print_guidance(&table.issues);
            }
        }
        None if table.is_empty() => print_guidance(&table.issues),
        None => write_table(&table, args.format, io::stdout().lock()).context("write stdout")?,
    }
    Ok(())
}

pub fn run_axes(args: &ProductArgs) -> Result<()> {
    let (product, options) = prepare(args)?;
    let projection = AxisProjection::from_axes(&product.axes, options.term_filter);
    print_axes(&product, &projection);
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let (product, options) = prepare(&args.product)?;
    let table = generate_table(&product, &options)
        .with_context(|| format!("generate skus for {}", product.name))?;
    if table.is_empty() {
        print_guidance(&table.issues);
        return Ok(());
    }
    let summary = export_csv(&table, &args.output_dir)
        .with_context(|| format!("export to {}", args.output_dir.display()))?;
    print_export(&summary);
    Ok(())
}

fn prepare(args: &ProductArgs) -> Result<(Product, GeneratorOptions)> {
    let options = load_options(
        args.config.as_deref(),
        Overrides {
            max_combinations: args.max_combinations,
            require_suffix: args.require_suffix,
        },
    )?;
    let product = load_product(&args.product)
        .with_context(|| format!("load product {}", args.product.display()))?;
    Ok((product, options))
}

fn write_table<W: Write>(table: &SkuTable, format: OutputFormatArg, writer: W) -> Result<()> {
    match format {
        OutputFormatArg::Csv => write_csv(table, writer)?,
        OutputFormatArg::Json => write_json(table, writer)?,
        OutputFormatArg::Table => bail!("table output is printed, not written"),
    }
    Ok(())
}

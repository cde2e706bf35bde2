use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;

use sl_gen::{GenParams, IconDef, RandomEconomyGenerator};
use sl_layout::{bounding_box, calculate_layout};
use sl_project::{load_json, save_json};

#[derive(Parser)]
#[command(name = "sl-cli")]
#[command(about = "Supplyline CLI - economy graph tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random economy and write it to a document
    Generate {
        /// Output JSON file path
        output: PathBuf,
        /// Target number of products
        #[arg(long, default_value_t = 12)]
        nodes: usize,
        /// Deepest production layer
        #[arg(long, default_value_t = 3)]
        max_depth: u32,
        /// Fewest inputs per refined product
        #[arg(long, default_value_t = 1)]
        min_inputs: usize,
        /// Most inputs per refined product
        #[arg(long, default_value_t = 3)]
        max_inputs: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate an economy document
    Validate {
        /// Path to the economy JSON file
        path: PathBuf,
    },
    /// Show products, depths and topological order
    Show {
        /// Path to the economy JSON file
        path: PathBuf,
    },
    /// Compute the layered layout and bounding box
    Layout {
        /// Path to the economy JSON file
        path: PathBuf,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] sl_project::ProjectError),

    #[error(transparent)]
    Gen(#[from] sl_gen::GenError),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            nodes,
            max_depth,
            min_inputs,
            max_inputs,
            seed,
        } => cmd_generate(&output, nodes, max_depth, min_inputs, max_inputs, seed),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Show { path } => cmd_show(&path),
        Commands::Layout { path } => cmd_layout(&path),
    }
}

fn default_catalog() -> Vec<IconDef> {
    [
        "Ore", "Coal", "Wood", "Stone", "Grain", "Iron", "Copper", "Planks", "Bricks", "Steel",
        "Tools", "Machines",
    ]
    .into_iter()
    .map(|name| IconDef::new(name, format!("icons/{}.png", name.to_lowercase())))
    .collect()
}

fn cmd_generate(
    output: &Path,
    nodes: usize,
    max_depth: u32,
    min_inputs: usize,
    max_inputs: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let params = GenParams {
        num_nodes: nodes,
        max_depth,
        min_inputs,
        max_inputs,
    };
    let graph = RandomEconomyGenerator::new(default_catalog(), rng).generate(params)?;
    info!(products = graph.len(), "economy generated");

    save_json(output, &graph)?;
    println!(
        "Wrote {} products ({} raw materials) to {}",
        graph.len(),
        graph.products().iter().filter(|p| p.is_raw_material()).count(),
        output.display()
    );
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<(), CliError> {
    let graph = load_json(path)?;
    let edges: usize = graph.products().iter().map(|p| p.inputs.len()).sum();

    println!("Document OK: {} products, {} recipe edges", graph.len(), edges);
    match graph.fuel_product_id().and_then(|id| graph.product(id)) {
        Some(fuel) => println!("Fuel product: {} (id {})", fuel.name, fuel.id),
        None => println!("Fuel product: none"),
    }
    Ok(())
}

fn cmd_show(path: &Path) -> Result<(), CliError> {
    let graph = load_json(path)?;
    let depths = graph.depths();

    println!("Topological order:");
    for id in graph.topological_sort() {
        let Some(product) = graph.product(id) else {
            continue;
        };
        let inputs: Vec<String> = product
            .inputs
            .iter()
            .map(|input| {
                let name = graph
                    .product(input.product_id)
                    .map(|p| p.name.as_str())
                    .unwrap_or("?");
                format!("{} x{}", name, input.amount)
            })
            .collect();
        println!(
            "  [depth {}] {:<16} {}",
            depths[&id],
            product.name,
            if inputs.is_empty() {
                "(raw material)".to_string()
            } else {
                inputs.join(", ")
            }
        );
    }
    Ok(())
}

fn cmd_layout(path: &Path) -> Result<(), CliError> {
    let mut graph = load_json(path)?;
    calculate_layout(&mut graph);
    let bounds = bounding_box(&graph);

    for product in graph.products() {
        let Some(position) = product.position else {
            continue;
        };
        println!("{:<16} ({:>6.1}, {:>6.1})", product.name, position.x, position.y);
    }
    println!(
        "Bounding box: x [{:.1}, {:.1}], y [{:.1}, {:.1}]",
        bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
    );
    Ok(())
}

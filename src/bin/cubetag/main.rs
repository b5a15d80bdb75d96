//! Cubetag CLI - fiducial cube asset generation.
//!
//! Usage: cubetag <COMMAND> [OPTIONS]
//!
//! Run `cubetag --help` for available commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cubetag::convert::{self, blender::BlenderBackend, ConvertOptions};
use cubetag::cube::{assemble, BatchOptions};
use cubetag::tag::TagFamily;

#[derive(Parser)]
#[command(name = "cubetag")]
#[command(author, version, about = "Fiducial cube asset generation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the T-family tag images
    Tags {
        /// Output directory for the tag PNGs
        output_dir: PathBuf,

        /// Side length of each tag image, in pixels
        #[arg(long, default_value = "9")]
        side_length: u32,
    },

    /// Assemble textured cube meshes from a tag family
    Cubes {
        /// Cube edge length
        side_length: f64,

        /// Number of cubes to generate
        count: usize,

        /// Directory containing the tag images
        family_dir: PathBuf,

        /// Directory to write the batch into
        output_dir: PathBuf,
    },

    /// Convert assembled meshes to binary GLB assets
    Convert {
        /// Directory tree containing per-batch cube subdirectories
        data_dir: PathBuf,

        /// Authoring tool executable used for the conversion
        #[arg(long, default_value = "blender")]
        tool: PathBuf,

        /// Recompute outward-facing normals on each imported mesh
        #[arg(long)]
        recompute_normals: bool,

        /// Delete intermediate .obj/.mtl/.png files after converting
        #[arg(long)]
        cleanup: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Tags { output_dir, side_length } => {
            cmd_tags(&output_dir, side_length)?;
        }

        Commands::Cubes { side_length, count, family_dir, output_dir } => {
            cmd_cubes(side_length, count, family_dir, output_dir)?;
        }

        Commands::Convert { data_dir, tool, recompute_normals, cleanup } => {
            cmd_convert(&data_dir, tool, recompute_normals, cleanup)?;
        }
    }

    Ok(())
}

fn cmd_tags(output_dir: &PathBuf, side_length: u32) -> Result<(), Box<dyn std::error::Error>> {
    let family = TagFamily::new(side_length)?;
    let family_dir = family.generate(output_dir)?;
    println!("Rendered {} tags to {}", cubetag::tag::TAGS_PER_FAMILY, family_dir.display());
    Ok(())
}

fn cmd_cubes(
    side_length: f64,
    count: usize,
    family_dir: PathBuf,
    output_dir: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = assemble(&BatchOptions { side_length, count, family_dir, output_dir })?;

    println!(
        "Assembled {} cubes ({} textures) in {}",
        report.cubes,
        report.textures_copied,
        report.batch_dir.display()
    );
    Ok(())
}

fn cmd_convert(
    data_dir: &PathBuf,
    tool: PathBuf,
    recompute_normals: bool,
    cleanup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = BlenderBackend::new(tool);
    let options = ConvertOptions { recompute_normals, cleanup };

    let report = convert::convert_tree(data_dir, &backend, &options)?;

    for (path, err) in &report.failures {
        eprintln!("Failed to convert {}: {}", path.display(), err);
    }
    println!("Converted: {} meshes, failed: {}", report.converted.len(), report.failures.len());
    if cleanup {
        println!("Removed {} intermediate files", report.cleaned);
    }
    Ok(())
}

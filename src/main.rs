//! Panocube CLI - equirectangular panorama to cube map converter.
//!
//! Cuts the six faces of a cube map out of a 360° panorama and writes them
//! as individual image files.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use panocube::export::{export_cube, ExportOptions, FaceFormat};
use panocube::raster::{load_equirect, SourceImage};
use panocube::render::{face_size, render_cube, CubeRender, RenderSettings};
use panocube::resample::Interpolation;

/// Equirectangular panorama to cube map converter.
#[derive(Parser)]
#[command(name = "panocube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the six cube faces of a panorama.
    Convert {
        /// Equirectangular source image.
        input: PathBuf,

        /// Output directory for face images.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "face")]
        name: String,

        /// Longitude rotation in degrees.
        #[arg(short, long)]
        rotation: Option<f64>,

        /// Interpolation: nearest, bilinear, bicubic or lanczos.
        /// Unrecognized names render as nearest.
        #[arg(short, long)]
        interpolation: Option<String>,

        /// Maximum face width in pixels.
        #[arg(long)]
        max_width: Option<u32>,

        /// Output image format.
        #[arg(short, long, default_value = "png")]
        format: FaceFormat,

        /// JPEG quality (1-100).
        #[arg(long, default_value = "92")]
        quality: u8,

        /// Also write a small nearest-neighbour preview of every face.
        #[arg(long)]
        preview: bool,

        /// JSON render settings; command-line options take precedence.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Display information about a panorama and the faces it yields.
    Info {
        /// Equirectangular source image.
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            name,
            rotation,
            interpolation,
            max_width,
            format,
            quality,
            preview,
            config,
        } => {
            let mut settings = match config {
                Some(path) => RenderSettings::from_json_file(&path).unwrap_or_else(|e| {
                    eprintln!("Error reading settings {}: {}", path.display(), e);
                    std::process::exit(1);
                }),
                None => RenderSettings::default(),
            };
            if let Some(rotation) = rotation {
                settings.rotation_degrees = rotation;
            }
            if let Some(method) = interpolation {
                settings.interpolation = Interpolation::from_name_or_nearest(&method);
            }
            if max_width.is_some() {
                settings.max_width = max_width;
            }

            let options = ExportOptions {
                jpeg_quality: quality,
                ..ExportOptions::with_format(format)
            };
            run_convert(&input, &output, &name, &settings, &options, preview);
        }
        Commands::Info { input } => run_info(&input),
    }
}

fn run_convert(
    input: &Path,
    output: &Path,
    name: &str,
    settings: &RenderSettings,
    options: &ExportOptions,
    preview: bool,
) {
    if settings.max_width == Some(0) {
        eprintln!("Error: Maximum width must be at least 1");
        std::process::exit(1);
    }
    if !(1..=100).contains(&options.jpeg_quality) {
        eprintln!("Error: JPEG quality must be between 1 and 100");
        std::process::exit(1);
    }

    let panorama = load_equirect(input).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", input.display(), e);
        std::process::exit(1);
    });
    let source = SourceImage::from_rgba_image(&panorama).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let (size, _) = face_size(source.width(), settings.max_width);

    println!("Panocube - Panorama to Cube Map");
    println!("===============================");
    println!("Input: {} ({}x{})", input.display(), source.width(), source.height());
    println!("Face size: {}x{}", size, size);
    println!("Interpolation: {}", settings.interpolation);
    println!("Rotation: {} deg", settings.rotation_degrees);
    println!("Output: {}", output.display());

    if preview {
        let preview_settings = RenderSettings::preview(settings.rotation_degrees);
        let cube = render_cube(source, &preview_settings);
        write_cube(&cube, output, &format!("{}_preview", name), options, "preview");
    }

    println!("\nRendering faces...");
    let start = Instant::now();
    let cube = render_cube(source, settings);
    println!("Rendering completed in {:.2?}", start.elapsed());

    write_cube(&cube, output, name, options, "final");
}

fn write_cube(cube: &CubeRender, output: &Path, name: &str, options: &ExportOptions, label: &str) {
    for (face, e) in cube.errors() {
        eprintln!("Error rendering {} face {}: {}", label, face, e);
    }
    let written = export_cube(cube, output, name, options).unwrap_or_else(|e| {
        eprintln!("Error exporting {} faces: {}", label, e);
        std::process::exit(1);
    });
    println!(
        "  Exported {} {} files: {}_*.{}",
        written.len(),
        label,
        name,
        options.format.extension()
    );
}

fn run_info(input: &Path) {
    let panorama = load_equirect(input).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", input.display(), e);
        std::process::exit(1);
    });
    let (width, height) = panorama.dimensions();
    let (size, _) = face_size(width, None);
    let face_bytes = (size as u64) * (size as u64) * 4;

    println!("Panocube - Panorama Info");
    println!("========================");
    println!();
    println!("Source: {}x{}", width, height);
    if width != height * 2 {
        println!("  Warning: aspect ratio is not 2:1; faces will look stretched");
    }
    println!("Face size: {}x{}", size, size);
    println!(
        "Memory per face: {} bytes ({:.2} MB), {:.2} MB for all 6",
        face_bytes,
        face_bytes as f64 / 1024.0 / 1024.0,
        (face_bytes * 6) as f64 / 1024.0 / 1024.0
    );
    println!();
    println!("Interpolation methods:");
    for interpolation in Interpolation::all() {
        println!("  {}", interpolation);
    }
}

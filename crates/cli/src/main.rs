use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use facematch_core::capture::domain::frame_source::FrameSource;
use facematch_core::capture::infrastructure::image_file_source::ImageFileSource;
use facematch_core::detection::domain::face_detector::FaceDetector;
use facematch_core::detection::infrastructure::model_resolver;
use facematch_core::detection::infrastructure::rustface_detector::RustfaceDetector;
use facematch_core::detection::infrastructure::unavailable_detector::UnavailableDetector;
use facematch_core::pipeline::enroll_face_use_case::EnrollFaceUseCase;
use facematch_core::pipeline::recognize_face_use_case::RecognizeFaceUseCase;
use facematch_core::recognition::domain::face_matcher::FaceMatcher;
use facematch_core::recognition::domain::gallery::Gallery;
use facematch_core::recognition::infrastructure::gallery_store;
use facematch_core::shared::constants::IMAGE_EXTENSIONS;
use facematch_core::shared::frame::Frame;

mod settings;
use settings::Settings;

/// Face enrollment and recognition against a saved gallery.
#[derive(Parser)]
#[command(name = "facematch")]
struct Cli {
    /// Classifier model file (overrides settings and the default locations).
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a face to the gallery.
    Enroll {
        /// Input image file.
        image: PathBuf,

        /// Name to record for the enrolled face.
        #[arg(long)]
        name: String,

        /// Gallery file (created if missing).
        #[arg(long)]
        gallery: Option<PathBuf>,
    },
    /// Match a face against the gallery.
    Recognize {
        /// Input image file.
        image: PathBuf,

        /// Gallery file.
        #[arg(long)]
        gallery: Option<PathBuf>,

        /// Correlation threshold a match must exceed.
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Print detected face rectangles in backend output order.
    Detect {
        /// Input image file.
        image: PathBuf,
    },
    /// List label/name pairs of a saved gallery.
    List {
        /// Gallery file.
        #[arg(long)]
        gallery: Option<PathBuf>,
    },
    /// Persist default gallery/model/threshold values.
    Config {
        /// Default gallery file.
        #[arg(long)]
        gallery: Option<PathBuf>,

        /// Default classifier model file.
        #[arg(long)]
        default_model: Option<PathBuf>,

        /// Default correlation threshold.
        #[arg(long)]
        threshold: Option<f64>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Command::Enroll {
            image,
            name,
            gallery,
        } => {
            validate_image_path(&image)?;
            validate_name(&name)?;
            let gallery_path = gallery.unwrap_or_else(|| settings.gallery_path());
            let detector = build_detector(cli.model.as_deref(), &settings);
            run_enroll(&image, &name, &gallery_path, detector)
        }
        Command::Recognize {
            image,
            gallery,
            threshold,
        } => {
            validate_image_path(&image)?;
            let threshold = threshold.unwrap_or(settings.threshold);
            validate_threshold(threshold)?;
            let gallery_path = gallery.unwrap_or_else(|| settings.gallery_path());
            let detector = build_detector(cli.model.as_deref(), &settings);
            run_recognize(&image, &gallery_path, threshold, detector)
        }
        Command::Detect { image } => {
            validate_image_path(&image)?;
            let detector = build_detector(cli.model.as_deref(), &settings);
            run_detect(&image, detector)
        }
        Command::List { gallery } => {
            let gallery_path = gallery.unwrap_or_else(|| settings.gallery_path());
            run_list(&gallery_path)
        }
        Command::Config {
            gallery,
            default_model,
            threshold,
        } => run_config(settings, gallery, default_model, threshold),
    }
}

fn run_enroll(
    image: &Path,
    name: &str,
    gallery_path: &Path,
    detector: Box<dyn FaceDetector>,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = read_frame(image)?;
    let mut gallery = load_or_new_gallery(gallery_path)?;

    let mut use_case = EnrollFaceUseCase::new(detector);
    let label = use_case.execute(&mut gallery, name, &frame)?;

    if let Some(parent) = gallery_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    gallery_store::save_gallery(&gallery, gallery_path)?;

    println!(
        "Enrolled '{name}' as label {label} ({} entries in {})",
        gallery.len(),
        gallery_path.display()
    );
    Ok(())
}

fn run_recognize(
    image: &Path,
    gallery_path: &Path,
    threshold: f64,
    detector: Box<dyn FaceDetector>,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = read_frame(image)?;
    let gallery = load_or_new_gallery(gallery_path)?;

    let mut use_case = RecognizeFaceUseCase::new(detector, FaceMatcher::new(threshold));
    let outcome = use_case.execute(&gallery, &frame)?;
    println!("{outcome}");
    Ok(())
}

fn run_detect(
    image: &Path,
    mut detector: Box<dyn FaceDetector>,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = read_frame(image)?;
    let regions = detector.detect(&frame)?;

    if regions.is_empty() {
        println!("no face detected");
        return Ok(());
    }
    for region in &regions {
        println!(
            "{},{} {}x{}",
            region.x, region.y, region.width, region.height
        );
    }
    log::info!("{} face(s) detected in {}", regions.len(), image.display());
    Ok(())
}

fn run_list(gallery_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let gallery = gallery_store::load_gallery(gallery_path)?;
    for entry in gallery.entries() {
        println!(
            "{} {}",
            entry.label,
            gallery.name_of(entry.label).unwrap_or("")
        );
    }
    Ok(())
}

fn run_config(
    mut settings: Settings,
    gallery: Option<PathBuf>,
    model: Option<PathBuf>,
    threshold: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    if gallery.is_none() && model.is_none() && threshold.is_none() {
        println!("gallery:   {}", settings.gallery_path().display());
        println!(
            "model:     {}",
            settings
                .model
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(resolved from default locations)".to_string())
        );
        println!("threshold: {}", settings.threshold);
        return Ok(());
    }

    if let Some(path) = gallery {
        settings.gallery = Some(path);
    }
    if let Some(path) = model {
        settings.model = Some(path);
    }
    if let Some(value) = threshold {
        validate_threshold(value)?;
        settings.threshold = value;
    }
    settings.save();
    println!("Settings saved");
    Ok(())
}

fn build_detector(flag: Option<&Path>, settings: &Settings) -> Box<dyn FaceDetector> {
    let resolved = flag
        .map(Path::to_path_buf)
        .or_else(|| settings.model.clone())
        .or_else(model_resolver::resolve);

    match resolved {
        Some(path) => match RustfaceDetector::from_file(&path) {
            Ok(detector) => Box::new(detector),
            Err(e) => {
                log::warn!("{e}; detection is unavailable");
                Box::new(UnavailableDetector)
            }
        },
        None => {
            log::warn!("no classifier model found; detection is unavailable");
            Box::new(UnavailableDetector)
        }
    }
}

fn read_frame(path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
    let mut source = ImageFileSource::open(path)?;
    source.current_frame()
}

fn load_or_new_gallery(path: &Path) -> Result<Gallery, Box<dyn std::error::Error>> {
    if path.exists() {
        Ok(gallery_store::load_gallery(path)?)
    } else {
        Ok(Gallery::new())
    }
}

fn validate_image_path(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Input file not found: {}", path.display()).into());
    }
    if !is_image(path) {
        return Err(format!("Unsupported image type: {}", path.display()).into());
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if name.trim().is_empty() {
        return Err("Name must not be empty".into());
    }
    if name.contains('\n') || name.contains('\r') {
        return Err("Name must not contain line breaks".into());
    }
    Ok(())
}

fn validate_threshold(threshold: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !(-1.0..=1.0).contains(&threshold) {
        return Err(format!("Threshold must be between -1.0 and 1.0, got {threshold}").into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

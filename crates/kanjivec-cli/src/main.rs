//! Command-line tools for the kanjivec recognizer.
//!
//! Thin wrappers over the library operations: build a training database
//! from a directory of glyph images, recognize a single glyph, and dump
//! the intermediate contour/direction stages for debugging.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;

use kanjivec::GLYPH_SIZE;
use kanjivec::classify::{TrainingDatabase, classify, read_database, write_database};
use kanjivec::extract::{direction_map, extract_contour, feature_vector};
use kanjivec::io::{GlyphFormat, read_glyph, write_glyph};

#[derive(Debug, Parser)]
/// Kanji glyph recognition via directional feature vectors. Glyph
/// images must be 64x64 black-and-white rasters (PBM or PNG); anything
/// not pure white counts as ink.
#[command(name = "kanjivec", version)]
enum Args {
    /// Build a training database from a directory of glyph images.
    ///
    /// Each image contributes one exemplar; its class label is the file
    /// name up to the first dot, so "water.1.png" and "water.2.png"
    /// train the same class.
    #[command(name = "train")]
    Train {
        /// Path of the database file to write.
        db_out: PathBuf,

        /// Directory of 64x64 glyph images.
        img_dir: PathBuf,
    },

    /// Recognize a single glyph image against a training database.
    #[command(name = "recognize")]
    Recognize {
        /// Path to the glyph image to classify.
        image: PathBuf,

        /// Path to the training database.
        db: PathBuf,
    },

    /// Extract contours and write them out (debugging aid).
    #[command(name = "contour")]
    Contour {
        /// Alternating input and output image paths.
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
    },

    /// Print the direction map of a glyph as ASCII (debugging aid).
    #[command(name = "directions")]
    Directions {
        /// Path to the glyph image.
        image: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Args::parse() {
        Args::Train { db_out, img_dir } => cmd_train(&db_out, &img_dir),
        Args::Recognize { image, db } => cmd_recognize(&image, &db),
        Args::Contour { files } => cmd_contour(&files),
        Args::Directions { image } => cmd_directions(&image),
    }
}

/// Read a glyph and insist on the canonical recognition size.
fn read_sized_glyph(path: &Path) -> Result<kanjivec::Bitmap> {
    let glyph =
        read_glyph(path).with_context(|| format!("failed to read glyph {}", path.display()))?;
    ensure!(
        glyph.width() == GLYPH_SIZE && glyph.height() == GLYPH_SIZE,
        "{}: glyph must be {}x{}, got {}x{}",
        path.display(),
        GLYPH_SIZE,
        GLYPH_SIZE,
        glyph.width(),
        glyph.height()
    );
    Ok(glyph)
}

/// Class label of a training image: file name up to the first dot.
fn label_for(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.split('.').next())
        .filter(|label| !label.is_empty())
}

fn cmd_train(db_out: &Path, img_dir: &Path) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(img_dir)
        .with_context(|| format!("failed to read directory {}", img_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // Sorted order keeps the database byte-reproducible
    paths.sort();

    if paths.is_empty() {
        bail!("no glyph images in {}", img_dir.display());
    }

    let mut db = TrainingDatabase::new();
    for path in &paths {
        let Some(label) = label_for(path) else {
            bail!("cannot derive a class label from {}", path.display());
        };
        let glyph = read_sized_glyph(path)?;
        let vector = feature_vector(&glyph)?;
        db.add_example(label, vector)?;
        log::info!("trained {:?} from {}", label, path.display());
    }

    let writer = BufWriter::new(
        File::create(db_out)
            .with_context(|| format!("failed to create {}", db_out.display()))?,
    );
    write_database(writer, &db)?;
    log::info!(
        "wrote {} classes ({} exemplars) to {}",
        db.class_count(),
        db.example_count(),
        db_out.display()
    );

    Ok(())
}

fn cmd_recognize(image: &Path, db_path: &Path) -> Result<()> {
    let reader = BufReader::new(
        File::open(db_path)
            .with_context(|| format!("failed to open database {}", db_path.display()))?,
    );
    let db = read_database(reader)
        .with_context(|| format!("failed to parse database {}", db_path.display()))?;
    log::debug!(
        "loaded {} classes ({} exemplars)",
        db.class_count(),
        db.example_count()
    );

    let glyph = read_sized_glyph(image)?;
    let vector = feature_vector(&glyph)?;
    let m = classify(&vector, &db)?;
    log::info!("mean distance {:.2}", m.mean_distance);

    println!("input character looks like {}", m.label);
    Ok(())
}

fn cmd_contour(files: &[PathBuf]) -> Result<()> {
    ensure!(
        files.len() % 2 == 0,
        "contour takes alternating input and output paths, got {} paths",
        files.len()
    );

    for pair in files.chunks(2) {
        let (input, output) = (&pair[0], &pair[1]);
        let glyph = read_glyph(input)
            .with_context(|| format!("failed to read glyph {}", input.display()))?;
        let contour = extract_contour(&glyph);

        let format = match output.extension().and_then(OsStr::to_str) {
            Some("pbm") | Some("pnm") => GlyphFormat::Pnm,
            _ => GlyphFormat::Png,
        };
        write_glyph(&contour, output, format)
            .with_context(|| format!("failed to write contour {}", output.display()))?;
        log::info!("{} -> {}", input.display(), output.display());
    }

    Ok(())
}

fn cmd_directions(image: &Path) -> Result<()> {
    let glyph = read_sized_glyph(image)?;
    let contour = extract_contour(&glyph);
    print!("{}", direction_map(&contour));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(Path::new("dir/water.png")), Some("water"));
        assert_eq!(label_for(Path::new("water.1.png")), Some("water"));
        assert_eq!(label_for(Path::new("水.png")), Some("水"));
        assert_eq!(label_for(Path::new(".hidden")), None);
    }
}

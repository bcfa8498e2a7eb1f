//! Integration test: generate identicons into a real directory and
//! decode what was written.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use identicon_export::EncodeFormat;
use identicon_io::{FileSink, GenerateError, generate};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "identicon-io-it-{tag}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn asdf_written_as_png() {
    let dir = scratch_dir("asdf");
    let mut sink = FileSink::new(&dir);

    let out = generate("asdf", &EncodeFormat::Png, &mut sink).expect("generate should succeed");

    let path = dir.join("asdf.png");
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, out.bytes);

    let decoded = image::load_from_memory(&on_disk).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (250, 250));
    // Cell 1 is drawn, cell 0 is not.
    assert_eq!(*decoded.get_pixel(75, 25), image::Rgb([145, 46, 200]));
    assert_eq!(*decoded.get_pixel(25, 25), image::Rgb([255, 255, 255]));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn empty_input_written_as_dot_png() {
    let dir = scratch_dir("empty");
    let mut sink = FileSink::new(&dir);
    generate("", &EncodeFormat::Png, &mut sink).unwrap();
    assert!(dir.join(".png").exists());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn all_odd_input_writes_blank_canvas() {
    let dir = scratch_dir("blank");
    let mut sink = FileSink::new(&dir);
    generate("ein", &EncodeFormat::Png, &mut sink).unwrap();

    let decoded = image::open(dir.join("ein.png")).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (250, 250));
    assert!(decoded.pixels().all(|p| *p == image::Rgb([255, 255, 255])));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn two_runs_write_identical_files() {
    let dir_a = scratch_dir("det-a");
    let dir_b = scratch_dir("det-b");
    generate("determinism", &EncodeFormat::Png, &mut FileSink::new(&dir_a)).unwrap();
    generate("determinism", &EncodeFormat::Png, &mut FileSink::new(&dir_b)).unwrap();
    assert_eq!(
        std::fs::read(dir_a.join("determinism.png")).unwrap(),
        std::fs::read(dir_b.join("determinism.png")).unwrap(),
    );
    std::fs::remove_dir_all(&dir_a).ok();
    std::fs::remove_dir_all(&dir_b).ok();
}

#[test]
fn unwritable_target_is_a_persist_error() {
    let dir = scratch_dir("unwritable").join("missing");
    let err = generate("asdf", &EncodeFormat::Png, &mut FileSink::new(&dir)).unwrap_err();
    assert!(matches!(err, GenerateError::Persist(_)));
}

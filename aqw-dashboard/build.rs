use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("pollution.csv.gz");

    // Prefer the full 2010-2023 export; fall back to the checked-in sample.
    let full = Path::new("../fixtures/pollution_2010_2023.csv");
    let sample = Path::new("../fixtures/pollution_sample.csv");
    let source = [full, sample].into_iter().find(|p| p.exists());

    let csv = match source {
        Some(path) => fs::read(path).unwrap(),
        None => {
            println!("cargo:warning=no pollution dataset under ../fixtures, embedding an empty one");
            Vec::new()
        }
    };

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&csv).unwrap();
    fs::write(&dest, encoder.finish().unwrap()).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/pollution_2010_2023.csv");
    println!("cargo:rerun-if-changed=../fixtures/pollution_sample.csv");
}

use std::error::Error;
use std::path::Path;

use sidemark::{encode, load_base_image, render, OutputFormat, RenderConfig, ViewSide};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <side.png> <assessment.json> [out.png]", args[0]);
        std::process::exit(2);
    }

    let base = load_base_image(Path::new(&args[1]))?;
    let assessment = sidemark::DamageAssessment::from_json_file(Path::new(&args[2]))?;

    let rendered = render(
        &base,
        ViewSide::Right,
        &assessment,
        &RenderConfig::impact(),
    );
    println!(
        "Rendered {} components onto a {}x{} buffer.",
        assessment.sections_of_interest.len(),
        rendered.width(),
        rendered.height()
    );

    let out = args.get(3).map(String::as_str).unwrap_or("overlay.png");
    std::fs::write(out, encode(&rendered, OutputFormat::Png)?)?;
    println!("Wrote {out}");
    Ok(())
}

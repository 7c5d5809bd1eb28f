use std::error::Error;

use opnsense_guide::builder;
use opnsense_guide::config::GuideConfig;

fn main() {
    env_logger::init();

    let config = GuideConfig::from_manifest_dir();
    match builder::render_guide(&config) {
        Ok(path) => println!("PDF created: {}", path.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(error: &(dyn Error + 'static)) {
    let mut error = error;
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}

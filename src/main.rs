use std::process;

fn main() {
    if let Err(e) = bikeshare::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

// src/main.rs

use pylaunch::{logging, run};

#[tokio::main]
async fn main() {
    logging::init_logging();

    match run().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("pylaunch error: {err:?}");
            std::process::exit(1);
        }
    }
}

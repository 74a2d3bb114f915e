//! Studiobook main entrypoint.

use studiobook::run;
use studiobook::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

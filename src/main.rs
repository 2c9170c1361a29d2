//! carpool-ledger main entrypoint.

use carpool_ledger::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

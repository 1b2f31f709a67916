//! rMotoHours main entrypoint.

use rmotohours::run;
use rmotohours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

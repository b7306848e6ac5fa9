//! Entrypoint.

use owo_colors::OwoColorize;

fn main() {
    if let Err(err) = prcomment::initialize_command_line() {
        eprintln!("{}", format!("ERROR: {:?}", err).red());
        std::process::exit(1);
    }
}

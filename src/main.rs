use std::process::exit;

fn main() {
    if let Err(e) = coursedeck::app::run_cli() {
        coursedeck::output::console::Console::default().error(&e);
        exit(1);
    }
}

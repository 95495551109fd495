use clap::Parser;

use release_tool::cli::{self, Cli};
use release_tool::ui;

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    ui::display_banner(env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

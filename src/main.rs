//! CLI entry point for the brick mosaic generator

use brickmosaic::io::cli::{Cli, MosaicApp, init_logging};
use clap::Parser;

fn main() -> brickmosaic::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let app = MosaicApp::new(cli);
    app.run().map(|_| ())
}

//! Logo background removal CLI tool
//!
//! Makes the black canvas behind a logo transparent and saves the result as
//! PNG.

#[cfg(feature = "cli")]
use logo_bgremove::cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}

//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("codespacer {}", env!("CARGO_PKG_VERSION"));
    println!("  profile: {}", build_profile());
    println!("  minimum rust: {}", env!("CARGO_PKG_RUST_VERSION"));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

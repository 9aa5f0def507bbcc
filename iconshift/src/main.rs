//! Main binary entry point for iconshift.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so it behaves exactly like the `iconshift` binary of `iconshift-cli`.

use anyhow::Result;

fn main() -> Result<()> {
    let code = iconshift::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}

//! Greeter Bot - Entry Point
//!
//! ```text
//! greeter-bot slash greet -o name=ada -o times=2
//! greeter-bot slash "settings show"
//! greeter-bot user Wave --id 7 --name grace
//! greeter-bot click clicks
//! greeter-bot list
//! ```

use clap::Parser;
use greeter_bot::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}

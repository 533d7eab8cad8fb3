use clap::Parser;
use negscan::cli::args::Cli;
use negscan::core::context::Context;
use negscan::core::engine::Engine;

const BANNER: &str = r#"
 ███╗   ██╗███████╗ ██████╗ ███████╗ ██████╗ █████╗ ███╗   ██╗
 ████╗  ██║██╔════╝██╔════╝ ██╔════╝██╔════╝██╔══██╗████╗  ██║
 ██╔██╗ ██║█████╗  ██║  ███╗███████╗██║     ███████║██╔██╗ ██║
 ██║╚██╗██║██╔══╝  ██║   ██║╚════██║██║     ██╔══██║██║╚██╗██║
 ██║ ╚████║███████╗╚██████╔╝███████║╚██████╗██║  ██║██║ ╚████║
 ╚═╝  ╚═══╝╚══════╝ ╚═════╝ ╚══════╝ ╚═════╝╚═╝  ╚═╝╚═╝  ╚═══╝

 HTTP content-negotiation resource discovery
"#;

fn print_banner() {
    println!("\x1b[36m{}\x1b[0m", BANNER);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_banner && !cli.quiet {
        print_banner();
    }

    tracing_subscriber::fmt::init();

    let ctx = Context::from_cli(cli)?;
    let engine = Engine::new(ctx)?;
    engine.run().await?;

    Ok(())
}

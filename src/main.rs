use anyhow::Result;
use contextor::{cli::parse_args, run_contextor};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    let output_path = config.output_path.clone();

    run_contextor(config).await?;

    println!(
        "Context file generated successfully at: {}",
        output_path.display()
    );
    Ok(())
}

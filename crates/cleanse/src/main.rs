use cleanse::runtime::{boot, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let classifier = boot::boot()?;
    run::run(&classifier).await
}

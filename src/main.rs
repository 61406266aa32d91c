use dynamodb_search::{run, ModuleResult};
use std::{env, process};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // stdout carries the module result, so logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args_path = env::args().nth(1);
    let result = ModuleResult::from(run(args_path).await);

    println!("{}", result.to_json());
    process::exit(result.exit_code());
}

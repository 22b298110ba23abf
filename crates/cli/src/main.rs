//! aic entry point.
//!
//! Exit code 0 on success; 1 on usage, generation, or execution failure.

use anyhow::Context;
use clap::Parser;
use console::style;

use aic::ollama::Client;
use aic::sysinfo::SystemInfo;
use aic::{executor, logging, prompt};

#[derive(Parser)]
#[command(
    name = "aic",
    version,
    about = "Describe what you want, get the shell command, run it"
)]
struct Cli {
    /// Ollama model name to use
    #[arg(long, default_value = "qwen2.5-coder")]
    model: String,

    /// Print the system prompt and the generated command
    #[arg(long)]
    verbose: bool,

    /// Ollama service address
    #[arg(long, default_value = "http://localhost:11434")]
    ollama_url: String,

    /// What the command should do, in plain language
    #[arg(trailing_var_arg = true)]
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.prompt.is_empty() {
        eprintln!(
            "{}",
            style(
                "Usage: aic [--model model_name] [--verbose] [--ollama-url ollama_address] [--version] <prompt>"
            )
            .yellow()
        );
        std::process::exit(1);
    }

    if let Err(err) = run(cli).await {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let user_prompt = cli.prompt.join(" ");

    if cli.verbose {
        println!("{} {}", style("Ollama URL:").blue(), cli.ollama_url);
        println!("{} {}", style("Model:").blue(), cli.model);
        println!("{} {}", style("Prompt:").blue(), user_prompt);
    }

    let info = SystemInfo::capture().context("failed to get system info")?;
    let system_prompt = prompt::system_prompt(&info);

    if cli.verbose {
        println!("{}", style("System Prompt:").blue());
        println!("{system_prompt}");
    }

    let client = Client::new(cli.ollama_url);
    let command = client
        .generate(&cli.model, &user_prompt, &system_prompt)
        .await
        .context("error generating command")?;

    if cli.verbose {
        println!("{} {}", style("Generated command:").blue(), command);
    }

    executor::execute(&command)
        .await
        .context("error executing command")?;

    Ok(())
}

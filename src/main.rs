use clap::Parser;
use nb_core::constants::DEFAULT_SELECTOR;
use nbflow::config::{init_dotenv, AppConfig};

/// Ejecuta notebooks de uno o más pasos del workflow.
#[derive(Parser)]
#[command(name = "nbflow", version, about = "Ejecuta notebooks parametrizados y los exporta a HTML")]
struct Cli {
    /// Comma-separated prefix of notebooks to run
    #[arg(default_value = DEFAULT_SELECTOR)]
    nb_nums: String,
}

fn main() {
    init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[nbflow] config error: {e}");
            std::process::exit(2);
        }
    };

    match nbflow::run(&config, &cli.nb_nums) {
        Ok(summary) => {
            for outcome in &summary.outcomes {
                println!("{} -> {}", outcome.prefix, outcome.report.path.display());
            }
            println!("{} notebook(s) executed in {}s", summary.executed(), summary.elapsed_secs);
        }
        Err(e) => {
            eprintln!("[nbflow] error: {e}");
            std::process::exit(1);
        }
    }
}

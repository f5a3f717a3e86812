use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lambdagen::emitter::{DEFAULT_BASE_PACKAGE, DEFAULT_CONSTANTS_PACKAGE};
use lambdagen::generator::{DEFAULT_SOURCE_ROOT, Generator, GeneratorConfig};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lambdagen")]
#[command(about = "Generates primitive-specialized Java functional interfaces", long_about = None)]
struct Args {
    /// Root of the Java source tree to write into
    #[arg(long, default_value = DEFAULT_SOURCE_ROOT)]
    source_root: PathBuf,

    /// Package holding the generated interfaces, one sub-package per kind
    #[arg(long = "package", default_value = DEFAULT_BASE_PACKAGE)]
    base_package: String,

    /// Package holding the BasicConstant interface
    #[arg(long, default_value = DEFAULT_CONSTANTS_PACKAGE)]
    constants_package: String,

    /// Value of the @author tag in the generated documentation
    #[arg(long)]
    author: Option<String>,

    /// Do not write the support interfaces BasicConstant, Actuator and ActuatorThrow
    #[arg(long)]
    no_constants: bool,

    /// Render everything but write nothing
    #[arg(long)]
    dry_run: bool,
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        Self {
            source_root: args.source_root,
            base_package: args.base_package,
            constants_package: args.constants_package,
            author: args.author,
            write_constants: !args.no_constants,
            dry_run: args.dry_run,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing if LAMBDAGEN_LOG is set
    if let Ok(filter) = EnvFilter::try_from_env("LAMBDAGEN_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let args = Args::parse();
    let result = Generator::new(args.into()).and_then(|generator| generator.run());
    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

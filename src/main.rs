use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use validated_core::application::calculator;
use validated_core::application::user_service::UserService;
use validated_core::domain::ports::UserRepositoryBox;
use validated_core::domain::user::UserId;
use validated_core::error::CoreError;
use validated_core::infrastructure::in_memory::InMemoryUserRepository;
use validated_core::infrastructure::notifier::LoggingNotifier;
use validated_core::interfaces::csv::calculation_reader::CalculationReader;
use validated_core::interfaces::csv::calculation_writer::CalculationWriter;
use validated_core::interfaces::csv::user_writer::UserWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent user database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single calculation (ADD, MULTIPLY or DIVIDE)
    Calc {
        operation: String,
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Evaluate every `OPERATION,v1,v2,...` row of a CSV file
    Batch { input: PathBuf },
    /// Manage users
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Subcommand)]
enum UserCommand {
    Create {
        username: String,
        email: String,
    },
    Get {
        id: u64,
    },
    List,
    Update {
        id: u64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Delete {
        id: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Calc { operation, values } => {
            let result = calculator::evaluate_tagged(&operation, &values).into_diagnostic()?;
            println!("{result}");
        }
        Command::Batch { input } => run_batch(input)?,
        Command::User(command) => {
            let repository = open_repository(cli.db_path)?;
            let service = UserService::new(repository, Box::new(LoggingNotifier::new()));
            run_user_command(&service, command)?;
        }
    }

    Ok(())
}

fn run_batch(input: PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = CalculationReader::new(file);

    let stdout = io::stdout();
    let mut writer = CalculationWriter::new(stdout.lock());

    for request in reader.requests() {
        match request {
            Ok(request) => match calculator::evaluate(&request) {
                Ok(result) => writer
                    .write_result(request.operation, result)
                    .into_diagnostic()?,
                Err(e) => eprintln!("Error evaluating request: {}", e),
            },
            Err(e) => eprintln!("Error reading request: {}", e),
        }
    }

    writer.finish().into_diagnostic()
}

fn run_user_command(service: &UserService, command: UserCommand) -> Result<()> {
    let users = match command {
        UserCommand::Create { username, email } => {
            vec![service.create(&username, &email).into_diagnostic()?]
        }
        UserCommand::Get { id } => {
            let id = UserId::from(id);
            let user = service
                .find_by_id(id)
                .and_then(|found| found.ok_or(CoreError::NotFound(id)))
                .into_diagnostic()?;
            vec![user]
        }
        UserCommand::List => service.find_all().into_diagnostic()?,
        UserCommand::Update {
            id,
            username,
            email,
        } => vec![
            service
                .update(UserId::from(id), username.as_deref(), email.as_deref())
                .into_diagnostic()?,
        ],
        UserCommand::Delete { id } => {
            service.delete(UserId::from(id)).into_diagnostic()?;
            println!("deleted {id}");
            return Ok(());
        }
    };

    let stdout = io::stdout();
    UserWriter::new(stdout.lock())
        .write_users(users)
        .into_diagnostic()
}

#[cfg(feature = "storage-rocksdb")]
fn open_repository(db_path: Option<PathBuf>) -> Result<UserRepositoryBox> {
    use validated_core::infrastructure::rocksdb::RocksDbUserRepository;

    match db_path {
        Some(path) => Ok(Box::new(RocksDbUserRepository::open(path).into_diagnostic()?)),
        None => Ok(Box::new(InMemoryUserRepository::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_repository(db_path: Option<PathBuf>) -> Result<UserRepositoryBox> {
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryUserRepository::new()))
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use bolao_auth::{AuthError, AuthScreen, Authenticator, PasswordScheme};
use bolao_db::{Database, UserStore};
use bolao_types::api::AuthMode;
use bolao_types::models::{User, UserProfile};

#[derive(Parser)]
#[command(name = "bolao", about = "Log in to or register a bolão account")]
struct Args {
    #[arg(long, env = "BOLAO_DB_PATH", default_value = "bolao.db", help = "SQLite database file")]
    db: PathBuf,

    #[arg(
        long,
        env = "BOLAO_PASSWORD_SCHEME",
        default_value = "plain",
        value_name = "SCHEME",
        help = "Password storage: plain or argon2"
    )]
    password_scheme: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and make it the current session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        whatsapp: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and make the account the current session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Print the current session user
    Whoami,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging on stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bolao=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let scheme: PasswordScheme = args.password_scheme.parse()?;

    let db = Database::open(&args.db)?;
    info!("Using {} password scheme", scheme);

    let mut screen = AuthScreen::new(Authenticator::new(db).with_scheme(scheme));

    match args.command {
        Command::Register {
            name,
            email,
            whatsapp,
            password,
        } => {
            if screen.mode() != AuthMode::Register {
                screen.toggle_mode();
            }
            screen.set_name(name);
            screen.set_email(email);
            screen.set_whatsapp(whatsapp);
            screen.set_password(password);
            submit(&mut screen)
        }
        Command::Login { email, password } => {
            screen.set_email(email);
            screen.set_password(password);
            submit(&mut screen)
        }
        Command::Whoami => match screen.authenticator().store().current_user()? {
            Some(user) => {
                print_user(&user)?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("Nenhum usuário conectado.");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn submit(screen: &mut AuthScreen<Database>) -> anyhow::Result<ExitCode> {
    let mut authenticated: Option<User> = None;

    match screen.submit(|user| authenticated = Some(user)) {
        Ok(()) => {}
        Err(AuthError::Store(e)) => return Err(e),
        Err(_) => {
            if let Some(message) = screen.error() {
                eprintln!("{}", message);
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    match authenticated {
        Some(user) => {
            print_user(&user)?;
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn print_user(user: &User) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&UserProfile::from(user))?);
    Ok(())
}

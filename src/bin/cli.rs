//! taskslot CLI Client
//!
//! Command-line interface for interacting with a taskslot server.

use clap::{Parser, Subcommand};
use taskslot::network::Client;
use taskslot::{RegisterOutcome, UpdateOutcome};

/// taskslot CLI
#[derive(Parser, Debug)]
#[command(name = "taskslot-cli")]
#[command(about = "CLI for the taskslot task tracker")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an account
    Register {
        name: String,
        email: String,
        password: String,
    },

    /// Check credentials
    Login { email: String, password: String },

    /// List a user's tasks
    Tasks {
        /// Owner user id
        owner: u32,
    },

    /// Add a task (date as day month year)
    Add {
        owner: u32,
        description: String,
        day: i32,
        month: i32,
        year: i32,
    },

    /// Toggle a task between done and pending
    Toggle { id: u32 },

    /// Replace a task's description
    Edit { id: u32, description: String },

    /// Delete a task
    Del { id: u32 },

    /// Ping the server
    Ping,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> taskslot::Result<()> {
    let mut client = Client::connect(&args.server)?;

    match args.command {
        Commands::Register {
            name,
            email,
            password,
        } => match client.register(&name, &email, &password)? {
            RegisterOutcome::Registered(id) => println!("registered user {}", id),
            RegisterOutcome::DuplicateEmail => println!("email already registered"),
        },
        Commands::Login { email, password } => match client.login(&email, &password)? {
            Some(profile) => println!("{}", profile),
            None => println!("wrong email or password"),
        },
        Commands::Tasks { owner } => {
            let tasks = client.list_tasks(owner)?;
            if tasks.is_empty() {
                println!("(no tasks)");
            }
            for task in tasks {
                println!("{}", task);
            }
        }
        Commands::Add {
            owner,
            description,
            day,
            month,
            year,
        } => {
            let task = client.create_task(owner, &description, day, month, year)?;
            println!("{}", task);
        }
        Commands::Toggle { id } => report(id, client.toggle_task(id)?),
        Commands::Edit { id, description } => report(id, client.edit_task(id, &description)?),
        Commands::Del { id } => report(id, client.delete_task(id)?),
        Commands::Ping => {
            client.ping()?;
            println!("PONG");
        }
    }

    Ok(())
}

fn report(id: u32, outcome: UpdateOutcome) {
    if outcome.is_applied() {
        println!("ok");
    } else {
        println!("task {} not found", id);
    }
}

use chrono::Utc;
use raffle_core::{DrawOutcome, RaffleError, RaffleSession, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;

type InputLines = Lines<BufReader<Stdin>>;

/// What ended one solicitation: either the loop may go on, or the user
/// asked to stop.
enum Control {
    Continue,
    Interrupted,
}

/// What a single prompt produced.
enum Prompt {
    Line(String),
    DeadlineReached,
    Interrupted,
}

/// Drive one raffle run to completion: registration rounds until the
/// deadline passes, then the draw, with at most one extension round.
pub async fn run(mut session: RaffleSession) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Welcome to the Lottery Registration System!");
    println!(
        "Registration ends at: {}",
        session.deadline().format("%Y-%m-%d %H:%M:%S")
    );

    loop {
        while session.is_open(Utc::now()) {
            print_status(&session);
            match solicit_one(&mut session, &mut lines).await? {
                Control::Continue => {}
                Control::Interrupted => return Ok(()),
            }
        }

        match session.conclude(Utc::now()).await? {
            DrawOutcome::Winner { name, total } => {
                println!("\nThe winner is: {}", name);
                println!("Total participants: {}", total);
                return Ok(());
            }
            DrawOutcome::Extended { .. } => {
                println!("\nNot enough users registered. Extending registration by 30 minutes.");
            }
            DrawOutcome::NoWinner { .. } => {
                println!("\nStill not enough users registered. Exiting the program.");
                return Ok(());
            }
        }
    }
}

/// Prompt until one name is accepted, the deadline passes, or the user
/// interrupts. Rejections re-prompt with a reason.
async fn solicit_one(session: &mut RaffleSession, lines: &mut InputLines) -> Result<Control> {
    loop {
        match read_name(session, lines).await? {
            Prompt::Line(raw) => match session.register(&raw, Utc::now()).await {
                Ok(name) => {
                    println!("User '{}' registered successfully.", name);
                    return Ok(Control::Continue);
                }
                Err(RaffleError::EmptyName) => {
                    println!("Name cannot be empty. Please try again.");
                }
                Err(RaffleError::InvalidName(_)) => {
                    println!("Name can only contain letters and spaces. Please try again.");
                }
                Err(RaffleError::AlreadyRegistered(_)) => {
                    println!("This name is already registered. Please try again.");
                }
                Err(e) => return Err(e),
            },
            Prompt::DeadlineReached => return Ok(Control::Continue),
            Prompt::Interrupted => {
                println!("\nProgram interrupted. Autosaving current registrations and time...");
                if let Err(e) = session.save(Utc::now()).await {
                    tracing::warn!("Save on shutdown failed: {}", e);
                }
                println!("Exiting the program.");
                return Ok(Control::Interrupted);
            }
        }
    }
}

/// One prompt, racing stdin against the deadline and Ctrl-C.
async fn read_name(session: &RaffleSession, lines: &mut InputLines) -> Result<Prompt> {
    print!("Enter full name: ");
    std::io::stdout().flush()?;

    let wait = (session.deadline() - Utc::now())
        .to_std()
        .unwrap_or(std::time::Duration::ZERO);

    tokio::select! {
        line = lines.next_line() => match line? {
            Some(line) => Ok(Prompt::Line(line)),
            // Closed stdin gets the same treatment as an interrupt.
            None => Ok(Prompt::Interrupted),
        },
        _ = tokio::time::sleep(wait) => {
            println!();
            Ok(Prompt::DeadlineReached)
        }
        _ = signal::ctrl_c() => Ok(Prompt::Interrupted),
    }
}

fn print_status(session: &RaffleSession) {
    let status = session.status(Utc::now());
    if let Some(remaining) = status.remaining {
        let secs = remaining.num_seconds();
        println!(
            "\nRemaining registration time: {} minutes {} seconds",
            secs / 60,
            secs % 60
        );
    }
    println!("Registered users: {}", status.registered);
}

use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use skillbook_admin::{client::AdminClient, config::AdminConfig, state::BookingsView};
use skillbook_core::models::booking::{Booking, BookingStatus};
use uuid::Uuid;

const USAGE: &str = "\
Usage: admin-cli <command>

Commands:
  list                      Show every booking
  approve <id> [<id>...]    Approve bookings (one request per id)
  reject <id> [<id>...]     Reject bookings (one request per id)
  bulk-approve <id> [...]   Approve bookings via the bulk endpoint
  bulk-reject <id> [...]    Reject bookings via the bulk endpoint";

fn print_bookings(bookings: &[Booking]) {
    if bookings.is_empty() {
        println!("No bookings available.");
        return;
    }

    for booking in bookings {
        println!(
            "{}  {:<9} {}  {} with {} ({})",
            booking.id,
            booking.status.as_str(),
            booking.date.format("%Y-%m-%d %H:%M"),
            booking.student.name,
            booking.instructor.name,
            booking.skill.name,
        );
    }
}

fn parse_ids(args: &[String]) -> Result<Vec<Uuid>> {
    if args.is_empty() {
        return Err(eyre!("expected at least one booking id"));
    }

    args.iter()
        .map(|s| Uuid::parse_str(s).map_err(|_| eyre!("invalid booking id: {}", s)))
        .collect()
}

/// Mirror of the admin list view's bulk action: select the requested ids,
/// fan out one request per id, report per-item failures, then apply the
/// optimistic local rewrite and re-render.
async fn run_transitions(client: &AdminClient, status: BookingStatus, ids: Vec<Uuid>) -> Result<()> {
    let mut view = BookingsView::new(client.list_bookings().await?);
    for id in &ids {
        view.toggle(*id);
    }

    let outcome = client.transition_each(view.selected_ids(), status).await?;
    for (id, error) in &outcome.failed {
        eprintln!("Failed to update booking {}: {}", id, error);
    }
    println!("{} bookings {}", outcome.done.len(), status.as_str());

    view.commit_bulk(status);
    print_bookings(view.bookings());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = AdminConfig::from_env()?;
    let client = AdminClient::new(config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        Some((cmd, rest)) if cmd == "list" && rest.is_empty() => {
            print_bookings(&client.list_bookings().await?);
        }
        Some((cmd, rest)) if cmd == "approve" => {
            run_transitions(&client, BookingStatus::Approved, parse_ids(rest)?).await?;
        }
        Some((cmd, rest)) if cmd == "reject" => {
            run_transitions(&client, BookingStatus::Rejected, parse_ids(rest)?).await?;
        }
        Some((cmd, rest)) if cmd == "bulk-approve" => {
            println!("{}", client.approve_many(&parse_ids(rest)?).await?);
        }
        Some((cmd, rest)) if cmd == "bulk-reject" => {
            println!("{}", client.reject_many(&parse_ids(rest)?).await?);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

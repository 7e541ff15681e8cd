mod tui;

use crate::tui::app::App;
use activity_board::Repository;
use clap::Parser;

/// Keep a small board of activities: add them through a three-field form
/// and browse them as cards until they are removed.
#[derive(Parser, Debug)]
#[command(name = "activity-board", version, about)]
struct Args {
    /// Start with a few example activities instead of an empty board
    #[arg(long)]
    sample: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the board.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut repository = Repository::new();
    if args.sample {
        seed_samples(&mut repository);
    }
    tracing::info!(activities = repository.len(), "starting activity board");

    let mut app = App::new(repository);
    app.run()
}

fn seed_samples(repository: &mut Repository) {
    repository.create(
        "Hike".to_string(),
        "Morning walk up the east trail".to_string(),
        "https://example.com/hike.jpg".to_string(),
    );
    repository.create(
        "Picnic".to_string(),
        "Lunch by the lake with the team".to_string(),
        "https://example.com/picnic.jpg".to_string(),
    );
    repository.create(
        "Museum".to_string(),
        "Guided tour of the new wing".to_string(),
        "https://example.com/museum.jpg".to_string(),
    );
}

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use coach_relay::client::ChatSession;
use coach_relay::client::render::{RenderOptions, render_message};
use coach_relay::client::transport::CoachClient;

#[derive(Parser)]
#[command(name = "coach-chat", about = "Terminal chat client for the coach relay")]
struct Args {
    /// Chat endpoint URL
    #[arg(long, default_value = "http://localhost:3000/api/chat")]
    endpoint: String,

    /// Remove markdown emphasis characters from replies
    #[arg(long)]
    strip_markdown: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let options = RenderOptions { strip_markdown: args.strip_markdown };
    let mut session = ChatSession::new(CoachClient::new(args.endpoint), options);
    print_from(&session, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let seen = session.state().transcript().len();
        if session.submit(&line).await {
            // The user's own line is already on screen.
            print_from(&session, seen + 1);
        }
    }
    Ok(())
}

fn print_from(session: &ChatSession, start: usize) {
    for message in session.state().transcript().messages().iter().skip(start) {
        println!("{}\n", render_message(message));
    }
}

//! Concept Clarifier Player - interactive terminal chat.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutor_engine::infrastructure::config::{load_dotenv, EngineConfig};
use tutor_engine::App;
use tutor_player::commands::{parse_input, Command, Input, HELP};
use tutor_player::render::{
    banner, clear_status, render_error, render_history, render_turns, thinking,
};
use tutor_player::{ChatSession, LocalBackend, PlayerConfig, RemoteBackend, TutorBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Logs go to stderr so they never interleave with the conversation.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutor_player=info,tutor_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env()?;
    let backend: Arc<dyn TutorBackend> = match &config.server_url {
        Some(url) => {
            tracing::info!(%url, "Using remote engine");
            Arc::new(RemoteBackend::new(url)?)
        }
        None => {
            let app = App::from_config(&EngineConfig::from_env())?;
            Arc::new(LocalBackend::new(app.use_cases.tutoring.exchange.clone()))
        }
    };

    let mut session = ChatSession::new(backend);
    println!("{}\n", banner(&session.backend().describe()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Empty => continue,
            Input::Command(Command::Quit) => break,
            Input::Command(Command::Reset) => {
                session.reset();
                println!("Started a new conversation.\n");
            }
            Input::Command(Command::History) => {
                println!("{}\n", render_history(session.history()));
            }
            Input::Command(Command::Help) => println!("{HELP}\n"),
            Input::Message(message) => {
                eprint!("{}", thinking());
                std::io::stderr().flush()?;
                let result = session.submit(&message).await;
                eprint!("{}", clear_status(thinking()));

                match result {
                    Ok(Some(turns)) => println!("\n{}\n", render_turns(turns)),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::debug!(error = %e, "Exchange failed");
                        println!("{}\n", render_error(&e));
                    }
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

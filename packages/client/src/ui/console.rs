//! Interactive console loop.
//!
//! Line input runs on a dedicated blocking thread (rustyline), forwarded
//! over a channel; the async side multiplexes input lines with sync-engine
//! events.

use std::sync::Arc;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tokio::sync::mpsc;

use renraku_shared::time::millis_to_rfc3339;

use crate::config::SyncConfig;
use crate::domain::{ChatMessage, ChatRepository, RepositoryError};
use crate::infrastructure::{ApiClient, ApiError, RestChatRepository, Session};
use crate::sync::{ChatSync, SyncEvent};
use crate::usecase::{ListRoomsUseCase, LoadDirectoryUseCase};

use super::state::{ConsoleState, RoomView};

/// How to obtain the bearer token.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Use an already-issued token
    Token(String),
    /// Log in with email/password first
    Login { email: String, password: String },
}

/// Everything the console needs to start.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub api_url: String,
    pub credentials: Credentials,
    pub sync: SyncConfig,
}

/// Fatal console errors; polling failures never end up here.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Login request failed or was rejected
    #[error("login failed: {0}")]
    Login(#[source] ApiError),

    /// The token was missing/rejected, or `/users/me` failed
    #[error("not signed in: {0}")]
    Identity(#[source] RepositoryError),

    /// The input thread could not be started
    #[error("console input failed: {0}")]
    Readline(#[from] ReadlineError),
}

/// Run the console until the user quits or input closes.
pub async fn run_console(options: ConsoleOptions) -> Result<(), ConsoleError> {
    let session = match options.credentials {
        Credentials::Token(token) => Session::with_token(options.api_url.clone(), token),
        Credentials::Login { email, password } => {
            Session::login(&options.api_url, &email, &password)
                .await
                .map_err(ConsoleError::Login)?
        }
    };

    let repository: Arc<dyn ChatRepository> =
        Arc::new(RestChatRepository::new(ApiClient::new(session)));

    let identity = repository
        .current_user()
        .await
        .map_err(ConsoleError::Identity)?;
    tracing::info!("signed in as {} ({:?})", identity.name, identity.role);

    let directory = LoadDirectoryUseCase::new(repository.clone()).execute().await;
    let rooms = ListRoomsUseCase::new(repository.clone())
        .execute(&identity.id, identity.role)
        .await;

    let (mut engine, mut events) = ChatSync::new(repository, options.sync);
    engine.watch_rooms(rooms.iter().map(|r| r.id.clone()).collect());

    let mut state = ConsoleState {
        identity,
        rooms,
        directory,
        view: RoomView::None,
    };

    let mut lines = spawn_input_thread()?;

    println!("Connected. {} room(s). Type `help` for commands.", state.rooms.len());
    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else { break };
                if !handle_line(&mut state, &mut engine, line.trim()).await {
                    break;
                }
            }
            event = events.recv() => {
                let Some(event) = event else { break };
                render_event(&state, event);
            }
        }
    }

    Ok(())
}

/// Read lines on a blocking thread; the channel closes on EOF or Ctrl-C.
fn spawn_input_thread() -> Result<mpsc::UnboundedReceiver<String>, ReadlineError> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut editor = DefaultEditor::new()?;
    std::thread::spawn(move || {
        loop {
            match editor.readline("renraku> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(e) => {
                    tracing::error!("readline failed: {e}");
                    break;
                }
            }
        }
    });
    Ok(rx)
}

/// Handle one input line. Returns `false` to quit.
async fn handle_line(state: &mut ConsoleState, engine: &mut ChatSync, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "rooms" => print_rooms(state, engine).await,
        "unread" => {
            let unread = engine.store().lock().await.unread_rooms();
            println!("{} unread room(s)", unread.len());
        }
        "open" => open_room(state, engine, rest).await,
        "close" => {
            engine.deselect().await;
            state.view = RoomView::None;
            println!("Room closed.");
        }
        "quit" | "exit" => return false,
        // Anything else is a message to the open room
        _ => send_to_open_room(state, engine, line).await,
    }
    true
}

fn print_help() {
    println!("Commands:");
    println!("  rooms         list visible rooms (* marks unread)");
    println!("  open <n>      open room n and start polling it");
    println!("  close         leave the open room");
    println!("  unread        count unread rooms");
    println!("  quit          exit");
    println!("Any other input is sent as a message to the open room.");
}

async fn print_rooms(state: &ConsoleState, engine: &ChatSync) {
    if state.rooms.is_empty() {
        println!("No rooms.");
        return;
    }
    let store = engine.store();
    let store = store.lock().await;
    for (i, room) in state.rooms.iter().enumerate() {
        let marker = if store.is_unread(&room.id) { "*" } else { " " };
        println!("{marker} [{i}] {}", state.room_label(room));
    }
}

async fn open_room(state: &mut ConsoleState, engine: &mut ChatSync, arg: &str) {
    let Ok(index) = arg.parse::<usize>() else {
        println!("Usage: open <room number> (see `rooms`)");
        return;
    };
    let Some(room) = state.rooms.get(index).cloned() else {
        println!("No room {index}.");
        return;
    };

    state.view = RoomView::Loading(room.id.clone());
    let messages = engine.select_room(room.id.clone()).await;
    state.view = RoomView::Ready(room.id.clone());

    println!("--- {} ---", state.room_label(&room));
    print_messages(state, &messages);
}

async fn send_to_open_room(state: &ConsoleState, engine: &ChatSync, content: &str) {
    let Some(room_id) = state.view.room() else {
        println!("No room open. `open <n>` first, or `help`.");
        return;
    };
    let Some(room) = state.rooms.iter().find(|r| &r.id == room_id) else {
        println!("Open room is no longer visible.");
        return;
    };

    if let Err(e) = engine.send(room, &state.identity.id, content).await {
        // The input line is already consumed and is not restored on failure.
        println!("Send failed: {e}");
    }
}

fn render_event(state: &ConsoleState, event: SyncEvent) {
    match event {
        SyncEvent::RoomUpdated { room, messages } => {
            // Only the open room's updates are rendered; a stale event for a
            // previously selected room is dropped here.
            if state.view.room() == Some(&room) {
                print_messages(state, &messages);
            }
        }
        SyncEvent::UnreadChanged { unread } => {
            let labels: Vec<String> = state
                .rooms
                .iter()
                .filter(|r| unread.contains(&r.id))
                .map(|r| state.room_label(r))
                .collect();
            println!("New messages in: {}", labels.join(", "));
        }
    }
}

fn print_messages(state: &ConsoleState, messages: &[ChatMessage]) {
    for message in messages {
        println!(
            "[{}] {}: {}",
            millis_to_rfc3339(message.sent_at.value()),
            state.sender_label(&message.sender),
            message.content
        );
    }
}

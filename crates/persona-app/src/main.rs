//! Terminal chat client.
//!
//! Stands in for the mobile UI: manage personalities from the selection
//! screen (`/new`, `/edit <id>`, `/delete <id>`), pick one, type messages,
//! read replies. Inside a chat, `/clear` wipes the transcript, `/back`
//! returns to the personality list, `/quit` exits. A failed send prints
//! the gateway error and leaves the user's message persisted, ready for a
//! manual retry.

use std::io::{self, BufRead, Write};

use persona_core::gateway::ChatGateway;
use persona_core::ports::CompletionPort;
use persona_core::store::ChatStore;
use persona_platform::completion::HttpCompletionProvider;
use persona_platform::storage::auto_storage;
use persona_types::config::{AppConfig, StorageBackendType};
use persona_types::message::Role;
use persona_types::personality::{is_custom_id, Personality, PersonalityDraft};
use persona_types::transcript::Transcript;

fn config_from_env() -> AppConfig {
    let mut config = AppConfig::default();
    if let Ok(endpoint) = std::env::var("PERSONA_CHAT_ENDPOINT") {
        config.completion.endpoint = endpoint;
    }
    if let Ok(dir) = std::env::var("PERSONA_CHAT_DATA_DIR") {
        config.storage.data_dir = Some(dir.into());
    }
    if let Ok(backend) = std::env::var("PERSONA_CHAT_BACKEND") {
        config.storage.backend = match backend.as_str() {
            "memory" => StorageBackendType::Memory,
            "file" => StorageBackendType::File,
            _ => StorageBackendType::Auto,
        };
    }
    config
}

/// A command typed at the personality selection screen.
#[derive(Debug, PartialEq, Eq)]
enum SelectCommand<'a> {
    Empty,
    Quit,
    New,
    Edit(&'a str),
    Delete(&'a str),
    Pick(&'a str),
}

fn parse_select_command(input: &str) -> SelectCommand<'_> {
    if input.is_empty() {
        return SelectCommand::Empty;
    }
    if input == "/quit" {
        return SelectCommand::Quit;
    }
    if input == "/new" {
        return SelectCommand::New;
    }
    if let Some(rest) = input.strip_prefix("/edit ") {
        return SelectCommand::Edit(rest.trim());
    }
    if let Some(rest) = input.strip_prefix("/delete ") {
        return SelectCommand::Delete(rest.trim());
    }
    SelectCommand::Pick(input)
}

/// Apply edit-form answers to a personality; blank answers keep the
/// current value.
fn edited(
    mut personality: Personality,
    name: &str,
    description: &str,
    system_prompt: &str,
    avatar: &str,
) -> Personality {
    if !name.is_empty() {
        personality.name = name.to_string();
    }
    if !description.is_empty() {
        personality.description = description.to_string();
    }
    if !system_prompt.is_empty() {
        personality.system_prompt = system_prompt.to_string();
    }
    if !avatar.is_empty() {
        personality.avatar = avatar.to_string();
    }
    personality
}

fn print_personalities(store: &ChatStore) {
    println!();
    for (i, p) in store.personalities().iter().enumerate() {
        let marker = if p.is_custom() { "*" } else { " " };
        println!("  [{}]{} {} — {}", i + 1, marker, p.name, p.description);
    }
    println!();
}

fn print_transcript(transcript: &Transcript) {
    for msg in &transcript.messages {
        match msg.role {
            Role::User => println!("you: {}", msg.content),
            _ => println!("  ▸ {}", msg.content),
        }
    }
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for the creation form. Name and system prompt are required, as
/// in the original form; `None` means the form was abandoned.
fn read_draft() -> io::Result<Option<PersonalityDraft>> {
    let Some(name) = prompt("name: ")? else {
        return Ok(None);
    };
    if name.is_empty() {
        println!("a name is required");
        return Ok(None);
    }
    let Some(description) = prompt("description: ")? else {
        return Ok(None);
    };
    let Some(system_prompt) = prompt("system prompt: ")? else {
        return Ok(None);
    };
    if system_prompt.is_empty() {
        println!("a system prompt is required");
        return Ok(None);
    }
    let Some(avatar) = prompt("avatar URI (optional): ")? else {
        return Ok(None);
    };
    Ok(Some(PersonalityDraft {
        name,
        avatar,
        description,
        system_prompt,
    }))
}

/// Resolve a list index ("2") or a raw id ("coach") to a personality id.
fn resolve_selection(store: &ChatStore, input: &str) -> Option<String> {
    if let Ok(index) = input.parse::<usize>() {
        return store
            .personalities()
            .get(index.checked_sub(1)?)
            .map(|p| p.id.clone());
    }
    store.personality(input).map(|p| p.id.clone())
}

async fn create_personality(store: &mut ChatStore) -> io::Result<()> {
    if let Some(draft) = read_draft()? {
        match store.add_personality(draft).await {
            Ok(p) => println!("created {} ({})", p.name, p.id),
            Err(e) => eprintln!("could not create personality: {e}"),
        }
    }
    Ok(())
}

async fn edit_personality(store: &mut ChatStore, selection: &str) -> io::Result<()> {
    let Some(id) = resolve_selection(store, selection) else {
        println!("no personality matches {selection:?}");
        return Ok(());
    };
    if !is_custom_id(&id) {
        println!("default personalities cannot be edited");
        return Ok(());
    }
    let Some(current) = store.personality(&id).cloned() else {
        return Ok(());
    };

    println!("editing {} (blank keeps the current value)", current.name);
    let Some(name) = prompt(&format!("name [{}]: ", current.name))? else {
        return Ok(());
    };
    let Some(description) = prompt("description: ")? else {
        return Ok(());
    };
    let Some(system_prompt) = prompt("system prompt: ")? else {
        return Ok(());
    };
    let Some(avatar) = prompt("avatar URI: ")? else {
        return Ok(());
    };

    let updated = edited(current, &name, &description, &system_prompt, &avatar);
    match store.update_personality(updated).await {
        Ok(()) => println!("updated {id}"),
        Err(e) => eprintln!("could not update personality: {e}"),
    }
    Ok(())
}

async fn delete_personality(store: &mut ChatStore, selection: &str) {
    let Some(id) = resolve_selection(store, selection) else {
        println!("no personality matches {selection:?}");
        return;
    };
    if !is_custom_id(&id) {
        println!("default personalities cannot be deleted");
        return;
    }
    match store.delete_personality(&id).await {
        Ok(()) => println!("deleted {id} and its transcript"),
        Err(e) => eprintln!("could not delete personality: {e}"),
    }
}

async fn chat_loop(
    store: &mut ChatStore,
    completion: &dyn CompletionPort,
    gateway: &mut ChatGateway,
    personality_id: &str,
) -> io::Result<()> {
    let name = store
        .personality(personality_id)
        .map(|p| p.name.clone())
        .unwrap_or_default();
    println!("\nChatting with {name}. /clear, /back, /quit");
    print_transcript(&store.transcript(personality_id));

    loop {
        let Some(line) = prompt("you: ")? else {
            return Ok(());
        };
        match line.as_str() {
            "" => continue,
            "/quit" => std::process::exit(0),
            "/back" => return Ok(()),
            "/clear" => {
                if let Err(e) = store.clear_transcript(personality_id).await {
                    eprintln!("could not clear transcript: {e}");
                } else {
                    println!("transcript cleared");
                }
            }
            text => {
                match gateway
                    .send_message(store, completion, personality_id, text)
                    .await
                {
                    Ok(reply) => println!("  ▸ {}", reply.content),
                    Err(e) => eprintln!("send failed: {e} (your message was kept)"),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = config_from_env();
    let storage = auto_storage(&config.storage).await;
    log::info!("using {} storage", storage.backend_name());

    let mut store = ChatStore::open(storage).await;
    let completion = HttpCompletionProvider::new(config.completion.clone());
    let mut gateway = ChatGateway::new();

    println!("persona-chat — pick a personality (* = custom):");
    loop {
        print_personalities(&store);
        let Some(input) =
            prompt("personality (number or id), /new, /edit <id>, /delete <id>, /quit: ")?
        else {
            return Ok(());
        };
        match parse_select_command(&input) {
            SelectCommand::Empty => continue,
            SelectCommand::Quit => return Ok(()),
            SelectCommand::New => create_personality(&mut store).await?,
            SelectCommand::Edit(selection) => edit_personality(&mut store, selection).await?,
            SelectCommand::Delete(selection) => delete_personality(&mut store, selection).await,
            SelectCommand::Pick(selection) => match resolve_selection(&store, selection) {
                Some(id) => chat_loop(&mut store, &completion, &mut gateway, &id).await?,
                None => println!("no personality matches {selection:?}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_personality() -> Personality {
        Personality::from_draft(PersonalityDraft {
            name: "Bot".to_string(),
            avatar: "uri://old".to_string(),
            description: "old description".to_string(),
            system_prompt: "old prompt".to_string(),
        })
    }

    #[test]
    fn test_parse_select_command() {
        assert_eq!(parse_select_command(""), SelectCommand::Empty);
        assert_eq!(parse_select_command("/quit"), SelectCommand::Quit);
        assert_eq!(parse_select_command("/new"), SelectCommand::New);
        assert_eq!(
            parse_select_command("/edit custom-1"),
            SelectCommand::Edit("custom-1")
        );
        assert_eq!(
            parse_select_command("/delete 5"),
            SelectCommand::Delete("5")
        );
        assert_eq!(parse_select_command("coach"), SelectCommand::Pick("coach"));
        // Bare management commands without an argument are not selections.
        assert_eq!(parse_select_command("/edit"), SelectCommand::Pick("/edit"));
    }

    #[test]
    fn test_edited_applies_non_blank_answers() {
        let p = custom_personality();
        let id = p.id.clone();
        let updated = edited(p, "New Name", "", "new prompt", "");

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.description, "old description");
        assert_eq!(updated.system_prompt, "new prompt");
        assert_eq!(updated.avatar, "uri://old");
    }

    #[test]
    fn test_edited_all_blank_keeps_everything() {
        let p = custom_personality();
        let updated = edited(p.clone(), "", "", "", "");
        assert_eq!(updated, p);
    }
}

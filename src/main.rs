use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use voice_for_all::config::Config;
use voice_for_all::db::{MemoryStore, PreferenceStore, SqliteStore};
use voice_for_all::i18n::{CatalogValidator, Language, LanguageRegistry, TranslationCatalog};
use voice_for_all::localization::LocalizationStore;
use voice_for_all::narration::{ContentItem, NarrationManager};
use voice_for_all::speech::ConsoleSpeechEngine;

/// A content section and the topic keys listed under it.
struct Section {
    key: &'static str,
    topics: &'static [&'static str],
}

static SECTIONS: [Section; 4] = [
    Section {
        key: "farming",
        topics: &["crops", "pests", "irrigation", "fertilizers", "market", "weather"],
    },
    Section {
        key: "health",
        topics: &["diseases", "first_aid", "nutrition", "mental", "vaccination", "hygiene"],
    },
    Section {
        key: "government",
        topics: &[],
    },
    Section {
        key: "education",
        topics: &[],
    },
];

impl Section {
    fn find(key: &str) -> Option<&'static Section> {
        let key = key.trim().to_ascii_lowercase();
        SECTIONS.iter().find(|section| section.key == key)
    }

    /// The list shown when the section is open. Sections without topics
    /// narrate their own overview.
    fn items(&self, catalog: &TranslationCatalog, language: Language) -> Vec<ContentItem> {
        if self.topics.is_empty() {
            let title = format!("{}.title", self.key);
            let description = format!("{}.description", self.key);
            return vec![ContentItem::localized(1u32, catalog, language, &title, &description)];
        }

        self.topics
            .iter()
            .zip(1u32..)
            .map(|(topic, id)| {
                let title = format!("{}.{}.title", self.key, topic);
                let description = format!("{}.{}.description", self.key, topic);
                ContentItem::localized(id, catalog, language, &title, &description)
            })
            .collect()
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Lang(String),
    Open(String),
    Play(usize),
    Back,
    State,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_ascii_lowercase();
        let arg = parts.collect::<Vec<_>>().join(" ");

        Some(match (command.as_str(), arg.is_empty()) {
            ("lang", false) => Command::Lang(arg),
            ("open", false) => Command::Open(arg),
            ("play", false) => match arg.parse() {
                Ok(n) => Command::Play(n),
                Err(_) => Command::Unknown(line.trim().to_string()),
            },
            ("back", _) => Command::Back,
            ("state", _) => Command::State,
            ("stats", _) => Command::Stats,
            ("help", _) => Command::Help,
            ("quit", _) | ("exit", _) => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        })
    }
}

fn print_help() {
    println!("Commands:");
    println!("  lang <id>       switch language (english, hindi, malayalam, marathi, tamil, telugu, bengali)");
    println!("  open <section>  open farming, health, government or education");
    println!("  play <n>        narrate item n of the open section (again to stop)");
    println!("  back            close the open section");
    println!("  state           show what is speaking");
    println!("  stats           show narration metrics");
    println!("  quit            exit");
}

fn print_home(catalog: &TranslationCatalog, language: Language) {
    println!();
    println!("== {} ==", catalog.lookup(language, "app.title"));
    println!("{}", catalog.lookup(language, "app.tagline"));
    for section in &SECTIONS {
        println!(
            "  [{}] {} - {}",
            section.key,
            catalog.lookup(language, &format!("{}.title", section.key)),
            catalog.lookup(language, &format!("{}.description", section.key)),
        );
    }
}

fn print_section(section: &Section, catalog: &TranslationCatalog, language: Language) {
    println!();
    println!(
        "== {} ==",
        catalog.lookup(language, &format!("{}.title", section.key))
    );
    for (index, item) in section.items(catalog, language).iter().enumerate() {
        println!("  {}. {} - {}", index + 1, item.title, item.description);
    }
    println!(
        "({}: play <n>, {}: back)",
        catalog.lookup(language, "narration.listen"),
        catalog.lookup(language, "nav.back")
    );
}

async fn open_store(config: &Config) -> Result<Arc<dyn PreferenceStore>> {
    if config.uses_memory_store() {
        info!("Using in-memory preference store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = SqliteStore::open(&config.database_path)
        .await
        .with_context(|| format!("Failed to open preference database {}", config.database_path))?;
    info!("Preferences stored in {}", config.database_path);
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("voice_for_all=info".parse()?),
        )
        .init();

    info!("Starting VoiceForAll console");

    // Load configuration from environment
    let config = Config::from_env()?;

    let catalog = TranslationCatalog::builtin();
    let report = CatalogValidator::validate(catalog);
    for error in &report.errors {
        warn!("Catalog error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Catalog warning: {}", warning);
    }

    // Step 1: Restore the language preference
    let localization = LocalizationStore::new(open_store(&config).await?);
    let language = localization.initialize().await;
    info!("Language: {} ({})", language.name(), language.native_name());

    // Step 2: Bring up the speech engine
    let narration = NarrationManager::new(
        Arc::new(ConsoleSpeechEngine::new()),
        config.completion_policy(),
    );
    narration.initialize(&config.speech_settings()).await;
    info!("Narration completion policy: {:?}", narration.policy());

    // Step 3: Report when narration returns to idle
    let mut state_rx = narration.subscribe();
    let state_localization = localization.clone();
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let idle = !state_rx.borrow_and_update().is_speaking();
            if idle {
                let language = state_localization.language();
                println!("  ({})", catalog.lookup(language, "narration.listen"));
            }
        }
    });

    // Step 4: Read commands
    print_home(catalog, localization.language());
    print_help();

    let mut open: Option<&'static Section> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        let language = localization.language();

        match command {
            Command::Lang(id) => match Language::from_code(&id) {
                Ok(language) => {
                    let _ = localization.set_language(language);
                    let name = LanguageRegistry::get().config_for(language).native_name;
                    println!(
                        "{}",
                        catalog.format(language, "language.changed", &[("language", name)])
                    );
                    match open {
                        Some(section) => print_section(section, catalog, language),
                        None => print_home(catalog, language),
                    }
                }
                Err(e) => println!("{}", e),
            },
            Command::Open(key) => match Section::find(&key) {
                Some(section) => {
                    narration.teardown().await;
                    open = Some(section);
                    print_section(section, catalog, language);
                }
                None => println!("Unknown section '{}'", key),
            },
            Command::Play(n) => {
                let Some(section) = open else {
                    println!("Open a section first");
                    continue;
                };
                let items = section.items(catalog, language);
                match n.checked_sub(1).and_then(|index| items.get(index)) {
                    Some(item) => {
                        let state = narration.activate_item(item, language).await;
                        if state.is_active(&item.id) {
                            println!(
                                "  {}",
                                catalog.format(
                                    language,
                                    "narration.now_playing",
                                    &[("title", &item.title)]
                                )
                            );
                        }
                    }
                    None => println!("No item {} in this section", n),
                }
            }
            Command::Back => {
                narration.teardown().await;
                open = None;
                print_home(catalog, language);
            }
            Command::State => match narration.state().active_item_id {
                Some(id) => println!("{} ({})", catalog.lookup(language, "narration.speaking"), id),
                None => println!("idle"),
            },
            Command::Stats => {
                let report = narration.metrics().report();
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(input) => println!("Unknown command '{}' (try help)", input),
        }
    }

    narration.teardown().await;
    info!("Goodbye");
    Ok(())
}

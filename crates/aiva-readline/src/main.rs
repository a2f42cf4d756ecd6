use std::borrow::Cow::{self, Borrowed, Owned};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Editor;
use rustyline::{Context, Helper};
use tokio::sync::mpsc::UnboundedReceiver;

use aiva_core::{
    knowledge_base, Assistant, AivaError, LocalStore, Sender, Section, SystemClock, TimerDelay,
    UiAction, UnsupportedSpeechRecognizer,
};
use aiva_infrastructure::{JsonFileStore, MemoryStore};

/// The page layout the REPL pretends to scroll through: section top
/// offsets in document order, plus a viewport height for the probe.
const PAGE_OFFSETS: [(Section, f64); 6] = [
    (Section::Hero, 0.0),
    (Section::About, 500.0),
    (Section::Services, 1200.0),
    (Section::Projects, 2000.0),
    (Section::Testimonials, 2800.0),
    (Section::Contact, 3400.0),
];
const VIEWPORT_HEIGHT: f64 = 900.0;

/// CLI helper for rustyline: completes slash commands and section names,
/// highlights command lines, and hints the argument a command expects.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    sections: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/clear".to_string(),
                "/resume".to_string(),
                "/scroll".to_string(),
                "/section".to_string(),
                "/suggest".to_string(),
                "/toggle".to_string(),
                "/voice".to_string(),
            ],
            sections: Section::all().map(|s| s.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // /section takes a section name; complete against the known ones.
        if let Some(arg) = line.strip_prefix("/section ") {
            let candidates: Vec<Pair> = self
                .sections
                .iter()
                .filter(|name| name.starts_with(arg))
                .map(|name| Pair {
                    display: name.clone(),
                    replacement: format!("/section {name}"),
                })
                .collect();
            return Ok((0, candidates));
        }

        if line.starts_with('/') && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        // Finish a partially typed section name in place.
        if let Some(arg) = line.strip_prefix("/section ") {
            return self
                .sections
                .iter()
                .find(|name| name.starts_with(arg) && name.len() > arg.len())
                .map(|name| name[arg.len()..].to_string());
        }

        // Show the argument shape once the command itself is complete.
        match line {
            "/scroll" => return Some(" <pixels>".to_string()),
            "/section" => return Some(" <name>".to_string()),
            _ => {}
        }

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Rendering state: how many log messages have been printed so far.
///
/// Messages that land while the panel is closed stay in the log and get
/// printed when the panel is reopened.
struct Renderer {
    printed: usize,
}

impl Renderer {
    fn new() -> Self {
        Self { printed: 0 }
    }

    fn render(&mut self, assistant: &Assistant) {
        if !assistant.is_open() {
            return;
        }
        for message in &assistant.messages()[self.printed..] {
            match message.sender {
                Sender::User => println!("{}", format!("> {}", message.text).green()),
                Sender::Assistant => {
                    println!("{}", "[AIVA]".bright_magenta());
                    for line in message.text.lines() {
                        println!("{}", line.bright_blue());
                    }
                }
            }
        }
        self.printed = assistant.messages().len();
    }

    fn reset(&mut self) {
        self.printed = 0;
    }
}

fn drain_actions(action_rx: &mut UnboundedReceiver<UiAction>) {
    while let Ok(action) = action_rx.try_recv() {
        match action {
            UiAction::ScrollToSection { section } => {
                println!("{}", format!("(page scrolls to the {section} section)").yellow());
            }
            UiAction::OpenResource { url } => {
                println!("{}", format!("(opening {url})").yellow());
            }
        }
    }
}

fn print_suggestions(assistant: &Assistant) {
    println!(
        "{}",
        format!("Suggestions for the {} section:", assistant.current_section()).bright_black()
    );
    for suggestion in assistant.suggestions() {
        println!("  {}", format!("- {suggestion}").cyan());
    }
}

/// The main entry point for the AIVA readline chat.
///
/// Sets up a rustyline REPL over the assistant core: persisted
/// conversation under ~/.aiva (or in memory with `--ephemeral`), slash
/// commands standing in for the web page's UI affordances, and colored
/// output for user, assistant, and page-effect lines.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let ephemeral = std::env::args().any(|arg| arg == "--ephemeral");
    let local_store: Arc<dyn LocalStore> = if ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(JsonFileStore::default_location().await?)
    };

    let (mut assistant, mut action_rx) = Assistant::new(
        knowledge_base().clone(),
        local_store,
        Arc::new(SystemClock),
        Arc::new(TimerDelay),
        // A terminal has no speech capture; /voice demonstrates the notice.
        Arc::new(UnsupportedSpeechRecognizer),
    );

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== AIVA chat ===".bright_magenta().bold());
    println!(
        "{}",
        "Commands: /clear /resume /scroll <px> /section <name> /suggest /toggle /voice, \
         or 'quit' to exit."
            .bright_black()
    );
    println!();

    let mut renderer = Renderer::new();

    // Load any saved conversation (first-time visitors get the welcome
    // message here), then open the panel.
    assistant.initialize().await?;
    assistant.toggle_chat().await?;
    renderer.render(&assistant);

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(command) = trimmed.strip_prefix('/') {
                    handle_command(command, &mut assistant, &mut renderer).await?;
                } else {
                    println!("{}", "AIVA is typing...".bright_black());
                    assistant.send_message(trimmed).await?;
                }

                drain_actions(&mut action_rx);
                renderer.render(&assistant);
            }
            Err(_) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
        }
    }

    Ok(())
}

async fn handle_command(
    command: &str,
    assistant: &mut Assistant,
    renderer: &mut Renderer,
) -> Result<()> {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "clear" => {
            assistant.clear_conversation().await?;
            renderer.reset();
            println!("{}", "Conversation cleared.".bright_black());
        }
        "resume" => {
            assistant.request_resume();
        }
        "scroll" => match arg.parse::<f64>() {
            Ok(position) => {
                assistant.update_scroll(position, VIEWPORT_HEIGHT, &PAGE_OFFSETS);
                println!(
                    "{}",
                    format!("Now viewing the {} section.", assistant.current_section())
                        .bright_black()
                );
            }
            Err(_) => println!("{}", "Usage: /scroll <pixels>".bright_black()),
        },
        "section" => match Section::from_str(arg) {
            Ok(section) => {
                assistant.set_section(section);
                println!(
                    "{}",
                    format!("Now viewing the {section} section.").bright_black()
                );
            }
            Err(_) => println!(
                "{}",
                "Usage: /section <hero|about|services|projects|testimonials|contact>"
                    .bright_black()
            ),
        },
        "suggest" => print_suggestions(assistant),
        "toggle" => {
            let open = assistant.toggle_chat().await?;
            if open {
                println!("{}", "Chat panel opened.".bright_black());
            } else {
                println!("{}", "Chat panel closed (messages keep arriving).".bright_black());
            }
        }
        "voice" => match assistant.handle_voice_input().await {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<AivaError>() {
                Some(err) if err.is_unsupported_capability() => {
                    println!("{}", err.to_string().yellow());
                }
                _ => return Err(e),
            },
        },
        _ => println!("{}", "Unknown command".bright_black()),
    }

    Ok(())
}

//! Scripted two-turn conversation, replayed offline.
//!
//! Usage:
//!   cargo run --example scripted_chat
//!   cargo run --example scripted_chat -- --show-prompt
//!   RUST_LOG=debug cargo run --example scripted_chat
//!
//! The decision-maker's replies are canned, so no API key or network is
//! needed; parsing, dispatch, and the mid-conversation tool swap are real.

use clap::Parser;
use reckon_tools::{
    parse_action, AgentAction, CircumferenceTool, HypotenuseTool, ToolRegistry, TranscriptWindow,
    TurnConfig,
};

const PERSONA: &str = "Assistant is a helpful chat agent, but it is terrible at maths. \
    When a maths question comes up, it always reaches for a tool.";

struct ScriptedTurn {
    user: &'static str,
    replies: &'static [&'static str],
}

const FIRST_TURN: ScriptedTurn = ScriptedTurn {
    user: "can you calculate the circumference of a circle that has a radius of 7.81mm",
    replies: &[
        r#"```json
{
    "action": "Circumference calculator",
    "action_input": "7.81"
}
```"#,
        r#"```json
{
    "action": "Final Answer",
    "action_input": "The circumference of a circle with a radius of 7.81mm is approximately 49.07mm."
}
```"#,
    ],
};

const SECOND_TURN: ScriptedTurn = ScriptedTurn {
    user: "If I have a triangle with the opposite side of length 51 and the adjacent side of 34, \
        what is the length of the hypotenuse?",
    replies: &[
        r#"```json
{
    "action": "Hypotenuse calculator",
    "action_input": {
        "adjacent_side": 34,
        "opposite_side": 51
    }
}
```"#,
        r#"```json
{
    "action": "Final Answer",
    "action_input": "The length of the hypotenuse is approximately 61.29."
}
```"#,
    ],
};

#[derive(Parser)]
#[command(name = "scripted_chat", about = "Replay a recorded tool-using conversation")]
struct Cli {
    /// How many exchanges the transcript window retains
    #[arg(long, default_value_t = 5)]
    window: usize,

    /// Print the rendered decision prompt before each turn
    #[arg(long)]
    show_prompt: bool,
}

async fn play_turn(config: &TurnConfig, turn: &ScriptedTurn, transcript: &mut TranscriptWindow) {
    eprintln!("\x1b[1;36myou>\x1b[0m {}", turn.user);

    let dispatcher = config.dispatcher();
    for reply in turn.replies {
        match parse_action(reply) {
            Ok(AgentAction::Invoke(invocation)) => {
                eprintln!("\x1b[33m  [tool: {}]\x1b[0m", invocation.tool_name);
                match dispatcher.dispatch(&invocation).await {
                    Ok(observation) => {
                        eprintln!("\x1b[33m  [observation]\x1b[0m {observation}");
                    }
                    // Reply-caused failures go back into the dialogue as
                    // observations; anything else is a host-side bug.
                    Err(e) if e.is_invocation_error() => {
                        eprintln!("\x1b[33m  [observation]\x1b[0m {e}");
                    }
                    Err(e) => {
                        eprintln!("\x1b[1;31m  [tool error]\x1b[0m {e}");
                        return;
                    }
                }
            }
            Ok(AgentAction::FinalAnswer(answer)) => {
                eprint!("\x1b[1;32magent>\x1b[0m ");
                println!("{answer}");
                transcript.record(turn.user, answer);
                return;
            }
            Err(e) => {
                eprintln!("\x1b[1;31m  [parse error]\x1b[0m {e}");
                return;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut transcript = TranscriptWindow::new(cli.window);

    // First turn: the circumference tool is the only one on offer.
    let mut registry = ToolRegistry::new();
    registry
        .register(CircumferenceTool)
        .expect("empty registry accepts the first tool");
    let config = TurnConfig::new(PERSONA, registry);

    eprintln!("scripted chat (window: {})", cli.window);
    eprintln!("tools: {}", config.registry().tool_names().join(", "));
    eprintln!("---");

    if cli.show_prompt {
        eprintln!("{}", config.decision_prompt());
        eprintln!("---");
    }
    play_turn(&config, &FIRST_TURN, &mut transcript).await;

    // The hypotenuse tool joins for the second turn. Deriving a new config
    // leaves the first turn's snapshot untouched.
    let mut registry = ToolRegistry::new();
    registry
        .register(CircumferenceTool)
        .expect("empty registry accepts the first tool");
    registry
        .register(HypotenuseTool)
        .expect("distinct names register cleanly");
    let config = config.with_registry(registry);

    eprintln!("---");
    eprintln!("tools: {}", config.registry().tool_names().join(", "));
    eprintln!("---");

    if cli.show_prompt {
        eprintln!("{}", config.decision_prompt());
        eprintln!("---");
    }
    play_turn(&config, &SECOND_TURN, &mut transcript).await;

    eprintln!("---");
    eprintln!("transcript ({} exchanges):", transcript.len());
    eprint!("{}", transcript.render_lines());
}

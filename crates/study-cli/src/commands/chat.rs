use std::io::Write;

use anyhow::Context;
use study_api::ApiClient;
use study_core::entities::ChatTurn;
use study_views::{ChatSession, Route};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::gate;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Activity;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Handle `sbd chat <workspace-id>`.
///
/// With `-q`, asks each question in order and prints the transcript. Without
/// it, reads one question per line from stdin until EOF or `exit`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = gate::enter(ctx, &format!("/chat/{}", args.workspace_id)).await?;
    let Route::Chat(workspace) = route else {
        anyhow::bail!("unexpected view '{route}' for chat");
    };
    let chat = ChatSession::new(&ctx.session, workspace);

    if args.question.is_empty() {
        interactive(&chat, flags).await
    } else {
        for question in &args.question {
            ask(&chat, question).await?;
        }
        let transcript = chat.transcript();
        match flags.format {
            OutputFormat::Table => {
                transcript.iter().for_each(print_turn);
                Ok(())
            }
            OutputFormat::Json | OutputFormat::Raw => output(&transcript, flags.format),
        }
    }
}

async fn ask(chat: &ChatSession<ApiClient>, question: &str) -> anyhow::Result<()> {
    let activity = Activity::waiting("thinking");
    let result = chat.ask(question).await;
    activity.done();
    result?;
    Ok(())
}

async fn interactive(chat: &ChatSession<ApiClient>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&mut std::io::stderr().lock(), flags.quiet)?;
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        if EXIT_WORDS.contains(&line.trim()) {
            break;
        }

        chat.set_draft(line);
        let activity = Activity::waiting("thinking");
        let result = chat.send_draft().await;
        activity.done();

        match result {
            Ok(Some(turn)) => match flags.format {
                OutputFormat::Table => print_turn(&turn),
                OutputFormat::Json | OutputFormat::Raw => output(&turn, OutputFormat::Raw)?,
            },
            Ok(None) => {}
            Err(error) if error.is_unauthorized() => {
                chat.unmount();
                anyhow::bail!("session expired (run `sbd auth login`)");
            }
            // The view stays usable after a failed ask; the draft is kept.
            Err(error) => eprintln!("sbd error: {error}"),
        }
    }

    chat.unmount();
    Ok(())
}

fn prompt(out: &mut impl Write, quiet: bool) -> anyhow::Result<()> {
    if quiet {
        return Ok(());
    }
    write!(out, "> ").context("failed to write prompt")?;
    out.flush().context("failed to write prompt")
}

fn print_turn(turn: &ChatTurn) {
    println!("Q: {}", turn.question);
    println!("A: {}", turn.answer);
    if !turn.sources.is_empty() {
        println!("   sources: {}", turn.citation_line());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::prompt;

    struct Closed;

    impl io::Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn prompt_is_written_unless_quiet() {
        let mut out = Vec::new();
        prompt(&mut out, false).expect("prompt should write");
        assert_eq!(out, b"> ");

        let mut silent = Vec::new();
        prompt(&mut silent, true).expect("quiet prompt should succeed");
        assert!(silent.is_empty());
    }

    #[test]
    fn prompt_reports_a_closed_stream() {
        let err = prompt(&mut Closed, false).expect_err("write to a closed stream should fail");
        assert!(err.to_string().contains("failed to write prompt"));
    }
}

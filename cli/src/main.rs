//! CLI entrypoint for docqa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use docqa_application::{
    AskQuestionInput, AskQuestionUseCase, ChatBehavior, ChatController, ConversationLogger,
    NoConversationLogger, UploadDocumentUseCase,
};
use docqa_domain::{OutputFormat, Question, SessionId};
use docqa_infrastructure::{ConfigLoader, FileConfig, HttpQaBackend, JsonlConversationLogger};
use docqa_presentation::{
    ChatRepl, Cli, ConsoleFormatter, TerminalChatView, WaitSpinner, read_document,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    info!("Starting docqa against {}", config.backend.base_url);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let behavior = config.chat_behavior();
    let show_progress = config.repl.show_progress && !cli.quiet;

    // === Dependency Injection ===
    let backend = Arc::new(
        HttpQaBackend::new(config.backend.to_http_config())
            .context("Failed to set up the backend client")?,
    );
    let logger = conversation_logger(&cli, &config);

    let session = cli
        .session
        .as_deref()
        .map(str::parse::<SessionId>)
        .transpose()?;

    // Chat mode
    if cli.chat {
        let view = Arc::new(TerminalChatView::new().with_progress(show_progress));
        let mut controller = ChatController::new(backend, view)
            .with_behavior(behavior)
            .with_logger(logger);
        if let Some(id) = session {
            controller = controller.with_session(id);
        }
        let controller = Arc::new(controller);

        if let Some(path) = &cli.upload {
            let file = read_document(path).await?;
            controller.submit_upload(Some(file)).await;
        }

        let repl = ChatRepl::new(controller)
            .with_backend_url(config.backend.base_url.clone())
            .with_history_file(config.repl.history_file.as_ref().map(Into::into));
        repl.run().await?;
        return Ok(());
    }

    let format = cli.output.or(config.output.format).unwrap_or_default();
    let mut session = session;

    if let Some(path) = &cli.upload {
        let file = read_document(path).await?;
        let use_case = UploadDocumentUseCase::new(backend.clone()).with_logger(logger.clone());

        let spinner = show_progress.then(|| WaitSpinner::start(behavior.locale.uploading()));
        let result = use_case.execute(&file).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        let receipt = result.map_err(|e| match e.server_message() {
            Some(detail) => anyhow!("{} {}", behavior.locale.upload_failed(), detail),
            None => anyhow!("{} ({})", behavior.locale.upload_failed(), e),
        })?;
        match format {
            OutputFormat::Text => eprintln!("{}", ConsoleFormatter::format_receipt(&receipt)),
            OutputFormat::Json if cli.question.is_none() => {
                println!("{}", ConsoleFormatter::format_receipt_json(&receipt))
            }
            OutputFormat::Json => {}
        }
        session = Some(receipt.session_id);
    }

    // Single question mode - question is required unless only uploading
    let question = match cli.question.as_deref() {
        Some(raw) => Question::try_new(raw).ok_or_else(|| anyhow!("Question cannot be empty"))?,
        None if cli.upload.is_some() => return Ok(()),
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let answer = ask_once(backend, logger, question, session, &behavior, show_progress).await?;

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_answer(&answer, &behavior),
        OutputFormat::Json => ConsoleFormatter::format_json(&answer),
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags override file values
    if let Some(url) = &cli.base_url {
        config.backend.base_url = url.clone();
    }
    if let Some(locale) = cli.locale {
        config.chat.locale = locale;
    }

    config.validate()?;
    Ok(config)
}

fn conversation_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let path = cli
        .log_conversation
        .clone()
        .or_else(|| config.logging.conversation_file.clone());

    match path.and_then(JsonlConversationLogger::open) {
        Some(logger) => {
            info!("Writing conversation transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

async fn ask_once(
    backend: Arc<HttpQaBackend>,
    logger: Arc<dyn ConversationLogger>,
    question: Question,
    session: Option<SessionId>,
    behavior: &ChatBehavior,
    show_progress: bool,
) -> Result<docqa_domain::Answer> {
    let use_case = AskQuestionUseCase::new(backend).with_logger(logger);

    let spinner = show_progress.then(|| WaitSpinner::start(behavior.locale.pending_answer()));
    let result = use_case
        .execute(AskQuestionInput::new(question).with_session(session))
        .await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    result.map_err(|e| anyhow!("{} ({})", behavior.locale.ask_failed(), e))
}

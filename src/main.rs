use colored::Colorize;
use ia_api_client::{
    AllFilesUploadStatus, ApiClient, Approach, AskRequest, AskResponse, FileState,
    GetUploadStatusRequest, get_citation_file_path, telemetry,
};
use tracing::Level;
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
usage: info-assistant <command>

commands:
  title                          application title
  info                           deployment/model metadata
  banner                         warning banner text
  tags                           all known tags
  blob-url                       upload SAS URL
  ask <question...>              ask a question (approach rrr)
  status [hours] [state]         upload statuses (default: 4 ALL)
  citation <id>                  citation record and encoded path

env: IA_API_BASE_URL (required), RUST_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` is optional; real env vars win.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("warn", Level::INFO))
        .with(telemetry::layer())
        .with(fmt::layer().with_target(false).with_filter(filter::filter_fn(
            |meta| !meta.target().starts_with(telemetry::TARGET_PREFIX),
        )))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let client = ApiClient::from_env()?;

    match command.as_str() {
        "title" => {
            let title = client.get_application_title().await?;
            println!("{}", title.application_title.bold());
        }
        "info" => {
            let info = client.get_info_data().await?;
            heading("Deployment");
            println!("  OpenAI service     {}", info.azure_openai_service);
            println!("  Chat deployment    {}", info.azure_openai_chatgpt_deployment);
            println!(
                "  Model              {} ({})",
                info.azure_openai_model_name, info.azure_openai_model_version
            );
            println!("  Search service     {}", info.azure_search_service);
            println!("  Search index       {}", info.azure_search_index);
            println!("  Target language    {}", info.target_language);
            println!(
                "  Embeddings         {} {} ({})",
                if info.use_azure_openai_embeddings { "azure" } else { "local" },
                info.embeddings_model_name,
                info.embeddings_model_version
            );
        }
        "banner" => {
            let banner = client.get_warning_banner().await?;
            println!("{}", banner.warning_banner_text.yellow());
        }
        "tags" => {
            let tags = client.get_all_tags().await?;
            println!("{}", tags.tags);
        }
        "blob-url" => {
            println!("{}", client.get_blob_client_url().await?);
        }
        "ask" => {
            let question = rest.join(" ");
            if question.trim().is_empty() {
                anyhow::bail!("ask: missing question");
            }
            let answer = client
                .ask(&AskRequest::new(question, Approach::ReadRetrieveRead))
                .await?;
            print_answer(&answer);
        }
        "status" => {
            let timeframe = match rest.first() {
                Some(h) => h.parse()?,
                None => 4,
            };
            let state = match rest.get(1) {
                Some(s) => FileState::parse(s)
                    .ok_or_else(|| anyhow::anyhow!("status: unknown state {s}"))?,
                None => FileState::All,
            };
            let statuses = client
                .get_all_upload_status(&GetUploadStatusRequest { timeframe, state })
                .await?;
            print_statuses(&statuses);
        }
        "citation" => {
            let Some(id) = rest.first() else {
                anyhow::bail!("citation: missing id");
            };
            let cit = client.get_citation_obj(id).await?;
            heading(&cit.title);
            println!("  file      {}", cit.file_name);
            println!("  section   {}", cit.section);
            println!("  pages     {:?}", cit.pages);
            println!("  tokens    {}", cit.token_count);
            println!("  path      {}", get_citation_file_path(id));
            println!("\n{}", cit.content);
        }
        other => {
            eprintln!("unknown command: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn heading(text: &str) {
    println!("{}", text.bold().cyan());
}

fn print_answer(answer: &AskResponse) {
    println!("{}\n", answer.answer);
    if !answer.citation_lookup.is_empty() {
        heading("Citations");
        for (key, c) in &answer.citation_lookup {
            println!(
                "  [{}] {} p.{}",
                key.green(),
                c.source_path,
                c.page_number
            );
        }
    }
}

fn print_statuses(all: &AllFilesUploadStatus) {
    if all.statuses.is_empty() {
        println!("{}", "no files in this timeframe".dimmed());
        return;
    }
    for s in &all.statuses {
        let state = match s.state.as_str() {
            "COMPLETE" => s.state.green(),
            "ERROR" => s.state.red(),
            _ => s.state.yellow(),
        };
        println!(
            "{:<10} {}  {}  {}",
            state,
            s.file_name,
            s.state_timestamp.dimmed(),
            s.state_description
        );
    }
}

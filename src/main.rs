mod card_scraper;
mod cards;
mod console;
mod download_manager;
mod error;
mod html_extractor;
mod orchestrator;
mod search_client;
#[cfg(test)]
mod test;
mod utilities;

use log::{error, info};

use card_scraper::CardScraper;
use console::StdConsole;
use download_manager::DownloadManager;
use orchestrator::{FlowOutcome, InteractionOrchestrator};
use search_client::SearchClient;
use utilities::{config::CONFIG, http::build_client};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let start_time = chrono::prelude::Local::now();
    info!("Starting at {} with {:?}", start_time, *CONFIG);

    let client = match build_client() {
        Ok(client) => client,
        Err(e) => {
            error!("Could not create http client: {}", e);
            println!("Failed to start: {}", e);
            return;
        }
    };

    let mut orchestrator = InteractionOrchestrator::new(
        SearchClient::new(&CONFIG.base_url, client.clone(), CONFIG.request_timeout()),
        CardScraper::new(client.clone(), CONFIG.request_timeout()),
        DownloadManager::new(client, &CONFIG.assets_dir, CONFIG.image_timeout()),
        StdConsole::new(),
    );

    let outcome = orchestrator.run().await;

    let end_time = chrono::prelude::Local::now();
    let summary = match &outcome {
        FlowOutcome::Completed(report) => format!(
            "saved {} images for {}",
            report.image_files.as_ref().map_or(0, |files| files.len()),
            report.name
        ),
        FlowOutcome::Aborted(reason) => format!("aborted ({:?})", reason),
    };
    info!(
        "Lookup started at: {}. Finished at: {}. Took: {} seconds and {}",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        summary
    );
}

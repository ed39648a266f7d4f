use std::fmt;

use log::{debug, error, info};

use crate::card_scraper::CardScrape;
use crate::cards::{
    card_record::CardRecord, card_report::CardReport, search_result::SearchResult,
};
use crate::console::Console;
use crate::download_manager::ImageDownload;
use crate::search_client::CardSearch;
use crate::utilities::string_manipulators::encode_file_stem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    EmptyQuery,
    NoResults,
    NoneSelected,
    InvalidChoice(String),
    SelectionFailed,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::EmptyQuery => write!(f, "No search query given. Exiting."),
            AbortReason::NoResults => write!(f, "No results found."),
            AbortReason::NoneSelected => write!(f, "No correct card found. Exiting."),
            AbortReason::InvalidChoice(_) => write!(f, "Invalid choice. Exiting."),
            AbortReason::SelectionFailed => {
                write!(f, "Failed to retrieve data for the selected card.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed(CardReport),
    Aborted(AbortReason),
}

#[derive(Debug)]
enum FlowState {
    Searching {
        query: String,
    },
    Presenting {
        candidates: Vec<SearchResult>,
        position: usize,
    },
    ConfirmingFirst {
        candidates: Vec<SearchResult>,
        card: CardRecord,
    },
    AwaitingSelection {
        candidates: Vec<SearchResult>,
    },
    Downloading {
        card: CardRecord,
    },
    Done {
        report: CardReport,
    },
    Aborted {
        reason: AbortReason,
    },
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Search, let the operator pick the right card, then save its images.
pub struct InteractionOrchestrator<S, C, D, P> {
    search: S,
    scraper: C,
    downloader: D,
    console: P,
}

impl<S, C, D, P> InteractionOrchestrator<S, C, D, P>
where
    S: CardSearch,
    C: CardScrape,
    D: ImageDownload,
    P: Console,
{
    pub fn new(search: S, scraper: C, downloader: D, console: P) -> Self {
        InteractionOrchestrator {
            search,
            scraper,
            downloader,
            console,
        }
    }

    /// Asks for the card to look up and runs the whole flow for it.
    pub async fn run(&mut self) -> FlowOutcome {
        let query = self
            .console
            .ask("Enter the Pokemon card name to search: ");
        if query.trim().is_empty() {
            return self.abort(AbortReason::EmptyQuery);
        }
        self.run_query(query.trim()).await
    }

    pub async fn run_query(&mut self, query: &str) -> FlowOutcome {
        let mut state = FlowState::Searching {
            query: query.to_string(),
        };
        loop {
            state = match state {
                FlowState::Searching { query } => self.find_candidates(&query).await,
                FlowState::Presenting {
                    candidates,
                    position,
                } => self.present(candidates, position).await,
                FlowState::ConfirmingFirst { candidates, card } => {
                    self.confirm_first(candidates, card)
                }
                FlowState::AwaitingSelection { candidates } => {
                    self.await_selection(candidates).await
                }
                FlowState::Downloading { card } => self.download_images(card).await,
                FlowState::Done { report } => {
                    self.console.say("Final JSON output:");
                    self.print_report(&report);
                    return FlowOutcome::Completed(report);
                }
                FlowState::Aborted { reason } => return self.abort(reason),
            };
        }
    }

    fn abort(&mut self, reason: AbortReason) -> FlowOutcome {
        info!("Lookup aborted: {:?}", reason);
        self.console.say(&reason.to_string());
        FlowOutcome::Aborted(reason)
    }

    fn print_report(&mut self, report: &CardReport) {
        match report.to_pretty_json() {
            Ok(json) => self.console.say(&json),
            Err(e) => error!("Could not print report for {}: {}", report.name, e),
        }
    }

    async fn find_candidates(&mut self, query: &str) -> FlowState {
        match self.search.search(query).await {
            Ok(candidates) if candidates.is_empty() => FlowState::Aborted {
                reason: AbortReason::NoResults,
            },
            Ok(candidates) => FlowState::Presenting {
                candidates,
                position: 0,
            },
            Err(e) => {
                error!("Search for '{}' failed: {}", query, e);
                self.console
                    .say(&format!("Failed to retrieve search results: {}", e));
                FlowState::Aborted {
                    reason: AbortReason::NoResults,
                }
            }
        }
    }

    fn next_candidate(candidates: Vec<SearchResult>, position: usize) -> FlowState {
        if position + 1 < candidates.len() {
            FlowState::Presenting {
                candidates,
                position: position + 1,
            }
        } else {
            FlowState::AwaitingSelection { candidates }
        }
    }

    async fn present(&mut self, candidates: Vec<SearchResult>, position: usize) -> FlowState {
        let number = position + 1;
        let url = candidates[position].url.clone();

        match self.scraper.scrape(&url).await {
            Ok(card) => {
                self.console
                    .say(&format!("\nCard details for result {}:", number));
                self.print_report(&CardReport::preview(&card));
                if position == 0 {
                    return FlowState::ConfirmingFirst { candidates, card };
                }
            }
            Err(e) => {
                error!("Failed to retrieve card data from {}: {}", url, e);
                self.console
                    .say(&format!("Failed to retrieve card data for result {}.", number));
            }
        }
        Self::next_candidate(candidates, position)
    }

    fn confirm_first(&mut self, candidates: Vec<SearchResult>, card: CardRecord) -> FlowState {
        let answer = self.console.ask("Is this the correct card? (yes/no): ");
        if is_affirmative(&answer) {
            FlowState::Downloading { card }
        } else {
            Self::next_candidate(candidates, 0)
        }
    }

    async fn await_selection(&mut self, candidates: Vec<SearchResult>) -> FlowState {
        let answer = self.console.ask(&format!(
            "Enter the number of the correct card (1-{}), or 'none' if none are correct: ",
            candidates.len()
        ));
        let answer = answer.trim().to_lowercase();
        if answer == "none" {
            return FlowState::Aborted {
                reason: AbortReason::NoneSelected,
            };
        }

        let selected = Some(answer.as_str())
            .filter(|digits| digits.chars().all(|c| c.is_ascii_digit()))
            .and_then(|digits| digits.parse::<usize>().ok())
            .filter(|choice| (1..=candidates.len()).contains(choice))
            .map(|choice| &candidates[choice - 1]);

        let Some(selected) = selected else {
            return FlowState::Aborted {
                reason: AbortReason::InvalidChoice(answer),
            };
        };

        debug!("Selected {} ({})", selected.name, selected.url);
        match self.scraper.scrape(&selected.url).await {
            Ok(card) => FlowState::Downloading { card },
            Err(e) => {
                error!("Failed to retrieve card data from {}: {}", selected.url, e);
                FlowState::Aborted {
                    reason: AbortReason::SelectionFailed,
                }
            }
        }
    }

    async fn download_images(&mut self, card: CardRecord) -> FlowState {
        let base_filename = encode_file_stem(&card.name);
        let images = match self
            .downloader
            .download(&card.image_urls, &base_filename)
            .await
        {
            Ok(images) => images,
            Err(e) => {
                error!("Could not download images for {}: {}", card.name, e);
                Vec::new()
            }
        };

        if images.is_empty() {
            self.console.say("Failed to download any images");
        } else {
            let paths: Vec<&str> = images.iter().map(|image| image.path.as_str()).collect();
            self.console
                .say(&format!("Images saved as: {}", paths.join(", ")));
        }

        FlowState::Done {
            report: CardReport::with_images(&card, &images),
        }
    }
}

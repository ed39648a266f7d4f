use std::collections::VecDeque;

use crate::cards::{
    card_record::CardRecord, price_table::PriceTable, search_result::SearchResult,
};
use crate::console::Console;

pub fn charizard_prices() -> PriceTable {
    PriceTable {
        psa_8: "$200.00".to_string(),
        psa_9: "$450.00".to_string(),
        psa_10: "$1200.00".to_string(),
    }
}

pub fn charizard_card_record() -> CardRecord {
    CardRecord {
        name: "Charizard #4".to_string(),
        prices: charizard_prices(),
        image_urls: vec!["https://storage.googleapis.com/images.pricecharting.com/charizard/img1.jpg".to_string()],
    }
}

pub fn card_record(name: &str) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        prices: PriceTable::default(),
        image_urls: vec![format!("https://images.example.com/{}.jpg", name.len())],
    }
}

pub fn charizard_candidates() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            "Charizard #4",
            "https://www.pricecharting.com/game/pokemon-base-set/charizard-4",
        ),
        SearchResult::new(
            "Charizard #4 [1st Edition]",
            "https://www.pricecharting.com/game/pokemon-base-set-1st-edition/charizard-4",
        ),
        SearchResult::new(
            "Charizard #4",
            "https://www.pricecharting.com/game/pokemon-base-set-2/charizard-4",
        ),
    ]
}

/// Answers prompts from a fixed script and records everything that was printed.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedConsole {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, question: &str) -> String {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or_default()
    }

    fn say(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

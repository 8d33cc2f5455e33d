//! Free-text dispatch: keyword classification and reply simulation
//!
//! Every non-command line the user types is classified into a response
//! category by keyword membership, answered with a random canned line
//! attributed to that category's entity, and delivered after an artificial
//! delay. Classification is deterministic; the first matching rule wins.

use crate::content::{
    Classification, COLLECTIVE_RESPONSES, GENERAL_RESPONSES, LOCATION_RESPONSES,
    PARANOID_RESPONSES, SLENDER_RESPONSES, SYSTEM_ALERTS,
};
use crate::session::scheduler::Task;
use crate::session::Session;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Chance that an entity reply is followed by a secondary system alert
const FOLLOWUP_ALERT_CHANCE: f64 = 0.3;

/// Which table a reply is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseCategory {
    Slender,
    Collective,
    Location,
    Paranoid,
    General,
}

impl ResponseCategory {
    /// The fictional sender replies in this category are attributed to
    pub fn entity(&self) -> &'static str {
        match self {
            ResponseCategory::Slender => "THE TALL ONE",
            ResponseCategory::Collective => "COLLECTIVE",
            ResponseCategory::Location => "OBSERVER",
            ResponseCategory::Paranoid => "WATCHER",
            ResponseCategory::General => "OBSERVER",
        }
    }

    fn table(&self) -> &'static [&'static str; 5] {
        match self {
            ResponseCategory::Slender => &SLENDER_RESPONSES,
            ResponseCategory::Collective => &COLLECTIVE_RESPONSES,
            ResponseCategory::Location => &LOCATION_RESPONSES,
            ResponseCategory::Paranoid => &PARANOID_RESPONSES,
            ResponseCategory::General => &GENERAL_RESPONSES,
        }
    }
}

/// Classify free text by keyword membership, fixed priority order
pub fn classify(input: &str) -> ResponseCategory {
    let lower = input.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contains_any(&["slender", "tall", "faceless"]) {
        ResponseCategory::Slender
    } else if contains_any(&["help", "scared", "afraid"]) {
        ResponseCategory::Collective
    } else if contains_any(&["where", "location", "coordinates"]) {
        ResponseCategory::Location
    } else if contains_any(&["see", "watching", "followed"]) {
        ResponseCategory::Paranoid
    } else {
        ResponseCategory::General
    }
}

/// Pick one canned line from the category's table
pub fn pick_response(category: ResponseCategory, rng: &mut impl Rng) -> &'static str {
    let table = category.table();
    table[rng.random_range(0..table.len())]
}

/// Pick one secondary system alert
pub fn pick_alert(rng: &mut impl Rng) -> &'static str {
    SYSTEM_ALERTS[rng.random_range(0..SYSTEM_ALERTS.len())]
}

impl Session {
    /// Schedule the simulated reaction to a free-text user message
    pub(crate) fn schedule_reply(&mut self, input: &str) {
        let category = classify(input);
        let line = pick_response(category, &mut self.rng);
        let reply_delay = Duration::from_millis(1500 + self.rng.random_range(0..3000));
        let reply_due = self.now + reply_delay;
        debug!(?category, delay_ms = reply_delay.as_millis() as u64, "reply scheduled");

        self.scheduler.schedule(
            reply_due,
            Task::Entity {
                sender: category.entity().to_string(),
                text: line.to_string(),
            },
        );

        if self.rng.random_bool(FOLLOWUP_ALERT_CHANCE) {
            let alert = pick_alert(&mut self.rng);
            let alert_due = reply_due + Duration::from_millis(2000 + self.rng.random_range(0..3000));
            self.scheduler.schedule(
                alert_due,
                Task::System {
                    text: alert.to_string(),
                    classification: Classification::Confidential,
                },
            );
        }
    }
}

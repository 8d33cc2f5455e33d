//! Core terminal logic and session state
//!
//! A [`Session`] owns every piece of mutable state in the fiction and is
//! mutated only through its methods: free-text dispatch, slash commands,
//! the access gate, the side panels, and the periodic simulators that keep
//! the channel "alive". All delayed effects go through the virtual-time
//! [`scheduler`], so the whole thing can be driven deterministically.

pub mod codec;
pub mod commands;
pub mod dispatch;
pub mod scheduler;

use crate::content::{
    self, initial_evidence, Classification, EvidenceFile, EvidenceStatus, Id,
    ATMOSPHERIC_EVENTS, SYNTHETIC_CHATTER, SYNTHETIC_USERS,
};
use chrono::{DateTime, Local, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
pub use scheduler::NoticeKind;
use scheduler::{Scheduler, Task};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Clock-display refresh period
const CLOCK_PERIOD: Duration = Duration::from_secs(1);
/// Network-activity simulator period
const NETWORK_PERIOD: Duration = Duration::from_secs(15);
/// Atmospheric-event simulator period
const ATMOSPHERIC_PERIOD: Duration = Duration::from_secs(30);
/// Synthetic-user chatter period
const CHATTER_PERIOD: Duration = Duration::from_secs(45);
/// How long a notification toast stays up
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);
/// Failures before the lockdown alert fires
const LOCKDOWN_THRESHOLD: u32 = 3;

/// Who a message is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    User,
    System,
    Entity,
}

/// A line in the terminal log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Id,
    pub kind: MessageKind,
    pub sender: String,
    pub text: String,
    pub classification: Option<Classification>,
    pub timestamp: DateTime<Utc>,
    /// Cosmetic corruption flag, rolled once per message
    pub glitched: bool,
}

/// A transient toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NoticeKind,
    pub expires_at: Duration,
}

/// A logged coordinate pair; never validated, never used for anything real
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateFix {
    pub lat: String,
    pub lon: String,
    pub logged_at: DateTime<Utc>,
}

/// All session state, created at startup and discarded at exit
pub struct Session {
    /// Identified user, upper-cased; `None` renders as ANONYMOUS
    pub current_user: Option<String>,
    /// Append-only terminal log
    pub messages: Vec<Message>,
    /// Monotonic count of bad access codes
    pub failed_access_attempts: u32,
    /// One-way unlock for the classified section
    pub classified_unlocked: bool,
    /// Coordinate log, append-only
    pub coordinates: Vec<CoordinateFix>,
    /// Seeded evidence archive
    pub evidence: Vec<EvidenceFile>,
    /// Fabricated connected-observer count, re-randomized periodically
    pub observer_count: u32,
    /// Set by /proxy, shown in the header status
    pub proxied: bool,
    /// Location-analysis panel content, once tracking resolves
    pub location_report: Option<Vec<String>>,
    /// Symbol-decoder panel content, once decoding resolves
    pub decoder_report: Option<Vec<String>>,
    /// Live toasts
    pub notifications: Vec<Notification>,
    /// Header clock text
    pub clock: String,

    disturbed_until: Option<Duration>,
    glitch_until: Option<Duration>,
    lockdown_fired: bool,
    next_clock: Duration,
    next_network: Duration,
    next_atmospheric: Duration,
    next_chatter: Duration,

    pub(crate) now: Duration,
    pub(crate) scheduler: Scheduler,
    pub(crate) rng: SmallRng,
}

impl Session {
    /// Create a session with OS-seeded randomness
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Create a deterministic session; tests drive this
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        let mut session = Self {
            current_user: None,
            messages: Vec::new(),
            failed_access_attempts: 0,
            classified_unlocked: false,
            coordinates: Vec::new(),
            evidence: initial_evidence(),
            observer_count: 1,
            proxied: false,
            location_report: None,
            decoder_report: None,
            notifications: Vec::new(),
            clock: Local::now().format("%m/%d/%Y, %H:%M:%S").to_string(),
            disturbed_until: None,
            glitch_until: None,
            lockdown_fired: false,
            next_clock: CLOCK_PERIOD,
            next_network: NETWORK_PERIOD,
            next_atmospheric: ATMOSPHERIC_PERIOD,
            next_chatter: CHATTER_PERIOD,
            now: Duration::ZERO,
            scheduler: Scheduler::new(),
            rng,
        };

        info!(version = crate::VERSION, "session initialized");
        session.push_system(content::WELCOME, Classification::Unclassified);
        session.simulate_network_activity();
        session
    }

    /// Raw input from the message box: command or free text
    pub fn submit(&mut self, raw: &str) {
        let input = raw.trim();
        if input.is_empty() {
            return;
        }

        if input.starts_with('/') {
            self.run_command(input);
        } else {
            let username = self.display_user();
            self.push_message(MessageKind::User, username, input.to_string(), None);
            self.schedule_reply(input);
        }
    }

    /// Identify the user; empty input falls back to ANONYMOUS
    pub fn set_username(&mut self, raw: &str) {
        let name = raw.trim().to_uppercase();
        let name = if name.is_empty() { "ANONYMOUS".to_string() } else { name };
        self.push_system(
            format!("USER IDENTIFIED: {}", name),
            Classification::Unclassified,
        );
        self.current_user = Some(name);
    }

    /// The name user messages are attributed to
    pub fn display_user(&self) -> String {
        self.current_user.clone().unwrap_or_else(|| "ANONYMOUS".to_string())
    }

    /// Header connection status
    pub fn connection_status(&self) -> &'static str {
        if self.proxied {
            "PROXIED"
        } else {
            "CONNECTED"
        }
    }

    /// Advance virtual time: run due periodics, drain due tasks, expire
    /// transient state. The single entry point the UI loop calls.
    pub fn tick(&mut self, now: Duration) {
        if now < self.now {
            return;
        }
        self.now = now;

        while self.next_clock <= now {
            self.clock = Local::now().format("%m/%d/%Y, %H:%M:%S").to_string();
            self.next_clock += CLOCK_PERIOD;
        }
        while self.next_network <= now {
            self.simulate_network_activity();
            self.next_network += NETWORK_PERIOD;
        }
        while self.next_atmospheric <= now {
            self.atmospheric_event();
            self.next_atmospheric += ATMOSPHERIC_PERIOD;
        }
        while self.next_chatter <= now {
            self.synthetic_chatter();
            self.next_chatter += CHATTER_PERIOD;
        }

        while let Some(task) = self.scheduler.pop_due(now) {
            self.run_task(task);
        }

        let cutoff = now;
        self.notifications.retain(|n| n.expires_at > cutoff);
        if self.disturbed_until.is_some_and(|t| t <= now) {
            self.disturbed_until = None;
        }
        if self.glitch_until.is_some_and(|t| t <= now) {
            self.glitch_until = None;
        }
    }

    /// Cancel everything still pending; called on teardown
    pub fn shutdown(&mut self) {
        let dropped = self.scheduler.pending();
        self.scheduler.clear();
        debug!(dropped, "session shut down");
    }

    /// Whether the disturbed visual state is active
    pub fn is_disturbed(&self) -> bool {
        self.disturbed_until.is_some()
    }

    /// Whether the glitch visual state is active
    pub fn is_glitching(&self) -> bool {
        self.glitch_until.is_some()
    }

    // ------------------------------------------------------------------
    // Access gate
    // ------------------------------------------------------------------

    /// Compare a code against the allow-list; LOCKED -> UNLOCKED is one-way
    pub fn attempt_access(&mut self, code: &str) {
        let code = code.trim().to_uppercase();
        if content::VALID_ACCESS_CODES.contains(&code.as_str()) {
            self.classified_unlocked = true;
            self.push_system("CLASSIFIED ACCESS GRANTED", Classification::TopSecret);
            return;
        }

        self.failed_access_attempts += 1;
        if self.failed_access_attempts >= LOCKDOWN_THRESHOLD && !self.lockdown_fired {
            self.lockdown_fired = true;
            self.trigger_lockdown();
        }
        self.push_system(
            format!("ACCESS DENIED - ATTEMPT {}/3", self.failed_access_attempts),
            Classification::Warning,
        );
    }

    fn trigger_lockdown(&mut self) {
        warn!(attempts = self.failed_access_attempts, "lockdown triggered");
        self.disturbed_until = Some(self.now + Duration::from_secs(5));
        self.push_system(
            "SECURITY BREACH DETECTED - INITIATING LOCKDOWN PROTOCOLS",
            Classification::Alert,
        );
        self.notify(
            "UNAUTHORIZED ACCESS DETECTED - AUTHORITIES NOTIFIED",
            NoticeKind::Error,
        );
    }

    // ------------------------------------------------------------------
    // Side panels
    // ------------------------------------------------------------------

    /// Location-tracking panel submission
    pub fn track_location(&mut self, lat: &str, lon: &str) {
        let (lat, lon) = (lat.trim(), lon.trim());
        if lat.is_empty() || lon.is_empty() {
            self.notify("INVALID COORDINATES", NoticeKind::Error);
            return;
        }

        self.push_system(
            format!("TRACKING COORDINATES: {}, {}", lat, lon),
            Classification::Confidential,
        );
        let due = self.now + Duration::from_secs(3);
        self.scheduler.schedule(
            due,
            Task::LocationReport {
                lines: content::location_report(lat, lon),
            },
        );
        self.scheduler.schedule(
            due,
            Task::System {
                text: "LOCATION ANALYSIS COMPLETE - THREAT LEVEL: EXTREME".to_string(),
                classification: Classification::Secret,
            },
        );
    }

    /// Symbol-decoder panel submission
    pub fn decode_symbols(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        self.push_system(
            format!("ANALYZING SYMBOLS: {}...", truncate(input, 20)),
            Classification::Confidential,
        );
        let decoded = codec::decode_glyphs(input);
        self.scheduler.schedule(
            self.now + Duration::from_secs(2),
            Task::DecoderReport {
                lines: vec![
                    "DECODED MESSAGE:".to_string(),
                    decoded,
                    "PATTERN ANALYSIS: OPERATOR SIGNATURE DETECTED".to_string(),
                    "THREAT ASSESSMENT: CRITICAL".to_string(),
                ],
            },
        );
    }

    /// Open an evidence file; what happens depends on its status
    pub fn open_evidence(&mut self, index: usize) -> crate::Result<()> {
        let Some(file) = self.evidence.get(index) else {
            return Err(crate::TerminalError::EvidenceNotFound(index).into());
        };

        self.notify(format!("Accessing {}...", file.name), NoticeKind::Info);
        self.scheduler.schedule(
            self.now + Duration::from_millis(1500),
            Task::EvidenceResult { index },
        );
        Ok(())
    }

    /// Purge the log; some things cannot be forgotten
    pub fn clear_log(&mut self) {
        self.messages.clear();
        self.push_system(content::LOG_CLEARED, Classification::Unclassified);
        self.push_system(content::LOG_CLEARED_FOLLOWUP, Classification::Warning);
    }

    /// The user roster the sidebar renders
    pub fn roster(&self) -> Vec<(String, String)> {
        let mut users: Vec<(String, String)> = content::STATIC_ROSTER
            .iter()
            .map(|(name, status)| (name.to_string(), status.to_string()))
            .collect();

        if let Some(user) = &self.current_user {
            if user != "ANONYMOUS" {
                users.insert(0, (user.clone(), "ACTIVE".to_string()));
            }
        }
        users
    }

    // ------------------------------------------------------------------
    // Periodic simulators
    // ------------------------------------------------------------------

    fn simulate_network_activity(&mut self) {
        let line = content::network_activity(&mut self.rng);
        self.push_system(line, Classification::Unclassified);
        self.observer_count = self.rng.random_range(1..=12);
    }

    fn atmospheric_event(&mut self) {
        if !self.rng.random_bool(0.4) {
            return;
        }
        let event = ATMOSPHERIC_EVENTS[self.rng.random_range(0..ATMOSPHERIC_EVENTS.len())];
        self.push_system(event, Classification::Confidential);

        if self.rng.random_bool(0.3) {
            self.disturbed_until = Some(self.now + Duration::from_secs(2));
        }
    }

    fn synthetic_chatter(&mut self) {
        if !self.rng.random_bool(0.6) {
            return;
        }
        let username = SYNTHETIC_USERS[self.rng.random_range(0..SYNTHETIC_USERS.len())];
        let line = SYNTHETIC_CHATTER[self.rng.random_range(0..SYNTHETIC_CHATTER.len())];
        let delay = Duration::from_millis(self.rng.random_range(0..5000));
        self.scheduler.schedule(
            self.now + delay,
            Task::Entity {
                sender: username.to_string(),
                text: line.to_string(),
            },
        );
    }

    // ------------------------------------------------------------------
    // Task execution and log plumbing
    // ------------------------------------------------------------------

    fn run_task(&mut self, task: Task) {
        match task {
            Task::System { text, classification } => {
                self.push_system(text, classification);
            }
            Task::Entity { sender, text } => {
                self.push_entity(sender, text);
            }
            Task::Notify { text, kind } => self.notify(text, kind),
            Task::Disturb { lasting } => {
                self.disturbed_until = Some(self.now + lasting);
            }
            Task::Glitch { lasting } => {
                self.glitch_until = Some(self.now + lasting);
            }
            Task::LocationReport { lines } => self.location_report = Some(lines),
            Task::DecoderReport { lines } => self.decoder_report = Some(lines),
            Task::EvidenceResult { index } => self.resolve_evidence(index),
            Task::MarkProxied => self.proxied = true,
        }
    }

    fn resolve_evidence(&mut self, index: usize) {
        let Some(file) = self.evidence.get(index).cloned() else {
            return;
        };
        match file.status {
            EvidenceStatus::Corrupted => {
                self.notify("FILE CORRUPTED - CANNOT ACCESS", NoticeKind::Error);
                self.push_system(
                    format!("ATTEMPTED ACCESS TO CORRUPTED FILE: {}", file.name),
                    Classification::Warning,
                );
            }
            EvidenceStatus::Redacted => {
                self.notify("ACCESS DENIED - INSUFFICIENT CLEARANCE", NoticeKind::Error);
                self.push_system(
                    format!("UNAUTHORIZED ACCESS ATTEMPT: {}", file.name),
                    Classification::Confidential,
                );
            }
            EvidenceStatus::Available => {
                self.notify(
                    format!("{} loaded successfully", file.name),
                    NoticeKind::Success,
                );
                self.push_system(
                    format!("FILE CONTENT: {}", file.transcript()),
                    file.classification,
                );
            }
        }
    }

    pub(crate) fn push_system(
        &mut self,
        text: impl Into<String>,
        classification: Classification,
    ) {
        self.push_message(
            MessageKind::System,
            "SYSTEM".to_string(),
            text.into(),
            Some(classification),
        );
    }

    pub(crate) fn push_entity(&mut self, sender: impl Into<String>, text: impl Into<String>) {
        self.push_message(MessageKind::Entity, sender.into(), text.into(), None);
    }

    fn push_message(
        &mut self,
        kind: MessageKind,
        sender: String,
        text: String,
        classification: Option<Classification>,
    ) {
        let glitched = self.rng.random_bool(0.1);
        self.messages.push(Message {
            id: Id::new(),
            kind,
            sender,
            text,
            classification,
            timestamp: Utc::now(),
            glitched,
        });
    }

    pub(crate) fn notify(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notifications.push(Notification {
            text: text.into(),
            kind,
            expires_at: self.now + NOTIFICATION_TTL,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// First `max` characters of the input, char-boundary safe
fn truncate(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GENERAL_RESPONSES;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn free_text_gets_an_entity_reply_within_bounds() {
        let mut session = Session::with_seed(1);
        let before = session.messages.len();
        session.submit("hello out there");
        assert_eq!(session.messages.len(), before + 1); // user line, reply pending

        // Max reply delay is 4.5 s
        session.tick(secs(5));
        let reply = session
            .messages
            .iter()
            .find(|m| m.kind == MessageKind::Entity)
            .expect("entity reply");
        assert_eq!(reply.sender, "OBSERVER");
        assert!(GENERAL_RESPONSES.contains(&reply.text.as_str()));
    }

    #[test]
    fn reply_does_not_arrive_before_minimum_delay() {
        let mut session = Session::with_seed(2);
        session.submit("anything at all");
        session.tick(Duration::from_millis(1400));
        assert!(session.messages.iter().all(|m| m.kind != MessageKind::Entity));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = Session::with_seed(3);
        let before = session.messages.len();
        session.submit("   ");
        assert_eq!(session.messages.len(), before);
        assert_eq!(session.scheduler.pending(), 0);
    }

    #[test]
    fn access_gate_counts_up_and_fires_lockdown_once() {
        let mut session = Session::with_seed(4);
        session.attempt_access("wrong");
        session.attempt_access("still wrong");
        assert_eq!(session.failed_access_attempts, 2);
        assert!(!session.is_disturbed());

        session.attempt_access("third strike");
        assert_eq!(session.failed_access_attempts, 3);
        assert!(session.is_disturbed());
        let alerts = session
            .messages
            .iter()
            .filter(|m| m.text.starts_with("SECURITY BREACH DETECTED"))
            .count();
        assert_eq!(alerts, 1);

        // 4th failure increments the counter but never re-fires the alert
        session.tick(secs(10)); // disturbance self-clears after 5 s
        assert!(!session.is_disturbed());
        session.attempt_access("fourth strike");
        assert_eq!(session.failed_access_attempts, 4);
        assert!(!session.is_disturbed());
        let alerts = session
            .messages
            .iter()
            .filter(|m| m.text.starts_with("SECURITY BREACH DETECTED"))
            .count();
        assert_eq!(alerts, 1);
    }

    #[test]
    fn valid_code_unlocks_permanently_even_after_failures() {
        let mut session = Session::with_seed(5);
        for _ in 0..3 {
            session.attempt_access("nope");
        }
        assert!(!session.classified_unlocked);

        session.attempt_access("tribetwelve"); // case-insensitive
        assert!(session.classified_unlocked);
        assert!(session
            .messages
            .iter()
            .any(|m| m.text == "CLASSIFIED ACCESS GRANTED"));

        // No transition back to locked
        session.attempt_access("nope again");
        assert!(session.classified_unlocked);
        assert_eq!(session.failed_access_attempts, 4);
    }

    #[test]
    fn network_simulator_rerolls_observer_count() {
        let mut session = Session::with_seed(6);
        let mut seen = std::collections::HashSet::new();
        for cycle in 1..=20 {
            session.tick(secs(15 * cycle));
            assert!((1..=12).contains(&session.observer_count));
            seen.insert(session.observer_count);
        }
        assert!(seen.len() > 1, "count should actually vary");
    }

    #[test]
    fn network_simulator_appends_a_line_each_period() {
        let mut session = Session::with_seed(7);
        let before = session.messages.len();
        session.tick(secs(15));
        session.tick(secs(30));
        // At least the two network lines; atmospherics may add more
        assert!(session.messages.len() >= before + 2);
    }

    #[test]
    fn synthetic_chatter_eventually_posts_an_entity_line() {
        let mut session = Session::with_seed(8);
        let mut t = 0;
        let found = loop {
            t += 1;
            session.tick(secs(t));
            if session
                .messages
                .iter()
                .any(|m| m.kind == MessageKind::Entity && SYNTHETIC_USERS.contains(&m.sender.as_str()))
            {
                break true;
            }
            if t > 2000 {
                break false;
            }
        };
        assert!(found, "p=0.6 per 45 s cycle should fire well within 40 cycles");
    }

    #[test]
    fn log_is_append_only_until_cleared() {
        let mut session = Session::with_seed(9);
        session.submit("one");
        session.submit("two");
        let len = session.messages.len();
        session.tick(secs(1));
        assert!(session.messages.len() >= len);

        session.clear_log();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].text, content::LOG_CLEARED);
        assert_eq!(session.messages[1].text, content::LOG_CLEARED_FOLLOWUP);
    }

    #[test]
    fn username_is_trimmed_and_uppercased() {
        let mut session = Session::with_seed(10);
        session.set_username("  nightwatch ");
        assert_eq!(session.current_user.as_deref(), Some("NIGHTWATCH"));
        assert!(session
            .messages
            .iter()
            .any(|m| m.text == "USER IDENTIFIED: NIGHTWATCH"));
        assert_eq!(session.roster()[0].0, "NIGHTWATCH");
    }

    #[test]
    fn empty_username_falls_back_to_anonymous() {
        let mut session = Session::with_seed(11);
        session.set_username("   ");
        assert_eq!(session.current_user.as_deref(), Some("ANONYMOUS"));
        // ANONYMOUS is already in the static roster, not prepended
        assert_eq!(session.roster()[0].0, "ANONYMOUS");
        assert_eq!(session.roster().len(), content::STATIC_ROSTER.len());
    }

    #[test]
    fn tracking_without_coordinates_only_notifies() {
        let mut session = Session::with_seed(12);
        let messages = session.messages.len();
        session.track_location("", "48.85");
        assert_eq!(session.messages.len(), messages);
        assert_eq!(session.scheduler.pending(), 0);
        assert!(session
            .notifications
            .iter()
            .any(|n| n.text == "INVALID COORDINATES"));
    }

    #[test]
    fn tracking_resolves_into_the_panel_after_three_seconds() {
        let mut session = Session::with_seed(13);
        session.track_location("48.85", "2.35");
        session.tick(secs(2));
        assert!(session.location_report.is_none());

        session.tick(secs(3));
        let report = session.location_report.as_ref().expect("report");
        assert_eq!(report[1], "Coordinates: 48.85, 2.35");
        assert!(session
            .messages
            .iter()
            .any(|m| m.text.starts_with("LOCATION ANALYSIS COMPLETE")));
    }

    #[test]
    fn decoder_resolves_after_two_seconds() {
        let mut session = Session::with_seed(14);
        session.decode_symbols("▲█");
        assert!(session.decoder_report.is_none());

        session.tick(secs(2));
        let report = session.decoder_report.as_ref().expect("report");
        assert_eq!(report[1], "WATCHFOLLOW");
    }

    #[test]
    fn corrupted_evidence_cannot_be_accessed() {
        let mut session = Session::with_seed(15);
        session.open_evidence(0).unwrap();
        session.tick(secs(2));
        assert!(session
            .notifications
            .iter()
            .any(|n| n.text == "FILE CORRUPTED - CANNOT ACCESS"));
        assert!(session
            .messages
            .iter()
            .any(|m| m.text.starts_with("ATTEMPTED ACCESS TO CORRUPTED FILE")));
    }

    #[test]
    fn available_evidence_reveals_its_transcript() {
        let mut session = Session::with_seed(16);
        session.open_evidence(2).unwrap();
        session.tick(secs(2));
        assert!(session
            .messages
            .iter()
            .any(|m| m.text.starts_with("FILE CONTENT: TRANSCRIPT")));
    }

    #[test]
    fn opening_a_missing_file_is_an_error() {
        let mut session = Session::with_seed(17);
        assert!(session.open_evidence(99).is_err());
    }

    #[test]
    fn notifications_expire() {
        let mut session = Session::with_seed(18);
        session.notify("ping", NoticeKind::Info);
        session.tick(secs(4));
        assert_eq!(session.notifications.len(), 1);
        session.tick(secs(6));
        assert!(session.notifications.is_empty());
    }

    #[test]
    fn shutdown_cancels_pending_tasks() {
        let mut session = Session::with_seed(19);
        session.submit("hello");
        assert!(session.scheduler.pending() > 0);
        session.shutdown();
        assert_eq!(session.scheduler.pending(), 0);
    }
}

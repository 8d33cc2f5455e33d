//! Slash-command parsing and handlers
//!
//! Input starting with `/` never reaches free-text dispatch. The first
//! token picks the handler case-insensitively; everything after it keeps
//! its original case, because `/decrypt` must see the code exactly as
//! `/encrypt` produced it. Handlers validate their own arguments and
//! answer missing ones with an ERROR-classified line and no other state
//! change.

use crate::content::{
    Classification, COMMAND_HELP, SYMBOL_VERDICTS, TRACE_DEVICES, TRACE_STATUSES,
    TRACE_THREAT_LEVELS,
};
use crate::session::scheduler::{NoticeKind, Task};
use crate::session::{codec, Session};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Users,
    Trace { target: Option<String> },
    Encrypt { text: String },
    Decrypt { code: Option<String> },
    Coordinates { lat: Option<String>, lon: Option<String> },
    Symbol { pattern: String },
    Surveillance,
    Proxy,
    Operator { lat: Option<String>, lon: Option<String> },
    Unknown { token: String },
}

/// Split off the command token (lower-cased) and parse the rest in place
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (trimmed, ""),
    };
    let head = head.to_lowercase();
    let mut args = rest.split_whitespace();

    match head.as_str() {
        "/help" => Command::Help,
        "/status" => Command::Status,
        "/users" => Command::Users,
        "/trace" => Command::Trace {
            target: args.next().map(String::from),
        },
        "/encrypt" => Command::Encrypt {
            text: rest.to_string(),
        },
        "/decrypt" => Command::Decrypt {
            code: args.next().map(String::from),
        },
        "/coordinates" => Command::Coordinates {
            lat: args.next().map(String::from),
            lon: args.next().map(String::from),
        },
        "/symbol" => Command::Symbol {
            pattern: rest.to_string(),
        },
        "/surveillance" => Command::Surveillance,
        "/proxy" => Command::Proxy,
        "/operator" => Command::Operator {
            lat: args.next().map(String::from),
            lon: args.next().map(String::from),
        },
        _ => Command::Unknown { token: head },
    }
}

impl Session {
    /// Entry point for `/`-prefixed input
    pub(crate) fn run_command(&mut self, raw: &str) {
        let command = parse(raw);
        debug!(?command, "command dispatched");

        match command {
            Command::Help => self.cmd_help(),
            Command::Status => self.cmd_status(),
            Command::Users => self.cmd_users(),
            Command::Trace { target } => self.cmd_trace(target),
            Command::Encrypt { text } => self.cmd_encrypt(&text),
            Command::Decrypt { code } => self.cmd_decrypt(code),
            Command::Coordinates { lat, lon } => self.cmd_coordinates(lat, lon),
            Command::Symbol { pattern } => self.cmd_symbol(&pattern),
            Command::Surveillance => self.cmd_surveillance(),
            Command::Proxy => self.cmd_proxy(),
            Command::Operator { lat, lon } => self.cmd_operator(lat, lon),
            Command::Unknown { token } => {
                self.push_system(
                    format!("UNKNOWN COMMAND: {}", token),
                    Classification::Error,
                );
            }
        }
    }

    fn cmd_help(&mut self) {
        self.push_system(COMMAND_HELP, Classification::Unclassified);
    }

    fn cmd_status(&mut self) {
        let level = if self.classified_unlocked {
            "TOP SECRET"
        } else {
            "CONFIDENTIAL"
        };
        let status = format!(
            "SYSTEM STATUS:\n\
             Observers Connected: {}\n\
             Messages Processed: {}\n\
             Classification Level: {}\n\
             Collective Synchronization: 78%\n\
             Reality Stability: UNSTABLE\n\
             Operator Proximity: ██████",
            self.observer_count,
            self.messages.len(),
            level
        );
        self.push_system(status, Classification::Confidential);
    }

    fn cmd_users(&mut self) {
        self.push_system(
            format!("ACTIVE USERS: {}", self.observer_count),
            Classification::Unclassified,
        );
        self.push_system("CLASSIFICATION LEVELS VARY", Classification::Confidential);
        self.push_system("SOME USERS MAY NOT BE HUMAN", Classification::Warning);
        self.scheduler.schedule(
            self.now + Duration::from_secs(2),
            Task::Entity {
                sender: "COLLECTIVE".to_string(),
                text: "WE ARE ALL HERE... ALWAYS WATCHING...".to_string(),
            },
        );
    }

    fn cmd_trace(&mut self, target: Option<String>) {
        let Some(target) = target else {
            self.push_system("SPECIFY USER TO TRACE", Classification::Error);
            return;
        };

        self.push_system(
            format!("INITIATING TRACE ON USER: {}", target.to_uppercase()),
            Classification::Secret,
        );

        let results = [
            format!(
                "LOCATION: {}.{} N, {}.{} W",
                self.rng.random_range(0..90),
                self.rng.random_range(0..999_999u32),
                self.rng.random_range(0..180),
                self.rng.random_range(0..999_999u32),
            ),
            format!(
                "DEVICE: {}",
                TRACE_DEVICES[self.rng.random_range(0..TRACE_DEVICES.len())]
            ),
            format!(
                "STATUS: {}",
                TRACE_STATUSES[self.rng.random_range(0..TRACE_STATUSES.len())]
            ),
            format!(
                "THREAT LEVEL: {}",
                TRACE_THREAT_LEVELS[self.rng.random_range(0..TRACE_THREAT_LEVELS.len())]
            ),
        ];

        // Trace output trickles in one line per second
        for (i, line) in results.into_iter().enumerate() {
            self.scheduler.schedule(
                self.now + Duration::from_secs(2 + i as u64),
                Task::System {
                    text: line,
                    classification: Classification::Secret,
                },
            );
        }
    }

    fn cmd_encrypt(&mut self, text: &str) {
        if text.is_empty() {
            self.push_system("NO MESSAGE TO ENCRYPT", Classification::Error);
            return;
        }
        let encoded = codec::encode_transmission(text);
        self.push_system(
            format!("ENCRYPTED: {}", encoded),
            Classification::Confidential,
        );
        self.push_system("TRANSMISSION SECURE", Classification::Unclassified);
    }

    fn cmd_decrypt(&mut self, code: Option<String>) {
        let Some(code) = code else {
            self.push_system("NO CODE TO DECRYPT", Classification::Error);
            return;
        };
        match codec::decode_transmission(&code) {
            Ok(decoded) => self.push_system(
                format!("DECRYPTED: {}", decoded),
                Classification::Confidential,
            ),
            Err(_) => self.push_system("DECRYPTION FAILED - INVALID CODE", Classification::Error),
        }
    }

    fn cmd_coordinates(&mut self, lat: Option<String>, lon: Option<String>) {
        let (Some(lat), Some(lon)) = (lat, lon) else {
            self.push_system("INVALID COORDINATE FORMAT", Classification::Error);
            return;
        };

        self.coordinates.push(crate::session::CoordinateFix {
            lat: lat.clone(),
            lon: lon.clone(),
            logged_at: chrono::Utc::now(),
        });
        self.push_system(
            format!("COORDINATES LOGGED: {}, {}", lat, lon),
            Classification::Confidential,
        );
        self.push_system("LOCATION ADDED TO SURVEILLANCE GRID", Classification::Secret);

        if self.rng.random_bool(0.3) {
            let due = self.now + Duration::from_secs(3);
            self.scheduler.schedule(
                due,
                Task::System {
                    text: "ANOMALOUS ACTIVITY DETECTED AT COORDINATES".to_string(),
                    classification: Classification::Alert,
                },
            );
            self.scheduler.schedule(
                due,
                Task::Entity {
                    sender: "OBSERVER".to_string(),
                    text: "Something tall is moving in that area...".to_string(),
                },
            );
        }
    }

    fn cmd_symbol(&mut self, pattern: &str) {
        if pattern.is_empty() {
            self.push_system("NO SYMBOL DATA PROVIDED", Classification::Error);
            return;
        }

        let preview: String = pattern.chars().take(20).collect();
        self.push_system(
            format!("ANALYZING SYMBOL PATTERN: {}...", preview),
            Classification::Confidential,
        );

        let verdict = SYMBOL_VERDICTS[self.rng.random_range(0..SYMBOL_VERDICTS.len())];
        let due = self.now + Duration::from_secs(3);
        self.scheduler.schedule(
            due,
            Task::System {
                text: format!("ANALYSIS COMPLETE: {}", verdict),
                classification: Classification::Secret,
            },
        );
        if verdict.contains("HAZARD") {
            self.scheduler.schedule(
                due,
                Task::Notify {
                    text: "MEMETIC HAZARD DETECTED - COGNITIVE PROTECTION ACTIVATED".to_string(),
                    kind: NoticeKind::Warning,
                },
            );
            self.scheduler.schedule(
                due,
                Task::Disturb {
                    lasting: Duration::from_secs(2),
                },
            );
        }
    }

    fn cmd_surveillance(&mut self) {
        self.push_system("SURVEILLANCE MODE ACTIVATED", Classification::Secret);
        self.push_system("ACCESSING CAMERA NETWORK...", Classification::Secret);

        let due = self.now + Duration::from_secs(4);
        self.scheduler.schedule(
            due,
            Task::System {
                text: "MULTIPLE ANOMALIES DETECTED".to_string(),
                classification: Classification::Alert,
            },
        );
        self.scheduler.schedule(
            due,
            Task::System {
                text: "TALL FIGURE SPOTTED IN SECTOR 12".to_string(),
                classification: Classification::Critical,
            },
        );
        self.scheduler.schedule(
            due,
            Task::Disturb {
                lasting: Duration::from_secs(3),
            },
        );
    }

    fn cmd_proxy(&mut self) {
        let username = self.display_user();
        self.push_system(
            format!("PROXY MODE ACTIVATED FOR USER: {}", username),
            Classification::TopSecret,
        );
        self.push_system("CONSCIOUSNESS TRANSFER INITIATED...", Classification::TopSecret);

        let due = self.now + Duration::from_secs(3);
        self.scheduler.schedule(
            due,
            Task::Entity {
                sender: "THE COLLECTIVE".to_string(),
                text: "YOU ARE NOW PART OF US".to_string(),
            },
        );
        self.scheduler.schedule(
            due,
            Task::Entity {
                sender: "THE COLLECTIVE".to_string(),
                text: "RESISTANCE WAS ALWAYS FUTILE".to_string(),
            },
        );
        self.scheduler.schedule(due, Task::MarkProxied);
    }

    fn cmd_operator(&mut self, lat: Option<String>, lon: Option<String>) {
        let (Some(lat), Some(lon)) = (lat, lon) else {
            self.push_system(
                "INVALID COORDINATES FOR OPERATOR SIGHTING",
                Classification::Error,
            );
            return;
        };

        self.push_system(
            format!("OPERATOR SIGHTING LOGGED: {}, {}", lat, lon),
            Classification::Critical,
        );
        self.push_system("DISPATCH TEAMS NOTIFIED", Classification::Secret);
        self.push_system("WARNING: DO NOT APPROACH AREA", Classification::Alert);

        let due = self.now + Duration::from_secs(2);
        self.scheduler.schedule(
            due,
            Task::Entity {
                sender: "THE TALL ONE".to_string(),
                text: "I SEE YOU LOOKING FOR ME".to_string(),
            },
        );
        self.scheduler.schedule(
            due,
            Task::Entity {
                sender: "THE TALL ONE".to_string(),
                text: "BUT I AM ALREADY BEHIND YOU".to_string(),
            },
        );
        self.scheduler.schedule(
            due,
            Task::Notify {
                text: "REALITY BREACH DETECTED".to_string(),
                kind: NoticeKind::Error,
            },
        );
        self.scheduler.schedule(
            due,
            Task::Glitch {
                lasting: Duration::from_secs(5),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MessageKind;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn last_text(session: &Session) -> &str {
        &session.messages.last().unwrap().text
    }

    #[test]
    fn command_token_is_case_insensitive_but_arguments_are_not() {
        assert_eq!(
            parse("/ENCRYPT Secret Words"),
            Command::Encrypt {
                text: "Secret Words".to_string()
            }
        );
        assert_eq!(
            parse("/Decrypt AbC="),
            Command::Decrypt {
                code: Some("AbC=".to_string())
            }
        );
    }

    #[test]
    fn unknown_commands_echo_the_token_as_an_error() {
        let mut session = Session::with_seed(20);
        session.submit("/summon");
        let last = session.messages.last().unwrap();
        assert_eq!(last.text, "UNKNOWN COMMAND: /summon");
        assert_eq!(last.classification, Some(Classification::Error));
    }

    #[test]
    fn help_lists_every_command() {
        let mut session = Session::with_seed(21);
        session.submit("/help");
        let text = last_text(&session);
        for name in [
            "/help", "/status", "/users", "/trace", "/encrypt", "/decrypt", "/coordinates",
            "/symbol", "/surveillance", "/proxy", "/operator",
        ] {
            assert!(text.contains(name), "help is missing {}", name);
        }
    }

    #[test]
    fn status_reports_the_unlock_level() {
        let mut session = Session::with_seed(22);
        session.submit("/status");
        assert!(last_text(&session).contains("Classification Level: CONFIDENTIAL"));

        session.attempt_access("OPERATOR");
        session.submit("/status");
        assert!(last_text(&session).contains("Classification Level: TOP SECRET"));
    }

    #[test]
    fn encrypt_hello_matches_the_documented_form() {
        let mut session = Session::with_seed(23);
        session.submit("/encrypt HELLO");
        let encrypted = session
            .messages
            .iter()
            .find(|m| m.text.starts_with("ENCRYPTED: "))
            .expect("encrypted line");
        assert_eq!(encrypted.text, "ENCRYPTED: =8ETMVES");
        assert_eq!(encrypted.classification, Some(Classification::Confidential));
        assert_eq!(last_text(&session), "TRANSMISSION SECURE");
    }

    #[test]
    fn decrypt_round_trips_what_encrypt_produced() {
        let mut session = Session::with_seed(24);
        session.submit("/encrypt The Operator Is Near");
        let code = session
            .messages
            .iter()
            .find_map(|m| m.text.strip_prefix("ENCRYPTED: "))
            .unwrap()
            .to_string();

        session.submit(&format!("/decrypt {}", code));
        assert_eq!(last_text(&session), "DECRYPTED: The Operator Is Near");
    }

    #[test]
    fn decrypt_rejects_garbage() {
        let mut session = Session::with_seed(25);
        session.submit("/decrypt !!!notbase64!!!");
        let last = session.messages.last().unwrap();
        assert_eq!(last.text, "DECRYPTION FAILED - INVALID CODE");
        assert_eq!(last.classification, Some(Classification::Error));
    }

    #[test]
    fn missing_arguments_change_nothing_else() {
        for (input, reply) in [
            ("/encrypt", "NO MESSAGE TO ENCRYPT"),
            ("/decrypt", "NO CODE TO DECRYPT"),
            ("/trace", "SPECIFY USER TO TRACE"),
            ("/coordinates 51.5", "INVALID COORDINATE FORMAT"),
            ("/symbol", "NO SYMBOL DATA PROVIDED"),
            ("/operator 51.5", "INVALID COORDINATES FOR OPERATOR SIGHTING"),
        ] {
            let mut session = Session::with_seed(26);
            let messages = session.messages.len();
            let coordinates = session.coordinates.len();
            session.submit(input);

            let last = session.messages.last().unwrap();
            assert_eq!(last.text, reply, "for {}", input);
            assert_eq!(last.classification, Some(Classification::Error));
            assert_eq!(session.messages.len(), messages + 1, "for {}", input);
            assert_eq!(session.coordinates.len(), coordinates);
            assert_eq!(session.scheduler.pending(), 0, "for {}", input);
        }
    }

    #[test]
    fn trace_results_trickle_in_staggered() {
        let mut session = Session::with_seed(27);
        session.submit("/trace watcher_7");
        assert_eq!(last_text(&session), "INITIATING TRACE ON USER: WATCHER_7");
        assert_eq!(session.scheduler.pending(), 4);

        session.tick(secs(2));
        assert!(last_text(&session).starts_with("LOCATION: "));
        session.tick(secs(3));
        assert!(last_text(&session).starts_with("DEVICE: "));
        session.tick(secs(5));
        assert!(last_text(&session).starts_with("THREAT LEVEL: "));
        assert_eq!(session.scheduler.pending(), 0);
    }

    #[test]
    fn coordinates_append_to_the_log() {
        let mut session = Session::with_seed(28);
        session.submit("/coordinates 40.7 -74.0");
        assert_eq!(session.coordinates.len(), 1);
        assert_eq!(session.coordinates[0].lat, "40.7");
        assert_eq!(session.coordinates[0].lon, "-74.0");
        assert!(session
            .messages
            .iter()
            .any(|m| m.text == "COORDINATES LOGGED: 40.7, -74.0"));
    }

    #[test]
    fn symbol_analysis_resolves_to_a_known_verdict() {
        let mut session = Session::with_seed(29);
        session.submit("/symbol ▲▲▲");
        session.tick(secs(3));
        let verdict = session
            .messages
            .iter()
            .find_map(|m| m.text.strip_prefix("ANALYSIS COMPLETE: "))
            .expect("verdict line");
        assert!(SYMBOL_VERDICTS.contains(&verdict));
    }

    #[test]
    fn surveillance_escalates_after_four_seconds() {
        let mut session = Session::with_seed(30);
        session.submit("/surveillance");
        assert!(last_text(&session).contains("CAMERA NETWORK"));
        assert!(!session.is_disturbed());

        session.tick(secs(4));
        assert!(session.is_disturbed());
        assert!(session
            .messages
            .iter()
            .any(|m| m.text == "TALL FIGURE SPOTTED IN SECTOR 12"));

        session.tick(secs(8));
        assert!(!session.is_disturbed());
    }

    #[test]
    fn proxy_marks_the_session_proxied() {
        let mut session = Session::with_seed(31);
        session.set_username("drifter");
        session.submit("/proxy");
        assert!(session
            .messages
            .iter()
            .any(|m| m.text == "PROXY MODE ACTIVATED FOR USER: DRIFTER"));
        assert!(!session.proxied);

        session.tick(secs(3));
        assert!(session.proxied);
        assert_eq!(session.connection_status(), "PROXIED");
        let collective_lines = session
            .messages
            .iter()
            .filter(|m| m.kind == MessageKind::Entity && m.sender == "THE COLLECTIVE")
            .count();
        assert_eq!(collective_lines, 2);
    }

    #[test]
    fn operator_sighting_triggers_the_glitch_state() {
        let mut session = Session::with_seed(32);
        session.submit("/operator 44.1 -93.5");
        assert!(!session.is_glitching());

        session.tick(secs(2));
        assert!(session.is_glitching());
        assert!(session
            .notifications
            .iter()
            .any(|n| n.text == "REALITY BREACH DETECTED"));
        assert!(session
            .messages
            .iter()
            .any(|m| m.sender == "THE TALL ONE" && m.text == "BUT I AM ALREADY BEHIND YOU"));

        session.tick(secs(8));
        assert!(!session.is_glitching());
    }

    #[test]
    fn users_command_ends_with_the_collective() {
        let mut session = Session::with_seed(33);
        session.submit("/users");
        assert_eq!(last_text(&session), "SOME USERS MAY NOT BE HUMAN");

        session.tick(secs(2));
        assert_eq!(last_text(&session), "WE ARE ALL HERE... ALWAYS WATCHING...");
    }
}

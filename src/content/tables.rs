//! String tables behind every fabricated response
//!
//! The whole "intelligence" of the terminal lives here: fixed tables that
//! dispatch picks from by random index. Keep entries in ALL CAPS where the
//! fiction demands it; the entities do not use lowercase.

use rand::Rng;

/// Boot line emitted when a session starts
pub const WELCOME: &str = "TERMINAL INITIALIZED... COLLECTIVE UNCONSCIOUS PROTOCOL ACTIVE";

/// Lines emitted when the log is purged
pub const LOG_CLEARED: &str = "TERMINAL CLEARED... COLLECTIVE MEMORY PURGED";
pub const LOG_CLEARED_FOLLOWUP: &str = "MEMORY WIPE COMPLETE - BUT SOME THINGS CANNOT BE FORGOTTEN";

/// Entity replies, five per category
pub const SLENDER_RESPONSES: [&str; 5] = [
    "HE IS ALWAYS WATCHING",
    "THE TALL SHADOWS GROW LONGER",
    "HE HAS NO FACE BUT HE SEES ALL",
    "THE OPERATOR SYMBOL APPEARS EVERYWHERE",
    "PROXY BEHAVIOR DETECTED IN USER PATTERNS",
];

pub const COLLECTIVE_RESPONSES: [&str; 5] = [
    "WE ARE ALL CONNECTED IN THE UNCONSCIOUS",
    "THE COLLECTIVE SHARES YOUR FEAR",
    "RESISTANCE IS FUTILE - JOIN THE NETWORK",
    "YOUR THOUGHTS ARE NOT YOUR OWN",
    "THE HIVE MIND GROWS STRONGER",
];

pub const LOCATION_RESPONSES: [&str; 5] = [
    "COORDINATES LOGGED AND TRANSMITTED",
    "LOCATION TRIANGULATED - THEY KNOW WHERE YOU ARE",
    "GPS TRACKING COMPROMISED",
    "YOUR POSITION HAS BEEN COMPROMISED",
    "SURVEILLANCE DRONES DISPATCHED TO YOUR LOCATION",
];

pub const PARANOID_RESPONSES: [&str; 5] = [
    "THEY ARE BEHIND YOU RIGHT NOW",
    "THE WATCHERS NEVER SLEEP",
    "CAMERA FEEDS SHOW ANOMALOUS FIGURES",
    "MOTION DETECTED IN PERIPHERAL VISION",
    "YOU ARE NEVER TRULY ALONE",
];

pub const GENERAL_RESPONSES: [&str; 5] = [
    "TRANSMISSION RECEIVED AND LOGGED",
    "BEHAVIORAL PATTERNS ANALYZED",
    "DATA ARCHIVED IN COLLECTIVE DATABASE",
    "NEURAL PATHWAYS MAPPED",
    "CONSCIOUSNESS SYNCHRONIZATION IN PROGRESS",
];

/// Secondary alerts that sometimes follow an entity reply
pub const SYSTEM_ALERTS: [&str; 7] = [
    "ANOMALOUS ACTIVITY DETECTED",
    "REALITY BREACH PROBABILITY: 87%",
    "OPERATOR SYMBOL FREQUENCY INCREASING",
    "COLLECTIVE UNCONSCIOUS DISTURBANCE",
    "PROXY INFILTRATION SUSPECTED",
    "TIMELINE CONVERGENCE IMMINENT",
    "SURVEILLANCE GRID COMPROMISED",
];

/// Atmospheric events, fired probabilistically every 30 seconds
pub const ATMOSPHERIC_EVENTS: [&str; 6] = [
    "REALITY DISTORTION DETECTED IN SECTOR 7",
    "OPERATOR SIGHTING REPORTED - COORDINATES CLASSIFIED",
    "COLLECTIVE UNCONSCIOUS ACTIVITY SPIKE",
    "PROXY NETWORK TRANSMISSION INTERCEPTED",
    "████████ EVENT IN PROGRESS - AVOID AREA",
    "DIMENSIONAL BREACH PROBABILITY: INCREASING",
];

/// Names the synthetic-user simulator posts under
pub const SYNTHETIC_USERS: [&str; 8] = [
    "OBSERVER_001",
    "PROXY_ALPHA",
    "COLLECTIVE_NODE",
    "WATCHER_7",
    "SLEEPWALKER",
    "HARBINGER",
    "THE_TALL_ONE",
    "FIREBRAND",
];

/// What the synthetic users say
pub const SYNTHETIC_CHATTER: [&str; 7] = [
    "Connection established from unknown location",
    "Surveillance feeds show movement",
    "The symbols are appearing again",
    "Reality feels unstable tonight",
    "Can anyone else see the tall figure?",
    "The collective grows stronger",
    "He has no face but He sees all",
];

/// Static entries in the user roster
pub const STATIC_ROSTER: [(&str, &str); 4] = [
    ("ANONYMOUS", "CONNECTED"),
    ("OBSERVER_001", "WATCHING"),
    ("PROXY_ALPHA", "INFILTRATED"),
    ("COLLECTIVE_NODE", "SYNCHRONIZED"),
];

/// Fabricated `/trace` result fragments
pub const TRACE_DEVICES: [&str; 3] = ["TERMINAL_001", "MOBILE_UNIT", "COLLECTIVE_NODE"];
pub const TRACE_STATUSES: [&str; 4] = ["COMPROMISED", "UNDER SURVEILLANCE", "PROXIED", "CONNECTED"];
pub const TRACE_THREAT_LEVELS: [&str; 4] = ["LOW", "MODERATE", "HIGH", "CRITICAL"];

/// Verdicts for `/symbol` analysis
pub const SYMBOL_VERDICTS: [&str; 5] = [
    "OPERATOR SIGNATURE DETECTED",
    "DIMENSIONAL INSTABILITY MARKERS PRESENT",
    "COLLECTIVE UNCONSCIOUS RESONANCE: HIGH",
    "PATTERN MATCHES KNOWN PROXY COMMUNICATIONS",
    "WARNING: MEMETIC HAZARD POTENTIAL",
];

/// Code phrases that unlock the classified section
pub const VALID_ACCESS_CODES: [&str; 4] = ["TRIBETWELVE", "OPERATOR", "COLLECTIVE", "████████"];

/// Glyph substitution table for the symbol decoder
pub const GLYPH_CIPHER: [(char, &str); 5] = [
    ('▲', "WATCH"),
    ('█', "FOLLOW"),
    ('▓', "COLLECT"),
    ('▒', "OBSERVE"),
    ('░', "CONNECT"),
];

/// Decoder output when the input contains none of the known glyphs
pub const OMINOUS_FALLBACK: &str =
    "HE IS COMING... THE TALL SHADOW APPROACHES... RESISTANCE IS FUTILE...";

/// `/help` output
pub const COMMAND_HELP: &str = "\
AVAILABLE COMMANDS:
/help - Show this help
/status - System status
/users - List active users
/trace [username] - Trace user activity
/encrypt [message] - Encrypt message
/decrypt [code] - Decrypt code
/coordinates [lat] [lon] - Log coordinates
/symbol [text] - Analyze symbols
/surveillance - Activate surveillance
/proxy - Enter proxy mode
/operator [lat] [lon] - Report operator sighting";

/// Dossier shown once classified access is granted
pub const DOSSIER_TITLE: &str = "PROJECT COLLECTIVE UNCONSCIOUS";
pub const DOSSIER_ENTRIES: [&str; 5] = [
    "Operator Entity - Behavioral Analysis",
    "Proxy Network - Infiltration Protocols",
    "Reality Distortion Events - Timeline",
    "Collective Consciousness - Neural Mapping",
    "████████ - [DATA EXPUNGED]",
];
pub const DOSSIER_WARNING: [&str; 3] = [
    "⚠ BY ACCESSING THIS INFORMATION, YOU HAVE BECOME A PERSON OF INTEREST ⚠",
    "YOUR LOCATION HAS BEEN LOGGED",
    "EXPECT SURVEILLANCE",
];

/// One fabricated network-activity line, drawn for the 15 s simulator
pub fn network_activity(rng: &mut impl Rng) -> String {
    match rng.random_range(0..4) {
        0 => format!("USER_JOINED: OBSERVER_{}", rng.random_range(0..1000)),
        1 => format!("USER_DISCONNECTED: PROXY_{}", rng.random_range(0..100)),
        2 => "ANOMALOUS_ACTIVITY_DETECTED".to_string(),
        _ => format!(
            "COLLECTIVE_SYNCHRONIZATION_UPDATE: {}%",
            70 + rng.random_range(0..20)
        ),
    }
}

/// Canned location-analysis report for the coordinates panel
pub fn location_report(lat: &str, lon: &str) -> Vec<String> {
    vec![
        "LOCATION ANALYSIS:".to_string(),
        format!("Coordinates: {}, {}", lat, lon),
        "Operator Activity: HIGH".to_string(),
        "Dimensional Instability: 78%".to_string(),
        "Collective Presence: DETECTED".to_string(),
        "⚠ WARNING: AVOID THIS AREA ⚠".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn network_activity_always_produces_a_line() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(!network_activity(&mut rng).is_empty());
        }
    }

    #[test]
    fn synchronization_percentage_stays_in_band() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            let line = network_activity(&mut rng);
            if let Some(rest) = line.strip_prefix("COLLECTIVE_SYNCHRONIZATION_UPDATE: ") {
                let pct: u32 = rest.trim_end_matches('%').parse().unwrap();
                assert!((70..90).contains(&pct));
            }
        }
    }

    #[test]
    fn location_report_embeds_coordinates() {
        let report = location_report("47.2", "-122.5");
        assert_eq!(report[1], "Coordinates: 47.2, -122.5");
        assert_eq!(report.len(), 6);
    }
}

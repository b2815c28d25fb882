//! Core type aliases, rule defaults, and runtime utilities for halligalli.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by the card, gameroom, and console layers.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chat channel identifier. One game session lives per channel.
pub type ChannelId = String;
/// Numeric id of a fruit or animal kind as authored in the asset file.
pub type Variant = u32;
/// Number of fruits drawn on a card, or tallied across a window.
pub type Count = u32;
/// Arming generation of a session's reveal timer.
pub type Epoch = u64;

// ============================================================================
// RULE DEFAULTS
// The tabletop rule: ring when the last five cards show exactly five of one
// fruit, or any animal.
// ============================================================================
/// Number of most recent cards considered when the bell is rung.
pub const WINDOW_SIZE: usize = 5;
/// Exact fruit tally that wins a round.
pub const WIN_COUNT: Count = 5;
/// Seconds between automatic card reveals while a round is running.
pub const DEAL_INTERVAL: u64 = 7;

// ============================================================================
// QUEUE CAPACITIES
// Producers block on events, timers drop-and-retry on ticks, and the
// dispatcher gives up on a message after DELIVERY_TIMEOUT.
// ============================================================================
/// Inbound chat events awaiting the dispatcher.
pub const EVENT_CAPACITY: usize = 8;
/// Outbound notifications awaiting the notifier.
pub const MESSAGE_CAPACITY: usize = 8;
/// Timer ticks awaiting the dispatcher.
pub const TICK_CAPACITY: usize = 32;
/// Longest the dispatcher waits on a full outbound queue before dropping.
pub const DELIVERY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(2);

// ============================================================================
// ASSETS
// ============================================================================
/// Default location of the card catalog.
pub const ASSET_PATH: &str = "./asset.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Running rounds are not persisted, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, closing all tables");
            std::process::exit(0);
        }
    });
}

/// Parse duration string like "500ms", "30s", "5m" into Duration.
/// Bare numbers are read as seconds.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        return ms.parse().ok().map(std::time::Duration::from_millis);
    }
    let (num, unit) = match s.chars().last()? {
        c if c.is_ascii_digit() => (s, "s"),
        c => s.split_at(s.len() - c.len_utf8()),
    };
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => value.checked_mul(60).map(std::time::Duration::from_secs),
        "h" => value.checked_mul(3600).map(std::time::Duration::from_secs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[test]
    fn parse_units() {
        assert_eq!(parse_duration("7"), Some(Duration::from_secs(7)));
        assert_eq!(parse_duration("7s"), Some(Duration::from_secs(7)));
        assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
    }
    #[test]
    fn parse_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("3d"), None);
        assert_eq!(parse_duration(&format!("{}m", u64::MAX)), None);
        assert_eq!(parse_duration(&format!("{}h", u64::MAX / 60)), None);
    }
}

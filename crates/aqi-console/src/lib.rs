//! Colorful console output for the AQI service.
//!
//! Provides a custom `tracing` layer that formats service events with colors.
//!
//! ## Events
//!
//! - `server_start`: listening address and CORS posture
//! - `evaluation`: one computed index with its category
//! - `rejected`: a request refused before or during evaluation
//! - `shutdown`: graceful stop
//!
//! Any other event passing the filter is printed as a plain line.

use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing with `default_filter`, which
/// `RUST_LOG` overrides when set.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AqiConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
    _    ___  ___    ____ _                    _     _
   / \  / _ \|_ _|  / ___| |__   ___ _ __ ___ (_)___| |_ _ __ _   _
  / _ \| | | || |  | |   | '_ \ / _ \ '_ ` _ \| / __| __| '__| | | |
 / ___ \ |_| || |  | |___| | | |  __/ | | | | | \__ \ |_| |  | |_| |
/_/   \_\__\_\___|  \____|_| |_|\___|_| |_| |_|_|___/\__|_|   \__, |
                                                             |___/
"#;

    let version_line = format!("            v{} - Air Quality Index Backend\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats service events with colors.
pub struct AqiConsoleLayer;

impl<S: Subscriber> Layer<S> for AqiConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level(), metadata.target());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    address: Option<String>,
    cors_mode: Option<String>,
    aqi: Option<f64>,
    category: Option<String>,
    dominant: Option<String>,
    status: Option<u64>,
    reason: Option<String>,
    // Remaining fields, rendered as `key=value` on plain lines.
    extra: String,
}

impl EventVisitor {
    fn record_string(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "address" => self.address = Some(value),
            "cors_mode" => self.cors_mode = Some(value),
            "category" => self.category = Some(value),
            "dominant" => self.dominant = Some(value),
            "reason" => self.reason = Some(value),
            name => {
                let _ = write!(self.extra, " {}={}", name, value);
            }
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_string(field, s.trim_matches('"').to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "aqi" => self.aqi = Some(value),
            _ => self.record_string(field, value.to_string()),
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "status" => self.status = Some(value),
            _ => self.record_string(field, value.to_string()),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match u64::try_from(value) {
            Ok(value) => self.record_u64(field, value),
            Err(_) => self.record_string(field, value.to_string()),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_string(field, value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level, target: &str) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "server_start" => format_server_start(v),
        "evaluation" => format_evaluation(v),
        "rejected" => format_rejected(v),
        "shutdown" => format_shutdown(),
        _ => format_plain(v, level, target),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_server_start(v: &EventVisitor) -> String {
    let address = v.address.as_deref().unwrap_or("?");
    let mode = v.cors_mode.as_deref().unwrap_or("?");

    let mode = if mode == "development" {
        mode.bright_yellow().to_string()
    } else {
        mode.bright_green().to_string()
    };

    format!(
        "{} {} Listening on {} │ CORS {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format!("http://{}", address).bright_cyan().underline(),
        mode
    )
}

fn format_evaluation(v: &EventVisitor) -> String {
    let aqi = v.aqi.unwrap_or(0.0);
    let category = v.category.as_deref().unwrap_or("N/A");
    let dominant = v.dominant.as_deref().unwrap_or("N/A");

    format!(
        "{} {} AQI {} │ {} │ dominant {}",
        format_elapsed(),
        "◆".bright_blue(),
        format!("{:>8.1}", aqi).white().bold(),
        format_category(category),
        dominant.bright_magenta()
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    let status = v.status.unwrap_or(0);
    let reason = v.reason.as_deref().unwrap_or("unknown");

    format!(
        "{} {} Rejected │ {} │ {}",
        format_elapsed(),
        "✗".bright_red(),
        status.bright_red().bold(),
        reason
    )
}

fn format_shutdown() -> String {
    format!(
        "{} {} Server stopped",
        format_elapsed(),
        "■".bright_cyan().bold()
    )
}

fn format_plain(v: &EventVisitor, level: Level, target: &str) -> String {
    let message = v.message.as_deref().unwrap_or("");
    if message.is_empty() && v.extra.is_empty() && v.status.is_none() {
        return String::new();
    }

    // tower-http reports the response code as `status`.
    let status = v
        .status
        .map_or(String::new(), |status| format!(" status={}", status));

    let level = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".yellow().bold().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    };

    format!(
        "{} {} {} {}{}{}",
        format_elapsed(),
        level,
        target.bright_black(),
        message,
        status.bright_black(),
        v.extra.bright_black()
    )
}

/// Colors a category label by severity.
fn format_category(category: &str) -> String {
    match category {
        "Good" => category.bright_green().to_string(),
        "Satisfactory" => category.green().to_string(),
        "Moderate" => category.yellow().to_string(),
        "Poor" => category.bright_yellow().bold().to_string(),
        "Very Poor" => category.red().bold().to_string(),
        "Severe" => category.bright_red().bold().to_string(),
        _ => category.white().to_string(),
    }
}

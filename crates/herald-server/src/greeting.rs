//! Greeting composition.

use std::sync::Arc;

use chrono::NaiveDate;

use herald_directory::ServerDirectory;
use herald_phrases::PhraseCache;

use crate::message::{Message, Span};

/// Width of the horizontal rules framing the greeting.
const RULE_WIDTH: usize = 40;

/// Hover text on the roster entry for the server just joined.
const HOVER_CURRENT: &str = "Current server";

/// Composes connect greetings from the directory, the phrase cache, and
/// the proxy-supplied roster.
///
/// Pure with respect to its inputs apart from the random phrase pick.
/// Composition never fails: unknown servers greet with fallback data and
/// an empty phrase cache renders an empty phrase.
#[derive(Debug)]
pub struct Greeter {
    directory: Arc<ServerDirectory>,
    phrases: Arc<PhraseCache>,
    network_name: String,
}

impl Greeter {
    /// Create a greeter over shared directory and cache handles.
    pub fn new(
        directory: Arc<ServerDirectory>,
        phrases: Arc<PhraseCache>,
        network_name: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            phrases,
            network_name: network_name.into(),
        }
    }

    /// Compose the greeting for `player` connecting to `target`.
    ///
    /// The roster is rendered in the order supplied by the caller
    /// (proxy-registration order); the target entry is marked as the
    /// current server, every other entry is clickable to join.
    pub fn compose(
        &self,
        player: &str,
        target: &str,
        roster: &[String],
        today: NaiveDate,
    ) -> Message {
        let (shown_name, days) = self.directory.days_since_foundation(target, today);
        let phrase = self.phrases.random_phrase();
        let rule = "-".repeat(RULE_WIDTH);

        let mut message = Message::new();
        message.push_text(format!("{rule}\n"));
        message.push_text(format!(
            "§e§l{player}§r, welcome back to §b{}§r!\n",
            self.network_name
        ));
        message.push_text(format!(
            "{shown_name} has been open for {days} days\n\n"
        ));
        message.push_text(format!("[§aSaying§r] {phrase}\n\n"));

        for (i, server_id) in roster.iter().enumerate() {
            if i > 0 {
                message.push_text(" ");
            }
            message.push(roster_span(server_id, server_id == target));
        }

        message.push_text(format!("\n{rule}"));
        message
    }
}

fn roster_span(server_id: &str, is_current: bool) -> Span {
    if is_current {
        Span::text(format!("[§l{server_id}§r]")).with_hover(HOVER_CURRENT)
    } else {
        Span::text(format!("[§a{server_id}§r]"))
            .with_click(format!("/server {server_id}"))
            .with_hover(format!("Click to join §b{server_id}"))
    }
}

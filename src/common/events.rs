use crate::config::CardConfig;

/// Notifications the editor sends to whatever embeds it
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// A single field was edited; carries the complete updated configuration
    ConfigChanged(CardConfig),
}

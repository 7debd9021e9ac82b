pub const BRAND_NAME: &str = "SoftSell";

/// localStorage key holding the dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Simulated "assistant is typing" latency before a reply lands.
pub const REPLY_DELAY_MS: u32 = 1_000;

/// How long the "Thank You!" panel stays up after a lead is submitted.
pub const ACK_DISPLAY_MS: u32 = 3_000;

pub const SHORTCUTS_SHOWN: usize = 3;

// Shortcuts disappear once the conversation has this many messages.
pub const SHORTCUTS_MAX_TRANSCRIPT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand_name: &'static str,
    pub dark_mode_key: &'static str,
    pub reply_delay_ms: u32,
    pub ack_display_ms: u32,
    pub shortcuts_shown: usize,
    pub shortcuts_max_transcript: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: BRAND_NAME,
            dark_mode_key: DARK_MODE_KEY,
            reply_delay_ms: REPLY_DELAY_MS,
            ack_display_ms: ACK_DISPLAY_MS,
            shortcuts_shown: SHORTCUTS_SHOWN,
            shortcuts_max_transcript: SHORTCUTS_MAX_TRANSCRIPT,
        }
    }
}

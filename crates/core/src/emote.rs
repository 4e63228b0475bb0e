//! Shortcode-to-emote rewriting for forwarded payloads.
//!
//! GitHub renders `:shipit:` natively; Discord only knows its custom
//! emote id, so the relay rewrites the shortcode on the way through.

/// GitHub-style shortcode recognized in webhook payload text.
pub const SHIPIT_SHORTCODE: &str = ":shipit:";

/// Discord custom-emote form of the same squirrel.
pub const SHIPIT_EMOTE: &str = "<:shipit:826492371813400637>";

/// Replace every literal `:shipit:` occurrence with the Discord custom
/// emote. Bodies without the shortcode come back unchanged.
pub fn rewrite_emotes(body: &str) -> String {
    body.replace(SHIPIT_SHORTCODE, SHIPIT_EMOTE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

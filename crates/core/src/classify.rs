//! GitHub webhook delivery classification.
//!
//! Decides whether a delivery is noise (bot chatter, empty reviews,
//! dependency-update branch deletes, non-main pushes on psf/black) or a
//! notification worth relaying to Discord. Classification is a pure
//! function of the event-type header and the parsed JSON payload;
//! malformed or partially-shaped payloads never fail, they just leave
//! the corresponding flags false.

use serde_json::Value;

// ---------------------------------------------------------------------------
// Event type constants
// ---------------------------------------------------------------------------

/// `X-GitHub-Event` value for branch/tag deletion events.
pub const EVENT_DELETE: &str = "delete";
/// `X-GitHub-Event` value for push events.
pub const EVENT_PUSH: &str = "push";
/// `X-GitHub-Event` value for pull request review events.
pub const EVENT_PULL_REQUEST_REVIEW: &str = "pull_request_review";

// ---------------------------------------------------------------------------
// Field accessors
// ---------------------------------------------------------------------------

/// Look up a string field by JSON pointer. Missing keys, nulls, and
/// non-string values all read as `None`.
fn str_at<'a>(payload: &'a Value, pointer: &str) -> Option<&'a str> {
    payload.pointer(pointer).and_then(Value::as_str)
}

/// True when the string field at `pointer` contains `needle` as a
/// case-sensitive substring. An absent field does not contain anything.
fn field_contains(payload: &Value, pointer: &str, needle: &str) -> bool {
    str_at(payload, pointer).is_some_and(|s| s.contains(needle))
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The full set of per-delivery filter flags.
///
/// Computed once per request by [`Classification::classify`] and never
/// stored beyond the handling of that request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Sender login contains `coveralls`.
    pub is_coveralls: bool,
    /// Sender login contains `[bot]` (GitHub App senders).
    pub is_github_bot: bool,
    /// Sender login contains `sentry-io`. Exempts the sender from the
    /// `[bot]` suppression.
    pub is_sentry: bool,
    /// A `delete` event for a `dependabot` branch.
    pub is_dependabot_branch_delete: bool,
    /// A review event on a pull request authored by a `[bot]` account.
    pub is_bot_pr_approve: bool,
    /// A `commented` review with no body text at all.
    pub is_empty_review: bool,
    /// A push to psf/black on any ref other than `refs/heads/main`.
    pub is_black_non_main_push: bool,
}

impl Classification {
    /// Classify one delivery from its event type and parsed payload.
    ///
    /// `event` is the raw `X-GitHub-Event` header value, compared against
    /// the event constants with case-sensitive equality. The payload may
    /// be any JSON value (including `null` for an unparseable body);
    /// every field access tolerates absence.
    pub fn classify(event: Option<&str>, payload: &Value) -> Self {
        let is_coveralls = field_contains(payload, "/sender/login", "coveralls");
        let is_github_bot = field_contains(payload, "/sender/login", "[bot]");
        let is_sentry = field_contains(payload, "/sender/login", "sentry-io");

        let is_dependabot_branch_delete =
            field_contains(payload, "/ref", "dependabot") && event == Some(EVENT_DELETE);

        let is_bot_pr_approve = field_contains(payload, "/pull_request/user/login", "[bot]")
            && event == Some(EVENT_PULL_REQUEST_REVIEW);

        // An empty review body means literal JSON null or an absent key.
        // An empty string is a deliberate (if terse) review and stays.
        let review_body_missing =
            matches!(payload.pointer("/review/body"), None | Some(Value::Null));
        let is_empty_review = str_at(payload, "/review/state") == Some("commented")
            && event == Some(EVENT_PULL_REQUEST_REVIEW)
            && review_body_missing;

        let is_black_non_main_push = str_at(payload, "/ref") != Some("refs/heads/main")
            && str_at(payload, "/repository/name") == Some("black")
            && str_at(payload, "/repository/owner/login") == Some("psf")
            && event == Some(EVENT_PUSH);

        Self {
            is_coveralls,
            is_github_bot,
            is_sentry,
            is_dependabot_branch_delete,
            is_bot_pr_approve,
            is_empty_review,
            is_black_non_main_push,
        }
    }

    /// The delivery originates from automated tooling. Sentry's bot is
    /// exempt: its notifications are actionable.
    pub fn is_bot_payload(&self) -> bool {
        self.is_coveralls
            || (self.is_github_bot && !self.is_sentry)
            || self.is_dependabot_branch_delete
            || self.is_bot_pr_approve
    }

    /// A human action that carries no information worth relaying.
    pub fn is_noisy_user_action(&self) -> bool {
        self.is_empty_review
    }

    /// Final decision: suppress the delivery instead of forwarding it.
    pub fn should_ignore(&self) -> bool {
        self.is_bot_payload() || self.is_noisy_user_action() || self.is_black_non_main_push
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

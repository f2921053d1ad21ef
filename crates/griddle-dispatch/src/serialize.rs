//! Structured serialization of replies.
//!
//! Scripted consumers (and the binary's `--output json` mode) take replies
//! as JSON documents instead of rendered text. The shape is the serde
//! tagging of [`Reply`] and [`Outcome`](crate::Outcome): `display`
//! distinguishes brief from verbose, `kind` distinguishes message from
//! table, so nothing downstream parses display strings.

use crate::outcome::Reply;

/// Serializes a reply as pretty-printed JSON.
pub fn to_json(reply: &Reply) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reply)
}

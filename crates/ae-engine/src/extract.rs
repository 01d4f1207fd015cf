//! Field extraction from encounter document bodies.
//!
//! Documents are semi-structured prose with bold markdown tags:
//!
//! ```text
//! **Type:** Ambush
//! **Location:** A narrow ravine
//! @UUID[Actor.abc123]{Bandit} x 3
//! @UUID[Actor.def456]{Bandit Captain}
//! **Description:** Rocks tumble down as ...
//! ```
//!
//! Extraction never fails. Missing sections fall back to fixed defaults.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Location used when a document has no `**Location:**` tag.
pub const UNKNOWN_LOCATION: &str = "Unknown";
/// Actor name used when a reference carries no `{name}` annotation.
pub const UNKNOWN_ACTOR: &str = "Unknown Actor";
/// Description used when a document has no `**Description:**` section.
pub const NO_DESCRIPTION: &str = "No description available.";
/// Marker that introduces the free-text description.
pub const DESCRIPTION_MARKER: &str = "**Description:**";

static TYPE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Type:\*\*[ \t]*([^\r\n]*)").unwrap());

static LOCATION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Location:\*\*[ \t]*([^\r\n]*)").unwrap());

/// `@UUID[id]`, then an optional `{name}`, then an optional `x N`.
static ACTOR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@UUID\[([^\]]+)\](?:\{([^}]+)\})?(?:\s*x\s*(\d+))?").unwrap()
});

/// One actor reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    /// Host reference id, e.g. `Actor.abc123`.
    pub reference: String,
    /// Display name, or [`UNKNOWN_ACTOR`].
    pub name: String,
    /// How many appear; at least 1.
    pub quantity: u32,
}

impl std::fmt::Display for ActorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@UUID[{}]{{{}}} x {}", self.reference, self.name, self.quantity)
    }
}

/// Structured fields pulled out of a document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterFields {
    /// Where the encounter happens.
    pub location: String,
    /// Actor references in order of appearance, duplicates kept.
    pub actors: Vec<ActorRef>,
    /// Free-text description.
    pub description: String,
}

/// Extract location, actors, and description from a document body.
pub fn extract_fields(body: &str) -> EncounterFields {
    EncounterFields {
        location: extract_location(body),
        actors: extract_actors(body),
        description: extract_description(body),
    }
}

/// The rest of the first `**Location:**` line, trimmed.
pub fn extract_location(body: &str) -> String {
    LOCATION_TAG
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_LOCATION)
        .to_string()
}

/// Every actor reference, in order. Unannotated names become
/// [`UNKNOWN_ACTOR`]; missing or zero quantities become 1.
pub fn extract_actors(body: &str) -> Vec<ActorRef> {
    ACTOR_REF
        .captures_iter(body)
        .map(|c| ActorRef {
            reference: c[1].to_string(),
            name: c
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_ACTOR)
                .to_string(),
            quantity: c
                .get(3)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .filter(|q| *q > 0)
                .unwrap_or(1),
        })
        .collect()
}

/// The text after the first description marker, up to the next one if any,
/// trimmed.
pub fn extract_description(body: &str) -> String {
    body.split(DESCRIPTION_MARKER)
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_DESCRIPTION)
        .to_string()
}

/// Whether any `**Type:**` tag in the body equals `encounter_type` exactly.
pub fn has_type_tag(body: &str, encounter_type: &str) -> bool {
    let wanted = encounter_type.trim();
    TYPE_TAG
        .captures_iter(body)
        .any(|c| c[1].trim() == wanted)
}

//! Contact submission records and the contact store.
//!
//! DESIGN
//! ======
//! Submissions are identified by an opaque radix-36 token minted from the
//! submission instant plus a random suffix. Collisions are possible but
//! treated as negligible; the token is not cryptographically unique. The
//! `status` field stays a free-form string — [`STATUSES`] is the set the
//! admin UI offers, and any transition between any values is legal.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::env::Environment;
pub use crate::record::ALL;
use crate::record::{Record, RecordStore, StoreError};
use crate::storage::Storage;

/// Status assigned to every fresh submission.
pub const STATUS_NEW: &str = "new";
/// Status for submissions the owner has replied to.
pub const STATUS_CONTACTED: &str = "contacted";
/// Status for wrapped-up submissions.
pub const STATUS_COMPLETED: &str = "completed";

/// Statuses the admin UI offers.
pub const STATUSES: [&str; 3] = [STATUS_NEW, STATUS_CONTACTED, STATUS_COMPLETED];

/// One captured contact-form submission, snapshot-shaped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Opaque radix-36 token minted at submission time.
    pub id: String,
    /// ISO instant the submission was captured.
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub newsletter: bool,
    pub status: String,
    /// Set only when the status changes, never at submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Record for ContactSubmission {
    const STORAGE_KEY: &'static str = "contacts";
    const EXPORT_FILE: &'static str = "contacts.json";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial input captured from the contact form.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub newsletter: bool,
}

/// Ordered contact-submission store with write-through persistence.
#[derive(Debug)]
pub struct ContactStore<S: Storage, E: Environment> {
    records: RecordStore<ContactSubmission, S>,
    env: E,
}

impl<S: Storage, E: Environment> ContactStore<S, E> {
    #[must_use]
    pub fn new(storage: S, env: E) -> Self {
        Self {
            records: RecordStore::new(storage),
            env,
        }
    }

    /// Replace the list from a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when `json` is not a submission
    /// array.
    pub fn load_snapshot(&mut self, json: &str) -> Result<usize, StoreError> {
        self.records.load_snapshot(json)
    }

    /// Replace the list wholesale. Does not persist.
    pub fn replace_all(&mut self, contacts: Vec<ContactSubmission>) {
        self.records.replace_all(contacts);
    }

    /// Capture a form submission: mint the token, stamp the instant, mark
    /// it [`STATUS_NEW`], insert at the front, persist, and return it.
    pub fn submit(&mut self, draft: ContactDraft) -> ContactSubmission {
        let submission = ContactSubmission {
            id: submission_token(self.env.now_ms(), self.env.random()),
            timestamp: self.env.now_iso(),
            name: draft.name,
            email: draft.email,
            project_type: draft.project_type,
            budget: draft.budget,
            timeline: draft.timeline,
            description: draft.description,
            requirements: draft.requirements.unwrap_or_default(),
            company: draft.company.unwrap_or_default(),
            website: draft.website.unwrap_or_default(),
            technologies: draft.technologies,
            newsletter: draft.newsletter,
            status: STATUS_NEW.to_owned(),
            last_updated: None,
        };
        self.records.insert_front(submission.clone());
        submission
    }

    /// Set the status of the submission with `id` and stamp `lastUpdated`.
    /// Any string is accepted as a status; transitions are unconstrained.
    pub fn update_status(&mut self, id: &str, status: &str) -> Option<ContactSubmission> {
        let stamp = self.env.now_iso();
        self.records.update_with(id, |submission| {
            submission.status = status.to_owned();
            submission.last_updated = Some(stamp);
        })
    }

    /// Remove the first submission matching `id` and return it.
    pub fn delete(&mut self, id: &str) -> Option<ContactSubmission> {
        self.records.delete(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContactSubmission> {
        self.records.get(id)
    }

    /// Submissions whose status equals `status`; [`ALL`] selects everything.
    #[must_use]
    pub fn by_status(&self, status: &str) -> Vec<&ContactSubmission> {
        self.records
            .all()
            .iter()
            .filter(|submission| status == ALL || submission.status == status)
            .collect()
    }

    #[must_use]
    pub fn all(&self) -> &[ContactSubmission] {
        self.records.all()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn export_json(&self) -> String {
        self.records.export_json()
    }

    #[must_use]
    pub fn export_data_uri(&self) -> String {
        self.records.export_data_uri()
    }
}

const RADIX_36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of fractional radix-36 digits kept from the random value.
const TOKEN_RANDOM_DIGITS: usize = 11;

/// Mint a submission token: the epoch-millisecond timestamp in radix 36,
/// concatenated with the radix-36 digits of a random fraction.
#[must_use]
pub fn submission_token(now_ms: i64, random: f64) -> String {
    let mut token = to_radix36(now_ms.max(0).unsigned_abs());
    token.push_str(&fraction_radix36(random));
    token
}

fn to_radix36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(RADIX_36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Radix-36 digits after the point of `fraction`, most significant first.
/// A zero fraction yields an empty string.
fn fraction_radix36(fraction: f64) -> String {
    let mut rest = fraction.fract().abs();
    let mut out = String::new();
    while rest > 0.0 && out.len() < TOKEN_RANDOM_DIGITS {
        rest *= 36.0;
        let digit = rest as usize;
        out.push(RADIX_36_DIGITS[digit.min(35)] as char);
        rest -= digit as f64;
    }
    out
}

//! Blog post records and the post store.
//!
//! DESIGN
//! ======
//! Post ids are slugs derived from the title at creation time, best-effort
//! unique: a second post with the same title silently collides and lookups
//! resolve to the first occurrence. The `category` field stays a free-form
//! string; [`CATEGORIES`] is the set the site UI offers, not a validation
//! list, so snapshots with other values load unchanged.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use serde::{Deserialize, Serialize};

use crate::env::Environment;
pub use crate::record::ALL;
use crate::record::{Record, RecordStore, StoreError};
use crate::storage::Storage;
use crate::text;

/// Author credited on new posts when the draft names none.
pub const DEFAULT_AUTHOR: &str = "Janarthanan";

/// Categories the site UI offers.
pub const CATEGORIES: [&str; 4] = ["web-development", "iot", "saas", "tutorials"];

/// A published or draft blog post, snapshot-shaped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Slug derived from the title at creation time.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO calendar date assigned at creation, e.g. `2025-07-12`.
    pub date: String,
    /// Derived estimate, e.g. `8 min read`.
    pub read_time: String,
    /// Cover image URL; empty when the post has none.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_author")]
    pub author: String,
}

impl Record for BlogPost {
    const STORAGE_KEY: &'static str = "blogPosts";
    const EXPORT_FILE: &'static str = "blog-posts.json";

    fn id(&self) -> &str {
        &self.id
    }
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_owned()
}

/// Partial input captured from the create-post form. Derived fields (id,
/// date, read time) are filled by [`PostStore::create`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub author: Option<String>,
}

/// Field-level patch shallow-merged over an existing post by
/// [`PostStore::update`]. Absent fields keep their current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<String>,
}

impl PostPatch {
    fn apply(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
        if let Some(read_time) = self.read_time {
            post.read_time = read_time;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(featured) = self.featured {
            post.featured = featured;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }
}

/// Ordered blog post store with write-through persistence.
#[derive(Debug)]
pub struct PostStore<S: Storage, E: Environment> {
    records: RecordStore<BlogPost, S>,
    env: E,
}

impl<S: Storage, E: Environment> PostStore<S, E> {
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
    /// Returns [`StoreError::Snapshot`] when `json` is not a post array.
    pub fn load_snapshot(&mut self, json: &str) -> Result<usize, StoreError> {
        self.records.load_snapshot(json)
    }

    /// Replace the list wholesale, e.g. with [`default_posts`].
    pub fn replace_all(&mut self, posts: Vec<BlogPost>) {
        self.records.replace_all(posts);
    }

    /// Build a full post from a draft, insert it at the front, persist, and
    /// return it. The id is the title slug, the date today's calendar date,
    /// and the read time the word-count estimate over the content.
    pub fn create(&mut self, draft: PostDraft) -> BlogPost {
        let post = BlogPost {
            id: text::slug_from_title(&draft.title),
            read_time: text::read_time(&draft.content),
            date: calendar_date(&self.env.now_iso()),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            image: draft.image.unwrap_or_default(),
            featured: draft.featured,
            author: draft.author.unwrap_or_else(default_author),
        };
        self.records.insert_front(post.clone());
        post
    }

    /// Shallow-merge `patch` over the post with `id`; `None` if absent.
    pub fn update(&mut self, id: &str, patch: PostPatch) -> Option<BlogPost> {
        self.records.update_with(id, |post| patch.apply(post))
    }

    /// Remove the first post matching `id` and return it.
    pub fn delete(&mut self, id: &str) -> Option<BlogPost> {
        self.records.delete(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BlogPost> {
        self.records.get(id)
    }

    /// The first featured post, falling back to the most recent one.
    #[must_use]
    pub fn featured_post(&self) -> Option<&BlogPost> {
        self.records
            .all()
            .iter()
            .find(|post| post.featured)
            .or_else(|| self.records.all().first())
    }

    /// Posts whose category equals `category`; [`ALL`] selects everything.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.records
            .all()
            .iter()
            .filter(|post| category == ALL || post.category == category)
            .collect()
    }

    /// Case-insensitive substring search across title, excerpt, content,
    /// and tags. Order is preserved from the underlying list.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&BlogPost> {
        let term = query.to_lowercase();
        self.records
            .all()
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&term)
                    || post.excerpt.to_lowercase().contains(&term)
                    || post.content.to_lowercase().contains(&term)
                    || post.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            })
            .collect()
    }

    #[must_use]
    pub fn all(&self) -> &[BlogPost] {
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

/// Calendar-date prefix of an ISO instant, e.g. `2025-07-12`.
fn calendar_date(now_iso: &str) -> String {
    now_iso
        .split_once('T')
        .map_or(now_iso, |(date, _)| date)
        .to_owned()
}

/// The three posts seeded when no snapshot is deployed yet.
#[must_use]
pub fn default_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "featured-js-frameworks".to_owned(),
            title: "Modern JavaScript Frameworks: A Comprehensive Comparison".to_owned(),
            excerpt: "Exploring the latest trends in JavaScript frameworks and their impact on modern web development.".to_owned(),
            content: "Full article content here...".to_owned(),
            category: "web-development".to_owned(),
            tags: vec![
                "javascript".to_owned(),
                "react".to_owned(),
                "vue".to_owned(),
                "angular".to_owned(),
            ],
            date: "2025-07-12".to_owned(),
            read_time: "8 min read".to_owned(),
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=2940&auto=format&fit=crop".to_owned(),
            featured: true,
            author: DEFAULT_AUTHOR.to_owned(),
        },
        BlogPost {
            id: "iot-security-2025".to_owned(),
            title: "IoT Security Best Practices for 2025".to_owned(),
            excerpt: "Essential security considerations when developing IoT applications and connected devices.".to_owned(),
            content: "Full article content here...".to_owned(),
            category: "iot".to_owned(),
            tags: vec!["iot".to_owned(), "security".to_owned(), "encryption".to_owned()],
            date: "2025-07-08".to_owned(),
            read_time: "7 min read".to_owned(),
            image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?q=80&w=2925&auto=format&fit=crop".to_owned(),
            featured: false,
            author: DEFAULT_AUTHOR.to_owned(),
        },
        BlogPost {
            id: "saas-architecture-patterns".to_owned(),
            title: "Scalable SaaS Architecture Patterns".to_owned(),
            excerpt: "Building robust and scalable SaaS applications with modern architecture patterns and best practices.".to_owned(),
            content: "Full article content here...".to_owned(),
            category: "saas".to_owned(),
            tags: vec!["saas".to_owned(), "architecture".to_owned(), "scalability".to_owned()],
            date: "2025-07-05".to_owned(),
            read_time: "6 min read".to_owned(),
            image: "https://images.unsplash.com/photo-1504639725590-34d0984388bd?q=80&w=2874&auto=format&fit=crop".to_owned(),
            featured: false,
            author: DEFAULT_AUTHOR.to_owned(),
        },
    ]
}

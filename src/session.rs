//! Per-session state.
//!
//! A session caches the last computed recommendation set under an explicit
//! `(mood, content_type)` key: repeated interactions that do not change the
//! key reuse the cached set instead of refitting TF-IDF, and shuffle is a
//! pure in-place permutation of that set, not a re-query.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::catalog::{Catalog, ContentType};
use crate::mood::MoodLabel;
use crate::recommend::{RecommendationSet, Recommender};

/// Cache-invalidation key for a session's result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKey {
    pub mood: MoodLabel,
    pub content_type: ContentType,
}

#[derive(Debug, Clone)]
struct CachedSet {
    key: SessionKey,
    set: RecommendationSet,
}

/// One user's interaction state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cached: Option<CachedSet>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recommendations for `(mood, content_type)`, recomputed only
    /// when the key differs from the cached one.
    pub fn recommend(
        &mut self,
        catalog: &Catalog,
        recommender: &Recommender,
        mood: MoodLabel,
        content_type: ContentType,
        top_n: usize,
    ) -> &RecommendationSet {
        let key = SessionKey { mood, content_type };
        let cached = match self.cached.take() {
            Some(cached) if cached.key == key => cached,
            _ => CachedSet {
                key,
                set: recommender.recommend(catalog.table(content_type), mood, top_n),
            },
        };
        &self.cached.insert(cached).set
    }

    /// Permute the cached set in place. `None` when nothing has been
    /// computed yet.
    pub fn shuffle(&mut self) -> Option<&RecommendationSet> {
        let cached = self.cached.as_mut()?;
        let mut rng = rand::rng();
        cached.set.entries.shuffle(&mut rng);
        Some(&cached.set)
    }

    /// The key of the cached set, if any.
    pub fn cached_key(&self) -> Option<SessionKey> {
        self.cached.as_ref().map(|cached| cached.key)
    }
}

/// All live sessions, keyed by id. Each session owns its state; the
/// catalog itself is shared read-only.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `id`, creating it (under a fresh id when
    /// `None`) if it does not exist yet.
    pub fn get_or_create(&mut self, id: Option<Uuid>) -> (Uuid, &mut Session) {
        let id = id.unwrap_or_else(Uuid::new_v4);
        (id, self.sessions.entry(id).or_default())
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

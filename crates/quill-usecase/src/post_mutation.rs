//! Post Mutations - Moving posts out of the archive and deleting them
//!
//! Both operations answer with a redirect back to the archive overview.
//! An id that does not resolve to a post is reported as `PostNotFound`,
//! so a second delete of the same post fails instead of passing silently.

use std::str::FromStr;

use quill_domain::{NodeId, PersistenceManager, PostRepository};
use serde::Serialize;
use tracing::info;

use crate::error::{ArchiveError, Result};

/// Action the archive overview is served by
pub const INDEX_ACTION: &str = "index";

/// Where the client goes after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub action: String,
}

impl Redirect {
    pub fn to(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
        }
    }

    pub fn index() -> Self {
        Self::to(INDEX_ACTION)
    }
}

/// Method of the request that triggered a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Head,
    Options,
    Trace,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Safe methods must not have side effects
    pub fn is_safe(self) -> bool {
        matches!(
            self,
            RequestMethod::Get | RequestMethod::Head | RequestMethod::Options | RequestMethod::Trace
        )
    }
}

impl FromStr for RequestMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(RequestMethod::Get),
            "HEAD" => Ok(RequestMethod::Head),
            "OPTIONS" => Ok(RequestMethod::Options),
            "TRACE" => Ok(RequestMethod::Trace),
            "POST" => Ok(RequestMethod::Post),
            "PUT" => Ok(RequestMethod::Put),
            "PATCH" => Ok(RequestMethod::Patch),
            "DELETE" => Ok(RequestMethod::Delete),
            other => Err(format!("Unknown request method: {}", other)),
        }
    }
}

/// Writes on single posts
pub struct PostMutations<'a> {
    posts: &'a mut dyn PostRepository,
    persistence: &'a mut dyn PersistenceManager,
}

impl<'a> PostMutations<'a> {
    pub fn new(
        posts: &'a mut dyn PostRepository,
        persistence: &'a mut dyn PersistenceManager,
    ) -> Self {
        Self { posts, persistence }
    }

    /// Move an archived post back to normal post status
    pub fn unarchive(&mut self, id: &NodeId) -> Result<Redirect> {
        let mut post = self
            .posts
            .find_by_id(id)?
            .ok_or_else(|| ArchiveError::PostNotFound {
                id: id.to_string(),
            })?;

        post.set_archived(false);
        self.posts.save(&post)?;

        info!(post_id = %id, "post moved out of the archive");
        Ok(Redirect::index())
    }

    /// Delete a post and every node below it
    ///
    /// Pending writes are flushed first unless the request is safe.
    pub fn delete(&mut self, id: &NodeId, method: RequestMethod) -> Result<Redirect> {
        if !self.posts.exists(id)? {
            return Err(ArchiveError::PostNotFound { id: id.to_string() });
        }

        if !method.is_safe() {
            self.persistence.persist_all()?;
        }

        self.posts.remove_and_cascade(id)?;

        info!(post_id = %id, ?method, "post deleted");
        Ok(Redirect::index())
    }
}

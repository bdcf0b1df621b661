use async_trait::async_trait;

use crate::auth::repo_types::{NewUser, User};
use crate::quotes::repo_types::{NewQuote, Quote};

#[cfg(test)]
pub mod memory;
pub mod mongo;

pub use mongo::MongoStore;

/// Document persistence for users and quote requests.
///
/// Every method is a single round-trip; callers that need check-then-insert
/// semantics issue two calls with no transaction around them.
#[async_trait]
pub trait Store: Send + Sync {
    /// Round-trip to the database server.
    async fn ping(&self) -> anyhow::Result<()>;

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Returns the id assigned to the new document.
    async fn insert_user(&self, user: NewUser) -> anyhow::Result<String>;

    /// Returns the id assigned to the new document.
    async fn insert_quote(&self, quote: NewQuote) -> anyhow::Result<String>;
    async fn count_quotes(&self) -> anyhow::Result<u64>;
    /// Newest first, skipping `skip` documents.
    async fn list_quotes(&self, skip: u64, limit: u64) -> anyhow::Result<Vec<Quote>>;
}

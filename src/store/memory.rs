use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::Store;
use crate::auth::repo_types::{NewUser, User};
use crate::quotes::repo_types::{NewQuote, Quote};

/// In-process store for handler tests. `fail` makes every call error.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    quotes: Mutex<Vec<Quote>>,
    next_id: AtomicU64,
    fail: AtomicBool,
    calls: AtomicU64,
}

impl MemoryStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.quotes.lock().unwrap().clone()
    }

    fn enter(&self) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("DB error").context("store unavailable"));
        }
        Ok(())
    }

    fn next_id(&self) -> String {
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> anyhow::Result<()> {
        self.enter()
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        self.enter()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> anyhow::Result<String> {
        self.enter()?;
        let id = self.next_id();
        self.users.lock().unwrap().push(User {
            id: id.clone(),
            email: user.email,
            hashed_password: user.hashed_password,
        });
        Ok(id)
    }

    async fn insert_quote(&self, quote: NewQuote) -> anyhow::Result<String> {
        self.enter()?;
        let id = self.next_id();
        self.quotes.lock().unwrap().push(Quote {
            id: id.clone(),
            name: quote.name,
            phone: quote.phone,
            address: quote.address,
            service_type: quote.service_type,
            description: quote.description,
            status: quote.status,
            created_at: quote.created_at,
        });
        Ok(id)
    }

    async fn count_quotes(&self) -> anyhow::Result<u64> {
        self.enter()?;
        Ok(self.quotes.lock().unwrap().len() as u64)
    }

    async fn list_quotes(&self, skip: u64, limit: u64) -> anyhow::Result<Vec<Quote>> {
        self.enter()?;
        let mut quotes = self.quotes.lock().unwrap().clone();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(quotes
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }
}

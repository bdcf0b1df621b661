use anyhow::Context;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime};
use futures::TryStreamExt;
use mongodb::{options::FindOptions, Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Store;
use crate::auth::repo_types::{NewUser, User};
use crate::quotes::repo_types::{NewQuote, Quote, QuoteStatus};

const USERS: &str = "users";
const QUOTES: &str = "quotes";

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    email: String,
    #[serde(default)]
    hashed_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct QuoteDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    phone: String,
    address: String,
    #[serde(rename = "serviceType")]
    service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: QuoteStatus,
    #[serde(rename = "createdAt")]
    created_at: DateTime,
}

impl From<UserDocument> for User {
    fn from(d: UserDocument) -> Self {
        Self {
            id: d.id.map(|o| o.to_hex()).unwrap_or_default(),
            email: d.email,
            hashed_password: d.hashed_password,
        }
    }
}

impl From<NewUser> for UserDocument {
    fn from(u: NewUser) -> Self {
        Self {
            id: None,
            email: u.email,
            hashed_password: u.hashed_password,
        }
    }
}

impl From<QuoteDocument> for Quote {
    fn from(d: QuoteDocument) -> Self {
        Self {
            id: d.id.map(|o| o.to_hex()).unwrap_or_default(),
            name: d.name,
            phone: d.phone,
            address: d.address,
            service_type: d.service_type,
            description: d.description,
            status: d.status,
            created_at: d.created_at.to_time_0_3(),
        }
    }
}

impl From<NewQuote> for QuoteDocument {
    fn from(q: NewQuote) -> Self {
        Self {
            id: None,
            name: q.name,
            phone: q.phone,
            address: q.address,
            service_type: q.service_type,
            description: q.description,
            status: q.status,
            created_at: DateTime::from_time_0_3(q.created_at),
        }
    }
}

fn id_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

/// MongoDB-backed store. The driver pools connections internally and
/// connects lazily on first use.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, db_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("parse MongoDB connection string")?;
        Ok(Self {
            db: client.database(db_name),
        })
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USERS)
    }

    fn quotes(&self) -> Collection<QuoteDocument> {
        self.db.collection(QUOTES)
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn ping(&self) -> anyhow::Result<()> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("ping MongoDB")?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let found = self
            .users()
            .find_one(doc! { "email": email }, None)
            .await
            .context("find user by email")?;
        Ok(found.map(User::from))
    }

    async fn insert_user(&self, user: NewUser) -> anyhow::Result<String> {
        let result = self
            .users()
            .insert_one(UserDocument::from(user), None)
            .await
            .context("insert user")?;
        let id = id_string(result.inserted_id);
        debug!(%id, "user inserted");
        Ok(id)
    }

    async fn insert_quote(&self, quote: NewQuote) -> anyhow::Result<String> {
        let result = self
            .quotes()
            .insert_one(QuoteDocument::from(quote), None)
            .await
            .context("insert quote")?;
        let id = id_string(result.inserted_id);
        debug!(%id, "quote inserted");
        Ok(id)
    }

    async fn count_quotes(&self) -> anyhow::Result<u64> {
        self.quotes()
            .count_documents(doc! {}, None)
            .await
            .context("count quotes")
    }

    async fn list_quotes(&self, skip: u64, limit: u64) -> anyhow::Result<Vec<Quote>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .skip(skip)
            .limit(i64::try_from(limit).context("limit out of range")?)
            .build();
        let docs: Vec<QuoteDocument> = self
            .quotes()
            .find(doc! {}, options)
            .await
            .context("find quotes")?
            .try_collect()
            .await
            .context("read quotes cursor")?;
        Ok(docs.into_iter().map(Quote::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn quote_document_uses_wire_field_names() {
        let quote = NewQuote {
            name: "John Doe".into(),
            phone: "555-1234".into(),
            address: "123 Main St".into(),
            service_type: "plumbing".into(),
            description: None,
            status: QuoteStatus::Pending,
            created_at: datetime!(2024-05-01 12:00 UTC),
        };
        let document = bson::to_document(&QuoteDocument::from(quote)).unwrap();
        assert!(document.get("_id").is_none());
        assert!(document.get("description").is_none());
        assert_eq!(document.get_str("serviceType").unwrap(), "plumbing");
        assert_eq!(document.get_str("status").unwrap(), "PENDING");
        assert!(document.get_datetime("createdAt").is_ok());
    }

    #[test]
    fn user_document_round_trips_id_as_hex() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "email": "test@example.com",
            "hashed_password": "hash",
        };
        let user: User = bson::from_document::<UserDocument>(document).unwrap().into();
        assert_eq!(user.id, oid.to_hex());
        assert_eq!(user.hashed_password, "hash");
    }

    #[test]
    fn inserted_object_id_is_rendered_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_string(Bson::ObjectId(oid)), oid.to_hex());
    }
}

//! In-memory storage
//!
//! Each table is an id-ordered map behind an async `RwLock`, with ids handed
//! out from a counter that starts at 1. Nothing survives a restart.

use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        atomic::{AtomicI64, Ordering},
    },
};

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use thali::{
    catalog::FoodItem,
    ids::TypedId,
    orders::Order,
    users::{User, UserId},
};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::users::records::UserRecord;

/// A table of records keyed by a typed id.
///
/// `K` is the type the id is tagged with. It defaults to the row type, and
/// differs only when the stored row wraps a public record.
#[derive(Debug)]
pub struct Table<T, K = T> {
    rows: RwLock<BTreeMap<TypedId<K>, T>>,
    next_id: AtomicI64,
}

impl<T, K> Default for Table<T, K> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T, K> Table<T, K> {
    /// Reserve the next id. Ids are never reused, even after deletes.
    pub fn next_id(&self) -> TypedId<K> {
        TypedId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Shared access to the rows.
    pub async fn read(&self) -> RwLockReadGuard<'_, BTreeMap<TypedId<K>, T>> {
        self.rows.read().await
    }

    /// Exclusive access to the rows.
    pub async fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<TypedId<K>, T>> {
        self.rows.write().await
    }
}

impl<T: Clone, K> Table<T, K> {
    /// All rows in id order.
    pub async fn all(&self) -> Vec<T> {
        self.read().await.values().cloned().collect()
    }

    /// Rows matching `predicate`, in id order.
    pub async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .await
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// A single row.
    pub async fn get(&self, id: TypedId<K>) -> Option<T> {
        self.read().await.get(&id).cloned()
    }

    /// Assign an id and store the row built for it.
    pub async fn insert_with(&self, build: impl FnOnce(TypedId<K>) -> T) -> T {
        let id = self.next_id();
        let row = build(id);

        self.write().await.insert(id, row.clone());

        row
    }
}

/// A live session, keyed by the digest of its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRecord {
    pub user: UserId,
    pub issued_at: Timestamp,
}

#[derive(Debug, Default)]
struct Tables {
    foods: Table<FoodItem>,
    orders: Table<Order>,
    users: Table<UserRecord, User>,
    sessions: RwLock<FxHashMap<String, SessionRecord>>,
}

/// Handle to the process-wide tables. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct Db {
    tables: Arc<Tables>,
}

impl Db {
    /// Fresh, empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog
    pub fn foods(&self) -> &Table<FoodItem> {
        &self.tables.foods
    }

    /// Orders
    pub fn orders(&self) -> &Table<Order> {
        &self.tables.orders
    }

    /// Accounts
    pub fn users(&self) -> &Table<UserRecord, User> {
        &self.tables.users
    }

    /// Session token digest to session
    pub fn sessions(&self) -> &RwLock<FxHashMap<String, SessionRecord>> {
        &self.tables.sessions
    }
}

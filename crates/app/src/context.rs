//! App Context

use std::sync::Arc;

use crate::{
    auth::{MemSessionsService, SessionsService},
    database::Db,
    domain::{
        foods::{FoodsService, MemFoodsService},
        orders::{MemOrdersService, OrdersService},
        users::{MemUsersService, UsersService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub foods: Arc<dyn FoodsService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
    pub sessions: Arc<dyn SessionsService>,
}

impl AppContext {
    /// Services backed by the given tables.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            foods: Arc::new(MemFoodsService::new(db.clone())),
            orders: Arc::new(MemOrdersService::new(db.clone())),
            users: Arc::new(MemUsersService::new(db.clone())),
            sessions: Arc::new(MemSessionsService::new(db)),
        }
    }

    /// Services backed by fresh, empty tables.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Db::new())
    }
}

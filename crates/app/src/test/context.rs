//! Test context for service-level tests.

use crate::{
    auth::MemSessionsService,
    database::Db,
    domain::{foods::MemFoodsService, orders::MemOrdersService, users::MemUsersService},
};

/// Services wired to one fresh set of tables.
pub struct TestContext {
    pub db: Db,
    pub foods: MemFoodsService,
    pub orders: MemOrdersService,
    pub users: MemUsersService,
    pub sessions: MemSessionsService,
}

impl TestContext {
    pub fn new() -> Self {
        let db = Db::new();

        Self {
            foods: MemFoodsService::new(db.clone()),
            orders: MemOrdersService::new(db.clone()),
            users: MemUsersService::new(db.clone()),
            sessions: MemSessionsService::new(db.clone()),
            db,
        }
    }
}

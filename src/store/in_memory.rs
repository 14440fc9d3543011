use crate::model::{Id, Order};
use crate::store::traits::OrderStore;
use anyhow::Result;
use parking_lot::RwLock;

/// Process-local order store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl OrderStore for InMemoryStore {
    async fn get_order(&self, id: &Id) -> Result<Option<Order>> {
        let orders = self.orders.read();
        Ok(orders.iter().find(|o| &o.id == id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().clone())
    }

    async fn insert_order(&self, order: Order) -> Result<()> {
        self.orders.write().push(order);
        Ok(())
    }

    async fn replace_order(&self, order: Order) -> Result<bool> {
        let mut orders = self.orders.write();
        match orders.iter().position(|o| o.id == order.id) {
            Some(index) => {
                orders[index] = order;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_order(&self, id: &Id) -> Result<bool> {
        let mut orders = self.orders.write();
        match orders.iter().position(|o| &o.id == id) {
            Some(index) => {
                orders.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_orders(&self) -> Result<usize> {
        Ok(self.orders.read().len())
    }
}

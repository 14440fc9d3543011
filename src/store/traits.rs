use crate::model::{Id, Order};
use anyhow::Result;

#[async_trait::async_trait]
pub trait OrderStore: Send + Sync {
    /// Find an order by id
    async fn get_order(&self, id: &Id) -> Result<Option<Order>>;
    /// All orders in insertion order
    async fn list_orders(&self) -> Result<Vec<Order>>;
    /// Append a new order
    async fn insert_order(&self, order: Order) -> Result<()>;
    /// Swap the stored order with the same id, keeping its position. Returns false if absent.
    async fn replace_order(&self, order: Order) -> Result<bool>;
    /// Remove an order. Returns false if absent.
    async fn delete_order(&self, id: &Id) -> Result<bool>;
    async fn count_orders(&self) -> Result<usize>;
}

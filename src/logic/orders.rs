use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::error::{OrderError, OrderResult};
use crate::logic::catalog::Catalog;
use crate::logic::delivery::{expected_delivery, DeliveryOffset, RandomOffset};
use crate::model::{CreateOrderRequest, Id, Order, OrderUpdate};
use crate::store::traits::OrderStore;

/// Owns the order collection and the inventory catalog.
///
/// Create, update and delete hold `write_lock` for their whole
/// read-validate-write sequence, so mutations are applied one at a time.
pub struct OrderService<S: OrderStore> {
    store: S,
    catalog: Catalog,
    offset: Box<dyn DeliveryOffset>,
    inventory_check: bool,
    write_lock: Mutex<()>,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self {
            store,
            catalog,
            offset: Box::new(RandomOffset),
            inventory_check: true,
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_offset(mut self, offset: impl DeliveryOffset + 'static) -> Self {
        self.offset = Box::new(offset);
        self
    }

    /// Turn catalog validation of create/update on or off.
    pub fn with_inventory_check(mut self, enabled: bool) -> Self {
        self.inventory_check = enabled;
        self
    }

    fn ensure_available(&self, make: &str, model: &str, color: &str) -> OrderResult<()> {
        if !self.inventory_check || self.catalog.is_available(make, model, color) {
            return Ok(());
        }
        warn!("Rejected unavailable car '{} {} {}'", make, model, color);
        Err(OrderError::invalid_combination(make, model, color))
    }

    pub async fn create(&self, request: CreateOrderRequest) -> OrderResult<Order> {
        let make = required(request.make, "Make")?;
        let model = required(request.model, "Model")?;
        let color = required(request.color, "Color")?;
        self.ensure_available(&make, &model, &color)?;

        let _guard = self.write_lock.lock().await;
        let now = Utc::now();
        let order = Order::new(make, model, color, now, expected_delivery(now, self.offset.as_ref()));
        self.store.insert_order(order.clone()).await?;

        info!(
            "Created order {} for {} {} {}, expected delivery {}",
            order.id,
            order.make,
            order.model,
            order.color,
            order.expected_delivery_date.to_rfc3339()
        );
        Ok(order)
    }

    pub async fn get(&self, id: &Id) -> OrderResult<Order> {
        debug!("Looking up order {}", id);
        self.store
            .get_order(id)
            .await?
            .ok_or_else(|| OrderError::order_not_found(id))
    }

    pub async fn list(&self) -> OrderResult<Vec<Order>> {
        Ok(self.store.list_orders().await?)
    }

    pub async fn count(&self) -> OrderResult<usize> {
        Ok(self.store.count_orders().await?)
    }

    /// Merge the update into the stored order and re-validate the resulting
    /// triple, even when only `status` changed.
    pub async fn update(&self, id: &Id, update: OrderUpdate) -> OrderResult<Order> {
        let _guard = self.write_lock.lock().await;
        let existing = self
            .store
            .get_order(id)
            .await?
            .ok_or_else(|| OrderError::order_not_found(id))?;

        let updated = existing.merged_with(update);
        self.ensure_available(&updated.make, &updated.model, &updated.color)?;

        if !self.store.replace_order(updated.clone()).await? {
            return Err(OrderError::order_not_found(id));
        }

        info!("Updated order {} (status '{}')", updated.id, updated.status);
        Ok(updated)
    }

    pub async fn delete(&self, id: &Id) -> OrderResult<()> {
        let _guard = self.write_lock.lock().await;
        if !self.store.delete_order(id).await? {
            return Err(OrderError::order_not_found(id));
        }
        info!("Deleted order {}", id);
        Ok(())
    }

    pub fn makes(&self) -> Vec<String> {
        self.catalog.makes()
    }

    pub fn models_for(&self, make: &str) -> OrderResult<Vec<String>> {
        self.catalog
            .models_for(make)
            .ok_or_else(|| OrderError::make_not_found(make))
    }

    pub fn colors(&self) -> Vec<String> {
        self.catalog.colors()
    }
}

fn required(value: Option<String>, field: &str) -> OrderResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(OrderError::ValidationFailure(format!(
            "The {} field is required.",
            field
        ))),
    }
}

use crate::logic::{Catalog, MakeEntry, OrderService};
use crate::model::CreateOrderRequest;
use crate::store::traits::OrderStore;
use anyhow::Result;

/// The inventory the service ships with.
pub fn standard_catalog() -> Catalog {
    Catalog::new(
        vec![
            MakeEntry::new("Toyota", &["Camry", "Corolla", "RAV4", "Highlander", "Prius"]),
            MakeEntry::new("BMW", &["3 Series", "5 Series", "X3", "X5", "M3"]),
        ],
        ["Black", "White", "Red", "Purple"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    )
}

/// Demo orders placed at startup when `LOAD_SEED_DATA=true`
pub fn seed_orders() -> Vec<CreateOrderRequest> {
    vec![
        CreateOrderRequest::new("Toyota", "Camry", "Black"),
        CreateOrderRequest::new("Toyota", "RAV4", "White"),
        CreateOrderRequest::new("BMW", "X5", "Purple"),
    ]
}

pub async fn load_seed_data<S: OrderStore>(service: &OrderService<S>) -> Result<usize> {
    let orders = seed_orders();
    let total = orders.len();
    for request in orders {
        let order = service.create(request).await?;
        log::info!("Seeded order {} ({} {} {})", order.id, order.make, order.model, order.color);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = standard_catalog();
        assert_eq!(catalog.makes(), vec!["Toyota", "BMW"]);
        assert_eq!(catalog.colors(), vec!["Black", "White", "Red", "Purple"]);
        assert_eq!(
            catalog.models_for("bmw"),
            Some(
                ["3 Series", "5 Series", "X3", "X5", "M3"]
                    .iter()
                    .map(|m| m.to_string())
                    .collect()
            )
        );
    }

    #[test]
    fn test_seed_orders_are_orderable() {
        let catalog = standard_catalog();
        for request in seed_orders() {
            assert!(catalog.is_available(
                request.make.as_deref().unwrap_or_default(),
                request.model.as_deref().unwrap_or_default(),
                request.color.as_deref().unwrap_or_default(),
            ));
        }
    }

    #[tokio::test]
    async fn test_load_seed_data_places_orders() {
        let service = OrderService::new(InMemoryStore::new(), standard_catalog());
        let seeded = load_seed_data(&service).await.unwrap();
        assert_eq!(seeded, 3);
        assert_eq!(service.list().await.unwrap().len(), 3);
    }
}

//! CollectionEntity implementation for [`Order`].
//!
//! At depth `n >= 1` each line item is replaced by its product read at depth `n - 1`,
//! so depth 2 also expands the products' file references. Line items whose product no
//! longer exists stay bare ids.

use super::OrderError;
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate, UserId};
use async_trait::async_trait;
use collection_framework::{CollectionApi, CollectionEntity, Relation};

#[async_trait]
impl CollectionEntity for Order {
    type Id = OrderId;
    type Owner = UserId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = ProductClient;
    type Error = OrderError;

    const SLUG: &'static str = "orders";

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let products = params.products.into_iter().map(Relation::Id).collect();
        Ok(Order::new(id, params.user, products))
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn owner(&self) -> Option<&UserId> {
        Some(&self.user)
    }

    fn on_update(&mut self, update: OrderUpdate) -> Result<(), Self::Error> {
        if let Some(products) = update.products {
            self.products = products.into_iter().map(Relation::Id).collect();
        }
        Ok(())
    }

    async fn populate(&mut self, depth: u8, products: &ProductClient) -> Result<(), Self::Error> {
        if depth == 0 {
            return Ok(());
        }
        for item in self.products.iter_mut() {
            let Relation::Id(product_id) = *item else {
                continue;
            };
            let found = products
                .get(product_id, depth - 1)
                .await
                .map_err(|e| OrderError::ProductLookup(e.to_string()))?;
            if let Some(product) = found {
                *item = product.into();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use collection_framework::mock::MockClient;

    fn order() -> Order {
        Order::new(
            OrderId(1),
            UserId(3),
            vec![Relation::Id(ProductId(4)), Relation::Id(ProductId(9))],
        )
    }

    #[tokio::test]
    async fn test_populate_at_depth_zero_keeps_bare_line_items() {
        let mock = MockClient::<Product>::new();
        let products = ProductClient::new(mock.client());

        let mut order = order();
        order.populate(0, &products).await.unwrap();
        assert!(order.products.iter().all(|item| !item.is_expanded()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_populate_leaves_missing_product_bare() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(4))
            .return_ok(Some(Product::new(ProductId(4), UserId(2), "Poster", 19.0)));
        mock.expect_get(ProductId(9)).return_ok(None);
        let products = ProductClient::new(mock.client());

        let mut order = order();
        order.populate(1, &products).await.unwrap();
        assert!(order.products[0].is_expanded());
        assert_eq!(order.products[1], Relation::Id(ProductId(9)));
        mock.verify();
    }
}

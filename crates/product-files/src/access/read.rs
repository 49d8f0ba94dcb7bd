//! # Read Access: Yours and Purchased
//!
//! A product file is readable by admins, by the owner of a product that references it,
//! and by anyone with an order containing such a product. The rule does not look at
//! files at all: it collects the visible file ids from products and orders and answers
//! with an `id in [...]` filter the files collection applies to its reads.

use super::{AccessError, Diagnostic, Diagnostics, OrderRepository, ProductRepository};
use crate::model::{Order, Product, ProductFileId, User};
use collection_framework::{Access, Filter};
use tracing::{debug, instrument};

/// Depth for the owned-products query; only the bare file id is needed.
pub const PRODUCTS_DEPTH: u8 = 0;
/// Depth for the orders query: line items expanded to products, products to files.
pub const ORDERS_DEPTH: u8 = 2;

/// Everything the read rule needs, passed in explicitly.
#[derive(Clone, Copy)]
pub struct AccessContext<'a> {
    /// The requesting identity, `None` when anonymous.
    pub identity: Option<&'a User>,
    /// Source of the products the identity owns.
    pub products: &'a dyn ProductRepository,
    /// Source of the orders the identity placed.
    pub orders: &'a dyn OrderRepository,
    /// Where line items that could not be resolved are reported.
    pub diagnostics: &'a dyn Diagnostics,
}

impl<'a> AccessContext<'a> {
    pub fn new(
        identity: Option<&'a User>,
        products: &'a dyn ProductRepository,
        orders: &'a dyn OrderRepository,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            identity,
            products,
            orders,
            diagnostics,
        }
    }
}

/// Evaluates the read rule for `ctx.identity`.
///
/// Anonymous requests are denied and admins are granted everything, without touching
/// either repository. For anyone else the result lists the files of their own products
/// followed by the files of products they ordered; duplicates are kept.
#[instrument(skip(ctx), fields(user = ?ctx.identity.map(|u| u.id)))]
pub async fn yours_and_purchased(
    ctx: &AccessContext<'_>,
) -> Result<Access<ProductFileId>, AccessError> {
    let Some(user) = ctx.identity else {
        debug!("Anonymous read denied");
        return Ok(Access::Denied);
    };
    if user.is_admin() {
        debug!("Admin read granted");
        return Ok(Access::Granted);
    }

    let products = ctx.products.find_by_owner(&user.id, PRODUCTS_DEPTH).await?;
    let mut visible = owned_file_ids(&products);

    let orders = ctx.orders.find_by_purchaser(&user.id, ORDERS_DEPTH).await?;
    visible.extend(purchased_file_ids(&orders, ctx.diagnostics));

    debug!(
        products = products.len(),
        orders = orders.len(),
        files = visible.len(),
        "Read filter built"
    );
    Ok(Access::Where(Filter::IdIn(visible)))
}

/// File ids referenced by `products`; products without a file contribute nothing.
pub fn owned_file_ids(products: &[Product]) -> Vec<ProductFileId> {
    products.iter().filter_map(Product::file_id).collect()
}

/// File ids reachable from the line items of `orders`.
///
/// A line item that is still a bare product id cannot be resolved; it is reported to
/// `diagnostics` and skipped.
pub fn purchased_file_ids(orders: &[Order], diagnostics: &dyn Diagnostics) -> Vec<ProductFileId> {
    let mut ids = Vec::new();
    for order in orders {
        for item in &order.products {
            match item.expanded() {
                Some(product) => ids.extend(product.file_id()),
                None => diagnostics.record(Diagnostic::InsufficientDepth {
                    order: order.id,
                    product: *item.id(),
                    depth: ORDERS_DEPTH,
                }),
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::RecordingDiagnostics;
    use crate::model::{OrderId, ProductFile, ProductId, UserId};
    use collection_framework::Relation;

    fn file(id: u32) -> ProductFile {
        ProductFile::new(ProductFileId(id), format!("f{id}.png"), "image/png", 1)
    }

    #[test]
    fn test_owned_ids_normalise_both_reference_forms() {
        let products = vec![
            Product::new(ProductId(1), UserId(1), "bare", 1.0).with_file(Relation::Id(ProductFileId(10))),
            Product::new(ProductId(2), UserId(1), "expanded", 1.0).with_file(file(20)),
            Product::new(ProductId(3), UserId(1), "no file", 1.0),
        ];
        assert_eq!(
            owned_file_ids(&products),
            vec![ProductFileId(10), ProductFileId(20)]
        );
    }

    #[test]
    fn test_purchased_ids_skip_and_record_bare_line_items() {
        let expanded = Product::new(ProductId(1), UserId(9), "poster", 5.0).with_file(file(30));
        let orders = vec![
            Order::new(
                OrderId(1),
                UserId(2),
                vec![Relation::from(expanded), Relation::Id(ProductId(2))],
            ),
            Order::new(OrderId(2), UserId(2), vec![]),
        ];
        let diagnostics = RecordingDiagnostics::new();

        assert_eq!(purchased_file_ids(&orders, &diagnostics), vec![ProductFileId(30)]);
        assert_eq!(
            diagnostics.entries(),
            vec![Diagnostic::InsufficientDepth {
                order: OrderId(1),
                product: ProductId(2),
                depth: ORDERS_DEPTH,
            }]
        );
    }

    #[test]
    fn test_expanded_product_without_file_is_silent() {
        let orders = vec![Order::new(
            OrderId(1),
            UserId(2),
            vec![Product::new(ProductId(1), UserId(9), "bundle", 5.0).into()],
        )];
        let diagnostics = RecordingDiagnostics::new();
        assert!(purchased_file_ids(&orders, &diagnostics).is_empty());
        assert!(diagnostics.entries().is_empty());
    }
}

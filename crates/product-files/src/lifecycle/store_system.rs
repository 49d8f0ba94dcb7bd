use crate::access::{AccessContext, Diagnostics};
use crate::clients::{OrderClient, ProductClient, ProductFileClient};
use crate::collection::ProductFilesCollection;
use crate::config::UploadConfig;
use crate::model::User;
use tracing::{error, info};

/// The running set of collections behind the product file store.
///
/// ```ignore
/// let system = StoreSystem::new(UploadConfig::from_env());
///
/// let file_id = system.product_file_client.create_file(upload, Some(&seller)).await?;
/// let diagnostics = TracingDiagnostics;
/// let ctx = system.access_context(Some(&buyer), &diagnostics);
/// let files = system.product_file_client.find_readable(&ctx).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub product_file_client: ProductFileClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    /// The `product_files` collection configuration the system was started with.
    pub collection: ProductFilesCollection,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns the files, products and orders collections.
    pub fn new(upload: UploadConfig) -> Self {
        let (file_actor, file_client) = crate::product_file_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let product_file_client = ProductFileClient::new(file_client);
        let product_client = ProductClient::new(product_client);
        let order_client = OrderClient::new(order_client);

        let file_handle = tokio::spawn(file_actor.run(upload.clone()));
        let product_handle = tokio::spawn(product_actor.run(product_file_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        info!(static_dir = %upload.static_dir, "Store system started");

        Self {
            product_file_client,
            product_client,
            order_client,
            collection: ProductFilesCollection::new(upload),
            handles: vec![order_handle, product_handle, file_handle],
        }
    }

    /// Builds the read-rule context for `identity` over this system's collections.
    pub fn access_context<'a>(
        &'a self,
        identity: Option<&'a User>,
        diagnostics: &'a dyn Diagnostics,
    ) -> AccessContext<'a> {
        AccessContext::new(identity, &self.product_client, &self.order_client, diagnostics)
    }

    /// Drops every client and waits for the actors to stop.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");
        drop(self.order_client);
        drop(self.product_client);
        drop(self.product_file_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {:?}", e);
                return Err(format!("Collection task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}

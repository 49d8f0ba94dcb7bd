//! # Product Files Demo
//!
//! Starts the [`StoreSystem`], lets a seller upload a file and list a product for it,
//! lets a buyer order the product, then shows which files each identity may read.

use product_files::access::{yours_and_purchased, TracingDiagnostics};
use product_files::config::UploadConfig;
use product_files::lifecycle::{setup_tracing, StoreSystem};
use product_files::model::{OrderCreate, ProductCreate, ProductFileCreate, Role, User, UserId};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = StoreSystem::new(UploadConfig::from_env());
    let diagnostics = TracingDiagnostics;

    let admin = User::new(UserId(1), "Root", "root@example.com", Role::Admin);
    let seller = User::new(UserId(2), "Sam", "sam@example.com", Role::User);
    let buyer = User::new(UserId(3), "Bea", "bea@example.com", Role::User);
    let stranger = User::new(UserId(4), "Stan", "stan@example.com", Role::User);

    let span = tracing::info_span!("listing");
    let product_id = async {
        let file_id = system
            .product_file_client
            .create_file(
                ProductFileCreate {
                    user: None,
                    filename: "poster.png".to_string(),
                    mime_type: "image/png".to_string(),
                    filesize: 48_213,
                },
                Some(&seller),
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(%file_id, "File uploaded");

        system
            .product_client
            .create_product(ProductCreate {
                user: seller.id,
                name: "Poster".to_string(),
                price: 19.0,
                product_file: Some(file_id),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(%product_id, "Product listed");

    let order_id = system
        .order_client
        .create_order(OrderCreate {
            user: buyer.id,
            products: vec![product_id],
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%order_id, "Product ordered");

    for identity in [None, Some(&admin), Some(&seller), Some(&buyer), Some(&stranger)] {
        let name = identity.map_or("anonymous", |u| u.name.as_str());
        let ctx = system.access_context(identity, &diagnostics);
        let access = yours_and_purchased(&ctx).await.map_err(|e| e.to_string())?;
        info!(user = name, rule = %access.to_json(), "Read rule");

        match system.product_file_client.find_readable(&ctx).await {
            Ok(files) => {
                let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
                info!(user = name, ?names, "Readable files");
            }
            Err(e) => info!(user = name, error = %e, "Read refused"),
        }
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}

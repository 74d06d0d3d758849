use chrono::{Duration, Utc};
use production_ledger::config::load_config;
use production_ledger::lifecycle::setup_tracing;
use production_ledger::model::{
    BomCreate, BomItem, NewProductionOrder, ProductCreate, ProductType, Schedule,
};
use production_ledger::ProductionSystem;
use std::error::Error;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    setup_tracing(&config.log_filter);
    info!(
        mailbox_capacity = config.mailbox_capacity,
        log_filter = %config.log_filter,
        "Configuration loaded"
    );

    info!("Starting production ledger demo");
    let system = ProductionSystem::with_config(&config);

    let span = tracing::info_span!("catalogue_setup");
    let (assembly, part) = async {
        info!("Creating products and bill of materials");
        let assembly = system
            .product_client
            .create_product(ProductCreate::new("Assembly A", ProductType::Manufactured, 0))
            .await?;
        let mut part = ProductCreate::new("Part X", ProductType::Component, 10);
        part.reorder_threshold = Some(5);
        let part = system.product_client.create_product(part).await?;

        system
            .bom_client
            .create_bom(BomCreate {
                product_id: assembly,
                items: vec![BomItem::new(part, 2)],
            })
            .await?;
        Ok::<_, Box<dyn Error>>((assembly, part))
    }
    .instrument(span)
    .await?;

    let today = Utc::now().date_naive();
    let order_id = system
        .production_client
        .create_order(NewProductionOrder {
            product_id: assembly,
            quantity: 3,
            schedule: Schedule::new(today, today + Duration::days(2)),
            notes: Some("demo run".to_string()),
        })
        .await?;
    info!(order_id = %order_id, "Production order planned");

    let span = tracing::info_span!("completion");
    let completion = async {
        info!("Completing production order");
        system.production_client.complete(order_id).await
    }
    .instrument(span)
    .await;

    match completion {
        Ok(receipt) => info!(
            order_id = %receipt.order.id,
            produced = receipt.produced,
            "Production order completed"
        ),
        Err(e) => error!(error = %e, "Completion failed"),
    }

    let part_stock = system.product_client.check_stock(part).await?;
    let assembly_stock = system.product_client.check_stock(assembly).await?;
    info!(part_stock, assembly_stock, "Stock after completion");

    for product in system.product_client.low_stock().await? {
        info!(product_id = %product.id, stock = product.stock, "Below reorder threshold");
    }
    for entry in system.activity_client.recent(10).await?.into_iter().rev() {
        info!(at = %entry.recorded_at, "{}", entry.message);
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

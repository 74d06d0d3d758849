use crate::clients::{ActivityLogClient, BomClient, ProductClient, ProductionOrderClient};
use crate::config::SystemConfig;
use crate::production_actor::ProductionContext;
use crate::{activity_actor, bom_actor, product_actor, production_actor};
use tracing::{error, info};

/// The runtime orchestrator for the production ledger.
///
/// Owns one running actor per record collection and exposes a typed client for
/// each. Dependencies point one way only:
///
/// ```text
/// production --> bom --> product
///     |  \_____________/^
///     +--> activity
/// ```
///
/// # Example
///
/// ```ignore
/// let system = ProductionSystem::new();
/// let order = system.production_client.create_order(new_order).await?;
/// system.production_client.complete(order).await?;
/// system.shutdown().await?;
/// ```
pub struct ProductionSystem {
    pub product_client: ProductClient,
    pub bom_client: BomClient,
    pub production_client: ProductionOrderClient,
    pub activity_client: ActivityLogClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for ProductionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductionSystem {
    /// Starts every actor with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    pub fn with_config(config: &SystemConfig) -> Self {
        let capacity = config.mailbox_capacity;

        // 1. Create actors (no dependencies yet)
        let (product_actor, product_client) = product_actor::new(capacity);
        let (bom_actor, bom_client) = bom_actor::new(capacity);
        let (production_actor, production_client) = production_actor::new(capacity);
        let (activity_actor, activity_client) = activity_actor::new(capacity);

        let product_client = ProductClient::new(product_client);
        let bom_client = BomClient::new(bom_client);
        let activity_client = ActivityLogClient::new(activity_client);
        let production_client = ProductionOrderClient::new(production_client, bom_client.clone());

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(()));
        let activity_handle = tokio::spawn(activity_actor.run(()));
        let bom_handle = tokio::spawn(bom_actor.run(product_client.clone()));
        let production_handle = tokio::spawn(production_actor.run(ProductionContext {
            boms: bom_client.clone(),
            products: product_client.clone(),
            activity: activity_client.clone(),
        }));

        info!(mailbox_capacity = capacity, "Production system started");

        Self {
            product_client,
            bom_client,
            production_client,
            activity_client,
            // Dependents first, so each actor's clients are gone by the time
            // its dependencies are awaited.
            handles: vec![production_handle, bom_handle, activity_handle, product_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes every mailbox. The production actor exits
    /// first and releases the clients it held in its context, which lets the
    /// BOM, activity and product actors exit in turn.
    ///
    /// # Errors
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.production_client);
        drop(self.bom_client);
        drop(self.activity_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

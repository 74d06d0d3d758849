use actor_framework::ActorClient;
use chrono::NaiveDate;
use production_ledger::bom_actor::BomError;
use production_ledger::config::SystemConfig;
use production_ledger::model::{
    BomCreate, BomId, BomItem, NewProductionOrder, ProductCreate, ProductId, ProductType,
    ProductionOrderId, ProductionOrderUpdate, ProductionStatus, Schedule,
};
use production_ledger::product_actor::ProductError;
use production_ledger::production_actor::{ProductionOrderError, Shortage};
use production_ledger::ProductionSystem;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Barrier;

fn schedule() -> Schedule {
    let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
    Schedule::new(day(3), day(7))
}

fn new_order(product_id: ProductId, quantity: u32) -> NewProductionOrder {
    NewProductionOrder {
        product_id,
        quantity,
        schedule: schedule(),
        notes: None,
    }
}

struct Plant {
    system: ProductionSystem,
    assembly: ProductId,
    part: ProductId,
    bom: BomId,
}

/// A (manufactured, stock 0), X (component, stock `part_stock`), BOM(A) = 2 x X.
async fn plant(part_stock: u32) -> Plant {
    let system = ProductionSystem::new();
    let assembly = system
        .product_client
        .create_product(ProductCreate::new("A", ProductType::Manufactured, 0))
        .await
        .expect("Failed to create assembly");
    let part = system
        .product_client
        .create_product(ProductCreate::new("X", ProductType::Component, part_stock))
        .await
        .expect("Failed to create part");
    let bom = system
        .bom_client
        .create_bom(BomCreate {
            product_id: assembly,
            items: vec![BomItem::new(part, 2)],
        })
        .await
        .expect("Failed to create BOM");

    Plant {
        system,
        assembly,
        part,
        bom,
    }
}

impl Plant {
    async fn stock(&self, id: ProductId) -> u32 {
        self.system
            .product_client
            .check_stock(id)
            .await
            .expect("Failed to check stock")
    }

    async fn status(&self, id: ProductionOrderId) -> ProductionStatus {
        self.system
            .production_client
            .get(id)
            .await
            .expect("Failed to get order")
            .expect("Order not found")
            .status
    }
}

#[tokio::test]
async fn test_completion_consumes_components_and_credits_product() {
    let plant = plant(10).await;
    let orders = &plant.system.production_client;

    let order_id = orders
        .create_order(new_order(plant.assembly, 3))
        .await
        .expect("Failed to create order");
    let order = orders.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, ProductionStatus::Planned);
    assert_eq!(order.bom_id, plant.bom);
    assert!(order.actual_completion_date.is_none());

    let receipt = orders.complete(order_id).await.expect("Completion failed");
    assert_eq!(receipt.consumed, vec![(plant.part, 6)]);
    assert_eq!(receipt.produced, 3);
    assert_eq!(receipt.order.status, ProductionStatus::Completed);
    assert!(receipt.order.actual_completion_date.is_some());

    assert_eq!(plant.stock(plant.part).await, 4);
    assert_eq!(plant.stock(plant.assembly).await, 3);
    assert_eq!(plant.status(order_id).await, ProductionStatus::Completed);

    // A second completion is rejected and changes nothing.
    let again = orders.complete(order_id).await;
    assert_eq!(
        again,
        Err(ProductionOrderError::InvalidTransition {
            from: ProductionStatus::Completed,
            to: ProductionStatus::Completed,
        })
    );
    assert_eq!(plant.stock(plant.part).await, 4);
    assert_eq!(plant.stock(plant.assembly).await, 3);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shortage_leaves_stock_and_status_untouched() {
    let plant = plant(5).await;
    let orders = &plant.system.production_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 3))
        .await
        .unwrap();

    let result = orders.complete(order_id).await;
    assert_eq!(
        result,
        Err(ProductionOrderError::InsufficientStock {
            order_id,
            shortages: vec![Shortage {
                product_id: plant.part,
                required: 6,
                available: 5,
            }],
        })
    );

    assert_eq!(plant.stock(plant.part).await, 5);
    assert_eq!(plant.stock(plant.assembly).await, 0);
    assert_eq!(plant.status(order_id).await, ProductionStatus::Planned);

    // Receiving the missing unit unblocks completion.
    plant
        .system
        .product_client
        .receive_stock(plant.part, 1)
        .await
        .unwrap();
    orders.complete(order_id).await.expect("Completion failed");
    assert_eq!(plant.stock(plant.part).await, 0);
    assert_eq!(plant.stock(plant.assembly).await, 3);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_every_shortage_is_reported() {
    let system = ProductionSystem::new();
    let products = &system.product_client;
    let bike = products
        .create_product(ProductCreate::new("Bike", ProductType::Manufactured, 0))
        .await
        .unwrap();
    let wheel = products
        .create_product(ProductCreate::new("Wheel", ProductType::Component, 1))
        .await
        .unwrap();
    let frame = products
        .create_product(ProductCreate::new("Frame", ProductType::Standard, 5))
        .await
        .unwrap();
    let bolt = products
        .create_product(ProductCreate::new("Bolt", ProductType::Component, 3))
        .await
        .unwrap();
    system
        .bom_client
        .create_bom(BomCreate {
            product_id: bike,
            items: vec![
                BomItem::new(wheel, 2),
                BomItem::new(frame, 1),
                BomItem::new(bolt, 4),
            ],
        })
        .await
        .unwrap();

    let order_id = system
        .production_client
        .create_order(new_order(bike, 2))
        .await
        .unwrap();
    let err = system.production_client.complete(order_id).await.unwrap_err();

    match err {
        ProductionOrderError::InsufficientStock { shortages, .. } => {
            assert_eq!(
                shortages,
                vec![
                    Shortage {
                        product_id: wheel,
                        required: 4,
                        available: 1,
                    },
                    Shortage {
                        product_id: bolt,
                        required: 8,
                        available: 3,
                    },
                ]
            );
        }
        other => panic!("Expected InsufficientStock, got {other:?}"),
    }
    assert_eq!(products.check_stock(frame).await.unwrap(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_never_touches_stock_and_is_terminal() {
    let plant = plant(10).await;
    let orders = &plant.system.production_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 3))
        .await
        .unwrap();

    let cancelled = orders.cancel(order_id).await.unwrap();
    assert_eq!(cancelled.status, ProductionStatus::Cancelled);
    assert_eq!(plant.stock(plant.part).await, 10);
    assert_eq!(plant.stock(plant.assembly).await, 0);

    for to in [
        ProductionStatus::Planned,
        ProductionStatus::InProgress,
        ProductionStatus::OnHold,
        ProductionStatus::Completed,
        ProductionStatus::Cancelled,
    ] {
        assert!(
            matches!(
                orders.transition(order_id, to).await,
                Err(ProductionOrderError::InvalidTransition { .. })
            ),
            "cancelled -> {to} must be rejected"
        );
    }
    assert_eq!(plant.stock(plant.part).await, 10);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hold_resume_complete_path() {
    let plant = plant(10).await;
    let orders = &plant.system.production_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 1))
        .await
        .unwrap();

    assert_eq!(
        orders.start(order_id).await.unwrap().status,
        ProductionStatus::InProgress
    );
    assert_eq!(
        orders.hold(order_id).await.unwrap().status,
        ProductionStatus::OnHold
    );
    assert_eq!(
        orders.resume(order_id).await.unwrap().status,
        ProductionStatus::InProgress
    );
    assert!(matches!(
        orders.transition(order_id, ProductionStatus::Planned).await,
        Err(ProductionOrderError::InvalidTransition { .. })
    ));
    orders.complete(order_id).await.unwrap();
    assert_eq!(plant.stock(plant.part).await, 8);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_complete_from_on_hold() {
    let plant = plant(5).await;
    let orders = &plant.system.production_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 3))
        .await
        .unwrap();
    assert_eq!(
        orders.hold(order_id).await.unwrap().status,
        ProductionStatus::OnHold
    );

    // 6 parts needed, 5 on hand: the order stays on hold.
    assert_eq!(
        orders.complete(order_id).await,
        Err(ProductionOrderError::InsufficientStock {
            order_id,
            shortages: vec![Shortage {
                product_id: plant.part,
                required: 6,
                available: 5,
            }],
        })
    );
    assert_eq!(plant.status(order_id).await, ProductionStatus::OnHold);
    assert_eq!(plant.stock(plant.part).await, 5);
    assert_eq!(plant.stock(plant.assembly).await, 0);

    plant
        .system
        .product_client
        .receive_stock(plant.part, 1)
        .await
        .unwrap();
    let receipt = orders.complete(order_id).await.expect("Completion failed");
    assert_eq!(receipt.order.status, ProductionStatus::Completed);
    assert!(receipt.order.actual_completion_date.is_some());
    assert_eq!(plant.status(order_id).await, ProductionStatus::Completed);
    assert_eq!(plant.stock(plant.part).await, 0);
    assert_eq!(plant.stock(plant.assembly).await, 3);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_order_validation() {
    let plant = plant(10).await;
    let orders = &plant.system.production_client;

    // No BOM for the component itself.
    assert!(matches!(
        orders.create_order(new_order(plant.part, 1)).await,
        Err(ProductionOrderError::ValidationError(_))
    ));

    assert!(matches!(
        orders.create_order(new_order(plant.assembly, 0)).await,
        Err(ProductionOrderError::ValidationError(_))
    ));

    let mut inverted = new_order(plant.assembly, 1);
    inverted.schedule = Schedule::new(schedule().end, schedule().start);
    assert!(matches!(
        orders.create_order(inverted).await,
        Err(ProductionOrderError::ValidationError(_))
    ));

    assert!(orders.list().await.unwrap().is_empty());
    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edits_allowed_until_completion() {
    let plant = plant(20).await;
    let orders = &plant.system.production_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 2))
        .await
        .unwrap();

    let edited = orders
        .edit(
            order_id,
            ProductionOrderUpdate {
                quantity: Some(5),
                notes: Some("expedite".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.quantity, 5);
    assert_eq!(edited.notes.as_deref(), Some("expedite"));

    // A rejected edit leaves the order as it was.
    let rejected = orders
        .edit(
            order_id,
            ProductionOrderUpdate {
                quantity: Some(0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(rejected, Err(ProductionOrderError::ValidationError(_))));
    assert_eq!(orders.get(order_id).await.unwrap().unwrap().quantity, 5);

    orders.complete(order_id).await.unwrap();
    assert_eq!(plant.stock(plant.part).await, 10);
    assert_eq!(plant.stock(plant.assembly).await, 5);

    let after = orders
        .edit(
            order_id,
            ProductionOrderUpdate {
                notes: Some("too late".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(after, Err(ProductionOrderError::ValidationError(_))));

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bom_resolution_is_idempotent() {
    let plant = plant(10).await;
    let boms = &plant.system.bom_client;

    let first = boms.find_by_product(plant.assembly).await.unwrap().unwrap();
    let second = boms.find_by_product(plant.assembly).await.unwrap().unwrap();
    assert_eq!(first.id, plant.bom);
    assert_eq!(first.items, second.items);
    assert_eq!(boms.find_by_product(plant.part).await.unwrap(), None);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bom_composition_rules() {
    let plant = plant(10).await;
    let boms = &plant.system.bom_client;

    // Components cannot have a BOM.
    let result = boms
        .create_bom(BomCreate {
            product_id: plant.part,
            items: vec![BomItem::new(plant.part, 1)],
        })
        .await;
    assert!(matches!(result, Err(BomError::ValidationError(_))));

    // One BOM per product.
    let result = boms
        .create_bom(BomCreate {
            product_id: plant.assembly,
            items: vec![BomItem::new(plant.part, 3)],
        })
        .await;
    assert!(matches!(result, Err(BomError::ValidationError(_))));

    // Manufactured products cannot be components.
    let kit = plant
        .system
        .product_client
        .create_product(ProductCreate::new("Kit", ProductType::Standard, 0))
        .await
        .unwrap();
    let result = boms
        .create_bom(BomCreate {
            product_id: kit,
            items: vec![BomItem::new(plant.assembly, 1)],
        })
        .await;
    assert!(matches!(result, Err(BomError::ValidationError(_))));

    // A rejected item update keeps the old recipe.
    let result = boms
        .update_items(plant.bom, vec![BomItem::new(ProductId(99), 1)])
        .await;
    assert!(matches!(result, Err(BomError::ValidationError(_))));
    let bom = boms.get(plant.bom).await.unwrap().unwrap();
    assert_eq!(bom.items, vec![BomItem::new(plant.part, 2)]);

    let updated = boms
        .update_items(plant.bom, vec![BomItem::new(plant.part, 5)])
        .await
        .unwrap();
    assert_eq!(updated.items[0].quantity, 5);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_completion_uses_recreated_bom() {
    let plant = plant(10).await;
    let orders = &plant.system.production_client;
    let boms = &plant.system.bom_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 2))
        .await
        .unwrap();

    boms.delete(plant.bom).await.unwrap();
    let recreated = boms
        .create_bom(BomCreate {
            product_id: plant.assembly,
            items: vec![BomItem::new(plant.part, 3)],
        })
        .await
        .expect("Recipe should be free again after delete");
    assert_ne!(recreated, plant.bom);

    let receipt = orders.complete(order_id).await.expect("Completion failed");
    assert_eq!(receipt.bom_id, recreated);
    assert_eq!(receipt.consumed, vec![(plant.part, 6)]);

    let order = orders.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.bom_id, recreated);
    assert_eq!(plant.stock(plant.part).await, 4);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bom_creates_leave_one_recipe_per_product() {
    let plant = plant(0).await;
    let boms = plant.system.bom_client.clone();

    for round in 0..25 {
        let kit = plant
            .system
            .product_client
            .create_product(ProductCreate::new(
                format!("Kit {round}"),
                ProductType::Manufactured,
                0,
            ))
            .await
            .unwrap();

        let barrier = Arc::new(Barrier::new(2));
        let tasks: Vec<_> = (1..=2)
            .map(|quantity| {
                let boms = boms.clone();
                let barrier = barrier.clone();
                let part = plant.part;
                tokio::spawn(async move {
                    barrier.wait().await;
                    boms.create_bom(BomCreate {
                        product_id: kit,
                        items: vec![BomItem::new(part, quantity)],
                    })
                    .await
                })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => created += 1,
                Err(BomError::ValidationError(_)) => {}
                Err(other) => panic!("Unexpected error: {other:?}"),
            }
        }
        assert_eq!(created, 1, "round {round}");
    }

    let all = boms.list().await.unwrap();
    assert_eq!(all.len(), 26);
    let products: HashSet<_> = all.iter().map(|bom| bom.product_id).collect();
    assert_eq!(products.len(), all.len());

    drop(boms);
    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_completions_never_oversell() {
    let plant = plant(10).await;
    let orders = plant.system.production_client.clone();

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(orders.create_order(new_order(plant.assembly, 2)).await.unwrap());
    }

    // Each order needs 4 of the 10 parts; only two can be afforded.
    let tasks: Vec<_> = ids
        .iter()
        .map(|&id| {
            let orders = orders.clone();
            tokio::spawn(async move { orders.complete(id).await })
        })
        .collect();

    let mut completed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => completed += 1,
            Err(ProductionOrderError::InsufficientStock { .. }) => {}
            Err(other) => panic!("Unexpected error: {other:?}"),
        }
    }

    assert_eq!(completed, 2);
    assert_eq!(plant.stock(plant.part).await, 2);
    assert_eq!(plant.stock(plant.assembly).await, 4);

    drop(orders);
    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_operations_and_low_stock() {
    let plant = plant(10).await;
    let products = &plant.system.product_client;

    assert_eq!(products.consume_stock(plant.part, 4).await, Ok(6));
    assert_eq!(
        products.consume_stock(plant.part, 7).await,
        Err(ProductError::InsufficientStock {
            product_id: plant.part,
            requested: 7,
            available: 6,
        })
    );
    assert_eq!(
        products.receive_stock(plant.part, 0).await,
        Err(ProductError::InvalidQuantity(0))
    );
    assert!(matches!(
        products.check_stock(ProductId(99)).await,
        Err(ProductError::NotFound(_))
    ));

    products
        .update_product(
            plant.part,
            production_ledger::model::ProductUpdate {
                reorder_threshold: Some(Some(6)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let low: Vec<ProductId> = products
        .low_stock()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(low, vec![plant.part]);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_activity_log_records_order_history() {
    let plant = plant(10).await;
    let orders = &plant.system.production_client;
    let order_id = orders
        .create_order(new_order(plant.assembly, 1))
        .await
        .unwrap();
    orders.start(order_id).await.unwrap();
    orders.complete(order_id).await.unwrap();

    let recent = plant.system.activity_client.recent(10).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert!(recent[0].message.contains("completed"));
    assert!(recent[2].message.contains("planned"));

    let last = plant.system.activity_client.recent(1).await.unwrap();
    assert_eq!(last[0].id, recent[0].id);

    plant.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_system_honours_configured_capacity() {
    let config = SystemConfig {
        mailbox_capacity: 1,
        ..SystemConfig::default()
    };
    let system = ProductionSystem::with_config(&config);
    let id = system
        .product_client
        .create_product(ProductCreate::new("Crate", ProductType::Standard, 1))
        .await
        .unwrap();
    assert_eq!(system.product_client.check_stock(id).await, Ok(1));
    system.shutdown().await.unwrap();
}

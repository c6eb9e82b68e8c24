#![cfg(feature = "sqlite")]

use cart_client::CartClient;
use cart_hex::application::cart_manager::{CartManager, CartSettings};
use cart_hex::inbound::page::MemoryPage;
use cart_store::{build_store, Store};
use cart_types::ports::cart_store::CartStore;

// Two page loads against the same on-disk store see the same cart.
#[tokio::test]
async fn cart_survives_page_reload() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cart-test.db");
    let url = format!("sqlite://{}", db_path.display());
    let client = CartClient::new("http://127.0.0.1:9/").unwrap();

    {
        let store: Store = build_store(Some(&url)).await.expect("build store");
        assert!(store.get("storefront_cart").await.unwrap().is_none());

        let mut mgr = CartManager::load(
            store,
            client.clone(),
            MemoryPage::storefront(),
            CartSettings::default(),
        )
        .await
        .unwrap();
        mgr.add_item("1", "Fresh Apples", 120.0, "apples.jpg").await.unwrap();
        mgr.add_item("1", "Fresh Apples", 120.0, "apples.jpg").await.unwrap();
        mgr.add_item("4", "Farm Fresh Milk", 55.0, "milk.jpg").await.unwrap();
    }

    let store: Store = build_store(Some(&url)).await.expect("reopen store");
    let mgr = CartManager::load(store, client, MemoryPage::cart_page(), CartSettings::default())
        .await
        .unwrap();
    assert_eq!(mgr.cart().len(), 2);
    assert_eq!(mgr.cart().get("1").unwrap().quantity, 2);
    assert_eq!(mgr.cart().get("4").unwrap().price, 55.0);
    assert_eq!(mgr.page().summary().unwrap().total, "₹295.00");
}

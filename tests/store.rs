use std::sync::Arc;

use storefront_api::{
    models::{CartItem, Product, ProductId},
    store::{CART_KEY, JsonFileStore, MemoryStore, ORDERS_KEY, StorageBackend, Store},
};

fn sample_cart() -> Vec<CartItem> {
    vec![
        CartItem {
            product: Product {
                id: ProductId::Number(3),
                name: "Scarf".into(),
                price: "19.99".parse().expect("price"),
                image: "https://cdn.example.com/3.jpg".into(),
                category: Some("accessories".into()),
            },
            quantity: 2,
        },
        CartItem {
            product: Product {
                id: ProductId::Text("sku-hat".into()),
                name: "Hat".into(),
                price: "9.50".parse().expect("price"),
                image: "https://cdn.example.com/hat.jpg".into(),
                category: None,
            },
            quantity: 1,
        },
    ]
}

#[test]
fn missing_key_reads_as_the_empty_default() {
    let store = Store::in_memory();

    let cart: Vec<CartItem> = store.get(CART_KEY);
    assert!(cart.is_empty());
}

// A corrupt stored value must degrade to the empty default, never fail
// the caller.
#[test]
fn corrupt_value_reads_as_the_empty_default() {
    let backend = Arc::new(MemoryStore::default());
    backend
        .write(CART_KEY, "{definitely not json")
        .expect("raw write");

    let store = Store::new(backend);
    let cart: Vec<CartItem> = store.get(CART_KEY);
    assert!(cart.is_empty());
}

// Writing a cart and reading it back yields a deep-equal value with item
// order preserved.
#[test]
fn cart_round_trips_in_insertion_order() -> anyhow::Result<()> {
    let store = Store::in_memory();
    let cart = sample_cart();

    store.set(CART_KEY, &cart)?;
    let loaded: Vec<CartItem> = store.get(CART_KEY);
    assert_eq!(loaded, cart);

    Ok(())
}

#[test]
fn later_write_replaces_the_whole_value() -> anyhow::Result<()> {
    let store = Store::in_memory();
    let cart = sample_cart();

    store.set(CART_KEY, &cart)?;
    store.set(CART_KEY, &cart[..1].to_vec())?;

    let loaded: Vec<CartItem> = store.get(CART_KEY);
    assert_eq!(loaded.len(), 1);

    Ok(())
}

#[test]
fn file_store_persists_across_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cart = sample_cart();

    {
        let store = Store::new(Arc::new(JsonFileStore::open(dir.path())?));
        store.set(CART_KEY, &cart)?;
    }

    let store = Store::new(Arc::new(JsonFileStore::open(dir.path())?));
    let loaded: Vec<CartItem> = store.get(CART_KEY);
    assert_eq!(loaded, cart);

    Ok(())
}

#[test]
fn file_store_keeps_keys_independent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = Store::new(Arc::new(JsonFileStore::open(dir.path())?));

    store.set(CART_KEY, &sample_cart())?;
    store.remove(ORDERS_KEY)?; // removing an absent key is fine

    assert!(dir.path().join("cart.json").exists());
    assert!(!dir.path().join("orders.json").exists());

    let cart: Vec<CartItem> = store.get(CART_KEY);
    assert_eq!(cart.len(), 2);

    Ok(())
}

#[test]
fn remove_then_read_yields_default() -> anyhow::Result<()> {
    let store = Store::in_memory();

    store.set(CART_KEY, &sample_cart())?;
    store.remove(CART_KEY)?;

    let cart: Vec<CartItem> = store.get(CART_KEY);
    assert!(cart.is_empty());

    Ok(())
}

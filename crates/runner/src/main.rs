//! Agora demo runner
//!
//! Wires the full client stack against the store simulator and walks
//! the end-to-end scenario: sellers list products, buyers browse with
//! category and text filters, a seller edits and finally deletes a
//! listing with confirmation.
//!
//! Run with `RUST_LOG=debug` to watch the gateway traffic.

use std::sync::Arc;

use agora_core::{Category, CategoryFilter, Product, ProductForm, ProductId, SellerId};
use agora_gateway::{GatewayError, ProductGateway};
use agora_listings::{ListingCache, SnapshotSource, derive};
use agora_seller::{FlowState, MutationFlow, session_pair};
use log::{info, warn};
use store_sim::MemoryStore;

fn form(name: &str, price: &str, description: &str, category: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image_url: format!("https://img.campus.example/{}.jpg", name.replace(' ', "-")),
        category: category.to_string(),
        phone_no: "555-0101".to_string(),
        ..ProductForm::default()
    }
}

fn show(label: &str, products: &[Product]) {
    info!("{label}: {} listing(s)", products.len());
    for p in products {
        info!("  [{}] {} - {} ({})", p.category, p.name, p.price, p.id);
    }
}

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    env_logger::init();

    let store = MemoryStore::new();
    let gateway = Arc::new(ProductGateway::new(Arc::new(store.clone())));

    // Auth collaborator: one session per signed-in seller
    let (auth, session) = session_pair();
    auth.signed_in(SellerId::new("seller-maya"));

    let mut flow = MutationFlow::new(gateway.clone(), session);
    let mut dashboard = ListingCache::new();

    // Maya lists two products through the form flow
    for f in [
        form("Yamaha F310", "4500", "Acoustic guitar, good condition", "Instruments"),
        form("Calculus Text", "350", "Stewart 8th edition, used", "Books"),
    ] {
        let state = flow
            .submit_create(&mut dashboard, &f, || info!("form closed"))
            .await;
        info!("create -> {state:?}");
    }

    // A second seller's listing goes straight through the gateway
    let lamp = form("Desk Lamp", "600", "LED, warm white", "Electronics");
    match lamp.validate(&SellerId::new("seller-ravi")) {
        Ok(draft) => {
            let id = gateway.create(draft).await?;
            info!("ravi listed {id}");
        }
        Err(issues) => warn!("lamp listing rejected: {issues:?}"),
    }

    // The public browse page: full snapshot, then derived views
    let mut browse = ListingCache::new();
    browse.load(&gateway, SnapshotSource::All).await?;

    show("all listings", browse.get());
    show(
        "category = Books",
        &derive(browse.get(), &CategoryFilter::Only(Category::Books), ""),
    );
    show("search 'lamp'", &derive(browse.get(), &CategoryFilter::All, "lamp"));

    // Maya drops her guitar price
    let Some(guitar) = dashboard.get().iter().find(|p| p.name == "Yamaha F310") else {
        return Ok(());
    };
    let guitar_id = guitar.id.clone();
    let mut edited = form("Yamaha F310", "3800", "Acoustic guitar, price dropped", "Instruments");
    edited.whatsapp_no = "555-0102".to_string();
    let state = flow
        .submit_update(&mut dashboard, &guitar_id, &edited, || {})
        .await;
    info!("update -> {state:?}");

    // ...then deletes it after confirming
    let state = flow
        .request_delete(guitar_id)
        .confirm(&mut dashboard, || info!("listing removed from dashboard"))
        .await;
    info!("delete -> {state:?}");
    assert_eq!(state, FlowState::Succeeded);
    show("maya's dashboard", dashboard.get());

    // Absence vs transport failure stay distinct
    let missing = ProductId::new("no-such-listing");
    info!("fetch_one(missing) -> {:?}", gateway.fetch_one(&missing).await);
    store.set_offline(true);
    info!("fetch_one(offline) -> {:?}", gateway.fetch_one(&missing).await);

    Ok(())
}

//! Example: Reading a SharePoint list through Microsoft Graph
//!
//! Loads configuration (environment first, then a probed config file),
//! resolves the client secret from the environment and prints the aggregated
//! item collection.
//!
//! # Setup
//!
//! ```bash
//! export GRAPHLIST_TENANT_ID=<tenant>
//! export GRAPHLIST_CLIENT_ID=<app id>
//! export GRAPHLIST_CLIENT_SECRET_NAME=SP_CLIENT_SECRET
//! export SP_CLIENT_SECRET=<secret>
//! export GRAPHLIST_SITE_ID=<site id>
//! export GRAPHLIST_LIST_ID=<list id>
//! cargo run -p graphlist-infra --example read_list -- Title Status
//! ```
//!
//! Arguments, if any, are the item fields to select.

use std::sync::Arc;

use graphlist_core::ListSyncService;
use graphlist_domain::PageQuery;
use graphlist_infra::{config, observability, EnvSecretSource, GraphListClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing();

    let config = config::load()?;
    let client = Arc::new(GraphListClient::from_config(&config));
    let service =
        ListSyncService::new(Arc::new(EnvSecretSource::new()), client.clone(), client.clone(), client);

    let fields: Vec<String> = std::env::args().skip(1).collect();
    let mut query = PageQuery::default().with_page_limit(config.list.page_limit);
    if !fields.is_empty() {
        query = query.with_item_fields(fields);
    }

    let collection = service.read_all(&config.profile(), &config.locator(), &query).await?;

    println!("Fetched {} page(s)", collection.page_count());
    println!("{collection}");
    Ok(())
}

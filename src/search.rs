use super::{
    client::{Client, Page},
    request::SearchRequest,
    types::{Item, State},
    Error,
};

use tracing::{debug, info, warn};

/// Runs the request against the store, following continuation tokens until
/// the last page, and returns every item in page order.
///
/// Nothing is returned when any page fails.
pub async fn search(client: &dyn Client, mut request: SearchRequest) -> Result<Vec<Item>, Error> {
    let state = request.state();
    let table_name = request.table_name().to_string();
    let fail = |err: anyhow::Error| match state {
        State::Scan => Error::Scan(err),
        State::Query => Error::Query(err),
    };

    if !client.table_exists(&table_name).await.map_err(fail)? {
        warn!("Table {table_name} not found");
        return Err(Error::TableNotFound(table_name));
    }

    let mut items: Vec<Item> = vec![];
    let mut pages: usize = 1;

    let mut page = fetch(client, &request).await.map_err(fail)?;
    items.append(&mut page.items);

    while let Some(key) = page.last_evaluated_key.take() {
        debug!("{state} on {table_name}: fetching page {}", pages + 1);
        request.set_exclusive_start_key(key);

        page = fetch(client, &request).await.map_err(fail)?;
        items.append(&mut page.items);
        pages += 1;
    }

    info!(
        "{state} on {table_name} returned {} items in {pages} pages",
        items.len()
    );
    Ok(items)
}

async fn fetch(client: &dyn Client, request: &SearchRequest) -> anyhow::Result<Page> {
    match request.state() {
        State::Scan => client.scan(request).await,
        State::Query => client.query(request).await,
    }
}

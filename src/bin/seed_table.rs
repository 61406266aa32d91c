//! Creates an `Orders` table on a local DynamoDB and fills it with sample
//! orders, so the module has something to scan and query.

use aws_sdk_dynamodb::{
    config::Builder as ConfigBuilder,
    types::{
        AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
        ScalarAttributeType,
    },
    Client,
};
use dynamodb_search::config::ENV_DYNAMODB_ENDPOINT_URL;
use std::env;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

const TABLE: &str = "Orders";
const PK: &str = "order_id";
const STATUSES: [&str; 3] = ["PENDING", "SHIPPED", "CANCELLED"];

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let url =
        env::var(ENV_DYNAMODB_ENDPOINT_URL).expect("env DYNAMODB_ENDPOINT_URL is required");
    let count = env::args()
        .nth(1)
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(30);

    let config = ConfigBuilder::from(&aws_config::load_from_env().await)
        .endpoint_url(url)
        .build();
    let client = Client::from_conf(config);

    match client
        .create_table()
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(PK)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .table_name(TABLE)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(PK)
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
    {
        Ok(_) => info!("Created table {TABLE}"),
        Err(err) => {
            error!("{:#?}", err);
            return;
        }
    }

    for n in 0..count {
        if let Err(err) = client
            .put_item()
            .table_name(TABLE)
            .item(PK, AttributeValue::S(Ulid::new().to_string()))
            .item("status", AttributeValue::S(STATUSES[n % STATUSES.len()].into()))
            .item("total", AttributeValue::N(format!("{}", (n + 1) * 10)))
            .send()
            .await
        {
            error!("{:#?}", err);
            return;
        }
    }

    info!("Put {count} items into {TABLE}");
}

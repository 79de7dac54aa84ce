use std::process::exit;

use clap::Parser;
use rds_attrs_aws::adapters::rds::RdsSnapshotAttributeApi;
use rds_attrs_aws::handlers::resolve::{resolve_attribute_change, ModuleResult};
use rds_attrs_core::contract::{normalize_request, parse_value_list, ChangeRequest};
use serde_json::json;

/// Read, add and remove sharing attributes on an RDS database snapshot.
#[derive(Parser)]
#[command(
    name = "rds_snapshot_attributes",
    about = "Inspect and modify RDS snapshot sharing attributes",
    long_about = "Reads the sharing attributes of an RDS database snapshot, optionally\n\
                  submits an add/remove delta for one attribute, and reports whether\n\
                  the sharing state changed."
)]
struct Cli {
    /// Snapshot to inspect or modify
    #[arg(long, visible_alias = "snapshot-name")]
    db_snapshot_identifier: String,
    /// Sharing attribute to modify (e.g. "restore")
    #[arg(long)]
    attribute_name: Option<String>,
    /// Account IDs to add, as a bracket/quote-delimited list (e.g. "['123456789012']")
    #[arg(long)]
    values_to_add: Option<String>,
    /// Account IDs to remove, same encoding
    #[arg(long)]
    values_to_remove: Option<String>,
    /// Report the would-be change without calling the modify endpoint
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn into_request(self) -> ChangeRequest {
        ChangeRequest {
            db_snapshot_identifier: self.db_snapshot_identifier,
            attribute_name: self.attribute_name,
            values_to_add: self.values_to_add.as_deref().map(parse_value_list),
            values_to_remove: self.values_to_remove.as_deref().map(parse_value_list),
            check_mode: self.check,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let request = match normalize_request(cli.into_request()) {
        Ok(request) => request,
        Err(error) => fail(error.message()),
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let api = RdsSnapshotAttributeApi::new(aws_sdk_rds::Client::new(&aws_config));

    match resolve_attribute_change(&request, &api) {
        Ok(outcome) => {
            let result = ModuleResult::from_outcome(outcome);
            println!(
                "{}",
                serde_json::to_string(&result).expect("module result should serialize")
            );
        }
        Err(error) => fail(error.message()),
    }
}

fn fail(message: &str) -> ! {
    println!("{}", json!({ "failed": true, "msg": message }));
    exit(1);
}

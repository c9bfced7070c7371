//! Command-line front end over the screens.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;

use stockdesk_client::{Backend, MemoryDb};
use stockdesk_core::StatusType;
use stockdesk_inventory::{
    InventoryFilter, InventoryId, Item, ItemCategory, ItemFilter, ItemId, ItemStatus, ItemType,
    MeasurementUnit, TransactionFilter, TransactionId,
};
use stockdesk_parties::{
    DocumentType, EmployeeFilter, EmployeeId, EmployeeType, ServiceType, SupplierFilter, SupplierId,
};

use crate::config::AppConfig;
use crate::screens::{EmployeesScreen, InventoryScreen, ItemsScreen, SuppliersScreen, TransactionsScreen};
use crate::workflow::{Compensation, TransactionInput, TransactionWorkflow};

#[derive(Parser, Debug)]
#[command(name = "stockdesk")]
#[command(version, about = "Inventory back office: items, stock, transactions, employees, suppliers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the REST API (overrides STOCKDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Work on a json-server style db.json file instead of the REST API
    /// (created if missing, rewritten after the command)
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "api_url")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List active records, optionally filtered
    #[command(subcommand)]
    List(ListTarget),

    /// Soft-delete a record (marks it inactive)
    Delete {
        #[arg(value_enum)]
        resource: ResourceKind,

        /// Record identifier
        id: String,
    },

    /// Record a stock transaction (creates item, inventory and transaction)
    Record(RecordArgs),
}

#[derive(Subcommand, Debug)]
pub enum ListTarget {
    Items {
        #[arg(long)]
        status: Option<ItemStatus>,
        #[arg(long = "type")]
        item_type: Option<ItemType>,
        #[arg(long)]
        category: Option<ItemCategory>,
        #[arg(long)]
        unit: Option<MeasurementUnit>,
    },
    Inventories {
        /// Only rows holding at least this much stock
        #[arg(long)]
        min_stock: Option<i64>,
        #[arg(long)]
        item: Option<ItemId>,
    },
    Transactions {
        #[arg(long)]
        inventory: Option<InventoryId>,
    },
    Employees {
        #[arg(long = "type")]
        employee_type: Option<EmployeeType>,
        #[arg(long)]
        doc_type: Option<DocumentType>,
        #[arg(long)]
        state: Option<StatusType>,
    },
    Suppliers {
        #[arg(long)]
        service_type: Option<ServiceType>,
        #[arg(long)]
        state: Option<StatusType>,
        #[arg(long)]
        contact: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Item,
    Inventory,
    Transaction,
    Employee,
    Supplier,
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Item name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub identifier: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long = "type", default_value_t = ItemType::default())]
    pub item_type: ItemType,
    #[arg(long, default_value_t = ItemStatus::default())]
    pub status: ItemStatus,
    #[arg(long, default_value_t = ItemCategory::default())]
    pub category: ItemCategory,
    #[arg(long, default_value_t = MeasurementUnit::default())]
    pub unit: MeasurementUnit,
    #[arg(long)]
    pub quantity: i64,
    #[arg(long, default_value_t = 0)]
    pub min_stock: i64,
    #[arg(long)]
    pub price: f64,
    /// Soft-delete already created records if a later step fails
    #[arg(long)]
    pub compensate: bool,
}

impl RecordArgs {
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput {
            item: Item {
                identifier: self.identifier.clone(),
                description: self.description.clone(),
                location: self.location.clone(),
                item_type: self.item_type,
                status: self.status,
                category: self.category,
                measurement_unit: self.unit,
                ..Item::named(self.name.clone())
            },
            quantity: self.quantity,
            min_stock: self.min_stock,
            price: self.price,
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn http_backend(api_url: Option<&str>, config: &AppConfig) -> Result<Backend> {
    let client = match api_url {
        Some(url) => config.client.clone().with_api_url(url)?,
        None => config.client.clone(),
    };
    Ok(Backend::http(&client)?)
}

fn load_db(path: &Path) -> Result<MemoryDb> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "db file missing, starting empty");
        return Ok(MemoryDb::default());
    }
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let db = MemoryDb::from_json(&doc).with_context(|| format!("loading {}", path.display()))?;
    tracing::info!(path = %path.display(), "using db file backend");
    Ok(db)
}

fn save_db(db: &MemoryDb, path: &Path) -> Result<()> {
    let doc = db.to_json()?;
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let Cli { api_url, db, command } = cli;
    match db {
        Some(path) => {
            let db = load_db(&path)?;
            // Writes that landed before a failure are kept, as a server would.
            let outcome = dispatch(&db.backend(), command).await;
            save_db(&db, &path)?;
            outcome
        }
        None => dispatch(&http_backend(api_url.as_deref(), &config)?, command).await,
    }
}

async fn dispatch(backend: &Backend, command: Commands) -> Result<()> {
    match command {
        Commands::List(target) => list(backend, target).await,
        Commands::Delete { resource, id } => delete(backend, resource, &id).await,
        Commands::Record(args) => {
            let compensation = if args.compensate {
                Compensation::SoftDeleteCreated
            } else {
                Compensation::None
            };
            let receipt = TransactionWorkflow::new(backend)
                .with_compensation(compensation)
                .run(&args.to_input())
                .await
                .context("recording transaction")?;
            print_json(&json!({
                "item": receipt.item,
                "inventory": receipt.inventory,
                "transaction": receipt.transaction,
            }))
        }
    }
}

async fn list(backend: &Backend, target: ListTarget) -> Result<()> {
    match target {
        ListTarget::Items {
            status,
            item_type,
            category,
            unit,
        } => {
            let mut screen = ItemsScreen::new(backend.items.clone());
            let filter = ItemFilter {
                status,
                item_type,
                category,
                measurement_unit: unit,
            };
            let rows = screen.apply_filter(filter).await.context("listing items")?;
            print_json(rows)
        }
        ListTarget::Inventories { min_stock, item } => {
            let mut screen = InventoryScreen::new(backend.inventories.clone(), backend.items.clone());
            screen.load().await.context("loading inventories")?;
            screen
                .apply_filter(InventoryFilter {
                    min_stock,
                    item_id: item,
                })
                .await
                .context("listing inventories")?;
            let rows: Vec<_> = screen
                .labelled()
                .into_iter()
                .map(|(inventory, item_name)| json!({ "inventory": inventory, "item_name": item_name }))
                .collect();
            print_json(&rows)
        }
        ListTarget::Transactions { inventory } => {
            let mut screen = TransactionsScreen::new(backend);
            screen.load().await.context("loading transactions")?;
            let rows: Vec<_> = screen
                .apply_filter(TransactionFilter {
                    inventory_id: inventory,
                })
                .await
                .context("listing transactions")?
                .iter()
                .map(|row| {
                    json!({
                        "transaction": row.transaction,
                        "inventory": row.inventory,
                        "item_name": row.item_name,
                        "total": row.transaction.total(),
                    })
                })
                .collect();
            print_json(&rows)
        }
        ListTarget::Employees {
            employee_type,
            doc_type,
            state,
        } => {
            let mut screen = EmployeesScreen::new(backend.employees.clone());
            let filter = EmployeeFilter {
                employee_type,
                doc_type,
                state,
            };
            let rows = screen.apply_filter(filter).await.context("listing employees")?;
            print_json(rows)
        }
        ListTarget::Suppliers {
            service_type,
            state,
            contact,
        } => {
            let mut screen = SuppliersScreen::new(backend.suppliers.clone());
            let filter = SupplierFilter {
                service_type,
                state,
                contact,
            };
            let rows = screen.apply_filter(filter).await.context("listing suppliers")?;
            print_json(rows)
        }
    }
}

async fn delete(backend: &Backend, resource: ResourceKind, id: &str) -> Result<()> {
    let context = || format!("deleting {resource:?} {id}");
    match resource {
        ResourceKind::Item => {
            let id: ItemId = id.parse()?;
            backend.items.soft_delete(&id).await.with_context(context)?;
        }
        ResourceKind::Inventory => {
            let id: InventoryId = id.parse()?;
            backend.inventories.soft_delete(&id).await.with_context(context)?;
        }
        ResourceKind::Transaction => {
            let id: TransactionId = id.parse()?;
            backend.transactions.soft_delete(&id).await.with_context(context)?;
        }
        ResourceKind::Employee => {
            let id: EmployeeId = id.parse()?;
            backend.employees.soft_delete(&id).await.with_context(context)?;
        }
        ResourceKind::Supplier => {
            let id: SupplierId = id.parse()?;
            backend.suppliers.soft_delete(&id).await.with_context(context)?;
        }
    }
    print_json(&json!({ "deleted": format!("{resource:?}").to_lowercase(), "id": id }))
}

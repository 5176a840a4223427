//! Driver binary standing in for the page controller: loads the catalog,
//! applies filters, prints rendered views, and composes WhatsApp quote links.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medparts_core::store::{CatalogSource, CatalogStore};
use medparts_core::{load_app_config, AppConfig, FilterCriteria};
use medparts_leads::validate::{validate_email, validate_message, validate_name, validate_phone};
use medparts_leads::{
    compose_quote_message, quote_deep_link, CrmClient, Lead, QuoteContact, RequestType,
};
use medparts_render::text;
use medparts_render::view::{catalog_stats, grid_view, product_detail};

#[derive(Debug, Parser)]
#[command(name = "medparts")]
#[command(about = "Medical-equipment parts catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered.
    Browse {
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        brand: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show the full detail view for one product.
    Show {
        /// Product id.
        id: u64,
    },
    /// Validate catalog integrity and report degraded mode.
    Check,
    /// Validate a contact lead and submit it to the CRM.
    Lead {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        company: Option<String>,
        /// One of: cotizacion, servicio, garantia, catalogo.
        #[arg(long, default_value = "cotizacion")]
        request_type: String,
        #[arg(long)]
        equipment: Option<String>,
        #[arg(long)]
        message: String,
    },
    /// Compose the WhatsApp quote link for a product.
    Quote {
        /// Product code, e.g. VAL-001.
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        hospital: Option<String>,
    },
}

fn catalog_source(config: &AppConfig) -> CatalogSource {
    match &config.catalog_url {
        Some(url) => CatalogSource::Url(url.clone()),
        None => CatalogSource::File(config.catalog_path.clone()),
    }
}

async fn load_store(config: &AppConfig) -> CatalogStore {
    CatalogStore::load(
        &catalog_source(config),
        config.http_timeout_secs,
        &config.user_agent,
    )
    .await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("failed to load configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            category,
            brand,
            search,
        } => {
            let store = load_store(&config).await;
            let criteria = FilterCriteria {
                category,
                brand,
                search,
            };
            let filtered = medparts_core::filter::apply(&criteria, store.products());
            print!("{}", text::render_grid(&grid_view(&filtered, &criteria.search)));
            print!("{}", text::render_stats(&catalog_stats(&filtered)));
        }
        Commands::Show { id } => {
            let store = load_store(&config).await;
            match store.catalog().product_by_id(id) {
                Some(product) => print!("{}", text::render_detail(&product_detail(product))),
                None => anyhow::bail!("no product with id {id}"),
            }
        }
        Commands::Check => {
            let store = load_store(&config).await;
            if store.fallback_active() {
                println!("WARNING: catalog load failed, fallback record set active");
            }
            store
                .catalog()
                .validate()
                .context("catalog integrity check failed")?;
            println!(
                "catalog OK: {} products, {} categories, {} brands",
                store.products().len(),
                store.catalog().categories.len(),
                store.catalog().brands.len()
            );
        }
        Commands::Lead {
            name,
            email,
            phone,
            company,
            request_type,
            equipment,
            message,
        } => {
            validate_name(&name)?;
            validate_email(&email)?;
            validate_phone(&phone)?;
            validate_message(&message)?;
            let request_type: RequestType = request_type.parse()?;

            let lead = Lead {
                name,
                email,
                phone,
                company,
                request_type,
                equipment,
                message,
                product: None,
                source: "Web Principal - Consulta General".to_string(),
            };
            let client = CrmClient::with_base_url(
                &config.crm_base_url,
                &config.crm_portal_id,
                &config.crm_form_id,
                config.http_timeout_secs,
            )?;
            client
                .submit(&lead.to_submission(&config.page_uri, &config.page_name))
                .await?;
            println!("lead enviado");
        }
        Commands::Quote {
            code,
            name,
            phone,
            email,
            hospital,
        } => {
            let store = load_store(&config).await;
            let product = store
                .catalog()
                .product_by_code(&code)
                .with_context(|| format!("no product with code {code}"))?;
            let contact = QuoteContact {
                name,
                phone,
                email,
                hospital,
            };
            let message = compose_quote_message(&contact, Some(product));
            let link = quote_deep_link(&config.whatsapp_number, &message)?;
            println!("{link}");
        }
    }

    Ok(())
}

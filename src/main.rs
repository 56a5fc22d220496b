use std::sync::Arc;

use anyhow::{bail, Context};
use registrar_ledger::client::{HttpApiClient, Session};
use registrar_ledger::config::{Config, LogFormat};
use registrar_ledger::core::{money, timezone};
use registrar_ledger::modules::{assessments::AssessmentService, grades::GradeService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: registrar-ledger <summary ASSESSMENT_ID | gwa ENROLLMENT_ID>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Backend API: {}", config.api.base_url);

    let api = Arc::new(HttpApiClient::new(&config.api)?);
    let session = config
        .api
        .token
        .as_deref()
        .map(Session::with_token)
        .unwrap_or_default();
    let offset = timezone::local_offset(config.ledger.timezone_offset_hours)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, id) = match args.as_slice() {
        [command, id] => (
            command.as_str(),
            id.parse::<i64>()
                .with_context(|| format!("Invalid id: {}", id))?,
        ),
        _ => bail!(USAGE),
    };

    match command {
        "summary" => {
            let service = AssessmentService::new(api);
            let today = timezone::local_today(offset);
            let summary = match service.ledger_summary(&session, id, today).await {
                Ok(summary) => summary,
                Err(e) => bail!(e.user_message()),
            };

            println!("Assessment #{}", summary.assessment_id);
            println!("  Net total:    {}", money::format_php(summary.totals.net_total));
            println!("  Grand total:  {}", money::format_php(summary.totals.grand_total));
            println!("  Paid:         {}", money::format_php(summary.total_paid));
            println!("  Outstanding:  {}", money::format_php(summary.total_outstanding));
            if let Some(next) = &summary.next_due {
                println!(
                    "  Next due:     {} on {} ({} outstanding)",
                    next.description,
                    next.due_date,
                    money::format_php(next.outstanding())
                );
            }
            for overdue in &summary.overdue {
                println!(
                    "  OVERDUE:      {} since {}",
                    overdue.description, overdue.due_date
                );
            }
            if summary.fully_paid {
                println!("  Fully paid");
            }
        }
        "gwa" => {
            let service = GradeService::new(api);
            match service.gwa_for_enrollment(&session, id).await {
                Ok(Some(gwa)) => println!("GWA for enrollment #{}: {:.2}", id, gwa),
                Ok(None) => println!("No submitted grades for enrollment #{}", id),
                Err(e) => bail!(e.user_message()),
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("registrar_ledger={},reqwest=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

use super::Action;
use crate::queries;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Create { config, range } => queries::create::execute(&config, range).await?,
        Action::Drop {
            config,
            range,
            service,
            dry_run,
        } => match service {
            Some(service) => queries::drop::execute(&config, range, &service, dry_run).await?,
            // Without a service nothing is dropped; show the operator what
            // would be valid instead.
            None => {
                let services = queries::drop::list_services(&config).await?;
                print!("{}", queries::drop::format_services(&services));
            }
        },
    }

    Ok(())
}

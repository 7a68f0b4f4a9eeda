use std::sync::Arc;

use tsh_bash::BashShell;

use tsh_core::{config::Config, shell::ShellPort};

#[tokio::main]
async fn main() -> Result<(), tsh_core::Error> {
    tsh_core::logging::init("tsh")?;

    let cfg = Arc::new(Config::load()?);

    let shell: Arc<dyn ShellPort> = Arc::new(BashShell::new(cfg.bash_path.clone()));

    tsh_telegram::router::run_polling(cfg, shell)
        .await
        .map_err(|e| tsh_core::Error::External(format!("telegram bot failed: {e:#}")))?;

    Ok(())
}

use std::process;

use bank_sim::{
    cli::{
        terminal::CrosstermTerminal,
        ui::test_mode::{self, ScriptedTerminal},
        Session,
    },
    config::ConfigManager,
    init,
    ledger::LedgerStore,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ConfigManager::new();
    let config = manager.load()?;
    let ledger_path = manager.ledger_path(&config);
    tracing::debug!(
        config = %manager.path().display(),
        ledger = %ledger_path.display(),
        "starting session"
    );
    let ledger = LedgerStore::load_from_path(&ledger_path)?;

    if test_mode::is_enabled() {
        colored::control::set_override(false);
        let mut session = Session::new(ScriptedTerminal::from_env(), ledger, ledger_path)
            .with_min_accounts(config.min_accounts);
        session.run()?;
        return Ok(());
    }

    let terminal = CrosstermTerminal::open()?;
    let mut session =
        Session::new(terminal, ledger, ledger_path).with_min_accounts(config.min_accounts);
    let result = session.run();
    let (terminal, _) = session.into_parts();
    terminal.close();
    result?;
    Ok(())
}

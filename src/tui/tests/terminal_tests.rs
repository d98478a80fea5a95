use super::*;
use std::cell::Cell;

/// Mirrors `run_threaded`: guard first, then fallible terminal setup.
fn setup(restored: &Cell<u32>, fail_setup: bool) -> Result<()> {
    let _guard = TerminalGuard {
        restore: || restored.set(restored.get() + 1),
    };
    if fail_setup {
        anyhow::bail!("create terminal");
    }
    Ok(())
}

#[test]
fn terminal_is_restored_when_setup_fails() {
    let restored = Cell::new(0);
    assert!(setup(&restored, true).is_err());
    assert_eq!(restored.get(), 1);
}

#[test]
fn terminal_is_restored_exactly_once_on_normal_exit() {
    let restored = Cell::new(0);
    setup(&restored, false).expect("setup");
    assert_eq!(restored.get(), 1);
}

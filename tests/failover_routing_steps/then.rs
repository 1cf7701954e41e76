//! Then steps for failover routing BDD scenarios.

use super::world::FailoverWorld;
use docshard::user_data::domain::{USERS_COLLECTION, UserDataError};
use rstest_bdd_macros::then;

#[then("the save succeeds")]
fn save_succeeds(world: &FailoverWorld) -> Result<(), eyre::Report> {
    match &world.last_save {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected a successful save, got {other:?}")),
    }
}

#[then("the save fails after {attempts:usize} attempts")]
fn save_fails_after(world: &FailoverWorld, attempts: usize) -> Result<(), eyre::Report> {
    match &world.last_save {
        Some(Err(UserDataError::Exhausted { attempts: actual })) if *actual == attempts => Ok(()),
        other => Err(eyre::eyre!(
            "expected exhaustion after {attempts} attempts, got {other:?}"
        )),
    }
}

#[then("the save fails because no backend is available")]
fn save_fails_unavailable(world: &FailoverWorld) -> Result<(), eyre::Report> {
    match &world.last_save {
        Some(Err(UserDataError::Unavailable)) => Ok(()),
        other => Err(eyre::eyre!("expected no backend available, got {other:?}")),
    }
}

#[then("the delete fails on the primary backend")]
fn delete_fails_on_primary(world: &FailoverWorld) -> Result<(), eyre::Report> {
    match &world.last_delete {
        Some(Err(UserDataError::PrimaryFailed)) => Ok(()),
        other => Err(eyre::eyre!("expected primary failure, got {other:?}")),
    }
}

#[then(r#"backend "{name}" holds the record for "{email}""#)]
fn backend_holds_record(
    world: &FailoverWorld,
    name: String,
    email: String,
) -> Result<(), eyre::Report> {
    let record = world
        .store(&name)?
        .peek(&USERS_COLLECTION, &email)
        .map_err(|err| eyre::eyre!("peek failed: {err}"))?;
    if record.is_none() {
        return Err(eyre::eyre!("expected backend '{name}' to hold '{email}'"));
    }
    Ok(())
}

#[then(r#"backend "{name}" was not called"#)]
fn backend_not_called(world: &FailoverWorld, name: String) -> Result<(), eyre::Report> {
    let calls = world.store(&name)?.call_count();
    if calls != 0 {
        return Err(eyre::eyre!("expected backend '{name}' to be idle, saw {calls} calls"));
    }
    Ok(())
}

#[then(r#"the primary backend for "{email}" is "{expected}""#)]
fn primary_backend_is(
    world: &FailoverWorld,
    email: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let primary = world.service()?.primary_backend(&email);
    match primary {
        Some(name) if name.as_str() == expected => Ok(()),
        other => Err(eyre::eyre!("expected primary '{expected}', got {other:?}")),
    }
}

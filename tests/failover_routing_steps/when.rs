//! When steps for failover routing BDD scenarios.

use super::world::{FailoverWorld, run_async};
use rstest_bdd_macros::when;
use serde_json::{Map, Value};

#[when(r#"user data for "{email}" is saved"#)]
fn save_user_data(world: &mut FailoverWorld, email: String) -> Result<(), eyre::Report> {
    let service = world.service()?;
    let mut record = Map::new();
    record.insert("email".to_owned(), Value::String(email.clone()));
    world.last_save = Some(run_async(service.save_user_data(&email, record)));
    Ok(())
}

#[when(r#"user data for "{email}" is deleted"#)]
fn delete_user_data(world: &mut FailoverWorld, email: String) -> Result<(), eyre::Report> {
    let service = world.service()?;
    world.last_delete = Some(run_async(service.delete_user_data(&email)));
    Ok(())
}

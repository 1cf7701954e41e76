//! Given steps for failover routing BDD scenarios.

use super::world::FailoverWorld;
use docshard::store::ports::DocumentStoreError;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the backends "{first}", "{second}" and "{third}""#)]
fn the_backends(
    world: &mut FailoverWorld,
    first: String,
    second: String,
    third: String,
) -> Result<(), eyre::Report> {
    for name in [first, second, third] {
        world.add_backend(&name)?;
    }
    Ok(())
}

#[given("no backends")]
fn no_backends(world: &FailoverWorld) -> Result<(), eyre::Report> {
    if !world.backends.is_empty() {
        return Err(eyre::eyre!("scenario world already has backends"));
    }
    Ok(())
}

#[given(r#"backend "{name}" is rate limited for the next call"#)]
fn backend_rate_limited(world: &FailoverWorld, name: String) -> Result<(), eyre::Report> {
    world
        .store(&name)?
        .fail_next(DocumentStoreError::RateLimited(
            "429 Too Many Requests".to_owned(),
        ))
        .wrap_err("queue rate limit failure")
}

#[given(r#"backend "{name}" is unavailable"#)]
fn backend_unavailable(world: &FailoverWorld, name: String) -> Result<(), eyre::Report> {
    world
        .store(&name)?
        .fail_always(DocumentStoreError::Unavailable("down".to_owned()))
        .wrap_err("mark backend unavailable")
}

#[given("every backend is unavailable")]
fn every_backend_unavailable(world: &FailoverWorld) -> Result<(), eyre::Report> {
    for (_, store) in &world.backends {
        store
            .fail_always(DocumentStoreError::Unavailable("outage".to_owned()))
            .wrap_err("mark backend unavailable")?;
    }
    Ok(())
}

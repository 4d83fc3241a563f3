use anyhow::anyhow;
use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::spot_query::PageLimits;

pub mod api;
mod guards;
mod sqlite;


pub const DEFAULT_IDENTITY_HEADER: &str = "X-User-Id";

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Request header that carries the id of the user who
    /// has been authenticated by the upstream gateway.
    pub identity_header: String,
    pub page_limits: PageLimits,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            identity_header: DEFAULT_IDENTITY_HEADER.to_owned(),
            page_limits: PageLimits::default(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    info!(
        "Reading the user identity from the '{}' header",
        cfg.identity_header
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) -> anyhow::Result<()> {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    launch(rocket_instance(options, db), enable_cors).await
}

async fn launch(instance: Rocket<rocket::Build>, enable_cors: bool) -> anyhow::Result<()> {
    let instance = if enable_cors {
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow!("Invalid CORS configuration: {err}"))?;
        instance.attach(cors)
    } else {
        instance
    };
    // A rocket::Error must be inspected before it is dropped
    instance
        .launch()
        .await
        .map_err(|err| anyhow!("Unable to run web server: {err}"))?;
    Ok(())
}

use tsuru_http::{AppEnv, CreateAppEnv, TsuruClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let target = std::env::var("TSURU_TARGET")?;
    let token = std::env::var("TSURU_TOKEN")?;
    let app_name = std::env::args().nth(1).unwrap_or_else(|| "demo".to_owned());

    let tsuru = TsuruClient::connect(target, token).await?;

    for plan in tsuru.list_plans().await? {
        println!("plan {} memory={} default={}", plan.name, plan.memory, plan.default);
    }

    tsuru
        .create_app_envs(
            &app_name,
            &CreateAppEnv {
                envs: vec![AppEnv {
                    name: "GREETING".to_owned(),
                    value: "hello".to_owned(),
                }],
                no_restart: true,
                private: false,
            },
        )
        .await?;

    for env in tsuru.get_app_envs(&app_name).await? {
        println!("{}={}", env.name, env.value);
    }

    Ok(())
}

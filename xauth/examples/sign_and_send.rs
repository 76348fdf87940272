//! Authenticate and issue a signed request, with credentials from the env.
//!
//! ```shell
//! XAUTH_CONSUMER_ID=my_id XAUTH_CONSUMER_SECRET=my_secret \
//!     cargo run --example sign_and_send
//! ```

use xauth::{Client, Config};
use xauth_core::{Context, OsEnv};
use xauth_http_send_reqwest::ReqwestHttpSend;

fn main() -> xauth_core::Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let mut client = Client::new(ctx, "https://127.0.0.1:8443", "/auth", config);

    let resp = client.authenticate(&[])?;
    println!("authenticate -> {}", resp.status());
    println!("credential now: {:?}", client.credential());

    let resp = client.get("/path", &[])?;
    println!("GET /path -> {}", resp.status());

    Ok(())
}

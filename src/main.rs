#[tokio::main]
async fn main() -> anyhow::Result<()> {
    car_orders::run_server().await
}

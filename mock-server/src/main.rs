use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr = mock_server::bind_addr(std::env::var("MOCK_PORT").ok());
    let listener = TcpListener::bind(&addr).await?;
    println!("recording requests on {addr}");
    mock_server::run(listener).await
}

use addresscheck::{from_env, ResponseBody};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads ADDRESSCHECK_USERNAME / ADDRESSCHECK_PASSWORD from the environment
    let client = from_env()?;

    let email = std::env::args().nth(1).unwrap_or_else(|| "someone@example".to_string());

    let result = client.address().syntax_check(&email).await?;
    println!("{}", result);

    if let Some(warnings) = result.syntax_warnings() {
        for (code, message) in warnings {
            println!("{}: {}", code, message);
        }
    }

    let quality = client.address().fast_quality_check(&email).await?;
    match quality.body() {
        ResponseBody::Structured(value) => println!("{}", serde_json::to_string_pretty(value)?),
        ResponseBody::Raw(bytes) => println!("{}", String::from_utf8_lossy(bytes)),
        ResponseBody::Empty => println!("No body data."),
    }

    Ok(())
}

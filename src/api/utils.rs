use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::QuoteFetchFailure;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<Value, QuoteFetchFailure> {
    let url = format!("{}/{}?{}", base_url.trim_end_matches('/'), endpoint, params);
    log::debug!("GET {}", url);

    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(QuoteFetchFailure::Status(res.status()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub fn parse_response_object<T>(data: Value) -> Result<T, QuoteFetchFailure>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => Ok(serde_json::from_value(Value::Object(obj))?),
        other => Err(QuoteFetchFailure::Malformed(format!(
            "not an object: {}",
            other
        ))),
    }
}

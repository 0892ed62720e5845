use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::LookupError;
use crate::query::Query;

const REGISTRY_URL: &str = "http://www.cne.gov.ve/web/registro_electoral/ce.php";

/// Build the registry query URL for one cedula.
pub fn build_url(query: &Query) -> String {
    format!(
        "{}?nacionalidad={}&cedula={}",
        REGISTRY_URL, query.nationality, query.id_number
    )
}

/// GET the registry page and return the raw HTML body.
///
/// A host that resolves and answers with an error status becomes
/// `UpstreamHttp`; DNS failures, refused connections and timeouts surface
/// as `Network` with the reqwest error passed through.
pub async fn fetch_document(query: &Query, timeout: Duration) -> Result<String, LookupError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let url = build_url(query);

    info!("Fetching registry page: {}", url);
    let start = Instant::now();

    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("Transport failure for {}: {}", url, e);
            return Err(LookupError::Network(e));
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("Registry answered {} for {}", status, url);
        return Err(LookupError::UpstreamHttp {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    info!(
        "Fetched {} bytes in {} ms",
        body.len(),
        start.elapsed().as_millis()
    );
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_substitutes_both_parameters() {
        let q = Query::new("V", "12345678").unwrap();
        assert_eq!(
            build_url(&q),
            "http://www.cne.gov.ve/web/registro_electoral/ce.php?nacionalidad=V&cedula=12345678"
        );
    }

    #[test]
    fn url_uses_foreign_flag() {
        let q = Query::new("e", "81234567").unwrap();
        assert!(build_url(&q).contains("nacionalidad=E&cedula=81234567"));
    }
}
